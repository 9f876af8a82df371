//! Galactic map view served to the dashboard.
//!
//! Planet records are reduced to [`PlanetSite`]s and laid out by `starmap`.
//! A request may carry a viewport (the client's current `viewBox`) to cull
//! off-screen planets, and a planet to focus, in which case the focus
//! transition is returned as precomputed frames.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use serde::{Deserialize, Serialize};
use starmap::animation::animate;
use starmap::consts::{FOCUS_DURATION_MS, FRAME_INTERVAL_MS};
use starmap::layout::{MapLayout, PlanetSite, layout, nodes_in_view};
use starmap::viewport::{Point, Viewport, ViewportLimits};

use crate::backend::types::Planet;

/// Query string of `GET /api/map`. The viewport applies only when all four
/// fields are present.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct MapQuery {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub focus: Option<u32>,
}

impl MapQuery {
    fn viewport(&self) -> Option<Viewport> {
        Some(Viewport::new(self.x?, self.y?, self.width?, self.height?))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MapView {
    #[serde(flatten)]
    pub layout: MapLayout,
    /// Viewport after focusing, or the requested one.
    pub viewport: Viewport,
    pub view_box: String,
    /// Indexes of planets inside `viewport`.
    pub visible: Vec<u32>,
    /// Focus transition frames; empty without a focus target.
    pub frames: Vec<Viewport>,
}

#[must_use]
pub fn planet_site(planet: &Planet) -> PlanetSite {
    PlanetSite {
        index: planet.index,
        name: planet.name.clone(),
        owner: planet.owner_name().map(str::to_owned),
        position: planet.position.map(|p| Point::new(p.x, p.y)),
        sector: planet.sector_name().map(str::to_owned),
        biome: planet.biome_name().map(str::to_owned),
        health: planet.health,
        max_health: planet.max_health,
    }
}

#[must_use]
pub fn map_view(planets: &[Planet], query: &MapQuery) -> MapView {
    let sites: Vec<PlanetSite> = planets.iter().map(planet_site).collect();
    let layout = layout(&sites);

    let limits = ViewportLimits::default();
    let start = query.viewport().map_or_else(Viewport::default, |v| Viewport {
        width: limits.clamp(v.width),
        height: limits.clamp(v.height),
        ..v
    });

    let (viewport, frames) = match query.focus.and_then(|i| layout.node(i)) {
        Some(node) => {
            let target = start.centered_on(node.position);
            (target, animate(start, target, FOCUS_DURATION_MS, FRAME_INTERVAL_MS).collect())
        }
        None => (start, Vec::new()),
    };

    let visible = nodes_in_view(&layout.nodes, &viewport).map(|n| n.index).collect();
    MapView { view_box: viewport.view_box(), layout, viewport, visible, frames }
}
