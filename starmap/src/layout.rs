//! Galactic map layout: planet nodes, ownership status, sector links.
//!
//! Backend positions are scaled by [`MAP_SCALE`] and offset so that the
//! backend origin lands on Super Earth at [`MAP_CENTER`]. Planets without a
//! position are placed on Super Earth rather than on a synthetic orbit.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::consts::{MAP_CENTER, MAP_SCALE, UNKNOWN_SECTOR};
use crate::viewport::{Point, Viewport};

/// Minimum distance from Super Earth, in canvas units, for a supply spoke.
pub const SPOKE_MIN_DISTANCE: f64 = 150.0;

/// The map-relevant subset of a planet record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetSite {
    pub index: u32,
    pub name: String,
    pub owner: Option<String>,
    /// Backend position, before scaling.
    pub position: Option<Point>,
    pub sector: Option<String>,
    pub biome: Option<String>,
    pub health: Option<f64>,
    pub max_health: Option<f64>,
}

/// Who holds a planet, as shown on the map legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanetStatus {
    Liberated,
    UnderSiege,
    Automaton,
    Illuminate,
    Neutral,
}

impl PlanetStatus {
    #[must_use]
    pub fn from_owner(owner: Option<&str>) -> Self {
        match owner {
            Some("Humans") => Self::Liberated,
            Some("Terminids") => Self::UnderSiege,
            Some("Automatons") => Self::Automaton,
            Some("Illuminate") => Self::Illuminate,
            _ => Self::Neutral,
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Liberated => "#66ff00",
            Self::UnderSiege => "#ff4400",
            Self::Automaton => "#ff9900",
            Self::Illuminate => "#6699ff",
            Self::Neutral => "#999999",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Liberated => "LIBERATED",
            Self::UnderSiege => "UNDER SIEGE",
            Self::Automaton => "AUTOMATON",
            Self::Illuminate => "ILLUMINATE",
            Self::Neutral => "NEUTRAL",
        }
    }
}

/// A planet placed in canvas space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapNode {
    pub index: u32,
    pub name: String,
    pub position: Point,
    pub status: PlanetStatus,
    pub color: &'static str,
    pub label: &'static str,
    pub sector: String,
    pub biome: Option<String>,
    /// `health / max_health` when both are known and `max_health > 0`.
    pub health_fraction: Option<f64>,
}

/// Edge between two planets of the same sector, by planet index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorLink {
    pub sector: String,
    pub from: u32,
    pub to: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLayout {
    pub center: Point,
    pub nodes: Vec<MapNode>,
    pub links: Vec<SectorLink>,
    /// Indexes of planets far enough out to draw a spoke to Super Earth.
    pub spokes: Vec<u32>,
}

impl MapLayout {
    #[must_use]
    pub fn node(&self, index: u32) -> Option<&MapNode> {
        self.nodes.iter().find(|n| n.index == index)
    }

    /// Other planets in the same sector as `index`, by name.
    #[must_use]
    pub fn sector_neighbours(&self, index: u32) -> Vec<&str> {
        let Some(node) = self.node(index) else {
            return Vec::new();
        };
        self.nodes
            .iter()
            .filter(|n| n.index != index && n.sector == node.sector)
            .map(|n| n.name.as_str())
            .collect()
    }
}

/// Place planets in canvas space.
#[must_use]
pub fn place(site: &PlanetSite) -> Point {
    site.position.map_or(Point::new(MAP_CENTER, MAP_CENTER), |p| {
        Point::new(MAP_CENTER + p.x * MAP_SCALE, MAP_CENTER + p.y * MAP_SCALE)
    })
}

/// Build nodes, sector links and spokes for a planet list.
#[must_use]
pub fn layout(sites: &[PlanetSite]) -> MapLayout {
    let center = Point::new(MAP_CENTER, MAP_CENTER);
    let nodes: Vec<MapNode> = sites.iter().map(build_node).collect();

    let mut sectors: BTreeMap<&str, Vec<u32>> = BTreeMap::new();
    for node in &nodes {
        sectors.entry(node.sector.as_str()).or_default().push(node.index);
    }

    let mut links = Vec::new();
    for (sector, members) in &sectors {
        match members.len() {
            0 | 1 => {}
            2 => links.push(SectorLink { sector: (*sector).to_owned(), from: members[0], to: members[1] }),
            n => {
                for i in 0..n {
                    links.push(SectorLink {
                        sector: (*sector).to_owned(),
                        from: members[i],
                        to: members[(i + 1) % n],
                    });
                }
            }
        }
    }

    let spokes = nodes
        .iter()
        .filter(|n| {
            let dx = n.position.x - center.x;
            let dy = n.position.y - center.y;
            (dx * dx + dy * dy).sqrt() > SPOKE_MIN_DISTANCE
        })
        .map(|n| n.index)
        .collect();

    MapLayout { center, nodes, links, spokes }
}

fn build_node(site: &PlanetSite) -> MapNode {
    let status = PlanetStatus::from_owner(site.owner.as_deref());
    let health_fraction = match (site.health, site.max_health) {
        (Some(health), Some(max)) if max > 0.0 => Some(health / max),
        _ => None,
    };
    MapNode {
        index: site.index,
        name: site.name.clone(),
        position: place(site),
        status,
        color: status.color(),
        label: status.label(),
        sector: site
            .sector
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNKNOWN_SECTOR.to_owned()),
        biome: site.biome.clone(),
        health_fraction,
    }
}

/// Nodes whose position lies inside `viewport`.
pub fn nodes_in_view<'a>(
    nodes: &'a [MapNode],
    viewport: &'a Viewport,
) -> impl Iterator<Item = &'a MapNode> + 'a {
    nodes.iter().filter(move |n| viewport.contains(n.position))
}
