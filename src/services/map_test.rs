#![allow(clippy::float_cmp)]

use super::*;
use crate::backend::types::Position;

fn planet(index: u32, owner: &str, x: f64, y: f64) -> Planet {
    Planet {
        index,
        name: format!("P{index}"),
        current_owner: Some(owner.into()),
        position: Some(Position { x, y }),
        section: Some("Orion".into()),
        biome_type: Some(serde_json::json!({ "name": "Desert" })),
        ..Planet::default()
    }
}

#[test]
fn site_resolves_field_spellings() {
    let site = planet_site(&planet(3, "Terminids", 1.0, 2.0));
    assert_eq!(site.owner.as_deref(), Some("Terminids"));
    assert_eq!(site.sector.as_deref(), Some("Orion"));
    assert_eq!(site.biome.as_deref(), Some("Desert"));
    assert_eq!(site.position, Some(Point::new(1.0, 2.0)));
}

#[test]
fn default_view_culls_far_planets() {
    let view = map_view(&[planet(1, "Humans", 0.0, 0.0), planet(2, "Humans", 500.0, 0.0)], &MapQuery::default());
    assert_eq!(view.viewport, Viewport::default());
    assert_eq!(view.visible, vec![1]);
    assert_eq!(view.layout.nodes.len(), 2);
    assert!(view.frames.is_empty());
}

#[test]
fn partial_viewport_query_is_ignored() {
    let query = MapQuery { x: Some(10.0), y: Some(10.0), ..MapQuery::default() };
    assert_eq!(map_view(&[], &query).viewport, Viewport::default());
}

#[test]
fn requested_extent_is_clamped() {
    let query = MapQuery { x: Some(0.0), y: Some(0.0), width: Some(10.0), height: Some(9000.0), focus: None };
    let view = map_view(&[], &query);
    assert_eq!(view.viewport.width, 200.0);
    assert_eq!(view.viewport.height, 4000.0);
}

#[test]
fn focus_recentres_and_returns_frames() {
    let query = MapQuery { focus: Some(2), ..MapQuery::default() };
    let view = map_view(&[planet(1, "Humans", 0.0, 0.0), planet(2, "Automatons", 300.0, 0.0)], &query);
    assert_eq!(view.viewport.center(), Point::new(1000.0, 400.0));
    assert_eq!(view.visible, vec![2]);
    assert_eq!(view.frames.first(), Some(&Viewport::default()));
    assert_eq!(view.frames.last(), Some(&view.viewport));
}

#[test]
fn unknown_focus_is_ignored() {
    let query = MapQuery { focus: Some(99), ..MapQuery::default() };
    let view = map_view(&[planet(1, "Humans", 0.0, 0.0)], &query);
    assert!(view.frames.is_empty());
    assert_eq!(view.view_box, "0 0 800 800");
}
