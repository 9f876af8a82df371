use super::*;

#[test]
fn planet_resolves_field_spellings() {
    let planet: Planet = serde_json::from_value(serde_json::json!({
        "index": 64,
        "name": "Meridia",
        "currentOwner": "Terminids",
        "position": { "x": -0.05, "y": 0.1 },
        "biomeType": { "name": "Desert", "description": "dry" },
        "section": "Umlaut",
        "health": 500000,
        "maxHealth": 1000000,
        "event": { "faction": "Terminids", "eventType": 1, "endTime": "2026-10-20T00:00:00Z" }
    }))
    .unwrap();
    assert_eq!(planet.owner_name(), Some("Terminids"));
    assert_eq!(planet.sector_name(), Some("Umlaut"));
    assert_eq!(planet.biome_name(), Some("Desert"));
    assert_eq!(planet.max_health, Some(1_000_000.0));
    assert_eq!(planet.event.and_then(|e| e.faction).as_deref(), Some("Terminids"));
}

#[test]
fn planet_prefers_owner_over_current_owner() {
    let planet: Planet = serde_json::from_value(serde_json::json!({
        "index": 1, "name": "Super Earth", "owner": "Humans", "currentOwner": "Automatons",
        "sector": "Sol", "biomeType": "Urban"
    }))
    .unwrap();
    assert_eq!(planet.owner_name(), Some("Humans"));
    assert_eq!(planet.sector_name(), Some("Sol"));
    assert_eq!(planet.biome_name(), Some("Urban"));
    assert!(planet.position.is_none());
}

#[test]
fn statistics_default_missing_fields() {
    let stats: Statistics = serde_json::from_value(serde_json::json!({
        "missionsWon": 10, "terminidKills": 5, "automatonKills": 3, "missionSuccessRate": 87.5
    }))
    .unwrap();
    assert_eq!(stats.missions_won, 10);
    assert_eq!(stats.missions_lost, 0);
    assert_eq!(stats.total_kills(), 8);
    assert_eq!(stats.total_missions(), 10);
    assert!((stats.mission_success_rate - 87.5).abs() < f64::EPSILON);
}

#[test]
fn statistics_totals_saturate() {
    let stats = Statistics {
        terminid_kills: u64::MAX,
        automaton_kills: 1,
        illuminate_kills: 1,
        missions_won: u64::MAX,
        missions_lost: 2,
        ..Statistics::default()
    };
    assert_eq!(stats.total_kills(), u64::MAX);
    assert_eq!(stats.total_missions(), u64::MAX);
}

#[test]
fn war_status_keeps_unmodelled_fields() {
    let raw = serde_json::json!({
        "warId": 801,
        "impactMultiplier": 0.0125,
        "statistics": { "playerCount": 123_456 }
    });
    let status: WarStatus = serde_json::from_value(raw).unwrap();
    assert_eq!(status.statistics.as_ref().map(|s| s.player_count), Some(123_456));
    assert_eq!(status.extra.get("warId"), Some(&serde_json::json!(801)));
    let back = serde_json::to_value(&status).unwrap();
    assert_eq!(back["warId"], 801);
    assert_eq!(back["impactMultiplier"], 0.0125);
}

#[test]
fn dispatch_resolves_text_and_timestamp() {
    let d: Dispatch = serde_json::from_value(serde_json::json!({
        "id": 42, "content": "<i=3>ALERT</i>", "created_at": "2026-10-01T10:00:00Z"
    }))
    .unwrap();
    assert_eq!(d.text(), "<i=3>ALERT</i>");
    assert_eq!(d.published_at(), Some("2026-10-01T10:00:00Z"));
    assert_eq!(d.id_string().as_deref(), Some("42"));

    let d: Dispatch = serde_json::from_value(serde_json::json!({
        "id": "abc", "message": "m", "content": "c", "date": "d", "published": "p"
    }))
    .unwrap();
    assert_eq!(d.text(), "m");
    assert_eq!(d.published_at(), Some("p"));
    assert_eq!(d.id_string().as_deref(), Some("abc"));
}

#[test]
fn dispatch_without_text_is_empty() {
    assert_eq!(Dispatch::default().text(), "");
    assert_eq!(Dispatch::default().published_at(), None);
}

#[test]
fn major_orders_accept_both_shapes() {
    let bare: MajorOrders = serde_json::from_str(r#"[{"id":1,"title":"HOLD"}]"#).unwrap();
    assert_eq!(bare.into_vec().len(), 1);

    let wrapped: MajorOrders = serde_json::from_str(r#"{"orders":[{"id":1},{"id":2}]}"#).unwrap();
    assert_eq!(wrapped.into_vec().len(), 2);

    let empty: MajorOrders = serde_json::from_str("{}").unwrap();
    assert!(empty.into_vec().is_empty());
}

#[test]
fn assignment_objective_fallbacks() {
    let a: Assignment = serde_json::from_value(serde_json::json!({
        "description": "Liberate the sector", "objective": "ignored",
        "progress": [1, 0], "reward": { "type": 1, "amount": 45 }, "flags": 1
    }))
    .unwrap();
    assert_eq!(a.objective_text(), Some("Liberate the sector"));
    assert_eq!(a.progress, Some(vec![1.0, 0.0]));
    assert_eq!(a.reward, Some(Reward { kind: 1, amount: 45.0 }));
}
