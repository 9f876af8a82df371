use super::*;

#[test]
fn durations() {
    assert_eq!(format_duration(0), "0s");
    assert_eq!(format_duration(999), "0s");
    assert_eq!(format_duration(59_000), "59s");
    assert_eq!(format_duration(61_000), "1m 1s");
    assert_eq!(format_duration(3_600_000), "1h 0m 0s");
    assert_eq!(format_duration(90_061_000), "25h 1m 1s");
}

#[test]
fn thousands() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1000), "1,000");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
}

#[test]
fn ratios_floor_denominators() {
    let stats = Statistics { terminid_kills: 30, automaton_kills: 10, ..Statistics::default() };
    let view = stats_view(&stats);
    assert_eq!(view.total_kills, 40);
    assert!((view.kill_death_ratio - 40.0).abs() < f64::EPSILON);
    assert!((view.kills_per_mission - 40.0).abs() < f64::EPSILON);
    assert_eq!(view.average_mission_ms, 0);
}

#[test]
fn averages_over_all_missions() {
    let stats = Statistics {
        missions_won: 3,
        missions_lost: 1,
        mission_time: 4 * 600_000,
        illuminate_kills: 100,
        deaths: 8,
        ..Statistics::default()
    };
    let view = stats_view(&stats);
    assert_eq!(view.total_missions, 4);
    assert!((view.kill_death_ratio - 12.5).abs() < f64::EPSILON);
    assert!((view.kills_per_mission - 25.0).abs() < f64::EPSILON);
    assert_eq!(view.average_mission_text, "10m 0s");
}

#[test]
fn view_serializes_raw_fields_flat() {
    let stats = Statistics { missions_won: 7, ..Statistics::default() };
    let json = serde_json::to_value(stats_view(&stats)).unwrap();
    assert_eq!(json["missionsWon"], 7);
    assert_eq!(json["total_missions"], 7);
}

#[test]
fn counters_near_max_do_not_overflow() {
    let stats = Statistics { terminid_kills: u64::MAX, automaton_kills: 1, deaths: 1, ..Statistics::default() };
    let view = stats_view(&stats);
    assert_eq!(view.total_kills, u64::MAX);
    assert!(view.kill_death_ratio.is_finite());
}
