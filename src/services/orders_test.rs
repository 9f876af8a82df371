use time::macros::datetime;

use super::*;

const NOW: OffsetDateTime = datetime!(2026-10-16 12:00 UTC);

#[test]
fn progress_classification() {
    assert_eq!(OrderProgress::from_progress(None), OrderProgress::NoData);
    assert_eq!(OrderProgress::from_progress(Some(&[])), OrderProgress::NoData);
    assert_eq!(OrderProgress::from_progress(Some(&[1.0, 1.0])), OrderProgress::Complete);
    assert_eq!(OrderProgress::from_progress(Some(&[1.0, 0.0])), OrderProgress::InProgress);
    assert_eq!(OrderProgress::from_progress(Some(&[0.5, 1.0])), OrderProgress::Waiting);
}

#[test]
fn objectives_are_numbered() {
    assert_eq!(objectives_text(Some(&[1.0, 0.0])), "1. Completed • 2. In Progress");
    assert_eq!(objectives_text(Some(&[])), "No objectives");
    assert_eq!(objectives_text(None), "No objectives");
}

#[test]
fn reward_formatting() {
    assert_eq!(reward_text(None), "No reward");
    assert_eq!(reward_text(Some(&Reward { kind: 1, amount: 45.0 })), "Medals: 45");
    assert_eq!(reward_text(Some(&Reward { kind: 3, amount: 2.5 })), "Type 3: 2.5");
}

#[test]
fn deadline_missing_or_garbled() {
    let none = time_remaining(None, NOW);
    assert_eq!(none.formatted, "No deadline");
    assert!(!none.passed);
    assert_eq!(time_remaining(Some("next week"), NOW).formatted, "Unknown");
}

#[test]
fn deadline_in_the_past_is_expired() {
    let t = time_remaining(Some("2026-10-16T11:00:00Z"), NOW);
    assert_eq!(t.formatted, "EXPIRED");
    assert_eq!(t.urgency, Urgency::Expired);
    assert!(t.passed);
}

#[test]
fn deadline_urgency_bands() {
    let soon = time_remaining(Some("2026-10-16T12:45:00Z"), NOW);
    assert_eq!(soon.formatted, "45m");
    assert_eq!(soon.urgency, Urgency::Expired);
    assert!(!soon.passed);

    let today = time_remaining(Some("2026-10-16T17:30:00Z"), NOW);
    assert_eq!(today.formatted, "5h 30m");
    assert_eq!(today.urgency, Urgency::Urgent);

    let later = time_remaining(Some("2026-10-19T12:00:00Z"), NOW);
    assert_eq!(later.formatted, "72h");
    assert_eq!(later.urgency, Urgency::Normal);

    let seconds = time_remaining(Some("2026-10-16T12:00:30Z"), NOW);
    assert_eq!(seconds.formatted, "0m");
}

#[test]
fn view_falls_back_for_missing_fields() {
    let view = order_view(1, &Assignment::default(), NOW);
    assert_eq!(view.id, "1");
    assert_eq!(view.title, "MAJOR ORDER 2");
    assert_eq!(view.objective, "Objective classified");
    assert_eq!(view.priority, "normal");
    assert_eq!(view.status, "active");
    assert_eq!(view.progress, OrderProgress::NoData);
}

#[test]
fn flags_one_marks_critical() {
    let order = Assignment {
        id: Some(serde_json::json!(991)),
        title: Some("Hold the line".into()),
        description: Some("Defend Malevelon Creek".into()),
        flags: Some(1),
        ..Assignment::default()
    };
    let view = order_view(0, &order, NOW);
    assert_eq!(view.id, "991");
    assert_eq!(view.objective, "Defend Malevelon Creek");
    assert_eq!(view.priority, "critical");
}

#[test]
fn active_list_drops_passed_and_inactive() {
    let orders = vec![
        Assignment { title: Some("live".into()), expiration: Some("2026-10-20T00:00:00Z".into()), ..Assignment::default() },
        Assignment { title: Some("gone".into()), expiration: Some("2026-10-01T00:00:00Z".into()), ..Assignment::default() },
        Assignment { title: Some("done".into()), status: Some("completed".into()), ..Assignment::default() },
        Assignment { title: Some("open".into()), ..Assignment::default() },
    ];
    let titles: Vec<String> = active_orders(&orders, NOW).into_iter().map(|o| o.title).collect();
    assert_eq!(titles, vec!["live", "open"]);
    assert_eq!(order_views(&orders, NOW).len(), 4);
}
