use super::*;

#[test]
fn critical_span_is_title() {
    let m = split_title("<i=3>ALERT</i>\nDetails here");
    assert_eq!(m.title, "ALERT");
    assert_eq!(m.body, "Details here");
}

#[test]
fn blank_lines_after_title_are_collapsed() {
    let m = split_title("<i=3> ORDERS </i>\n\n   \nHold the line.\n\nMore.");
    assert_eq!(m.title, "ORDERS");
    assert_eq!(m.body, "Hold the line.\n\nMore.");
}

#[test]
fn text_before_span_stays_in_body() {
    let m = split_title("Attention. <i=3>BUGS</i> inbound");
    assert_eq!(m.title, "BUGS");
    assert_eq!(m.body, "Attention.  inbound");
}

#[test]
fn title_tags_are_stripped() {
    let m = split_title("<i=3>Defend <i=1>Heeth</i></i>\nNow");
    assert_eq!(m.title, "Defend Heeth");
}

#[test]
fn first_line_fallback() {
    let m = split_title("<i=1>Helldivers</i>, rejoice\n\nSuper Earth thanks you.");
    assert_eq!(m.title, "Helldivers, rejoice");
    assert_eq!(m.body, "Super Earth thanks you.");
}

#[test]
fn single_line_has_empty_body() {
    let m = split_title("Just one line");
    assert_eq!(m.title, "Just one line");
    assert_eq!(m.body, "");
}

#[test]
fn empty_critical_span_falls_through() {
    let m = split_title("<i=3></i>Reinforcements\nbody");
    assert_eq!(m.title, "Reinforcements");
    assert_eq!(m.body, "body");
}

#[test]
fn leading_blank_lines_are_skipped() {
    let m = split_title("\nReinforcements inbound\nHold the line");
    assert_eq!(m.title, "Reinforcements inbound");
    assert_eq!(m.body, "Hold the line");

    let m = split_title("   \n\n<i=1>Orders</i>\n\nAdvance.");
    assert_eq!(m.title, "Orders");
    assert_eq!(m.body, "Advance.");
}

#[test]
fn tag_only_first_line_uses_raw_prefix_on_one_line() {
    let m = split_title("<i=1></i>\n  Hold\nthe line");
    assert_eq!(m.title, "<i=1></i> Hold the line");
    assert!(!m.title.contains('\n'));
    assert_eq!(m.body, "<i=1></i>\n  Hold\nthe line");
}

#[test]
fn raw_prefix_counts_characters_not_bytes() {
    let raw = format!("<i=0></i>\n{}", "é".repeat(60));
    let m = split_title(&raw);
    assert_eq!(m.title.chars().count(), FALLBACK_TITLE_CHARS);
    assert!(m.title.ends_with('é'));
}

#[test]
fn empty_message() {
    assert_eq!(split_title(""), TitledMessage::default());
}
