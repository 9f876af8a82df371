use super::*;

#[test]
fn palette_ids() {
    assert_eq!(ColorToken::from_tag_id("0"), ColorToken::Muted);
    assert_eq!(ColorToken::from_tag_id("1"), ColorToken::Emphasis);
    assert_eq!(ColorToken::from_tag_id("3"), ColorToken::Critical);
    assert_eq!(ColorToken::from_tag_id("4"), ColorToken::Unknown);
    assert_eq!(ColorToken::from_tag_id(""), ColorToken::Unknown);
}

#[test]
fn inherit_has_no_css() {
    assert_eq!(ColorToken::Inherit.css(), None);
    assert!(ColorToken::Unknown.css().is_some());
    assert_ne!(ColorToken::Muted.css(), ColorToken::Critical.css());
}
