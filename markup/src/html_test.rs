use super::*;
use crate::parser::parse;

#[test]
fn plain_text_is_escaped_without_span() {
    assert_eq!(to_html(&parse("a < b & c")), "a &lt; b &amp; c");
}

#[test]
fn coloured_segment_gets_span() {
    assert_eq!(to_html(&parse("<i=1>alert</i> ok")), "<span style=\"color:#ffe81f\">alert</span> ok");
}

#[test]
fn line_breaks_render_as_br() {
    assert_eq!(to_html(&parse("line1\nline2")), "line1<br>line2");
}

#[test]
fn injected_markup_is_inert() {
    let html = to_html(&parse("<script>alert('x')</script><i=3>\"hi\"</i>"));
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    assert!(html.contains("&quot;hi&quot;"));
}

#[test]
fn empty_input_renders_empty() {
    assert_eq!(to_html(&[]), "");
}
