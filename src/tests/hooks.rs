use super::{escape_html, Escape, Highlight, Hook, Identity, Markdown};
use std::borrow::Cow;

#[test]
fn test_escape_special_characters() {
    assert_eq!(escape_html("<a href=\"x\">"), "&lt;a href=&quot;x&quot;&gt;");
    assert_eq!(escape_html("fish & chips"), "fish &amp; chips");
}

#[test]
fn test_escape_keeps_references() {
    assert_eq!(escape_html("&amp; &lt; &#39; &#x27;"), "&amp; &lt; &#39; &#x27;");
    assert_eq!(escape_html("a&b; c&#; d&#xZ;"), "a&b; c&amp;#; d&amp;#xZ;");
    assert_eq!(escape_html("trailing &"), "trailing &amp;");
}

#[test]
fn test_escape_borrows_when_clean() {
    assert!(matches!(escape_html("plain text"), Cow::Borrowed(_)));
}

#[test]
fn test_identity_and_escape_hooks() {
    assert_eq!(Identity.render("<x>"), "<x>");
    assert_eq!(Escape.render("<x>"), "&lt;x&gt;");
}

#[test]
fn test_closure_hook() {
    let upper = |s: &str| s.to_uppercase();
    assert_eq!(upper.render("abc"), "ABC");
}

#[test]
fn test_markdown_escapes_first() {
    let html = Markdown::default().render("Use <a> tags & *style*\n");

    assert!(html.contains("&lt;a&gt;"), "got: {html}");
    assert!(html.contains("&amp;"), "got: {html}");
    assert!(html.contains("<em>style</em>"), "got: {html}");
    assert!(!html.contains("<a>"));
}

#[test]
fn test_markdown_paragraphs() {
    let html = Markdown::default().render("One\n\nTwo\n");
    assert_eq!(html.matches("<p>").count(), 2);
}

#[test]
fn test_highlight_escapes_source() {
    let html = Highlight::new("rs").render("fn lt(a: u8, b: u8) -> bool { a < b }\n");

    assert!(html.contains("&lt;"), "got: {html}");
    assert!(!html.contains("a < b"));
    assert!(html.contains("<span"));
}

#[test]
fn test_highlight_unknown_language_is_plain() {
    let html = Highlight::new("no-such-language").render("x <y>");
    assert!(html.contains("&lt;y&gt;"), "got: {html}");
    assert!(!html.contains("<y>"));
}

#[test]
fn test_highlight_for_path() {
    let by_path = Highlight::for_path(std::path::Path::new("src/main.py")).render("x = 1\n");
    let by_token = Highlight::new("py").render("x = 1\n");
    assert_eq!(by_path, by_token);
}

#[test]
fn test_theme_css() {
    let css = Highlight::theme_css(crate::hooks::highlight::DEFAULT_THEME).unwrap();
    assert!(!css.is_empty());
    assert!(Highlight::theme_css("Not A Theme").is_err());
    assert!(Highlight::themes().any(|name| name == "InspiredGitHub"));
}

#[test]
fn test_markdown_code_span_escaped_once() {
    let html = Markdown::default().render("Returns `Vec<u8>` or `a && b`\n");

    assert!(html.contains("<code>Vec&lt;u8&gt;</code>"), "got: {html}");
    assert!(html.contains("<code>a &amp;&amp; b</code>"), "got: {html}");
    assert!(!html.contains("&amp;lt;"), "got: {html}");
    assert!(!html.contains("&amp;amp;"), "got: {html}");
}

#[test]
fn test_markdown_block_html_is_text() {
    let html = Markdown::default().render("<div onclick=\"x()\">\nhi\n</div>\n");

    assert!(!html.contains("<div"), "got: {html}");
    assert!(html.contains("&lt;div"), "got: {html}");
}
