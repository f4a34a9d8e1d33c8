//! Edge case integration tests
//!
//! Tests for unusual inputs, boundary conditions, and error handling.

use webfetch_clean::{clean_bytes, clean_html, Error, Options};

fn clean(html: &str) -> String {
    match clean_html(html, &Options::default()) {
        Ok(cleaned) => cleaned,
        Err(err) => panic!("cleaning failed: {err:?}"),
    }
}

#[test]
fn test_empty_input_is_an_error() {
    assert!(matches!(clean_html("", &Options::default()), Err(Error::EmptyInput)));
    assert!(matches!(clean_bytes(b"", None, &Options::default()), Err(Error::EmptyInput)));
}

#[test]
fn test_fragment_gets_a_document_shell() {
    let cleaned = clean("<p>just a fragment</p>");
    assert_eq!(cleaned, "<html><body><p>just a fragment</p></body></html>");
}

#[test]
fn test_plain_text_input() {
    let cleaned = clean("no markup at all");
    assert!(cleaned.contains("no markup at all"));
}

#[test]
fn test_head_only_document() {
    let cleaned = clean("<html><head><title>No Body</title></head></html>");
    assert!(!cleaned.contains("No Body"));
    assert!(cleaned.contains("<body>"));
}

#[test]
fn test_frameset_is_a_parse_error() {
    let result = clean_html(
        r#"<html><frameset><frame src="a.html"></frameset></html>"#,
        &Options::default(),
    );
    assert!(matches!(result, Err(Error::ParseError(_))));
}

#[test]
fn test_malformed_html() {
    let cleaned = clean("<html><body><p>Unclosed paragraph<div>Nested<p>Badly</body>");
    assert!(cleaned.contains("Unclosed paragraph"));
    assert!(cleaned.contains("Badly"));
}

#[test]
fn test_broken_attributes_do_not_panic() {
    let cleaned = clean("<div class=\"test id=broken>text</div>");
    assert!(!cleaned.contains("class="));
}

#[test]
fn test_uppercase_tags_and_attributes() {
    let cleaned = clean(r#"<BODY><DIV CLASS="Sidebar">side</DIV><P ID="x" TITLE="t">kept</P><SCRIPT>x()</SCRIPT></BODY>"#);

    assert!(!cleaned.contains("side<"));
    assert!(cleaned.contains(r#"<p title="t">kept</p>"#));
    assert!(!cleaned.contains("x()"));
}

#[test]
fn test_nested_noise_removed_once() {
    let cleaned = clean(
        r#"<body><div class="sidebar"><div class="popup"><div class="advertisement">deep</div></div></div><p>ok</p></body>"#,
    );
    assert!(!cleaned.contains("deep"));
    assert!(cleaned.contains("<p>ok</p>"));
}

#[test]
fn test_noise_classes_on_body_remove_everything() {
    let cleaned = clean(r#"<html><body class="has-sidebar"><p>gone</p></body></html>"#);
    assert!(!cleaned.contains("gone"));
}

#[test]
fn test_unicode_content() {
    let cleaned = clean("<body><p>日本語のテキスト ünïcödé ✓</p></body>");
    assert!(cleaned.contains("日本語のテキスト ünïcödé ✓"));
}

#[test]
fn test_entities_are_preserved() {
    let cleaned = clean("<body><p>Fish &amp; chips &lt;3</p></body>");
    assert!(cleaned.contains("Fish &amp; chips &lt;3"));
}

#[test]
fn test_bytes_with_content_type_charset() {
    let html = b"<body><p>na\xEFve</p></body>";
    let cleaned = clean_bytes(html, Some("text/html; charset=windows-1252"), &Options::default());
    assert!(matches!(cleaned, Ok(ref c) if c.contains("naïve")));
}

#[test]
fn test_large_document() {
    let mut html = String::from("<html><body><article>");
    for i in 0..2000 {
        html.push_str(&format!(
            "<p class=\"para\" data-i=\"{i}\">Paragraph {i}</p><div class=\"ad-unit\">ad {i}</div>"
        ));
    }
    html.push_str("</article></body></html>");

    let cleaned = clean(&html);
    assert!(cleaned.contains("<p>Paragraph 1999</p>"));
    assert!(!cleaned.contains("ad 0<"));
    assert!(!cleaned.contains("data-i"));
}
