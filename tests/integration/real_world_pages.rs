//! Integration tests for realistic pages
//!
//! Cleans blog, news and documentation fixtures and checks what survives.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use webfetch_clean::markdown::convert;
use webfetch_clean::{clean_html, clean_page, NoiseRules, Options, OutputFormat};

/// Test fixture path helper
fn fixture_path(name: &str) -> String {
    format!(
        "{}/tests/integration/fixtures/{}",
        env!("CARGO_MANIFEST_DIR"),
        name
    )
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("Failed to read fixture")
}

#[test]
fn test_blog_post_content_survives() {
    let cleaned = clean_html(&fixture("blog_post.html"), &Options::default())
        .expect("cleaning should succeed");

    assert!(cleaned.contains("Tuning a Sourdough Starter"));
    assert!(cleaned.contains("A lively starter doubles within six hours"));
    assert!(cleaned.contains("Keep the jar between 24 and 27 degrees."));
    assert!(cleaned.contains("Peak activity after five hours."));
    assert!(cleaned.contains(r#"<img src="/img/starter-peak.jpg" alt="Starter at peak">"#));
    assert!(cleaned.contains("<code>1:5:5</code>"));
    assert!(cleaned.contains("<th>Starter</th>"));
    assert!(
        cleaned.contains(r##"<a href="#ratios">Feeding ratios</a>"##),
        "table of contents menu sits inside the article"
    );
}

#[test]
fn test_blog_post_noise_removed() {
    let cleaned = clean_html(&fixture("blog_post.html"), &Options::default())
        .expect("cleaning should succeed");

    for noise in [
        "googletagmanager",
        "dataLayer",
        "site.css",
        "This site uses cookies",
        "/shop",
        "mobile-only",
        "buy our flour",
        "Tweet",
        "Great tips",
        "Popular posts",
        "Get weekly recipes",
        "player.example.com",
        "2024 Crumb",
    ] {
        assert!(!cleaned.contains(noise), "{noise:?} should be gone");
    }

    for attr in ["class=", "id=", "data-", "srcset=", "loading=", "rel=", "width="] {
        assert!(!cleaned.contains(attr), "{attr} should be stripped");
    }
}

#[test]
fn test_blog_post_title() {
    let page = clean_page(
        &fixture("blog_post.html"),
        &Options::default(),
        &NoiseRules::default(),
    )
    .expect("cleaning should succeed");

    assert_eq!(
        page.title.as_deref(),
        Some("Tuning a Sourdough Starter | Crumb & Crust")
    );
}

#[test]
fn test_news_page_ads_and_banners() {
    let cleaned = clean_html(&fixture("news_with_ads.html"), &Options::default())
        .expect("cleaning should succeed");

    assert!(cleaned.contains("The Harbour Times"), "header banner is kept");
    assert!(cleaned.contains("harbour expansion"));
    assert!(cleaned.contains("biggest investment in a generation"));
    assert!(cleaned.contains("Opponents raised concerns"));

    for noise in [
        "Subscribe for 1 dollar",
        "Leaderboard ad",
        "Paid content",
        "Inline ad",
        "Most read",
        "Before you go",
        "Share on social",
        "Join the discussion",
        "loadAds",
        "min-height",
    ] {
        assert!(!cleaned.contains(noise), "{noise:?} should be gone");
    }
}

#[test]
fn test_docs_page_markdown() {
    let cleaned = clean_html(&fixture("docs_page.html"), &Options::default())
        .expect("cleaning should succeed");
    let markdown = convert(&cleaned, OutputFormat::Markdown).expect("conversion should succeed");

    assert!(markdown.contains("Configuration Reference"));
    assert!(markdown.contains("config.toml"));
    assert!(markdown.contains("retries = 3"));
    assert!(markdown.contains("/docs/env"));
    assert!(markdown.contains("request timeout in seconds"), "option menu inside article");
    assert!(!markdown.contains("Getting started"), "sidebar removed");
    assert!(!markdown.contains("Docs licensed"));
    assert!(!markdown.contains("<code"));
}
