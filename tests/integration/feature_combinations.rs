//! Integration tests for option combinations
//!
//! Tests that `preserve_main_only`, `remove_images` and custom noise rules
//! work correctly together.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use webfetch_clean::{clean_html, clean_html_with_rules, AdRule, NoiseRules, Options};

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

const ALL_OPTIONS: [Options; 4] = [
    Options {
        preserve_main_only: false,
        remove_images: false,
    },
    Options {
        preserve_main_only: true,
        remove_images: false,
    },
    Options {
        preserve_main_only: false,
        remove_images: true,
    },
    Options {
        preserve_main_only: true,
        remove_images: true,
    },
];

#[test]
fn test_preserve_main_drops_page_chrome() {
    let opts = Options {
        preserve_main_only: true,
        ..Options::default()
    };
    let cleaned = clean_html(&fixture("blog_post.html"), &opts).expect("cleaning should succeed");

    assert!(cleaned.contains("Tuning a Sourdough Starter"));
    assert!(
        !cleaned.contains("Crumb &amp; Crust"),
        "site header lives outside <main>"
    );
    assert!(!cleaned.contains("<main"));
    assert!(cleaned.contains("<article>"), "first region is <main>, its article is content");
}

#[test]
fn test_preserve_main_picks_article_on_docs_page() {
    let opts = Options {
        preserve_main_only: true,
        ..Options::default()
    };
    let cleaned = clean_html(&fixture("docs_page.html"), &opts).expect("cleaning should succeed");

    assert!(cleaned.contains("Configuration Reference"));
    assert!(!cleaned.contains("<article"));
    assert!(!cleaned.contains("Install"));
}

#[test]
fn test_preserve_main_without_region_keeps_body() {
    let opts = Options {
        preserve_main_only: true,
        ..Options::default()
    };
    let html = fixture("news_with_ads.html");
    let with_flag = clean_html(&html, &opts).expect("cleaning should succeed");
    let without_flag = clean_html(&html, &Options::default()).expect("cleaning should succeed");

    assert_eq!(with_flag, without_flag);
}

#[test]
fn test_remove_images_with_every_combination() {
    for name in ["blog_post.html", "docs_page.html"] {
        let html = fixture(name);
        for opts in ALL_OPTIONS {
            let cleaned = clean_html(&html, &opts).expect("cleaning should succeed");
            assert_eq!(
                cleaned.contains("<img"),
                !opts.remove_images,
                "{name} with {opts:?}"
            );
        }
    }
}

#[test]
fn test_attribute_allow_list_with_every_combination() {
    let html = fixture("blog_post.html");
    for opts in ALL_OPTIONS {
        let cleaned = clean_html(&html, &opts).expect("cleaning should succeed");
        assert!(!cleaned.contains("class="), "{opts:?}");
        assert!(!cleaned.contains("data-"), "{opts:?}");
    }
}

#[test]
fn test_custom_ad_fragments() {
    let html = r#"<body>
        <div class="ad-slot">default fragment</div>
        <div class="ad promoted">custom fragment</div>
        <div class="advertisement">always removed</div>
    </body>"#;

    let rules = NoiseRules {
        ad: AdRule::with_fragments(["promoted"]),
    };
    let cleaned = clean_html_with_rules(html, &Options::default(), &rules)
        .expect("cleaning should succeed");

    assert!(cleaned.contains("default fragment"));
    assert!(!cleaned.contains("custom fragment"));
    assert!(!cleaned.contains("always removed"), "advertisement rule is independent");
}

#[test]
fn test_empty_fragment_list_disables_second_tier() {
    let html = r#"<body><div class="ad-slot">x</div><div id="adsbygoogle">y</div></body>"#;
    let rules = NoiseRules {
        ad: AdRule::with_fragments(Vec::<String>::new()),
    };
    let cleaned = clean_html_with_rules(html, &Options::default(), &rules)
        .expect("cleaning should succeed");

    assert!(cleaned.contains(">x<"));
    assert!(cleaned.contains(">y<"));
}
