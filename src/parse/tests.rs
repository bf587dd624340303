// Parse module tests.

use super::*;
use proptest::prelude::*;

#[test]
fn test_extract_title_basic() {
    let html = r#"<html><head><title>Test Page</title></head><body></body></html>"#;
    assert_eq!(extract_title(html).as_deref(), Some("Test Page"));
}

#[test]
fn test_extract_title_with_whitespace() {
    // Common gotcha: titles with extra whitespace/newlines
    let html = "<html><head><title>\n        Test Page\n    </title></head></html>";
    assert_eq!(extract_title(html).as_deref(), Some("Test Page"));
}

#[test]
fn test_extract_title_case_insensitive_with_attributes() {
    let html = r#"<HEAD><TITLE lang="en">Upper Case</TITLE></HEAD>"#;
    assert_eq!(extract_title(html).as_deref(), Some("Upper Case"));
}

#[test]
fn test_extract_title_first_wins() {
    let html = "<title>First</title><svg><title>Second</title></svg>";
    assert_eq!(extract_title(html).as_deref(), Some("First"));
}

#[test]
fn test_extract_title_empty_or_blank() {
    assert_eq!(extract_title("<title></title>"), None);
    assert_eq!(extract_title("<title>   </title>"), None);
}

#[test]
fn test_extract_title_missing() {
    assert_eq!(extract_title("<html><head></head><body></body></html>"), None);
}

#[test]
fn test_extract_title_with_nested_markup_is_none() {
    assert_eq!(extract_title("<title><b>Bold</b></title>"), None);
}

#[test]
fn test_extract_title_unclosed_is_none() {
    assert_eq!(extract_title("<title>Never closed"), None);
}

#[test]
fn test_extract_meta_description_basic() {
    let html = r#"<meta name="description" content="  A page about things.  ">"#;
    assert_eq!(
        extract_meta_description(html).as_deref(),
        Some("A page about things.")
    );
}

#[test]
fn test_extract_meta_description_single_quotes_and_case() {
    let html = r#"<META NAME='Description' CONTENT='Mixed case'/>"#;
    assert_eq!(extract_meta_description(html).as_deref(), Some("Mixed case"));
}

#[test]
fn test_extract_meta_description_skips_other_meta_tags() {
    let html = r#"<meta charset="utf-8"><meta name="keywords" content="a,b"><meta name="description" content="Right one">"#;
    assert_eq!(extract_meta_description(html).as_deref(), Some("Right one"));
}

#[test]
fn test_extract_meta_description_keeps_other_quote_kind() {
    let html = r#"<meta name="description" content="Don't miss our summer deals on handmade furniture">"#;
    assert_eq!(
        extract_meta_description(html).as_deref(),
        Some("Don't miss our summer deals on handmade furniture")
    );

    let html = r#"<meta name='description' content='Say "hello" to faster pages'>"#;
    assert_eq!(
        extract_meta_description(html).as_deref(),
        Some(r#"Say "hello" to faster pages"#)
    );
}

#[test]
fn test_extract_meta_description_content_before_name_not_matched() {
    let html = r#"<meta content="Reversed" name="description">"#;
    assert_eq!(extract_meta_description(html), None);
}

#[test]
fn test_extract_meta_description_missing_or_blank() {
    assert_eq!(extract_meta_description("<html></html>"), None);
    assert_eq!(
        extract_meta_description(r#"<meta name="description" content="">"#),
        None
    );
}

#[test]
fn test_count_headings() {
    let html = r#"
        <h1 class="hero">Main</h1>
        <H2>One</H2><h2 id="x">Two</h2>
        <h3>Three</h3>
        <header>not a heading</header>
        <h10>not an h1</h10>
    "#;
    assert_eq!(count_headings(html), HeadingCounts { h1: 1, h2: 2, h3: 1 });
}

#[test]
fn test_count_headings_malformed_markup() {
    // Unclosed and misnested tags still count as openings
    let html = "<h1><h2><h1></h2><h3";
    let counts = count_headings(html);
    assert_eq!(counts.h1, 2);
    assert_eq!(counts.h2, 1);
    assert_eq!(counts.h3, 0);
}

#[test]
fn test_extract_signals_full_page() {
    let html = r#"<!doctype html><html><head>
        <title>Example</title>
        </head><body><h1>Hello</h1></body></html>"#;
    let signals = extract_signals(html);
    assert_eq!(signals.title.as_deref(), Some("Example"));
    assert_eq!(signals.meta_description, None);
    assert_eq!(signals.headings, HeadingCounts { h1: 1, h2: 0, h3: 0 });
}

#[test]
fn test_extract_signals_empty_input() {
    assert_eq!(extract_signals(""), PageSignals::default());
}

#[test]
fn test_extract_signals_is_deterministic() {
    let html = r#"<title>Same</title><meta name="description" content="Same"><h2>x</h2>"#;
    assert_eq!(extract_signals(html), extract_signals(html));
}

proptest! {
    #[test]
    fn prop_extract_never_panics(input in ".*") {
        let signals = extract_signals(&input);
        if let Some(title) = &signals.title {
            prop_assert!(!title.is_empty());
            prop_assert_eq!(title.trim(), title.as_str());
        }
    }

    #[test]
    fn prop_heading_counts_match_inserted_tags(h1 in 0usize..5, h2 in 0usize..5, h3 in 0usize..5) {
        let mut html = String::from("<html><body>");
        for _ in 0..h1 { html.push_str("<h1>a</h1>"); }
        for _ in 0..h2 { html.push_str("<h2 class=\"b\">b</h2>"); }
        for _ in 0..h3 { html.push_str("<H3>c</H3>"); }
        html.push_str("</body></html>");
        prop_assert_eq!(count_headings(&html), HeadingCounts { h1, h2, h3 });
    }
}
