use rs_postmeta::{detail_urls, max_page, post_meta, tag_catalog, Error};

#[test]
fn empty_input_is_not_found_everywhere() {
    assert!(matches!(max_page(""), Err(Error::StructureNotFound(_))));
    assert!(matches!(detail_urls(""), Err(Error::StructureNotFound(_))));
    assert!(matches!(post_meta(""), Err(Error::StructureNotFound(_))));
    assert!(matches!(tag_catalog(""), Err(Error::StructureNotFound(_))));
}

#[test]
fn unclosed_tags_are_recovered() {
    let html = r#"<html><body><div id="main"><div class="post-list"><a href="/a">A<a href="/b">B"#;
    assert_eq!(
        detail_urls(html),
        Ok(vec!["/a".to_string(), "/b".to_string()])
    );
}

#[test]
fn garbage_input_never_panics() {
    let inputs = [
        "<<<<>>>>",
        "</div></div></div>",
        "<div id=main class=wp-pagenavi><span class=pages>9 / 9",
        "<!-- <div id=\"main\"> -->",
        "<script><div id=\"main\"></div></script>",
        "\u{FEFF}<html>",
        "<title>",
    ];
    for html in inputs {
        let _ = max_page(html);
        let _ = detail_urls(html);
        let _ = post_meta(html);
        let _ = tag_catalog(html);
    }
}

#[test]
fn nul_byte_is_parse_failure() {
    assert!(matches!(detail_urls("<div id=\"main\">\0</div>"), Err(Error::ParseFailure(_))));
}

#[test]
fn commented_anchor_is_not_an_element() {
    let html = r#"<html><body><!-- <div id="main"></div> --></body></html>"#;
    assert!(matches!(detail_urls(html), Err(Error::StructureNotFound(_))));
}

const DEEP: usize = 100_000;

// Wrappers are spans: a `div` start tag scans the open-element stack, so a
// deep run of divs makes tree construction quadratic.
fn nested(depth: usize, inner: &str) -> String {
    format!("{}{inner}{}", "<span>".repeat(depth), "</span>".repeat(depth))
}

#[test]
fn deeply_nested_listing_is_searched() {
    let html = nested(
        DEEP,
        r#"<div id="main"><div class="post-list"><a href="/deep"></a></div></div>"#,
    );
    assert_eq!(detail_urls(&html), Ok(vec!["/deep".to_string()]));
}

#[test]
fn deeply_nested_miss_is_not_found() {
    let html = nested(DEEP, "<p>nothing</p>");
    assert!(matches!(tag_catalog(&html), Err(Error::StructureNotFound(_))));
}

#[test]
fn deeply_nested_post_is_walked() {
    let time = format!(
        r#"<div id="post-time">{}</div>"#,
        nested(DEEP, "2023年05月01日10時")
    );
    let html = format!(
        r#"<html><head><title>T</title><link rel="canonical" href="/rj3"></head><body>{}</body></html>"#,
        nested(DEEP, &time)
    );

    let meta = post_meta(&html).expect("post meta");
    assert_eq!(meta.id, "rj3");
    assert_eq!(meta.timestamp, 1_682_935_200);
}

#[test]
fn repeated_calls_agree() {
    let html = r#"<div id="container"><div id="main"><div class="wp-pagenavi"><span class="pages">1 / 3</span></div></div></div>"#;
    let first = max_page(html);
    for _ in 0..5 {
        assert_eq!(max_page(html), first);
    }
}
