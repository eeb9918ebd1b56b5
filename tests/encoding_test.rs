use rs_postmeta::boundary::Operation;
use rs_postmeta::encoding::{detect_encoding, transcode_to_utf8};
use rs_postmeta::{tag_catalog, Options};

/// UTF-8 labels pass through untouched.
#[test]
fn utf8_catalog_is_unchanged() {
    let html = "<html><head><meta charset=\"utf-8\"></head><body>\
        <div id=\"main\"><div class=\"tag-list\"><a href=\"/t\"><span>1</span>ファンタジー</a></div></div>\
        </body></html>";

    let transcoded = transcode_to_utf8(html.as_bytes());
    assert_eq!(transcoded, html);

    let tags = tag_catalog(&transcoded).expect("catalog").unwrap_or_default();
    assert_eq!(tags[0].name, "ファンタジー");
}

/// EUC-JP pages declared through http-equiv are decoded before parsing.
#[test]
fn euc_jp_catalog_is_decoded() {
    // 声優 in EUC-JP
    let mut html = br#"<html><head><meta http-equiv="Content-Type" content="text/html; charset=EUC-JP"></head>
<body><div id="main"><div class="tag-list"><a href="/cv"><span>9</span>"#
        .to_vec();
    html.extend_from_slice(b"\xC0\xBC\xCD\xA5");
    html.extend_from_slice(b"</a></div></div></body></html>");

    assert_eq!(detect_encoding(&html), encoding_rs::EUC_JP);

    let report = Operation::UpdateTag.run_bytes(&html, &Options::default());
    assert_eq!(report.code(), 0);
    assert_eq!(report.to_json(), r#"[{"name":"声優","url":"/cv"}]"#);
}

/// A UTF-8 byte-order mark is stripped by decoding.
#[test]
fn utf8_bom_is_removed() {
    let html = b"\xEF\xBB\xBF<div id=\"main\"></div>";
    assert_eq!(transcode_to_utf8(html), "<div id=\"main\"></div>");
}

/// Undecodable bytes do not stop extraction.
#[test]
fn invalid_bytes_still_extract() {
    let html = b"<div id=\"main\"><div class=\"post-list\"><a href=\"/a\">\xFF\xFE</a></div></div>";
    let report = Operation::Detail.run_bytes(html, &Options::default());
    assert_eq!(report.code(), 0);
    assert_eq!(report.to_json(), r#"["/a"]"#);
}
