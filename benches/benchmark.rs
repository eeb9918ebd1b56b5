//! Performance benchmarks for rs-postmeta.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks cover each pipeline on a small synthetic page, plus the post
//! walk on a page padded with a large number of unrelated elements.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rs_postmeta::{detail_urls, max_page, post_meta, tag_catalog};

const LISTING_HTML: &str = r#"
<!DOCTYPE html>
<html lang="ja">
<head><meta charset="UTF-8"><title>Listing</title></head>
<body>
<div id="container">
  <div id="main">
    <div class="pop-list"><a href="/pop/1">pop</a></div>
    <div class="post-list">
      <a href="/rj100001"><img src="/1.jpg"></a>
      <a href="/rj100002"><img src="/2.jpg"></a>
      <a href="/rj100003"><img src="/3.jpg"></a>
      <a href="/rj100004"><img src="/4.jpg"></a>
    </div>
    <div class="wp-pagenavi"><span class="pages">1 / 48</span><a href="/page/2">2</a></div>
  </div>
</div>
</body>
</html>
"#;

const POST_HTML: &str = r##"
<!DOCTYPE html>
<html lang="ja">
<head>
  <title>Sample Post</title>
  <link rel="canonical" href="https://example.com/rj01234567">
</head>
<body>
<div id="container"><div id="main">
  <video poster="https://example.com/poster.jpg"></video>
  <div id="post-time">2023年05月01日10時</div>
  <div id="post-tag">
    <span>声優</span><a href="/cv/1">A</a><a href="/cv/2">B</a>
    <span>サークル</span><a href="/circle/1">Circle</a>
    <span>ジャンル</span><a href="/genre/1">ASMR</a><a href="/genre/2">Binaural</a>
  </div>
  <div id="chapter">
    <a href="#t0">Intro<span>00:00</span></a>
    <a href="#t1">Main<span>03:10</span></a>
    <a href="#t2">Outro<span>42:05</span></a>
  </div>
</div></div>
</body>
</html>
"##;

const CATALOG_HTML: &str = r#"
<html><body><div id="main"><div class="tag-list">
  <a href="/tag/1"><span>120</span>ASMR</a>
  <a href="/tag/2"><span>80</span>Binaural</a>
  <a href="/tag/3"><span>12</span>Fantasy</a>
</div></div></body></html>
"#;

fn bench_pipelines(c: &mut Criterion) {
    c.bench_function("max_page", |b| b.iter(|| max_page(black_box(LISTING_HTML))));
    c.bench_function("detail_urls", |b| b.iter(|| detail_urls(black_box(LISTING_HTML))));
    c.bench_function("post_meta", |b| b.iter(|| post_meta(black_box(POST_HTML))));
    c.bench_function("tag_catalog", |b| b.iter(|| tag_catalog(black_box(CATALOG_HTML))));
}

/// Post walk cost as unrelated markup before the anchors grows.
fn bench_post_padding(c: &mut Criterion) {
    let mut group = c.benchmark_group("post_padding");

    for padding in [100usize, 1_000, 10_000] {
        let filler = "<div class=\"ad\"><p>filler</p></div>".repeat(padding);
        let html = POST_HTML.replacen("<body>", &format!("<body>{filler}"), 1);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("post_meta", padding), &html, |b, html| {
            b.iter(|| post_meta(black_box(html)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipelines, bench_post_padding);
criterion_main!(benches);
