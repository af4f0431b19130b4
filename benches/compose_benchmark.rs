//! Benchmarks for unocr compose and render performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic OCR results with embedded image
//! payloads.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use unocr::{markup, Document, DocumentBuffer, RenderOptions};

/// Creates a synthetic OCR result with the given number of pages.
fn create_test_document(page_count: usize) -> Document {
    let payload = "QUFB".repeat(64);
    let mut json = String::from("{\"pages\":[");

    for page in 0..page_count {
        if page > 0 {
            json.push(',');
        }
        let markdown = format!(
            "# Page {page}\nFirst line of recognized text on page {page}.\n\
             Second line with an embedded figure ![figure](fig-{page}.png) inline.\n\
             \n\
             Closing line after a blank one."
        );
        json.push_str(&format!(
            "{{\"markdown\":{},\"images\":[{{\"id\":\"fig-{}.png\",\"image_base64\":\"{}\"}}]}}",
            serde_json::to_string(&markdown).unwrap(),
            page,
            payload
        ));
    }

    json.push_str("]}");
    unocr::load_str(&json).unwrap()
}

/// Benchmark the reference tokenizer on typical page markup.
fn bench_tokenize(c: &mut Criterion) {
    let markup_with_refs =
        "Some recognized text ![figure one](fig-1.png) more text ![figure two](fig-2.png) tail"
            .repeat(16);
    let markup_plain = "Recognized text with no references at all, just plain lines".repeat(16);

    c.bench_function("tokenize_with_references", |b| {
        b.iter(|| markup::tokenize(black_box(&markup_with_refs)));
    });

    c.bench_function("tokenize_plain_text", |b| {
        b.iter(|| markup::tokenize(black_box(&markup_plain)));
    });
}

/// Benchmark buffer composition at various document sizes.
fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    for page_count in [1, 10, 100].iter() {
        let doc = create_test_document(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| DocumentBuffer::from_document(black_box(&doc)));
        });
    }

    group.finish();
}

/// Benchmark Markdown rendering with payload substitution.
fn bench_render_markdown(c: &mut Criterion) {
    let doc = create_test_document(10);
    let options = RenderOptions::default();

    c.bench_function("render_markdown_10_pages", |b| {
        b.iter(|| unocr::render::to_markdown(black_box(&doc), &options));
    });
}

criterion_group!(benches, bench_tokenize, bench_compose, bench_render_markdown);
criterion_main!(benches);
