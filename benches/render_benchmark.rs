//! Benchmarks for dokupage rendering performance.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dokupage::{homepage, render, Block, Document, Inline, RenderOptions};

/// Creates a synthetic document with the given number of paragraphs.
fn create_test_document(paragraph_count: usize) -> Document {
    let mut doc = Document::with_title("Benchmark document");
    doc.add_block(Block::heading(1, "Benchmark"));
    for i in 0..paragraph_count {
        doc.add_block(Block::paragraph_with(vec![
            Inline::text(format!(
                "Paragraph {} with a reasonable amount of prose text, \
                 some of it containing ümlauts and other Latin-1 färe, ",
                i
            )),
            Inline::link("and a link", "docs/"),
            Inline::text("."),
        ]));
    }
    doc
}

fn bench_render_homepage(c: &mut Criterion) {
    c.bench_function("render_homepage", |b| {
        b.iter(|| black_box(dokupage::render_homepage().unwrap()))
    });
}

fn bench_render_xhtml(c: &mut Criterion) {
    let options = RenderOptions::default();
    for count in [10, 100, 1000] {
        let doc = create_test_document(count);
        c.bench_function(&format!("render_xhtml_{}_paragraphs", count), |b| {
            b.iter(|| black_box(render::to_xhtml(&doc, &options).unwrap()))
        });
    }
}

fn bench_render_text(c: &mut Criterion) {
    let doc = homepage::document();
    let options = RenderOptions::default();
    c.bench_function("render_text_homepage", |b| {
        b.iter(|| black_box(render::to_text(&doc, &options).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_render_homepage,
    bench_render_xhtml,
    bench_render_text
);
criterion_main!(benches);
