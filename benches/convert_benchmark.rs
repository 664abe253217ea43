//! Benchmarks for mdword conversion performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks run the pipelines on a synthetic deployment guide.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mdword::render::{paginate, strip_markdown, to_document, to_rtf, RenderOptions, RtfOptions};
use mdword::writer::to_docx_bytes;

/// Creates a synthetic guide with the given number of sections.
fn create_test_guide(section_count: usize) -> String {
    let mut guide = String::from("# 🚀 HƯỚNG DẪN DEPLOY THEME EDITOR LÊN VPS\n\n");

    for i in 0..section_count {
        guide.push_str(&format!("## {}. CHUẨN BỊ VPS bước {}\n\n", i + 1, i + 1));
        guide.push_str("Cài đặt **Node.js** và `pm2`, xem [docs](https://nodejs.org).\n\n");
        guide.push_str("```bash\nsudo apt update\nsudo apt install -y nginx\n```\n\n");
        guide.push_str("- Kiểm tra firewall\n- Mở cổng 80 và 443\n\n---\n\n");
    }

    guide
}

fn bench_parse(c: &mut Criterion) {
    let small = create_test_guide(5);
    let large = create_test_guide(200);

    c.bench_function("parse_small", |b| {
        b.iter(|| mdword::parse_str(black_box(&small)))
    });
    c.bench_function("parse_large", |b| {
        b.iter(|| mdword::parse_str(black_box(&large)))
    });
}

fn bench_docx(c: &mut Criterion) {
    let guide = create_test_guide(50);
    let elements = mdword::parse_str(&guide);
    let options = RenderOptions::default();

    c.bench_function("render_and_paginate", |b| {
        b.iter(|| {
            let mut doc = to_document(black_box(&elements), &options);
            paginate(&mut doc, &options);
            doc
        })
    });

    let mut doc = to_document(&elements, &options);
    paginate(&mut doc, &options);
    c.bench_function("write_docx", |b| {
        b.iter(|| to_docx_bytes(black_box(&doc)))
    });
}

fn bench_text(c: &mut Criterion) {
    let guide = create_test_guide(50);
    let rtf_options = RtfOptions::default();

    c.bench_function("strip_markdown", |b| {
        b.iter(|| strip_markdown(black_box(&guide)))
    });
    c.bench_function("to_rtf", |b| {
        b.iter(|| to_rtf(black_box(&guide), &rtf_options))
    });
}

criterion_group!(benches, bench_parse, bench_docx, bench_text);
criterion_main!(benches);
