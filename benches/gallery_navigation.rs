// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery and catalog operations.
//!
//! Measures the performance of:
//! - Lightbox navigation (next/previous with wrap-around)
//! - Zoom changes on an open lightbox
//! - Manifest parsing and catalog search

use catalog_lens::catalog::Catalog;
use catalog_lens::ui::{lightbox, search};
use criterion::{criterion_group, criterion_main, Criterion};
use std::fmt::Write as _;
use std::hint::black_box;

/// Builds a manifest with `count` thumbnails, specs and brands.
fn manifest(count: usize) -> String {
    let mut text = String::from("[product]\nname = \"Catalyst 9200L\"\nmain_image = \"img/C9200L_front.png\"\nthumbnails = [");
    for i in 0..count {
        let _ = write!(text, "\"img/view_{i}.png\", ");
    }
    text.push_str("]\n");
    for i in 0..count {
        let _ = write!(
            text,
            "\n[[product.specs]]\nlabel = \"Port {i}\"\nvalue = \"1G copper\"\n"
        );
    }
    for i in 0..count {
        let _ = write!(
            text,
            "\n[[brands]]\nname = \"Brand {i}\"\nlogo = \"icons/brands/brand_{i}.svg\"\n"
        );
    }
    text
}

fn loaded_gallery(count: usize) -> lightbox::State {
    let thumbnails: Vec<String> = (0..count).map(|i| format!("img/view_{i}.png")).collect();
    let mut gallery = lightbox::State::default();
    gallery.load_page(Some("img/view_0.png"), &thumbnails);
    gallery.open("img/view_0.png");
    gallery
}

/// Benchmark navigation operations (next/previous).
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let mut gallery = loaded_gallery(50);

    group.bench_function("navigate_next", |b| {
        b.iter(|| {
            gallery.next();
            black_box(gallery.current_index());
        });
    });

    group.bench_function("navigate_previous", |b| {
        b.iter(|| {
            gallery.previous();
            black_box(gallery.current_index());
        });
    });

    group.bench_function("zoom_in_out", |b| {
        b.iter(|| {
            gallery.change_zoom(1.2);
            gallery.change_zoom(1.0 / 1.2);
            black_box(gallery.zoom().scale);
        });
    });

    group.finish();
}

/// Benchmark manifest parsing and searching the parsed catalog.
fn bench_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");
    let text = manifest(100);

    group.bench_function("parse_manifest", |b| {
        b.iter(|| black_box(Catalog::parse(black_box(&text)).is_ok()));
    });

    if let Ok(catalog) = Catalog::parse(&text) {
        group.bench_function("search_specs", |b| {
            b.iter(|| black_box(search::search(&catalog, black_box("port 4")).len()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_navigate, bench_catalog);
criterion_main!(benches);
