//! Performance benchmarks for page rendering
//!
//! Every frame composes the page and lays out the whole document, so both
//! must stay cheap at any terminal width.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use folio::content::portfolio;
use folio::html::render_html;
use folio::page::compose;
use folio::state::ThemeMode;
use folio::traits::FixedClock;
use folio::ui::{Document, Palette};

fn clock() -> FixedClock {
    FixedClock::ymd(2030, 1, 1).unwrap()
}

/// Benchmark page composition for both themes
fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let clock = clock();

    for theme in [ThemeMode::Dark, ThemeMode::Light] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", theme)),
            &theme,
            |b, theme| {
                b.iter(|| black_box(compose(portfolio(), black_box(*theme), &clock)));
            },
        );
    }

    group.finish();
}

/// Benchmark document layout across terminal widths
fn bench_document_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_layout");
    let page = compose(portfolio(), ThemeMode::Dark, &clock());
    let palette = Palette::for_mode(page.theme);

    for width in [30usize, 60, 96] {
        let rows = Document::build(&page, width, palette, None).lines.len();
        group.throughput(Throughput::Elements(rows as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_cols", width)),
            &width,
            |b, width| {
                b.iter(|| black_box(Document::build(&page, black_box(*width), palette, Some(3))));
            },
        );
    }

    group.finish();
}

/// Benchmark the static HTML export
fn bench_render_html(c: &mut Criterion) {
    let page = compose(portfolio(), ThemeMode::Dark, &clock());
    let bytes = render_html(&page).len();

    let mut group = c.benchmark_group("render_html");
    group.throughput(Throughput::Bytes(bytes as u64));
    group.bench_function("full_page", |b| {
        b.iter(|| black_box(render_html(black_box(&page))));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_compose,
    bench_document_layout,
    bench_render_html,
);

criterion_main!(benches);
