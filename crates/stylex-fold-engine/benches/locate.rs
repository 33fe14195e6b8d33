use criterion::{Criterion, criterion_group, criterion_main};
use stylex_fold_engine::{
    Document, FoldIntent, FoldView, LineClassifier, apply, locate_block_lines, locate_key_lines,
};
mod common;

fn bench_locators(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate");
    group.sample_size(10);

    let content = common::generate_stylex_source(50, 40);
    let doc = Document::new(&content);
    let classifier = LineClassifier::default();

    group.bench_function("block_lines", |b| {
        b.iter(|| {
            let lines = locate_block_lines(std::hint::black_box(&doc), &classifier);
            std::hint::black_box(lines);
        });
    });

    group.bench_function("key_lines", |b| {
        b.iter(|| {
            let lines = locate_key_lines(std::hint::black_box(&doc), &classifier);
            std::hint::black_box(lines);
        });
    });

    group.bench_function("fold_names_view", |b| {
        b.iter(|| {
            let mut view = FoldView::new(&doc);
            apply(FoldIntent::FoldNames, &doc, &classifier, &mut view);
            std::hint::black_box(view.render());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_locators);
criterion_main!(benches);
