use criterion::{Criterion, criterion_group, criterion_main};
use docs_highlighter_engine::parsing::{chars_from_text, separate_comments, split_words};
use docs_highlighter_engine::{NoFormatter, StyleTables, instance_pass};
mod common;

fn bench_comment_scanner(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanning");
    group.sample_size(10);

    let tables = StyleTables::builtin();
    let java = tables.language("java").map(|l| l.comments.clone()).unwrap_or_default();
    let chars = chars_from_text(&common::generate_java_source(200), 1);

    group.bench_function("separate_comments", |b| {
        b.iter(|| {
            let separated = separate_comments(&java, std::hint::black_box(&chars));
            std::hint::black_box(separated);
        });
    });

    let code = separate_comments(&java, &chars).code;
    group.bench_function("split_words", |b| {
        b.iter(|| {
            let words = split_words(std::hint::black_box(&code));
            std::hint::black_box(words);
        });
    });

    group.finish();
}

fn bench_instance_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("pass");
    group.sample_size(10);

    let tables = StyleTables::builtin();
    let doc = common::generate_instance_document(10, 20);

    group.bench_function("instance_pass", |b| {
        b.iter(|| {
            let out = instance_pass(std::hint::black_box(&doc), &tables, &NoFormatter);
            std::hint::black_box(out);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_comment_scanner, bench_instance_pass);
criterion_main!(benches);
