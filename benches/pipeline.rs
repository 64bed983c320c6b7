use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use php_array_sorter::{parse, render, sort, sort_literal, to_writer, Options};

/// A keyed literal with `size` entries in reverse order, each holding a small
/// nested map and list.
fn config_literal(size: usize) -> String {
    let entries: Vec<String> = (0..size)
        .rev()
        .map(|i| {
            format!(
                "'key_{i:04}' => ['name' => 'Item {i}', 'enabled' => true, 'ratio' => {i}.5, \
                 'tags' => ['a', 'b', env('TAG_{i}')], 'driver' => SOME_CONST]"
            )
        })
        .collect();
    format!("[{}]", entries.join(", "))
}

fn nested_literal(depth: usize) -> String {
    let mut text = String::from("['leaf' => 1]");
    for level in 0..depth {
        text = format!("['z{level}' => {text}, 'a{level}' => [1, 2, 3], 'm{level}' => null]");
    }
    text
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [10, 50, 100, 500].iter() {
        let text = config_literal(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for size in [10, 50, 100, 500].iter() {
        let value = parse(&config_literal(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| sort(black_box(value.clone())))
        });
    }
    group.finish();
}

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for size in [10, 50, 100, 500].iter() {
        let value = sort(parse(&config_literal(*size)).unwrap());
        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| render(black_box(value), 0))
        });
    }
    group.finish();
}

fn benchmark_sort_literal(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_literal");

    for size in [10, 100, 500].iter() {
        let text = config_literal(*size);
        group.bench_with_input(BenchmarkId::new("wide", size), &text, |b, text| {
            b.iter(|| sort_literal(black_box(text)))
        });
    }

    for depth in [4, 16, 32].iter() {
        let text = nested_literal(*depth);
        group.bench_with_input(BenchmarkId::new("deep", depth), &text, |b, text| {
            b.iter(|| sort_literal(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_to_writer(c: &mut Criterion) {
    let value = sort(parse(&config_literal(100)).unwrap());
    let options = Options::default();

    c.bench_function("to_writer_100", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(16 * 1024);
            to_writer(&mut out, black_box(&value), &options).unwrap();
            out
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_sort,
    benchmark_render,
    benchmark_sort_literal,
    benchmark_to_writer
);
criterion_main!(benches);
