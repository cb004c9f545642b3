use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use uplang::parse;

fn flat_document(size: usize) -> String {
    (0..size)
        .map(|i| format!("key{}!int {}", i, i))
        .collect::<Vec<_>>()
        .join("\n")
}

fn nested_document(size: usize) -> String {
    let mut text = String::new();
    for i in 0..size {
        text.push_str(&format!(
            "service{} {{\n  host host{}.example.com\n  ports [80, 443]\n  env [\n    {{\n      name PROFILE\n      value prod\n    }}\n  ]\n}}\n",
            i, i
        ));
    }
    text
}

fn benchmark_parse_simple(c: &mut Criterion) {
    let text = "name John Doe\nage!int 30\ncolors [red, green, blue]";

    c.bench_function("parse_simple_document", |b| {
        b.iter(|| parse(black_box(text)))
    });
}

fn benchmark_parse_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_flat");

    for size in [10, 100, 1000].iter() {
        let text = flat_document(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_parse_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_nested");

    for size in [10, 100, 500].iter() {
        let text = nested_document(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_parse_multiline(c: &mut Criterion) {
    let body: Vec<String> = (0..200).map(|i| format!("    line {}", i)).collect();
    let plain = format!("text ```\n{}\n```", body.join("\n"));
    let dedented = format!("text!4 ```\n{}\n```", body.join("\n"));

    let mut group = c.benchmark_group("parse_multiline");
    group.bench_function("verbatim", |b| b.iter(|| parse(black_box(&plain))));
    group.bench_function("dedent", |b| b.iter(|| parse(black_box(&dedented))));
    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse_simple,
    benchmark_parse_flat,
    benchmark_parse_nested,
    benchmark_parse_multiline
);
criterion_main!(benches);
