//! Compile throughput benchmarks
//!
//! Measures parsing plus compilation of drawing scripts with a growing
//! number of commands, and markup layout of increasingly nested equations.
//!
//! Run benchmarks: `cargo bench --bench compile_throughput`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use scribe::layout::layout;
use scribe::{ScriptCompiler, parse_commands};
use serde_json::{Value, json};
use std::hint::black_box;

fn lesson(commands: usize) -> String {
    let items: Vec<Value> = (0..commands)
        .map(|i| match i % 4 {
            0 => json!({"command": "drawText", "payload": {"text": "The angle at the center is twice the angle at the edge.", "x": 20, "y": 40 + i, "fontSize": 18}}),
            1 => json!({"command": "drawEquation", "payload": {"equation": "x = \\frac{-b \\pm \\sqrt{b^2 - 4ac}}{2a}", "x": 40, "y": 80 + i, "charSize": 24}}),
            2 => json!({"command": "drawCircle", "payload": {"cx": 200, "cy": 250, "r": 100}}),
            _ => json!({"command": "pause", "payload": {"duration": 750}}),
        })
        .collect();
    Value::Array(items).to_string()
}

fn nested_fraction(depth: usize) -> String {
    let mut markup = "x^2".to_string();
    for _ in 0..depth {
        markup = format!("\\frac{{{markup}}}{{1 + \\sqrt{{y_n}}}}");
    }
    markup
}

fn bench_compile(c: &mut Criterion) {
    let compiler = ScriptCompiler::new();
    let mut group = c.benchmark_group("compile_script");
    for commands in [1usize, 10, 100, 1000] {
        let text = lesson(commands);
        group.throughput(Throughput::Elements(commands as u64));
        group.bench_with_input(BenchmarkId::from_parameter(commands), &text, |b, text| {
            b.iter(|| {
                let parsed = parse_commands(black_box(text)).unwrap_or_default();
                black_box(compiler.compile(&parsed))
            })
        });
    }
    group.finish();
}

fn bench_markup_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("markup_depth");
    for depth in [1usize, 4, 16] {
        let markup = nested_fraction(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &markup, |b, markup| {
            b.iter(|| black_box(layout(black_box(markup), 0.0, 0.0, 24.0)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compile, bench_markup_depth);
criterion_main!(benches);
