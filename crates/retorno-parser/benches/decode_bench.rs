//! Decoder performance benchmarks.
//!
//! Run with: cargo bench -p retorno-parser

#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use retorno_parser::{decode_str, itau::Itau};

/// Generate a synthetic Itaú retorno file with N detail records.
fn generate_retorno(num_details: usize) -> String {
    let mut lines = Vec::with_capacity(num_details + 2);
    lines.push(format!(
        "{:<46}{:<30}{:<18}{}{:<275}{:06}",
        "02RETORNO01COBRANCA       005700721922",
        "ACME COMERCIO DE PECAS LTDA",
        "341BANCO ITAU SA",
        "15011501600BPI00042160115",
        "",
        1
    ));

    for i in 0..num_details {
        let value = 10_000 + (i % 100) * 137;
        let mut line = String::with_capacity(400);
        line.push_str(&format!("{:<62}{:08}{:<76}", "10212345678000199005700721922", i, ""));
        line.push_str(&format!("{:<6}{value:013}{:<88}", "100115", ""));
        line.push_str(&format!("{value:013}{:<29}", ""));
        line.push_str(&format!("{:<6}{:<91}", "160115", ""));
        line.push_str(&format!("AA{:06}", i + 2));
        lines.push(line);
    }

    lines.push(format!(
        "{:<212}{:08}{:<174}{:06}",
        "9201341",
        num_details,
        "",
        num_details + 2
    ));
    lines.join("\r\n")
}

fn bench_decode_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [10, 100, 1000, 10_000] {
        let content = generate_retorno(size);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| decode_str::<Itau>(black_box(content)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode_sizes);
criterion_main!(benches);
