//! Scanner throughput benchmarks.
//!
//! Measures tokenization through the three-slot `Scanner` API, the way a
//! parser drives it, plus the collecting `tokenize` wrapper for comparison.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use quill_ir::TokenKind;
use quill_lexer::{tokenize, Scanner, ScannerConfig};
use quill_lexer_core::SourceBuffer;

/// Generate N small functions touching every token family.
fn generate_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "function f{i}(x, y = 0x{i:x}) {{\n  \
                 // line comment\n  \
                 const s = 'str\\'{i}' + `t${{x}}u`;\n  \
                 /* block */ return x >>>= y ?? {i}_000n, s.length * 1.5e3;\n}}"
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_scanner_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/throughput");

    for num_functions in [10, 100, 1000, 5000] {
        let source = generate_n_functions(num_functions);
        let bytes = source.len() as u64;

        group.throughput(Throughput::Bytes(bytes));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_functions),
            &source,
            |b, src| {
                b.iter(|| {
                    let buf = SourceBuffer::new(src);
                    let mut scanner = Scanner::new(buf.cursor(), ScannerConfig::default());
                    scanner.initialize();
                    while scanner.advance() != TokenKind::EndOfInput {
                        black_box(scanner.current_location());
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/tokenize");

    for num_functions in [100, 1000] {
        let source = generate_n_functions(num_functions);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_functions),
            &source,
            |b, src| b.iter(|| black_box(tokenize(src, ScannerConfig::default()))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_scanner_throughput, bench_tokenize);
criterion_main!(benches);
