#![allow(missing_docs)]
//! Benchmark – the in-place string decoder's escape-free and escape-heavy
//! paths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rawjson::Cursor;

/// A quoted string of `len` bytes of plain ASCII content, no escapes.
fn make_plain_string(len: usize) -> Vec<u8> {
    let mut buf = Vec::with_capacity(len + 3);
    buf.push(b'"');
    buf.extend(std::iter::repeat_n(b'a', len));
    buf.push(b'"');
    buf.push(0);
    buf
}

/// A quoted string of `len` bytes of content, every third byte a `\n`
/// escape, forcing the rewrite path for the whole span.
fn make_escaped_string(len: usize) -> Vec<u8> {
    let mut buf = Vec::with_capacity(len * 2 + 3);
    buf.push(b'"');
    for i in 0..len {
        if i % 3 == 0 {
            buf.extend_from_slice(b"\\n");
        } else {
            buf.push(b'a');
        }
    }
    buf.push(b'"');
    buf.push(0);
    buf
}

fn decode_once(mut buf: Vec<u8>) {
    let mut cursor = Cursor::new(&mut buf).unwrap();
    let _ = black_box(rawjson::scalar::string::read_string(&mut cursor).unwrap());
}

fn bench_string_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_decode");
    for size in [16usize, 256, 4096, 65536] {
        group.bench_with_input(BenchmarkId::new("plain", size), &size, |b, &size| {
            b.iter_batched(
                || make_plain_string(size),
                decode_once,
                criterion::BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("escaped", size), &size, |b, &size| {
            b.iter_batched(
                || make_escaped_string(size),
                decode_once,
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_string_decode);
criterion_main!(benches);
