//! Codec Benchmarks
//!
//! | Benchmark | Path |
//! |-----------|------|
//! | encode/lossless/* | float64 tensor → base64 `b64Value` (cache cleared per iteration) |
//! | encode/lossy/* | float64 tensor → float32 `value` array |
//! | decode/lossless/* | `b64Value` text → float64 tensor |
//! | decode/json_native/* | `value` text → float32 tensor |
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench codec
//! cargo bench --bench codec -- "encode/lossy"  # specific group
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tensorwire::{decode_tensor, encode_tensor, Tensor};

const SIZES: [usize; 3] = [16, 1_024, 65_536];

// =============================================================================
// Test Utilities - All allocation happens here, outside timed loops
// =============================================================================

fn wide_tensor(n: usize) -> Tensor {
    let values = (0..n).map(|i| i as f64 * 0.1).collect();
    Tensor::from_f64(vec![n], values).unwrap()
}

fn narrow_tensor(n: usize) -> Tensor {
    let values = (0..n).map(|i| i as f32 * 0.5).collect();
    Tensor::from_f32(vec![n], values).unwrap()
}

// =============================================================================
// Encode
// =============================================================================

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for n in SIZES {
        group.throughput(Throughput::Elements(n as u64));
        let tensor = wide_tensor(n);

        group.bench_with_input(BenchmarkId::new("lossless", n), &tensor, |b, t| {
            // encode a fresh clone so the cache of `t` stays empty
            b.iter(|| encode_tensor(black_box(&t.clone()), true).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("lossy", n), &tensor, |b, t| {
            b.iter(|| encode_tensor(black_box(t), false).unwrap())
        });
    }
    group.finish();
}

// =============================================================================
// Decode
// =============================================================================

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for n in SIZES {
        group.throughput(Throughput::Elements(n as u64));
        let lossless = encode_tensor(&wide_tensor(n), true).unwrap();
        let json_native = encode_tensor(&narrow_tensor(n), false).unwrap();

        group.bench_with_input(BenchmarkId::new("lossless", n), &lossless, |b, text| {
            b.iter(|| decode_tensor(black_box(text)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("json_native", n), &json_native, |b, text| {
            b.iter(|| decode_tensor(black_box(text)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
