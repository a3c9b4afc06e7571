//! Cast performance benchmarks
//!
//! Compares widening casts against plain `as` conversions, which should be
//! indistinguishable, and measures the checked paths for narrowing and
//! cross-sign pairs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use satcast::{cast, try_cast, u63};

fn inputs_i32() -> Vec<i32> {
	(0..1_024_i32).map(|i| i.wrapping_mul(2_654_435_761_u32 as i32)).collect()
}

fn inputs_u16() -> Vec<u16> {
	(0..1_024_u16).map(|i| i.wrapping_mul(40_503)).collect()
}

fn bench_widening(c: &mut Criterion) {
	let values = inputs_u16();
	let mut group = c.benchmark_group("widening_u16_to_i32");

	group.bench_function("as", |b| {
		b.iter(|| values.iter().map(|&v| i32::from(black_box(v))).fold(0_i32, i32::wrapping_add));
	});
	group.bench_function("cast", |b| {
		b.iter(|| values.iter().map(|&v| cast::<i32, u16>(black_box(v))).fold(0_i32, i32::wrapping_add));
	});
	group.finish();
}

fn bench_narrowing(c: &mut Criterion) {
	let values = inputs_i32();
	let mut group = c.benchmark_group("narrowing_i32_to_u16");

	group.bench_function("as", |b| {
		b.iter(|| values.iter().map(|&v| black_box(v) as u16).fold(0_u16, u16::wrapping_add));
	});
	group.bench_function("cast", |b| {
		b.iter(|| values.iter().map(|&v| cast::<u16, i32>(black_box(v))).fold(0_u16, u16::wrapping_add));
	});
	group.bench_function("try_cast", |b| {
		b.iter(|| values.iter().filter_map(|&v| try_cast::<u16, i32>(black_box(v)).ok()).count());
	});
	group.finish();
}

fn bench_cross_sign(c: &mut Criterion) {
	let values = inputs_i32();
	let mut group = c.benchmark_group("cross_sign_same_width");

	group.bench_function("i32_to_u32", |b| {
		b.iter(|| values.iter().map(|&v| cast::<u32, i32>(black_box(v))).fold(0_u32, u32::wrapping_add));
	});
	group.bench_function("i32_to_u63", |b| {
		b.iter(|| values.iter().map(|&v| cast::<u63, i32>(black_box(v))).max());
	});
	group.finish();
}

criterion_group!(benches, bench_widening, bench_narrowing, bench_cross_sign);
criterion_main!(benches);
