// Copyright 2024-2025 Irreducible Inc.

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::{thread_rng, RngCore};
use soterg_hash::Algorithm;

fn bench_primitives(c: &mut Criterion) {
	let mut group = c.benchmark_group("Primitives");

	let mut rng = thread_rng();

	// The chained construction only ever hashes 80 and 64 byte inputs.
	for size in [64usize, 80, 1 << 12] {
		let mut data = vec![0u8; size];
		rng.fill_bytes(&mut data);
		group.throughput(Throughput::Bytes(size as u64));

		for algorithm in Algorithm::ALL {
			let primitive = algorithm.primitive();
			group.bench_function(format!("{algorithm}/{size}"), |bench| {
				bench.iter(|| primitive.digest(&data))
			});
		}
	}

	group.finish()
}

criterion_group!(hash, bench_primitives);
criterion_main!(hash);
