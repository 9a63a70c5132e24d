// Copyright 2025 Irreducible Inc.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::{value_parser, Parser};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use soterg_pow::{hash_batch_into, PowHash, SoterG};
use soterg_utils::{rayon::adjust_thread_pool, tracing::init_tracing};

#[derive(Debug, Parser)]
struct Args {
	/// The number of random headers to hash.
	#[arg(short, long, default_value_t = 1 << 12, value_parser = value_parser!(u32).range(1..))]
	n_headers: u32,
	/// Seed for the header generator.
	#[arg(long, default_value_t = 0)]
	seed: u64,
}

fn main() -> Result<()> {
	adjust_thread_pool()
		.as_ref()
		.context("failed to init thread pool")?;

	let args = Args::parse();

	init_tracing();

	let n_headers = args.n_headers as usize;
	let mut rng = StdRng::seed_from_u64(args.seed);
	let headers = (0..n_headers)
		.map(|_| {
			let mut header = [0u8; 80];
			rng.fill_bytes(&mut header);
			header
		})
		.collect::<Vec<_>>();

	let mut digests = vec![PowHash::default(); n_headers];
	let start = Instant::now();
	hash_batch_into(&SoterG, &headers, &mut digests)?;
	let elapsed = start.elapsed();

	// Digests compare as little-endian 256-bit numbers against the target.
	let best = digests
		.iter()
		.min_by(|a, b| a.iter().rev().cmp(b.iter().rev()));
	tracing::info!(n_headers, elapsed_ms = elapsed.as_millis() as u64, "hashed batch");
	println!(
		"{n_headers} headers in {elapsed:?} ({:.0} H/s)",
		n_headers as f64 / elapsed.as_secs_f64()
	);
	if let Some(best) = best {
		println!("lowest digest: {}", hex::encode(best));
	}

	Ok(())
}
