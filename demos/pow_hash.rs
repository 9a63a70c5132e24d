// Copyright 2025 Irreducible Inc.

use anyhow::{Context, Result};
use clap::Parser;
use soterg_pow::{get_pow_hash, Header, HashOrder};
use soterg_utils::{rayon::adjust_thread_pool, tracing::init_tracing};

/// Block 4 of the Soter chain.
const DEFAULT_HEADER: &str = "00000032e9de8ebb42a4bfbe99af01e5b905e026fc9080b98a0f411c4b15b8cf3b\
	000000abec73e42ad979a60bfcc3faf727cf4fa39713311c0fcef5f788b362cd16913d29130269c602141c024dac91";

#[derive(Debug, Parser)]
struct Args {
	/// Hex-encoded 80-byte block headers. Defaults to block 4.
	headers: Vec<String>,
	/// Print the algorithm names for each stage.
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> Result<()> {
	adjust_thread_pool()
		.as_ref()
		.context("failed to init thread pool")?;

	let args = Args::parse();

	init_tracing();

	let headers = if args.headers.is_empty() {
		vec![DEFAULT_HEADER.to_string()]
	} else {
		args.headers
	};

	for encoded in &headers {
		let bytes = hex::decode(encoded.trim()).context("header is not valid hex")?;
		let header = Header::new(&bytes)?;
		let order = HashOrder::from_time(header.time());
		let digest = get_pow_hash(&bytes)?;

		println!("time:   {:#010x}", header.time());
		println!("order:  {order}");
		if args.verbose {
			for (stage, algorithm) in order.algorithms().iter().enumerate() {
				println!("  {stage:>2}: {algorithm}");
			}
		}
		println!("digest: {}", hex::encode(digest));
	}

	Ok(())
}
