// Copyright 2024-2025 Irreducible Inc.

use hex_literal::hex;
use proptest::prelude::*;
use soterg_hash::{
	digest::FixedOutputReset, Algorithm, Blake512, CubeHash512, Digest, Echo512, Hamsi512, Keccak512,
	Luffa512, Simd512,
};

fn check_split_consistency<D: Digest>(data: &[u8], split: usize) {
	let split = split.min(data.len());
	let mut hasher = D::new();
	hasher.update(&data[..split]);
	hasher.update(&data[split..]);
	assert_eq!(hasher.finalize(), D::digest(data));
}

fn check_finalize_reset<D: Digest + FixedOutputReset>(data: &[u8]) {
	let mut hasher = D::new();
	Digest::update(&mut hasher, data);
	let first = hasher.finalize_reset();
	Digest::update(&mut hasher, data);
	assert_eq!(first, hasher.finalize());
}

proptest! {
	#[test]
	fn test_incremental_updates(data in proptest::collection::vec(any::<u8>(), 0..300), split in 0usize..300) {
		check_split_consistency::<Blake512>(&data, split);
		check_split_consistency::<CubeHash512>(&data, split);
		check_split_consistency::<Echo512>(&data, split);
		check_split_consistency::<Hamsi512>(&data, split);
		check_split_consistency::<Keccak512>(&data, split);
		check_split_consistency::<Luffa512>(&data, split);
		check_split_consistency::<Simd512>(&data, split);
	}
}

#[test]
fn test_finalize_reset() {
	let data = b"The quick brown fox jumps over the lazy dog";
	check_finalize_reset::<Blake512>(data);
	check_finalize_reset::<CubeHash512>(data);
	check_finalize_reset::<Echo512>(data);
	check_finalize_reset::<Hamsi512>(data);
	check_finalize_reset::<Keccak512>(data);
	check_finalize_reset::<Luffa512>(data);
	check_finalize_reset::<Simd512>(data);
}

#[test]
fn test_cubehash_quick_brown_fox() {
	let expected = hex!(
		"bdba44a28cd16b774bdf3c9511def1a2baf39d4ef98b92c27cf5e37beb8990b7"
		"cdb6575dae1a548330780810618b8a5c351c1368904db7ebdf8857d596083a86"
	);
	let out = CubeHash512::digest(b"The quick brown fox jumps over the lazy dog");
	assert_eq!(out.as_slice(), &expected);
}

#[test]
fn test_primitives_through_trait_object() {
	let header = [0x42u8; 80];
	let pairs: [(Algorithm, Vec<u8>); 4] = [
		(Algorithm::Blake, Blake512::digest(header).to_vec()),
		(Algorithm::Luffa, Luffa512::digest(header).to_vec()),
		(Algorithm::Echo, Echo512::digest(header).to_vec()),
		(Algorithm::Hamsi, Hamsi512::digest(header).to_vec()),
	];
	for (algorithm, expected) in pairs {
		assert_eq!(algorithm.primitive().digest(&header), expected, "{algorithm}");
	}
}

#[test]
fn test_every_primitive_depends_on_every_byte() {
	let base = [0u8; 64];
	for algorithm in Algorithm::ALL {
		let primitive = algorithm.primitive();
		let reference = primitive.digest(&base);
		for i in [0, 31, 63] {
			let mut flipped = base;
			flipped[i] ^= 0x01;
			assert_ne!(primitive.digest(&flipped), reference, "{algorithm} ignores byte {i}");
		}
	}
}
