// Copyright 2025 Irreducible Inc.

use assert_matches::assert_matches;
use hex_literal::hex;
use proptest::prelude::*;
use soterg_hash::Algorithm;
use soterg_pow::{
	get_pow_hash, hash_batch, pow_hash_with, Error, FixedOrder, HashOrder, Header, InputError,
	PipelineDefinition, PowVariant, SoterG, DIGEST_SIZE,
};

/// Block 4 of the Soter chain.
const BLOCK_4: [u8; 80] = hex!(
	"00000032e9de8ebb42a4bfbe99af01e5b905e026fc9080b98a0f411c4b15b8cf3b000000abec73e42ad979a6"
	"0bfcc3faf727cf4fa39713311c0fcef5f788b362cd16913d29130269c602141c024dac91"
);
const BLOCK_4_HASH: [u8; 32] =
	hex!("e9e855fd28c2916d4e13f6c15eddf96625bdbf8c9943c5ec0f1e340900000000");

#[test]
fn test_known_vector() {
	assert_eq!(get_pow_hash(&BLOCK_4), Ok(BLOCK_4_HASH));
}

#[test]
fn test_known_vector_fields_and_order() {
	let header = Header::new(&BLOCK_4).unwrap();
	assert_eq!(header.version(), 838860800);
	assert_eq!(header.time(), 0x69021329);
	assert_eq!(header.bits(), 0x1c1402c6);
	assert_eq!(header.nonce(), 0x91ac4d02);

	let order = HashOrder::from_time(header.time());
	assert_eq!(order.to_string(), "13A5B07BB279");
	assert_eq!(
		order.algorithms().map(Algorithm::index),
		[1, 3, 10, 5, 11, 0, 7, 11, 11, 2, 7, 9]
	);

	let names = SoterG
		.pipeline(&header)
		.unwrap()
		.stages()
		.iter()
		.map(|primitive| primitive.name())
		.collect::<Vec<_>>();
	assert_eq!(names.first(), Some(&"groestl512"));
	assert_eq!(names.last(), Some(&"hamsi512"));
}

#[test]
fn test_fixed_order_reproduces_known_vector() {
	let variant = FixedOrder("13A5B07BB279".parse().unwrap());
	assert_eq!(pow_hash_with(&variant, &BLOCK_4), Ok(BLOCK_4_HASH));

	// Any other order gives a different digest for the same header.
	let other = FixedOrder("13A5B07BB278".parse().unwrap());
	assert_ne!(pow_hash_with(&other, &BLOCK_4), Ok(BLOCK_4_HASH));
}

#[test]
fn test_explicit_pipeline_reproduces_known_vector() {
	let order: HashOrder = "13A5B07BB279".parse().unwrap();
	let pipeline = PipelineDefinition::from_algorithms(order.algorithms()).unwrap();
	assert_eq!(pipeline.len(), 12);
	assert_eq!(pipeline.compute(&BLOCK_4), Ok(BLOCK_4_HASH));
}

#[test]
fn test_deterministic() {
	assert_eq!(get_pow_hash(&BLOCK_4), get_pow_hash(&BLOCK_4));
}

#[test]
fn test_rejects_wrong_length() {
	let inputs: [&[u8]; 5] = [b"", b"short", &[b'x'; 79], &[b'x'; 81], &[b'x'; 160]];
	for input in inputs {
		let err = get_pow_hash(input).unwrap_err();
		assert_matches!(
			err,
			Error::Input(InputError::WrongLength { expected: 80, actual }) if actual == input.len()
		);
		assert!(err.to_string().contains("80"), "{err}");
	}
}

#[test]
fn test_order_only_changes_every_128_seconds() {
	let mut header = BLOCK_4;
	header[68] = 0x00;
	let start = get_pow_hash(&header).unwrap();

	let mut same_window = header;
	same_window[68] = 0x7f;
	assert_eq!(
		HashOrder::from_time(Header::new(&same_window).unwrap().time()),
		HashOrder::from_time(Header::new(&header).unwrap().time())
	);
	// The time field is still hashed, so the digest changes even when the order does not.
	assert_ne!(get_pow_hash(&same_window).unwrap(), start);
}

#[test]
fn test_batch_of_known_vector() {
	let headers = vec![BLOCK_4; 4];
	for result in hash_batch(&SoterG, &headers) {
		assert_eq!(result, Ok(BLOCK_4_HASH));
	}
}

proptest! {
	#[test]
	fn test_any_header_hashes_to_32_bytes(header in proptest::collection::vec(any::<u8>(), 80)) {
		let digest = get_pow_hash(&header).unwrap();
		prop_assert_eq!(digest.len(), DIGEST_SIZE);
		prop_assert_eq!(get_pow_hash(&header).unwrap(), digest);
	}

	#[test]
	fn test_single_bit_flip_changes_digest(byte in 0usize..80, bit in 0u8..8) {
		let mut header = BLOCK_4;
		header[byte] ^= 1 << bit;
		let digest = get_pow_hash(&header).unwrap();
		let distance: u32 = digest
			.iter()
			.zip(&BLOCK_4_HASH)
			.map(|(a, b)| (a ^ b).count_ones())
			.sum();
		// About half of the 256 bits should flip.
		prop_assert!(distance > 64, "only {} bits changed", distance);
	}

	#[test]
	fn test_other_lengths_are_rejected(len in (0usize..200).prop_filter("not 80", |len| *len != 80)) {
		let is_wrong_length = matches!(
			get_pow_hash(&vec![0u8; len]),
			Err(Error::Input(InputError::WrongLength { expected: 80, .. }))
		);
		prop_assert!(is_wrong_length);
	}
}
