// Copyright 2025 Irreducible Inc.

use digest::{
	consts::{U64, U72},
	core_api::BlockSizeUser,
	FixedOutput, FixedOutputReset, HashMarker, OutputSizeUser, Reset, Update,
};
use tiny_keccak::{Hasher as _, Keccak};

/// Keccak-512 with the original submission padding (not FIPS 202 SHA3-512).
#[derive(Clone)]
pub struct Keccak512 {
	inner: Keccak,
}

impl Default for Keccak512 {
	fn default() -> Self {
		Self {
			inner: Keccak::v512(),
		}
	}
}

impl HashMarker for Keccak512 {}

impl Update for Keccak512 {
	fn update(&mut self, data: &[u8]) {
		self.inner.update(data);
	}
}

impl OutputSizeUser for Keccak512 {
	type OutputSize = U64;
}

impl BlockSizeUser for Keccak512 {
	type BlockSize = U72;
}

impl FixedOutput for Keccak512 {
	fn finalize_into(self, out: &mut digest::Output<Self>) {
		self.inner.finalize(out);
	}
}

impl Reset for Keccak512 {
	fn reset(&mut self) {
		self.inner = Keccak::v512();
	}
}

impl FixedOutputReset for Keccak512 {
	fn finalize_into_reset(&mut self, out: &mut digest::Output<Self>) {
		std::mem::replace(&mut self.inner, Keccak::v512()).finalize(out);
	}
}

#[cfg(test)]
mod tests {
	use digest::Digest;
	use hex_literal::hex;

	use super::*;

	#[test]
	fn test_empty_input() {
		let expected = hex!(
			"0eab42de4c3ceb9235fc91acffe746b29c29a8c366b7c60e4e67c466f36a4304"
			"c00fa9caf9d87976ba469bcbe06713b435f091ef2769fb160cdab33d3670680e"
		);
		assert_eq!(Keccak512::digest(b"").as_slice(), &expected);
	}

	#[test]
	fn test_finalize_reset() {
		let mut hasher = Keccak512::new();
		Digest::update(&mut hasher, b"abc");
		let first = hasher.finalize_reset();
		Digest::update(&mut hasher, b"abc");
		assert_eq!(first, hasher.finalize());
	}
}
