// Copyright 2025 Irreducible Inc.

//! CubeHash-512 with the 16/32 parameters: 16 rounds per 32-byte block and 160 finalization
//! rounds.

use core::fmt;

use digest::{
	block_buffer::Eager,
	consts::{U32, U64},
	core_api::{
		AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper, FixedOutputCore,
		OutputSizeUser, UpdateCore,
	},
	HashMarker, Output, Reset,
};
use lazy_static::lazy_static;

const BLOCK_SIZE: usize = 32;
const ROUNDS_PER_BLOCK: usize = 16;
const FINAL_ROUNDS: usize = 160;

type State = [u32; 32];

lazy_static! {
	/// The initial state is obtained by running the finalization rounds on the parameters
	/// (output bytes, block bytes, rounds per block).
	static ref IV: State = {
		let mut state = [0u32; 32];
		state[0] = 64;
		state[1] = BLOCK_SIZE as u32;
		state[2] = ROUNDS_PER_BLOCK as u32;
		for _ in 0..FINAL_ROUNDS {
			round(&mut state);
		}
		state
	};
}

fn round(x: &mut State) {
	for i in 0..16 {
		x[i + 16] = x[i + 16].wrapping_add(x[i]);
	}
	for word in &mut x[..16] {
		*word = word.rotate_left(7);
	}
	for i in 0..8 {
		x.swap(i, i + 8);
	}
	for i in 0..16 {
		x[i] ^= x[i + 16];
	}
	for i in (16..32).filter(|i| i & 2 == 0) {
		x.swap(i, i ^ 2);
	}
	for i in 0..16 {
		x[i + 16] = x[i + 16].wrapping_add(x[i]);
	}
	for word in &mut x[..16] {
		*word = word.rotate_left(11);
	}
	for i in (0..16).filter(|i| i & 4 == 0) {
		x.swap(i, i ^ 4);
	}
	for i in 0..16 {
		x[i] ^= x[i + 16];
	}
	for i in (16..32).filter(|i| i & 1 == 0) {
		x.swap(i, i ^ 1);
	}
}

fn absorb(state: &mut State, block: &[u8]) {
	debug_assert_eq!(block.len(), BLOCK_SIZE);

	for (word, chunk) in state.iter_mut().zip(block.chunks_exact(4)) {
		*word ^= u32::from_le_bytes(chunk.try_into().expect("chunk is 4 bytes"));
	}
	for _ in 0..ROUNDS_PER_BLOCK {
		round(state);
	}
}

/// Core hasher state of CubeHash-512.
#[derive(Clone)]
pub struct CubeHash512Core {
	state: State,
}

/// CubeHash-512 hasher state.
pub type CubeHash512 = CoreWrapper<CubeHash512Core>;

impl Default for CubeHash512Core {
	fn default() -> Self {
		Self { state: *IV }
	}
}

impl HashMarker for CubeHash512Core {}

impl BlockSizeUser for CubeHash512Core {
	type BlockSize = U32;
}

impl BufferKindUser for CubeHash512Core {
	type BufferKind = Eager;
}

impl OutputSizeUser for CubeHash512Core {
	type OutputSize = U64;
}

impl UpdateCore for CubeHash512Core {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		for block in blocks {
			absorb(&mut self.state, block);
		}
	}
}

impl FixedOutputCore for CubeHash512Core {
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let data = buffer.get_data();
		let mut block = [0u8; BLOCK_SIZE];
		block[..data.len()].copy_from_slice(data);
		block[data.len()] = 0x80;
		absorb(&mut self.state, &block);

		self.state[31] ^= 1;
		for _ in 0..FINAL_ROUNDS {
			round(&mut self.state);
		}

		for (chunk, word) in out.chunks_exact_mut(4).zip(self.state) {
			chunk.copy_from_slice(&word.to_le_bytes());
		}
	}
}

impl Reset for CubeHash512Core {
	fn reset(&mut self) {
		self.state = *IV;
	}
}

impl AlgorithmName for CubeHash512Core {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("CubeHash512")
	}
}

impl fmt::Debug for CubeHash512Core {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("CubeHash512Core { ... }")
	}
}

#[cfg(test)]
mod tests {
	use digest::Digest;
	use hex_literal::hex;

	use super::*;

	#[test]
	fn test_initial_state() {
		assert_eq!(IV[..4], [0x2aea2a61, 0x50f494d4, 0x2d538b8b, 0x4167d83e]);
	}

	#[test]
	fn test_hello() {
		let expected = hex!(
			"dcc0503aae279a3c8c95fa1181d37c418783204e2e3048a081392fd61bace883"
			"a1f7c4c96b16b4060c42104f1ce45a622f1a9abaeb994beb107fed53a78f588c"
		);
		assert_eq!(CubeHash512::digest(b"Hello").as_slice(), &expected);
	}

	#[test]
	fn test_reset_matches_fresh_state() {
		let mut hasher = CubeHash512::new();
		hasher.update(b"some data that is thrown away");
		Digest::reset(&mut hasher);
		hasher.update(b"Hello");
		assert_eq!(hasher.finalize(), CubeHash512::digest(b"Hello"));
	}
}
