// Copyright 2025 Irreducible Inc.

//! ECHO-512: a wide AES-based permutation over sixteen 128-bit words, keyed by the running
//! bit counter.

use core::fmt;

use digest::{
	block_buffer::Eager,
	consts::{U128, U64},
	core_api::{
		AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper, FixedOutputCore,
		OutputSizeUser, UpdateCore,
	},
	HashMarker, Output, Reset,
};

use crate::aes::{aes_round, mix_column};

const BLOCK_SIZE: usize = 128;
const ROUNDS: usize = 10;
const OUTPUT_BITS: u16 = 512;

type Word = [u8; 16];
type Chaining = [Word; 8];

const IV: Chaining = {
	let mut word = [0u8; 16];
	// The output size in bits, as a little-endian 32-bit value.
	word[1] = 0x02;
	[word; 8]
};

fn big_sub_words(w: &mut [Word; 16], counter: &mut u128) {
	const ZERO_KEY: Word = [0; 16];

	for word in w.iter_mut() {
		aes_round(word, &counter.to_le_bytes());
		aes_round(word, &ZERO_KEY);
		*counter = counter.wrapping_add(1);
	}
}

/// Row `r` of the 4x4 word matrix is rotated left by `r` columns.
fn big_shift_rows(w: &mut [Word; 16]) {
	let old = *w;
	for (i, word) in w.iter_mut().enumerate() {
		let (col, row) = (i / 4, i % 4);
		*word = old[4 * ((col + row) % 4) + row];
	}
}

fn big_mix_columns(w: &mut [Word; 16]) {
	for col in 0..4 {
		for n in 0..16 {
			let mixed =
				mix_column(w[4 * col][n], w[4 * col + 1][n], w[4 * col + 2][n], w[4 * col + 3][n]);
			for (row, byte) in mixed.into_iter().enumerate() {
				w[4 * col + row][n] = byte;
			}
		}
	}
}

fn compress(v: &mut Chaining, block: &[u8], counter: u128) {
	debug_assert_eq!(block.len(), BLOCK_SIZE);

	let mut w = [[0u8; 16]; 16];
	w[..8].copy_from_slice(&v[..]);
	for (word, chunk) in w[8..].iter_mut().zip(block.chunks_exact(16)) {
		word.copy_from_slice(chunk);
	}

	let mut key = counter;
	for _ in 0..ROUNDS {
		big_sub_words(&mut w, &mut key);
		big_shift_rows(&mut w);
		big_mix_columns(&mut w);
	}

	for (i, word) in v.iter_mut().enumerate() {
		for (n, byte) in word.iter_mut().enumerate() {
			*byte ^= block[16 * i + n] ^ w[i][n] ^ w[i + 8][n];
		}
	}
}

/// Core hasher state of ECHO-512.
#[derive(Clone)]
pub struct Echo512Core {
	state: Chaining,
	bit_len: u128,
}

/// ECHO-512 hasher state.
pub type Echo512 = CoreWrapper<Echo512Core>;

impl Default for Echo512Core {
	fn default() -> Self {
		Self {
			state: IV,
			bit_len: 0,
		}
	}
}

impl HashMarker for Echo512Core {}

impl BlockSizeUser for Echo512Core {
	type BlockSize = U128;
}

impl BufferKindUser for Echo512Core {
	type BufferKind = Eager;
}

impl OutputSizeUser for Echo512Core {
	type OutputSize = U64;
}

impl UpdateCore for Echo512Core {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		for block in blocks {
			self.bit_len += (BLOCK_SIZE * 8) as u128;
			compress(&mut self.state, block, self.bit_len);
		}
	}
}

impl FixedOutputCore for Echo512Core {
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let data = buffer.get_data();
		let pos = data.len();
		let tail_bits = (pos * 8) as u128;
		let bit_len = self.bit_len + tail_bits;
		// A block that carries no message bits is keyed with a zero counter.
		let mut counter = if tail_bits == 0 { 0 } else { bit_len };

		let mut block = [0u8; BLOCK_SIZE];
		block[..pos].copy_from_slice(data);
		block[pos] = 0x80;

		// The output size and the bit length take the last 18 bytes.
		if pos + 1 > BLOCK_SIZE - 18 {
			compress(&mut self.state, &block, counter);
			counter = 0;
			block = [0u8; BLOCK_SIZE];
		}
		block[BLOCK_SIZE - 18..BLOCK_SIZE - 16].copy_from_slice(&OUTPUT_BITS.to_le_bytes());
		block[BLOCK_SIZE - 16..].copy_from_slice(&bit_len.to_le_bytes());
		compress(&mut self.state, &block, counter);

		for (chunk, word) in out.chunks_exact_mut(16).zip(&self.state) {
			chunk.copy_from_slice(word);
		}
	}
}

impl Reset for Echo512Core {
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl AlgorithmName for Echo512Core {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Echo512")
	}
}

impl fmt::Debug for Echo512Core {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Echo512Core { ... }")
	}
}
