// Copyright 2025 Irreducible Inc.

//! BLAKE-512, the SHA-3 finalist with 16 rounds (version 1.3 of the submission).

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

const BLOCK_SIZE: usize = 128;
const ROUNDS: usize = 16;

const IV: [u64; 8] = [
	0x6a09e667f3bcc908,
	0xbb67ae8584caa73b,
	0x3c6ef372fe94f82b,
	0xa54ff53a5f1d36f1,
	0x510e527fade682d1,
	0x9b05688c2b3e6c1f,
	0x1f83d9abfb41bd6b,
	0x5be0cd19137e2179,
];

/// Leading digits of pi.
const C: [u64; 16] = [
	0x243f6a8885a308d3,
	0x13198a2e03707344,
	0xa4093822299f31d0,
	0x082efa98ec4e6c89,
	0x452821e638d01377,
	0xbe5466cf34e90c6c,
	0xc0ac29b7c97c50dd,
	0x3f84d5b5b5470917,
	0x9216d5d98979fb1b,
	0xd1310ba698dfb5ac,
	0x2ffd72dbd01adfb7,
	0xb8e1afed6a267e96,
	0xba7c9045f12c7f99,
	0x24a19947b3916cf7,
	0x0801f2e2858efc16,
	0x636920d871574e69,
];

const SIGMA: [[usize; 16]; 10] = [
	[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
	[14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
	[11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
	[7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
	[9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
	[2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
	[12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
	[13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
	[6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
	[10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

/// Core hasher state of BLAKE-512.
#[derive(Clone)]
pub struct Blake512Core {
	state: [u64; 8],
	bit_len: u128,
}

/// BLAKE-512 hasher state.
pub type Blake512 = CoreWrapper<Blake512Core>;

impl Default for Blake512Core {
	fn default() -> Self {
		Self {
			state: IV,
			bit_len: 0,
		}
	}
}

#[inline(always)]
#[allow(clippy::too_many_arguments)]
fn g(
	v: &mut [u64; 16],
	m: &[u64; 16],
	sigma: &[usize; 16],
	i: usize,
	a: usize,
	b: usize,
	c: usize,
	d: usize,
) {
	let (x, y) = (sigma[2 * i], sigma[2 * i + 1]);

	v[a] = v[a].wrapping_add(v[b]).wrapping_add(m[x] ^ C[y]);
	v[d] = (v[d] ^ v[a]).rotate_right(32);
	v[c] = v[c].wrapping_add(v[d]);
	v[b] = (v[b] ^ v[c]).rotate_right(25);
	v[a] = v[a].wrapping_add(v[b]).wrapping_add(m[y] ^ C[x]);
	v[d] = (v[d] ^ v[a]).rotate_right(16);
	v[c] = v[c].wrapping_add(v[d]);
	v[b] = (v[b] ^ v[c]).rotate_right(11);
}

/// Compress one 128-byte block. `counter` is the number of message bits hashed so far,
/// including the ones in `block`, or zero for a block made only of padding.
fn compress(state: &mut [u64; 8], block: &[u8], counter: u128) {
	debug_assert_eq!(block.len(), BLOCK_SIZE);

	let mut m = [0u64; 16];
	for (word, chunk) in m.iter_mut().zip(block.chunks_exact(8)) {
		*word = u64::from_be_bytes(chunk.try_into().expect("chunk is 8 bytes"));
	}

	let mut v = [0u64; 16];
	v[..8].copy_from_slice(state);
	v[8..].copy_from_slice(&C[..8]);
	let (low, high) = (counter as u64, (counter >> 64) as u64);
	v[12] ^= low;
	v[13] ^= low;
	v[14] ^= high;
	v[15] ^= high;

	for round in 0..ROUNDS {
		let sigma = &SIGMA[round % 10];
		g(&mut v, &m, sigma, 0, 0, 4, 8, 12);
		g(&mut v, &m, sigma, 1, 1, 5, 9, 13);
		g(&mut v, &m, sigma, 2, 2, 6, 10, 14);
		g(&mut v, &m, sigma, 3, 3, 7, 11, 15);
		g(&mut v, &m, sigma, 4, 0, 5, 10, 15);
		g(&mut v, &m, sigma, 5, 1, 6, 11, 12);
		g(&mut v, &m, sigma, 6, 2, 7, 8, 13);
		g(&mut v, &m, sigma, 7, 3, 4, 9, 14);
	}

	for (i, word) in state.iter_mut().enumerate() {
		*word ^= v[i] ^ v[i + 8];
	}
}

impl HashMarker for Blake512Core {}

impl BlockSizeUser for Blake512Core {
	type BlockSize = U128;
}

impl BufferKindUser for Blake512Core {
	type BufferKind = Eager;
}

impl OutputSizeUser for Blake512Core {
	type OutputSize = U64;
}

impl UpdateCore for Blake512Core {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		for block in blocks {
			self.bit_len += (BLOCK_SIZE * 8) as u128;
			compress(&mut self.state, block, self.bit_len);
		}
	}
}

impl FixedOutputCore for Blake512Core {
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let data = buffer.get_data();
		let pos = data.len();
		let bit_len = self.bit_len + (pos * 8) as u128;

		let mut block = [0u8; BLOCK_SIZE];
		block[..pos].copy_from_slice(data);
		block[pos] = 0x80;

		// The padding bit, the trailing one bit and the 128-bit length must share the block.
		if pos < BLOCK_SIZE - 16 {
			block[BLOCK_SIZE - 17] |= 0x01;
			block[BLOCK_SIZE - 16..].copy_from_slice(&bit_len.to_be_bytes());
			let counter = if pos == 0 { 0 } else { bit_len };
			compress(&mut self.state, &block, counter);
		} else {
			compress(&mut self.state, &block, bit_len);

			let mut last = [0u8; BLOCK_SIZE];
			last[BLOCK_SIZE - 17] = 0x01;
			last[BLOCK_SIZE - 16..].copy_from_slice(&bit_len.to_be_bytes());
			compress(&mut self.state, &last, 0);
		}

		for (chunk, word) in out.chunks_exact_mut(8).zip(self.state) {
			chunk.copy_from_slice(&word.to_be_bytes());
		}
	}
}

impl Reset for Blake512Core {
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl AlgorithmName for Blake512Core {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Blake512")
	}
}

impl fmt::Debug for Blake512Core {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Blake512Core { ... }")
	}
}
