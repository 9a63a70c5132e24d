// Copyright 2025 Irreducible Inc.

//! SIMD-512 (revision 1.1 of the submission, with the tweaked permutations).

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
use lazy_static::lazy_static;

const BLOCK_SIZE: usize = 128;
const MODULUS: i32 = 257;

type State = [u32; 32];

const IV: State = [
	0x0ba16b95, 0x72f999ad, 0x9fecc2ae, 0xba3264fc, 0x5e894929, 0x8e9f30e5, 0x2f1daa37, 0xf0f2c558,
	0xac506643, 0xa90635a5, 0xe25b878b, 0xaab7878f, 0x88817f7a, 0x0a02892b, 0x559a7550, 0x598f657e,
	0x7eef60a1, 0x6b70e3e8, 0x9c1714d1, 0xb958e2a8, 0xab02675e, 0xed1c014f, 0xcd8d65bb, 0xfdb7a257,
	0x09254899, 0xd699c7bc, 0x9019b6dc, 0x2b9022e4, 0x8fa14956, 0x21bf9bd3, 0xb94d0943, 0x6ffddc22,
];

/// Order in which the expanded message chunks feed the 32 steps.
const CHUNK_ORDER: [usize; 32] = [
	4, 6, 0, 2, 7, 5, 3, 1, 15, 11, 12, 8, 9, 13, 10, 14, 17, 18, 23, 20, 22, 21, 16, 19, 30, 24,
	25, 31, 27, 29, 28, 26,
];

/// Rotation amounts for each of the four rounds.
const ROTATIONS: [[u32; 4]; 4] = [[3, 23, 17, 27], [28, 19, 22, 7], [29, 9, 15, 5], [4, 13, 10, 25]];

/// Lane permutations, used cyclically by the steps.
const PERMUTATIONS: [usize; 7] = [1, 6, 2, 3, 5, 7, 4];

lazy_static! {
	static ref POW_41: [i32; 256] = powers(41);
	static ref POW_163: [i32; 256] = powers(163);
	static ref POW_40: [i32; 256] = powers(40);
}

fn powers(base: i32) -> [i32; 256] {
	let mut table = [0; 256];
	let mut acc = 1;
	for entry in &mut table {
		*entry = acc;
		acc = acc * base % MODULUS;
	}
	table
}

/// Number-theoretic transform of the block over Z/257, centered in `[-128, 128]`.
fn expand(block: &[u8], last: bool) -> [i32; 256] {
	std::array::from_fn(|i| {
		let mut sum = POW_163[i];
		if last {
			sum += POW_40[i];
		}
		for (j, &byte) in block.iter().enumerate() {
			sum += byte as i32 * POW_41[(i * j) % 256];
		}
		let sum = sum % MODULUS;
		if sum > 128 {
			sum - MODULUS
		} else {
			sum
		}
	})
}

#[inline(always)]
fn if_fn(x: u32, y: u32, z: u32) -> u32 {
	((y ^ z) & x) ^ z
}

#[inline(always)]
fn maj_fn(x: u32, y: u32, z: u32) -> u32 {
	(x & y) | ((x | y) & z)
}

struct Registers {
	a: [u32; 8],
	b: [u32; 8],
	c: [u32; 8],
	d: [u32; 8],
}

impl Registers {
	fn step(&mut self, w: &[u32; 8], f: fn(u32, u32, u32) -> u32, r: u32, s: u32, perm: usize) {
		let rotated = self.a.map(|a| a.rotate_left(r));
		let mut next = [0u32; 8];
		for (n, out) in next.iter_mut().enumerate() {
			let t = self.d[n]
				.wrapping_add(w[n])
				.wrapping_add(f(self.a[n], self.b[n], self.c[n]));
			*out = t.rotate_left(s).wrapping_add(rotated[n ^ perm]);
		}
		self.d = self.c;
		self.c = self.b;
		self.b = rotated;
		self.a = next;
	}
}

fn words(chunk: &[u32]) -> [u32; 8] {
	std::array::from_fn(|i| chunk[i])
}

fn compress(state: &mut State, block: &[u8], last: bool) {
	debug_assert_eq!(block.len(), BLOCK_SIZE);

	let q = expand(block, last);

	let mut message = [0u32; 32];
	for (word, chunk) in message.iter_mut().zip(block.chunks_exact(4)) {
		*word = u32::from_le_bytes(chunk.try_into().expect("chunk is 4 bytes"));
	}

	let mut regs = Registers {
		a: std::array::from_fn(|i| state[i] ^ message[i]),
		b: std::array::from_fn(|i| state[8 + i] ^ message[8 + i]),
		c: std::array::from_fn(|i| state[16 + i] ^ message[16 + i]),
		d: std::array::from_fn(|i| state[24 + i] ^ message[24 + i]),
	};

	for (round, rot) in ROTATIONS.iter().enumerate() {
		let (lo, hi, factor) = match round {
			0 | 1 => (0, 1, 185),
			2 => (-256, -128, 233),
			_ => (-383, -255, 233),
		};
		for k in 0..8 {
			let chunk = 16 * CHUNK_ORDER[8 * round + k] as isize;
			let w: [u32; 8] = std::array::from_fn(|n| {
				let base = chunk + 2 * n as isize;
				let l = q[(base + lo) as usize].wrapping_mul(factor) as u32 & 0xffff;
				let h = q[(base + hi) as usize].wrapping_mul(factor) as u32 & 0xffff;
				l.wrapping_add(h << 16)
			});
			let f: fn(u32, u32, u32) -> u32 = if k < 4 { if_fn } else { maj_fn };
			regs.step(&w, f, rot[k % 4], rot[(k + 1) % 4], PERMUTATIONS[(8 * round + k) % 7]);
		}
	}

	regs.step(&words(&state[..8]), if_fn, 4, 13, PERMUTATIONS[4]);
	regs.step(&words(&state[8..16]), if_fn, 13, 10, PERMUTATIONS[5]);
	regs.step(&words(&state[16..24]), if_fn, 10, 25, PERMUTATIONS[6]);
	regs.step(&words(&state[24..]), if_fn, 25, 4, PERMUTATIONS[0]);

	state[..8].copy_from_slice(&regs.a);
	state[8..16].copy_from_slice(&regs.b);
	state[16..24].copy_from_slice(&regs.c);
	state[24..].copy_from_slice(&regs.d);
}

/// Core hasher state of SIMD-512.
#[derive(Clone)]
pub struct Simd512Core {
	state: State,
	blocks_len: u64,
}

/// SIMD-512 hasher state.
pub type Simd512 = CoreWrapper<Simd512Core>;

impl Default for Simd512Core {
	fn default() -> Self {
		Self {
			state: IV,
			blocks_len: 0,
		}
	}
}

impl HashMarker for Simd512Core {}

impl BlockSizeUser for Simd512Core {
	type BlockSize = U128;
}

impl BufferKindUser for Simd512Core {
	type BufferKind = Eager;
}

impl OutputSizeUser for Simd512Core {
	type OutputSize = U64;
}

impl UpdateCore for Simd512Core {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		self.blocks_len += blocks.len() as u64;
		for block in blocks {
			compress(&mut self.state, block, false);
		}
	}
}

impl FixedOutputCore for Simd512Core {
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let data = buffer.get_data();
		if !data.is_empty() {
			let mut block = [0u8; BLOCK_SIZE];
			block[..data.len()].copy_from_slice(data);
			compress(&mut self.state, &block, false);
		}

		let bit_len = self.blocks_len * (BLOCK_SIZE as u64 * 8) + data.len() as u64 * 8;
		let mut block = [0u8; BLOCK_SIZE];
		block[..8].copy_from_slice(&bit_len.to_le_bytes());
		compress(&mut self.state, &block, true);

		for (chunk, word) in out.chunks_exact_mut(4).zip(self.state) {
			chunk.copy_from_slice(&word.to_le_bytes());
		}
	}
}

impl Reset for Simd512Core {
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl AlgorithmName for Simd512Core {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Simd512")
	}
}

impl fmt::Debug for Simd512Core {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Simd512Core { ... }")
	}
}
