// Copyright 2025 Irreducible Inc.

//! Luffa-512: a sponge-like construction over five 256-bit lanes with a tweaked bitsliced
//! permutation.

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

const BLOCK_SIZE: usize = 32;
const LANES: usize = 5;
const STEPS: usize = 8;

type Lane = [u32; 8];
type State = [Lane; LANES];

const IV: State = [
	[
		0x6d251e69, 0x44b051e0, 0x4eaa6fb4, 0xdbf78465, 0x6e292011, 0x90152df4, 0xee058139,
		0xdef610bb,
	],
	[
		0xc3b44b95, 0xd9d2f256, 0x70eee9a0, 0xde099fa3, 0x5d9b0557, 0x8fc944b3, 0xcf1ccf0e,
		0x746cd581,
	],
	[
		0xf7efc89d, 0x5dba5781, 0x04016ce5, 0xad659c05, 0x0306194f, 0x666d1836, 0x24aa230a,
		0x8b264ae7,
	],
	[
		0x858075d5, 0x36d79cce, 0xe571f7d7, 0x204b1f67, 0x35870c6a, 0x57e9e923, 0x14bcb808,
		0x7cde72ce,
	],
	[
		0x6c68e9be, 0x5ec41e22, 0xc825b7c7, 0xaffb4363, 0xf5df3999, 0x0fc688f1, 0xb07224cc,
		0x03e86cea,
	],
];

/// Step constants added to words 0 and 4 of each lane.
const RC: [[[u32; STEPS]; 2]; LANES] = [
	[
		[
			0x303994a6, 0xc0e65299, 0x6cc33a12, 0xdc56983e, 0x1e00108f, 0x7800423d, 0x8f5b7882,
			0x96e1db12,
		],
		[
			0xe0337818, 0x441ba90d, 0x7f34d442, 0x9389217f, 0xe5a8bce6, 0x5274baf4, 0x26889ba7,
			0x9a226e9d,
		],
	],
	[
		[
			0xb6de10ed, 0x70f47aae, 0x0707a3d4, 0x1c1e8f51, 0x707a3d45, 0xaeb28562, 0xbaca1589,
			0x40a46f3e,
		],
		[
			0x01685f3d, 0x05a17cf4, 0xbd09caca, 0xf4272b28, 0x144ae5cc, 0xfaa7ae2b, 0x2e48f1c1,
			0xb923c704,
		],
	],
	[
		[
			0xfc20d9d2, 0x34552e25, 0x7ad8818f, 0x8438764a, 0xbb6de032, 0xedb780c8, 0xd9847356,
			0xa2c78434,
		],
		[
			0xe25e72c1, 0xe623bb72, 0x5c58a4a4, 0x1e38e2e7, 0x78e38b9d, 0x27586719, 0x36eda57f,
			0x703aace7,
		],
	],
	[
		[
			0xb213afa5, 0xc84ebe95, 0x4e608a22, 0x56d858fe, 0x343b138f, 0xd0ec4e3d, 0x2ceb4882,
			0xb3ad2208,
		],
		[
			0xe028c9bf, 0x44756f91, 0x7e8fce32, 0x956548be, 0xfe191be2, 0x3cb226e5, 0x5944a28e,
			0xa1c4c355,
		],
	],
	[
		[
			0xf0d2e9e3, 0xac11d7fa, 0x1bcb66f2, 0x6f2d9bc9, 0x78602649, 0x8edae952, 0x3b6ba548,
			0xedae9520,
		],
		[
			0x5090d577, 0x2d1925ab, 0xb46496ac, 0xd1925ab0, 0x29131ab6, 0x0fc053c3, 0x3f014f0c,
			0xfc053c31,
		],
	],
];

/// Multiplication by `x` in the ring used by the message injection.
#[inline(always)]
fn mul2(s: &Lane) -> Lane {
	let t = s[7];
	[t, s[0] ^ t, s[1], s[2] ^ t, s[3] ^ t, s[4], s[5], s[6]]
}

#[inline(always)]
fn xor(a: &Lane, b: &Lane) -> Lane {
	std::array::from_fn(|i| a[i] ^ b[i])
}

/// Message injection of five lanes.
fn inject(v: &mut State, message: &Lane) {
	let mut a = xor(&xor(&v[0], &v[1]), &xor(&v[2], &v[3]));
	a = mul2(&xor(&a, &v[4]));
	for lane in v.iter_mut() {
		*lane = xor(lane, &a);
	}

	let b = xor(&mul2(&v[0]), &v[1]);
	v[1] = xor(&mul2(&v[1]), &v[2]);
	v[2] = xor(&mul2(&v[2]), &v[3]);
	v[3] = xor(&mul2(&v[3]), &v[4]);
	v[4] = xor(&mul2(&v[4]), &v[0]);

	v[0] = xor(&mul2(&b), &v[4]);
	v[4] = xor(&mul2(&v[4]), &v[3]);
	v[3] = xor(&mul2(&v[3]), &v[2]);
	v[2] = xor(&mul2(&v[2]), &v[1]);
	v[1] = xor(&mul2(&v[1]), &b);

	let mut m = *message;
	for (i, lane) in v.iter_mut().enumerate() {
		if i > 0 {
			m = mul2(&m);
		}
		*lane = xor(lane, &m);
	}
}

/// Bitsliced 4-bit S-box applied column-wise over four words.
#[inline(always)]
fn sub_crumb(l: &mut Lane, i0: usize, i1: usize, i2: usize, i3: usize) {
	let (mut a0, mut a1, mut a2, mut a3) = (l[i0], l[i1], l[i2], l[i3]);
	let mut tmp = a0;
	a0 |= a1;
	a2 ^= a3;
	a1 = !a1;
	a0 ^= a3;
	a3 &= tmp;
	a1 ^= a3;
	a3 ^= a2;
	a2 &= a0;
	a0 = !a0;
	a2 ^= a1;
	a1 |= a3;
	tmp ^= a1;
	a3 ^= a2;
	a2 &= a1;
	a1 ^= a0;
	a0 = tmp;
	(l[i0], l[i1], l[i2], l[i3]) = (a0, a1, a2, a3);
}

#[inline(always)]
fn mix_word(l: &mut Lane, i: usize) {
	let (mut u, mut v) = (l[i], l[i + 4]);
	v ^= u;
	u = u.rotate_left(2) ^ v;
	v = v.rotate_left(14) ^ u;
	u = u.rotate_left(10) ^ v;
	v = v.rotate_left(1);
	(l[i], l[i + 4]) = (u, v);
}

fn permute(v: &mut State) {
	for (j, lane) in v.iter_mut().enumerate() {
		for word in &mut lane[4..] {
			*word = word.rotate_left(j as u32);
		}

		for step in 0..STEPS {
			sub_crumb(lane, 0, 1, 2, 3);
			sub_crumb(lane, 5, 6, 7, 4);
			for i in 0..4 {
				mix_word(lane, i);
			}
			lane[0] ^= RC[j][0][step];
			lane[4] ^= RC[j][1][step];
		}
	}
}

fn round(v: &mut State, block: &[u8]) {
	debug_assert_eq!(block.len(), BLOCK_SIZE);

	let mut message = [0u32; 8];
	for (word, chunk) in message.iter_mut().zip(block.chunks_exact(4)) {
		*word = u32::from_be_bytes(chunk.try_into().expect("chunk is 4 bytes"));
	}
	inject(v, &message);
	permute(v);
}

fn squeeze(v: &State, out: &mut [u8]) {
	for (i, chunk) in out.chunks_exact_mut(4).enumerate() {
		let word = v.iter().fold(0, |acc, lane| acc ^ lane[i]);
		chunk.copy_from_slice(&word.to_be_bytes());
	}
}

/// Core hasher state of Luffa-512.
#[derive(Clone)]
pub struct Luffa512Core {
	state: State,
}

/// Luffa-512 hasher state.
pub type Luffa512 = CoreWrapper<Luffa512Core>;

impl Default for Luffa512Core {
	fn default() -> Self {
		Self { state: IV }
	}
}

impl HashMarker for Luffa512Core {}

impl BlockSizeUser for Luffa512Core {
	type BlockSize = U32;
}

impl BufferKindUser for Luffa512Core {
	type BufferKind = Eager;
}

impl OutputSizeUser for Luffa512Core {
	type OutputSize = U64;
}

impl UpdateCore for Luffa512Core {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		for block in blocks {
			round(&mut self.state, block);
		}
	}
}

impl FixedOutputCore for Luffa512Core {
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let data = buffer.get_data();
		let mut block = [0u8; BLOCK_SIZE];
		block[..data.len()].copy_from_slice(data);
		block[data.len()] = 0x80;
		round(&mut self.state, &block);

		// Two blank rounds, each producing one half of the output.
		let blank = [0u8; BLOCK_SIZE];
		for half in out.chunks_exact_mut(32) {
			round(&mut self.state, &blank);
			squeeze(&self.state, half);
		}
	}
}

impl Reset for Luffa512Core {
	fn reset(&mut self) {
		self.state = IV;
	}
}

impl AlgorithmName for Luffa512Core {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Luffa512")
	}
}

impl fmt::Debug for Luffa512Core {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Luffa512Core { ... }")
	}
}

#[cfg(test)]
mod tests {
	use digest::Digest;
	use hex_literal::hex;

	use super::*;

	const SBOX: [u32; 16] = [13, 14, 0, 1, 5, 10, 7, 6, 11, 3, 9, 12, 15, 8, 2, 4];

	#[test]
	fn test_sub_crumb_matches_sbox() {
		for x in 0..16u32 {
			let mut lane = [0u32; 8];
			for bit in 0..4 {
				lane[bit] = (x >> bit) & 1;
			}
			sub_crumb(&mut lane, 0, 1, 2, 3);
			let y = (0..4).fold(0, |acc, bit| acc | ((lane[bit] & 1) << bit));
			assert_eq!(y, SBOX[x as usize], "input {x}");
		}
	}

	#[test]
	fn test_mul2_is_linear() {
		let a = [1, 2, 3, 4, 5, 6, 7, 0x8000_0001];
		let b = [0xffff_ffff, 0, 0x1234_5678, 9, 10, 11, 12, 13];
		assert_eq!(mul2(&xor(&a, &b)), xor(&mul2(&a), &mul2(&b)));
	}

	#[test]
	fn test_padding_distinguishes_trailing_zero() {
		assert_ne!(Luffa512::digest(b"abc"), Luffa512::digest(b"abc\0"));
	}

	#[test]
	fn test_block_boundary_updates() {
		let data = [0x5au8; 97];
		let mut hasher = Luffa512::new();
		hasher.update(&data[..32]);
		hasher.update(&data[32..33]);
		hasher.update(&data[33..]);
		assert_eq!(hasher.finalize(), Luffa512::digest(data));
	}

	#[test]
	fn test_chained_state_input() {
		let input: [u8; 64] = std::array::from_fn(|i| i as u8);
		let expected = hex!(
			"a7fa7b1f6efdeebb4eb2d53b28412a4962fa7236c775a0472e97af3035d0cebb"
			"794c97465bc89e9d26983a7b0a9283cc716dee3a6083817030dda4a4625f5d00"
		);
		assert_eq!(Luffa512::digest(input).as_slice(), &expected);
	}
}
