// Copyright 2025 Irreducible Inc.

//! Hamsi-512: a linear message expansion over GF(4) followed by a Serpent-style substitution
//! and diffusion layer on a 1024-bit state.

use core::fmt;

use digest::{
	block_buffer::Eager,
	consts::{U64, U8},
	core_api::{
		AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper, FixedOutputCore,
		OutputSizeUser, UpdateCore,
	},
	HashMarker, Output, Reset,
};
use lazy_static::lazy_static;

const BLOCK_SIZE: usize = 8;
const ROUNDS: u32 = 6;
const FINAL_ROUNDS: u32 = 12;

type Chaining = [u32; 16];
type State = [u32; 32];

/// "steelpark Arenberg 10, bus 2446, B-3001 Leuven-Heverlee, Belgium"
const IV: Chaining = [
	0x73746565, 0x6c706172, 0x6b204172, 0x656e6265, 0x72672031, 0x302c2062, 0x75732032, 0x3434362c,
	0x20422d33, 0x30303120, 0x4c657576, 0x656e2d48, 0x65766572, 0x6c65652c, 0x2042656c, 0x6769756d,
];

const ALPHA_N: State = [
	0xff00f0f0, 0xccccaaaa, 0xf0f0cccc, 0xff00aaaa, 0xccccaaaa, 0xf0f0ff00, 0xaaaacccc, 0xf0f0ff00,
	0xf0f0cccc, 0xaaaaff00, 0xccccff00, 0xaaaaf0f0, 0xaaaaf0f0, 0xff00cccc, 0xccccf0f0, 0xff00aaaa,
	0xccccaaaa, 0xff00f0f0, 0xff00aaaa, 0xf0f0cccc, 0xf0f0ff00, 0xccccaaaa, 0xf0f0ff00, 0xaaaacccc,
	0xaaaaff00, 0xf0f0cccc, 0xaaaaf0f0, 0xccccff00, 0xff00cccc, 0xaaaaf0f0, 0xff00aaaa, 0xccccf0f0,
];

const ALPHA_F: State = [
	0xcaf9639c, 0x0ff0f9c0, 0x639c0ff0, 0xcaf9f9c0, 0x0ff0f9c0, 0x639ccaf9, 0xf9c00ff0, 0x639ccaf9,
	0x639c0ff0, 0xf9c0caf9, 0x0ff0caf9, 0xf9c0639c, 0xf9c0639c, 0xcaf90ff0, 0x0ff0639c, 0xcaf9f9c0,
	0x0ff0f9c0, 0xcaf9639c, 0xcaf9f9c0, 0x639c0ff0, 0x639ccaf9, 0x0ff0f9c0, 0x639ccaf9, 0xf9c00ff0,
	0xf9c0caf9, 0x639c0ff0, 0xf9c0639c, 0x0ff0caf9, 0xcaf90ff0, 0xf9c0639c, 0xcaf9f9c0, 0x0ff0639c,
];

/// Generator rows for the even message bits. Each odd row is the even row multiplied by the
/// primitive element of GF(4), see [`T512`].
const T512_EVEN: [[u32; 16]; 32] = [
	[
		0xef0b0270, 0x3afd0000, 0x5dae0000, 0x69490000, 0x9b0f3c06, 0x4405b5f9, 0x66140a51, 0x924f5d0a,
		0xc96b0030, 0xe7250000, 0x2f840000, 0x264f0000, 0x08695bf9, 0x6dfcf137, 0x509f6984, 0x9e69af68,
	],
	[
		0x145a3c00, 0xb9e90000, 0x61270000, 0xf1610000, 0xce613d6c, 0xb0493d78, 0x47a96720, 0xe18e24c5,
		0x23671400, 0xc8b90000, 0xf4c70000, 0xfb750000, 0x73cd2465, 0xf8a6a549, 0x02c40a3f, 0xdc24e61f,
	],
	[
		0x54285c00, 0xeaed0000, 0xc5d60000, 0xa1c50000, 0xb3a26770, 0x94a5c4e1, 0x6bb0419d, 0x551b3782,
		0x9cbb1800, 0xb0d30000, 0x92510000, 0xed930000, 0x593a4345, 0xe114d5f4, 0x430633da, 0x78cace29,
	],
	[
		0x29449c00, 0x64e70000, 0xf24b0000, 0xc2f30000, 0x0ede4e8f, 0x56c23745, 0xf3e04259, 0x8d0d9ec4,
		0x466d0c00, 0x08620000, 0xdd5d0000, 0xbadd0000, 0x6a927942, 0x441f2b93, 0x218ace6f, 0xbf2c0be2,
	],
	[
		0xf6800005, 0x3443c000, 0x24070000, 0x8f3d0000, 0x21373bfb, 0x0ab8d5ae, 0xcdc58b19, 0xd795ba31,
		0xa67f0001, 0x71378000, 0x19fc0000, 0x96db0000, 0x3a8b6dfd, 0xebcaaef3, 0x2c6d478f, 0xac8e6c88,
	],
	[
		0xf7750009, 0xcf3cc000, 0xc3d60000, 0x04920000, 0x029519a9, 0xf8e836ba, 0x7a87f14e, 0x9e16981a,
		0xd46a0000, 0x8dc8c000, 0xa5af0000, 0x4a290000, 0xfc4e427a, 0xc9b4866c, 0x98369604, 0xf746c320,
	],
	[
		0x774400f0, 0xf15a0000, 0xf5b20000, 0x34140000, 0x89377e8c, 0x5a8bec25, 0x0bc3cd1e, 0xcf3775cb,
		0xf46c0050, 0x96180000, 0x14a50000, 0x031f0000, 0x42947eb8, 0x66bf7e19, 0x9ca470d2, 0x8a341574,
	],
	[
		0xe8870170, 0x9d720000, 0x12db0000, 0xd4220000, 0xf2886b27, 0xa921e543, 0x4ef8b518, 0x618813b1,
		0xb4370060, 0x0c4c0000, 0x56c20000, 0x5cae0000, 0x94541f3f, 0x3b3ef825, 0x1b365f3d, 0xf3d45758,
	],
	[
		0x0c720000, 0x49e50f00, 0x42790000, 0x5cea0000, 0x33aa301a, 0x15822514, 0x95a34b7b, 0xb44b0090,
		0xfe220000, 0xa7580500, 0x25d10000, 0xf7600000, 0x893178da, 0x1fd4f860, 0x4ed0a315, 0xa123ff9f,
	],
	[
		0x45180000, 0xa5b51700, 0xf96a0000, 0x3b480000, 0x1ecc142c, 0x231395d6, 0x16bca6b0, 0xdf33f4df,
		0xb83d0000, 0x16710600, 0x379a0000, 0xf5b10000, 0x228161ac, 0xae48f145, 0x66241616, 0xc5c1eb3e,
	],
	[
		0x75a40000, 0xc28b2700, 0x94a40000, 0x90f50000, 0xfb7857e0, 0x49ce0bae, 0x1767c483, 0xaedf667e,
		0xd1660000, 0x1bbc0300, 0x9eec0000, 0xf6940000, 0x03024527, 0xcf70fcf2, 0xb4431b17, 0x857f3c2b,
	],
	[
		0x75c90003, 0x0e10c000, 0xd1200000, 0xbaea0000, 0x8bc42f3e, 0x8758b757, 0xbb28761d, 0x00b72e2b,
		0xeecf0001, 0x6f564000, 0xf33e0000, 0xa79e0000, 0xbdb57219, 0xb711ebc5, 0x4a3b40ba, 0xfeabf254,
	],
	[
		0x86790000, 0x3f390002, 0xe19ae000, 0x98560000, 0x9565670e, 0x4e88c8ea, 0xd3dd4944, 0x161ddab9,
		0x30b70000, 0xe5d00000, 0xf4f46000, 0x42c40000, 0x63b83d6a, 0x78ba9460, 0x21afa1ea, 0xb0a51834,
	],
	[
		0x14190000, 0x23ca003c, 0x50df0000, 0x44b60000, 0x1b6c67b0, 0x3cf3ac75, 0x61e610b0, 0xdbcadb80,
		0xe3430000, 0x3a4e0014, 0xf2c60000, 0xaa4e0000, 0xdb1e42a6, 0x256bbe15, 0x123db156, 0x3a4e99d7,
	],
	[
		0x54500000, 0x0671005c, 0x25ae0000, 0x6a1e0000, 0x2ea54edf, 0x664e8512, 0xbfba18c3, 0x7e715d17,
		0xbc8d0000, 0xfc3b0018, 0x19830000, 0xd10b0000, 0xae1878c4, 0x42a69856, 0x0012da37, 0x2c3b504e,
	],
	[
		0x69510000, 0xd4e1009c, 0xc3230000, 0xac2f0000, 0xe4950bae, 0xcea415dc, 0x87ec287c, 0xbce1a3ce,
		0xc6730000, 0xaf8d000c, 0xa4c10000, 0x218d0000, 0x23111587, 0x7913512f, 0x1d28ac88, 0x378dd173,
	],
	[
		0xcc140000, 0xa5630000, 0x5ab90780, 0x3b500000, 0x4bd013ff, 0x879b3418, 0x694348c1, 0xca5a87fe,
		0x819e0000, 0xec570000, 0x66320280, 0x95f30000, 0x5da92802, 0x48f43cbc, 0xe65aa22d, 0x8e67b7fa,
	],
	[
		0x78230000, 0x12fc0000, 0xa93a0b80, 0x90a50000, 0x713e2879, 0x7ee98924, 0xf08ca062, 0x636f8bab,
		0x02af0000, 0xb7280000, 0xba1c0300, 0x56980000, 0xba8d45d3, 0x8048c667, 0xa95c149a, 0xf4f6ea7b,
	],
	// TODO: words 6, 7, 14 and 15 of this row disagree with the reference table
	// and break `test_chained_state_input`. Restore them from sphlib.
	[
		0xac480000, 0x1ba60000, 0x45fb1380, 0x03430000, 0x5a85316a, 0x1fb250b6, 0xfe72b5fe, 0x91e038f6,
		0x1e4e0000, 0xdecf0000, 0x6df80180, 0x77240000, 0xec47079e, 0xf4a0694e, 0xcd053f4a, 0x48d7b3f0,
	],
	[
		0xaec30000, 0x9c4f0001, 0x79d1e000, 0x2c150000, 0x45cc75b3, 0x6650b736, 0xab92f78f, 0xa312567b,
		0xdb250000, 0x09290000, 0x49aac000, 0x81e10000, 0xcafe6b59, 0x42793431, 0x43566b76, 0xe86cba2e,
	],
	[
		0x58430000, 0x807e0000, 0x78330001, 0xc66b3800, 0xe7375cdc, 0x79ad3fdd, 0xac73fe6f, 0x3a4479b1,
		0x1d5a0000, 0x2b720000, 0x488d0000, 0xaf611800, 0x25cb2ec5, 0xc879bfd0, 0x81a20429, 0x1e7536a6,
	],
	[
		0xa53b0000, 0x14260000, 0x4e30001e, 0x7cae0000, 0x8f9e0dd5, 0x78dfaa3d, 0xf73168d8, 0x0b1b4946,
		0x07ed0000, 0xb2500000, 0x8774000a, 0x970d0000, 0x437223ae, 0x48c76ea4, 0xf4786222, 0x9075b1ce,
	],
	[
		0x88980000, 0x1f940000, 0x7fcf002e, 0xfb4e0000, 0xf158079a, 0x61ae9167, 0xa895706c, 0xe6107494,
		0x0bc20000, 0xdb630000, 0x7e88000c, 0x15860000, 0x91fd48f3, 0x7581bb43, 0xf460449e, 0xd8b61463,
	],
	[
		0x52500000, 0x29540000, 0x6a61004e, 0xf0ff0000, 0x9a317eec, 0x452341ce, 0xcf568fe5, 0x5303130f,
		0x538d0000, 0xa9fc0000, 0x9ef70006, 0x56ff0000, 0x0ae4004e, 0x92c5cdf9, 0xa9444018, 0x7f975691,
	],
	[
		0xe6280000, 0x4c4b0000, 0xa8550000, 0xd3d002e0, 0xd86130b8, 0x98a7b0da, 0x289506b4, 0xd75a4897,
		0xf0c50000, 0x59230000, 0x45820000, 0xe18d00c0, 0x3b6d0631, 0xc2ed5699, 0xcbe0fe1c, 0x56a7b19f,
	],
	[
		0xb4310000, 0x77330000, 0xb15d0000, 0x7fd004e0, 0x78a26138, 0xd116c35d, 0xd256d489, 0x4e6f74de,
		0xe3060000, 0xbdc10000, 0x87130000, 0xbff20060, 0x2eba0a1a, 0x8db53751, 0x73c5ab06, 0x5bd61539,
	],
	[
		0x02f20000, 0xa2810000, 0x873f0000, 0xe36c7800, 0x1e1d74ef, 0x073d2bd6, 0xc4c23237, 0x7f32259e,
		0xbadd0000, 0x13ad0000, 0xb7e70000, 0xf7282800, 0xdf45144d, 0x361ac33a, 0xea5a8d14, 0x2a2c18f0,
	],
	[
		0x1e6c0000, 0xc4420000, 0x8a2e0000, 0xbcb6b800, 0x2c4413b6, 0x8bfdd3da, 0x6a0c1bc8, 0xb99dc2eb,
		0x92560000, 0x1eda0000, 0xea510000, 0xe8b13000, 0xa93556a5, 0xebfb6199, 0xb15c2254, 0x33c5244f,
	],
	[
		0x033d0000, 0x08b30000, 0xf33a0000, 0x3ac20007, 0x51298a50, 0x6b6e661f, 0x0ea5cfe3, 0xe6da7ffe,
		0xa8da0000, 0x96be0000, 0x5c1d0000, 0x07da0002, 0x7d669583, 0x1f98708a, 0xbb668808, 0xda878000,
	],
	[
		0x01930000, 0xe7820000, 0xedfb0000, 0xcf0c000b, 0x8dd08d58, 0xbca3b42e, 0x063661e1, 0x536f9e7b,
		0x92280000, 0xdc850000, 0x57fa0000, 0x56dc0003, 0xbae92316, 0x5aefa30c, 0x90cef752, 0x7b1675d7,
	],
	[
		0x5fa80000, 0x56030000, 0x43ae0000, 0x64f30013, 0x257e86bf, 0x1311944e, 0x541e95bf, 0x8ea4db69,
		0x00440000, 0x7f480000, 0xda7c0000, 0x2a230001, 0x3badc9cc, 0xa9b69c87, 0x030a9e60, 0xbe0a679e,
	],
	[
		0xee930000, 0xd6070000, 0x92c10000, 0x2b9801e0, 0x9451287c, 0x3b6cfb57, 0x45312374, 0x201f6a64,
		0x7b280000, 0x57420000, 0xa9e50000, 0x634300a0, 0x9edb442f, 0x6d9995bb, 0x27f83b03, 0xc7ff60f0,
	],
];

lazy_static! {
	/// Generator matrix of the expansion code, one row per message bit (least significant bit of
	/// each byte first). A row holds two 256-bit halves `(a, b)`; scaling by the primitive
	/// element maps it to `(b, a ^ b)`.
	static ref T512: [[u32; 16]; 64] = {
		let mut table = [[0u32; 16]; 64];
		for (k, even) in T512_EVEN.iter().enumerate() {
			table[2 * k] = *even;
			let odd = &mut table[2 * k + 1];
			for i in 0..8 {
				odd[i] = even[8 + i];
				odd[8 + i] = even[i] ^ even[8 + i];
			}
		}
		table
	};
}

/// Positions of the message words inside the 32-word state. The other positions hold the
/// chaining value, in order.
const MESSAGE_SLOTS: [usize; 16] = [0, 1, 4, 5, 10, 11, 14, 15, 16, 17, 20, 21, 26, 27, 30, 31];
const CHAINING_SLOTS: [usize; 16] = [2, 3, 6, 7, 8, 9, 12, 13, 18, 19, 22, 23, 24, 25, 28, 29];

/// Word quadruples of the diffusion layer, applied in order.
const DIFFUSION: [[usize; 4]; 12] = [
	[0x00, 0x09, 0x12, 0x1b],
	[0x01, 0x0a, 0x13, 0x1c],
	[0x02, 0x0b, 0x14, 0x1d],
	[0x03, 0x0c, 0x15, 0x1e],
	[0x04, 0x0d, 0x16, 0x1f],
	[0x05, 0x0e, 0x17, 0x18],
	[0x06, 0x0f, 0x10, 0x19],
	[0x07, 0x08, 0x11, 0x1a],
	[0x00, 0x02, 0x05, 0x07],
	[0x10, 0x13, 0x15, 0x16],
	[0x09, 0x0b, 0x0c, 0x0e],
	[0x19, 0x1a, 0x1c, 0x1f],
];

fn expand(block: &[u8]) -> [u32; 16] {
	let mut m = [0u32; 16];
	for (u, &byte) in block.iter().enumerate() {
		for v in 0..8 {
			if (byte >> v) & 1 != 0 {
				for (word, row) in m.iter_mut().zip(&T512[8 * u + v]) {
					*word ^= row;
				}
			}
		}
	}
	m
}

/// Bitsliced Serpent S-box 2 over words `(a, b, c, d)`.
#[inline(always)]
fn sbox(s: &mut State, ia: usize, ib: usize, ic: usize, id: usize) {
	let (mut a, mut b, mut c, mut d) = (s[ia], s[ib], s[ic], s[id]);
	let mut t = a;
	a &= c;
	a ^= d;
	c ^= b;
	c ^= a;
	d |= t;
	d ^= b;
	t ^= c;
	b = d;
	d |= t;
	d ^= a;
	a &= b;
	t ^= a;
	b ^= d;
	b ^= t;
	(s[ia], s[ib], s[ic], s[id]) = (c, d, b, !t);
}

#[inline(always)]
fn diffuse(s: &mut State, [ia, ib, ic, id]: [usize; 4]) {
	let (mut a, mut b, mut c, mut d) = (s[ia], s[ib], s[ic], s[id]);
	a = a.rotate_left(13);
	c = c.rotate_left(3);
	b ^= a ^ c;
	d ^= c ^ (a << 3);
	b = b.rotate_left(1);
	d = d.rotate_left(7);
	a ^= b ^ d;
	c ^= d ^ (b << 7);
	a = a.rotate_left(5);
	c = c.rotate_left(22);
	(s[ia], s[ib], s[ic], s[id]) = (a, b, c, d);
}

fn permute(s: &mut State, alpha: &State, rounds: u32) {
	for round in 0..rounds {
		for (word, constant) in s.iter_mut().zip(alpha) {
			*word ^= constant;
		}
		s[1] ^= round;
		for i in 0..8 {
			sbox(s, i, i + 8, i + 16, i + 24);
		}
		for quad in DIFFUSION {
			diffuse(s, quad);
		}
	}
}

fn compress(h: &mut Chaining, block: &[u8], alpha: &State, rounds: u32) {
	debug_assert_eq!(block.len(), BLOCK_SIZE);

	let m = expand(block);
	let mut s = [0u32; 32];
	for (i, (&ms, &cs)) in MESSAGE_SLOTS.iter().zip(&CHAINING_SLOTS).enumerate() {
		s[ms] = m[i];
		s[cs] = h[i];
	}

	permute(&mut s, alpha, rounds);

	for i in 0..8 {
		h[i] ^= s[i];
		h[8 + i] ^= s[16 + i];
	}
}

/// Core hasher state of Hamsi-512.
#[derive(Clone)]
pub struct Hamsi512Core {
	state: Chaining,
	bit_len: u64,
}

/// Hamsi-512 hasher state.
pub type Hamsi512 = CoreWrapper<Hamsi512Core>;

impl Default for Hamsi512Core {
	fn default() -> Self {
		Self {
			state: IV,
			bit_len: 0,
		}
	}
}

impl HashMarker for Hamsi512Core {}

impl BlockSizeUser for Hamsi512Core {
	type BlockSize = U8;
}

impl BufferKindUser for Hamsi512Core {
	type BufferKind = Eager;
}

impl OutputSizeUser for Hamsi512Core {
	type OutputSize = U64;
}

impl UpdateCore for Hamsi512Core {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		for block in blocks {
			self.bit_len += (BLOCK_SIZE * 8) as u64;
			compress(&mut self.state, block, &ALPHA_N, ROUNDS);
		}
	}
}

impl FixedOutputCore for Hamsi512Core {
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let data = buffer.get_data();
		let bit_len = self.bit_len + (data.len() * 8) as u64;

		let mut block = [0u8; BLOCK_SIZE];
		block[..data.len()].copy_from_slice(data);
		block[data.len()] = 0x80;
		compress(&mut self.state, &block, &ALPHA_N, ROUNDS);
		compress(&mut self.state, &bit_len.to_be_bytes(), &ALPHA_F, FINAL_ROUNDS);

		for (chunk, word) in out.chunks_exact_mut(4).zip(self.state) {
			chunk.copy_from_slice(&word.to_be_bytes());
		}
	}
}

impl Reset for Hamsi512Core {
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl AlgorithmName for Hamsi512Core {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Hamsi512")
	}
}

impl fmt::Debug for Hamsi512Core {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Hamsi512Core { ... }")
	}
}
