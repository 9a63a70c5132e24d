// Copyright 2025 Irreducible Inc.

use std::fmt;

use digest::consts::U64;
use groestl_crypto::Groestl512;
use jh::Jh512;
use shabal::Shabal512;
use skein::Skein512;

use crate::{
	blake::Blake512,
	cubehash::CubeHash512,
	echo::Echo512,
	hamsi::Hamsi512,
	keccak::Keccak512,
	luffa::Luffa512,
	primitive::{DigestPrimitive, Primitive},
	sha2::Sha512,
	simd::Simd512,
};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AlgorithmError {
	#[error("algorithm index {0} is out of range (expected less than {count})", count = Algorithm::COUNT)]
	IndexOutOfRange(u8),
	#[error("algorithm code {0:?} is not one of 0-9, A, B")]
	InvalidCode(char),
}

/// The twelve 512-bit hash functions of the chained construction.
///
/// The discriminants are the indices the algorithm order is drawn from, so they must not be
/// reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Algorithm {
	Blake = 0,
	Groestl = 1,
	Jh = 2,
	Keccak = 3,
	Skein = 4,
	Luffa = 5,
	CubeHash = 6,
	Simd = 7,
	Echo = 8,
	Hamsi = 9,
	Shabal = 10,
	Sha512 = 11,
}

static BLAKE: DigestPrimitive<Blake512> = DigestPrimitive::new("blake512");
static GROESTL: DigestPrimitive<Groestl512> = DigestPrimitive::new("groestl512");
static JH: DigestPrimitive<Jh512> = DigestPrimitive::new("jh512");
static KECCAK: DigestPrimitive<Keccak512> = DigestPrimitive::new("keccak512");
static SKEIN: DigestPrimitive<Skein512<U64>> = DigestPrimitive::new("skein512");
static LUFFA: DigestPrimitive<Luffa512> = DigestPrimitive::new("luffa512");
static CUBEHASH: DigestPrimitive<CubeHash512> = DigestPrimitive::new("cubehash512");
static SIMD: DigestPrimitive<Simd512> = DigestPrimitive::new("simd512");
static ECHO: DigestPrimitive<Echo512> = DigestPrimitive::new("echo512");
static HAMSI: DigestPrimitive<Hamsi512> = DigestPrimitive::new("hamsi512");
static SHABAL: DigestPrimitive<Shabal512> = DigestPrimitive::new("shabal512");
static SHA512: DigestPrimitive<Sha512> = DigestPrimitive::new("sha512");

impl Algorithm {
	pub const COUNT: usize = 12;

	pub const ALL: [Algorithm; Self::COUNT] = [
		Self::Blake,
		Self::Groestl,
		Self::Jh,
		Self::Keccak,
		Self::Skein,
		Self::Luffa,
		Self::CubeHash,
		Self::Simd,
		Self::Echo,
		Self::Hamsi,
		Self::Shabal,
		Self::Sha512,
	];

	pub const fn index(self) -> u8 {
		self as u8
	}

	/// The shared, stateless primitive implementing this algorithm.
	pub fn primitive(self) -> &'static dyn Primitive {
		match self {
			Self::Blake => &BLAKE,
			Self::Groestl => &GROESTL,
			Self::Jh => &JH,
			Self::Keccak => &KECCAK,
			Self::Skein => &SKEIN,
			Self::Luffa => &LUFFA,
			Self::CubeHash => &CUBEHASH,
			Self::Simd => &SIMD,
			Self::Echo => &ECHO,
			Self::Hamsi => &HAMSI,
			Self::Shabal => &SHABAL,
			Self::Sha512 => &SHA512,
		}
	}

	pub fn name(self) -> &'static str {
		self.primitive().name()
	}

	/// Single-character code: `0`-`9`, then `A` and `B`.
	pub fn code(self) -> char {
		match self.index() {
			i @ 0..=9 => (b'0' + i) as char,
			i => (b'A' + i - 10) as char,
		}
	}

	pub fn from_code(code: char) -> Result<Self, AlgorithmError> {
		let index = match code {
			'0'..='9' => code as u8 - b'0',
			'A' | 'B' => code as u8 - b'A' + 10,
			_ => return Err(AlgorithmError::InvalidCode(code)),
		};
		Self::try_from(index)
	}
}

impl TryFrom<u8> for Algorithm {
	type Error = AlgorithmError;

	fn try_from(index: u8) -> Result<Self, Self::Error> {
		Self::ALL
			.get(index as usize)
			.copied()
			.ok_or(AlgorithmError::IndexOutOfRange(index))
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;
	use digest::Digest;
	use hex_literal::hex;

	use super::*;

	#[test]
	fn test_indices_follow_declaration_order() {
		for (i, algorithm) in Algorithm::ALL.into_iter().enumerate() {
			assert_eq!(algorithm.index() as usize, i);
			assert_eq!(Algorithm::try_from(i as u8), Ok(algorithm));
		}
		assert_matches!(Algorithm::try_from(12), Err(AlgorithmError::IndexOutOfRange(12)));
	}

	#[test]
	fn test_codes_round_trip() {
		let codes = Algorithm::ALL.map(Algorithm::code);
		assert_eq!(String::from_iter(codes), "0123456789AB");
		for algorithm in Algorithm::ALL {
			assert_eq!(Algorithm::from_code(algorithm.code()), Ok(algorithm));
		}
		assert_matches!(Algorithm::from_code('C'), Err(AlgorithmError::InvalidCode('C')));
	}

	#[test]
	fn test_all_primitives_are_512_bit() {
		for algorithm in Algorithm::ALL {
			let primitive = algorithm.primitive();
			assert_eq!(primitive.output_width(), 64, "{algorithm}");
			assert_eq!(primitive.input_width(), None, "{algorithm}");
			assert_eq!(primitive.digest(&[0u8; 80]).len(), 64, "{algorithm}");
		}
	}

	#[test]
	fn test_primitives_are_distinct() {
		let mut outputs = Algorithm::ALL.map(|algorithm| algorithm.primitive().digest(b"soterg"));
		outputs.sort();
		for pair in outputs.windows(2) {
			assert_ne!(pair[0], pair[1]);
		}
	}

	#[test]
	fn test_library_backed_primitives() {
		assert_eq!(
			Algorithm::Groestl.primitive().digest(b""),
			Groestl512::digest(b"").to_vec()
		);
		assert_eq!(
			Algorithm::Sha512.primitive().digest(b"abc"),
			hex!(
				"ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a"
				"2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
			)
		);
	}
}
