// Copyright 2025 Irreducible Inc.

//! The fixed-size block header accepted by the proof-of-work hash.

use crate::error::InputError;

/// Size in bytes of a serialized block header.
pub const HEADER_SIZE: usize = 80;

const VERSION_OFFSET: usize = 0;
const PREV_BLOCK_OFFSET: usize = 4;
const MERKLE_ROOT_OFFSET: usize = 36;
const TIME_OFFSET: usize = 68;
const BITS_OFFSET: usize = 72;
const NONCE_OFFSET: usize = 76;

/// Checks that `input` is exactly one header long.
pub fn validate(input: &[u8]) -> Result<&[u8; HEADER_SIZE], InputError> {
	input.try_into().map_err(|_| InputError::WrongLength {
		expected: HEADER_SIZE,
		actual: input.len(),
	})
}

/// A borrowed, length-checked block header.
///
/// The field accessors only interpret bytes; the hash itself always consumes the full
/// 80 bytes unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a>(&'a [u8; HEADER_SIZE]);

impl<'a> Header<'a> {
	pub fn new(input: &'a [u8]) -> Result<Self, InputError> {
		validate(input).map(Self)
	}

	pub fn as_bytes(&self) -> &'a [u8; HEADER_SIZE] {
		self.0
	}

	pub fn version(&self) -> i32 {
		i32::from_le_bytes(self.field(VERSION_OFFSET))
	}

	pub fn prev_block(&self) -> [u8; 32] {
		self.field(PREV_BLOCK_OFFSET)
	}

	pub fn merkle_root(&self) -> [u8; 32] {
		self.field(MERKLE_ROOT_OFFSET)
	}

	/// The block timestamp, which selects the algorithm order.
	pub fn time(&self) -> u32 {
		u32::from_le_bytes(self.field(TIME_OFFSET))
	}

	pub fn bits(&self) -> u32 {
		u32::from_le_bytes(self.field(BITS_OFFSET))
	}

	pub fn nonce(&self) -> u32 {
		u32::from_le_bytes(self.field(NONCE_OFFSET))
	}

	fn field<const N: usize>(&self, offset: usize) -> [u8; N] {
		std::array::from_fn(|i| self.0[offset + i])
	}
}

impl<'a> TryFrom<&'a [u8]> for Header<'a> {
	type Error = InputError;

	fn try_from(input: &'a [u8]) -> Result<Self, Self::Error> {
		Self::new(input)
	}
}

impl<'a> From<&'a [u8; HEADER_SIZE]> for Header<'a> {
	fn from(bytes: &'a [u8; HEADER_SIZE]) -> Self {
		Self(bytes)
	}
}
