// Copyright 2025 Irreducible Inc.

//! Selection of the algorithm order from the block timestamp.

use std::{fmt, str::FromStr};

use soterg_hash::{sha2::sha256d, Algorithm};

use crate::{
	error::{InternalError, OrderParseError},
	pipeline::PipelineDefinition,
};

/// Timestamp bits that select the order. The low seven bits are ignored, so the order only
/// changes every 128 seconds.
pub const TIME_MASK: u32 = 0xffff_ff80;

/// Double SHA-256 of the masked timestamp, serialized little-endian.
pub fn time_hash(time: u32) -> [u8; 32] {
	sha256d((time & TIME_MASK).to_le_bytes())
}

/// The sequence of algorithms applied to one header.
///
/// Every one of the twelve positions is drawn independently, so an algorithm may appear more
/// than once and another not at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashOrder([Algorithm; Algorithm::COUNT]);

impl HashOrder {
	pub const fn new(algorithms: [Algorithm; Algorithm::COUNT]) -> Self {
		Self(algorithms)
	}

	/// Reads twelve nibbles from the first six bytes of `time_hash`, walking backwards from
	/// byte 5 and taking the high nibble of each byte before the low one.
	pub fn from_time_hash(time_hash: &[u8; 32]) -> Self {
		Self(std::array::from_fn(|j| {
			let byte = time_hash[(Algorithm::COUNT - 1 - j) / 2];
			let nibble = if j % 2 == 0 { byte >> 4 } else { byte & 0x0f };
			Algorithm::ALL[nibble as usize % Algorithm::COUNT]
		}))
	}

	pub fn from_time(time: u32) -> Self {
		Self::from_time_hash(&time_hash(time))
	}

	pub fn algorithms(&self) -> &[Algorithm; Algorithm::COUNT] {
		&self.0
	}

	pub fn pipeline(&self) -> Result<PipelineDefinition<'static>, InternalError> {
		PipelineDefinition::from_algorithms(&self.0)
	}
}

impl fmt::Display for HashOrder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0
			.iter()
			.try_for_each(|algorithm| write!(f, "{}", algorithm.code()))
	}
}

impl FromStr for HashOrder {
	type Err = OrderParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let codes = s
			.chars()
			.map(Algorithm::from_code)
			.collect::<Result<Vec<_>, _>>()?;
		let actual = codes.len();
		codes
			.try_into()
			.map(Self)
			.map_err(|_| OrderParseError::WrongLength {
				expected: Algorithm::COUNT,
				actual,
			})
	}
}
