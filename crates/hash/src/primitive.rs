// Copyright 2023-2025 Irreducible Inc.

use std::{fmt, marker::PhantomData};

use digest::Digest;

/// A hash function used as one stage of a chained construction.
///
/// This is an object-safe view of [`digest::Digest`]: a primitive maps an arbitrary byte string
/// to a digest of fixed width. Primitives are stateless, so one value may be shared between
/// threads and reused for any number of inputs.
pub trait Primitive: Send + Sync {
	/// Human-readable name of the hash function.
	fn name(&self) -> &'static str;

	/// Width in bytes of every digest produced by [`Primitive::digest`].
	fn output_width(&self) -> usize;

	/// Width in bytes of the input this primitive expects, if it only accepts one.
	///
	/// `None` means any input length is hashed as is.
	fn input_width(&self) -> Option<usize> {
		None
	}

	/// Hash `data` in one shot.
	fn digest(&self, data: &[u8]) -> Vec<u8>;
}

/// Exposes any [`Digest`] implementation as a [`Primitive`].
pub struct DigestPrimitive<D> {
	name: &'static str,
	_marker: PhantomData<fn() -> D>,
}

impl<D> DigestPrimitive<D> {
	pub const fn new(name: &'static str) -> Self {
		Self {
			name,
			_marker: PhantomData,
		}
	}
}

impl<D> Clone for DigestPrimitive<D> {
	fn clone(&self) -> Self {
		Self::new(self.name)
	}
}

impl<D> fmt::Debug for DigestPrimitive<D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("DigestPrimitive").field(&self.name).finish()
	}
}

impl<D: Digest> Primitive for DigestPrimitive<D> {
	fn name(&self) -> &'static str {
		self.name
	}

	fn output_width(&self) -> usize {
		<D as Digest>::output_size()
	}

	fn digest(&self, data: &[u8]) -> Vec<u8> {
		<D as Digest>::digest(data).to_vec()
	}
}

impl fmt::Debug for dyn Primitive + '_ {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
