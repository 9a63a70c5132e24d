// Copyright 2025 Irreducible Inc.

//! Width adaptation between pipeline stages.

/// Resizes `data` to exactly `width` bytes.
///
/// Longer inputs keep their first `width` bytes; shorter inputs are extended with zero bytes.
/// Adapting to the current length returns the input unchanged.
pub fn adapt(mut data: Vec<u8>, width: usize) -> Vec<u8> {
	data.resize(width, 0);
	data
}

/// Copies the first `N` bytes of `data` into an array, zero-padding if it is shorter.
pub fn adapt_array<const N: usize>(data: &[u8]) -> [u8; N] {
	let mut out = [0u8; N];
	let len = data.len().min(N);
	out[..len].copy_from_slice(&data[..len]);
	out
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_truncate_and_pad() {
		assert_eq!(adapt(vec![1, 2, 3, 4], 2), vec![1, 2]);
		assert_eq!(adapt(vec![1, 2], 4), vec![1, 2, 0, 0]);
		assert_eq!(adapt(vec![], 3), vec![0, 0, 0]);
		assert_eq!(adapt_array::<2>(&[9, 8, 7]), [9, 8]);
		assert_eq!(adapt_array::<4>(&[9]), [9, 0, 0, 0]);
	}

	proptest! {
		#[test]
		fn test_adapt_properties(data in proptest::collection::vec(any::<u8>(), 0..200), width in 0usize..200) {
			let adapted = adapt(data.clone(), width);
			prop_assert_eq!(adapted.len(), width);
			let shared = width.min(data.len());
			prop_assert_eq!(&adapted[..shared], &data[..shared]);
			prop_assert!(adapted[shared..].iter().all(|&b| b == 0));
			prop_assert_eq!(adapt(adapted.clone(), width), adapted);
		}
	}
}
