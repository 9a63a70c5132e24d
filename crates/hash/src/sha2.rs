// Copyright 2023-2025 Irreducible Inc.

use digest::Digest;
pub use sha2::{Sha256, Sha512};

/// Double SHA-256, as used for block and transaction identifiers.
pub fn sha256d(data: impl AsRef<[u8]>) -> [u8; 32] {
	Sha256::digest(Sha256::digest(data)).into()
}

#[cfg(test)]
mod tests {
	use hex_literal::hex;

	use super::*;

	#[test]
	fn test_sha256d_empty() {
		assert_eq!(
			sha256d(b""),
			hex!("5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456")
		);
	}

	#[test]
	fn test_sha512_abc() {
		let expected = hex!(
			"ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a"
			"2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
		);
		assert_eq!(Sha512::digest(b"abc").as_slice(), &expected);
	}
}
