// Copyright 2025 Irreducible Inc.

//! A byte-oriented AES round, used by ECHO as its building block.

use lazy_static::lazy_static;

lazy_static! {
	static ref SBOX: [u8; 256] = {
		let mut sbox = [0u8; 256];
		for (x, entry) in sbox.iter_mut().enumerate() {
			let inv = inverse(x as u8);
			*entry = inv
				^ inv.rotate_left(1)
				^ inv.rotate_left(2)
				^ inv.rotate_left(3)
				^ inv.rotate_left(4)
				^ 0x63;
		}
		sbox
	};
}

#[inline(always)]
fn xtime(x: u8) -> u8 {
	(x << 1) ^ if x & 0x80 != 0 { 0x1b } else { 0 }
}

fn mul(mut a: u8, mut b: u8) -> u8 {
	let mut product = 0;
	while b != 0 {
		if b & 1 != 0 {
			product ^= a;
		}
		a = xtime(a);
		b >>= 1;
	}
	product
}

/// Multiplicative inverse in GF(2^8), mapping zero to zero.
fn inverse(x: u8) -> u8 {
	if x == 0 {
		return 0;
	}
	// x^254 = x^-1
	let mut result = 1;
	let mut base = x;
	let mut exp = 254u8;
	while exp != 0 {
		if exp & 1 != 0 {
			result = mul(result, base);
		}
		base = mul(base, base);
		exp >>= 1;
	}
	result
}

/// Mixes four bytes of one column in place.
#[inline(always)]
pub(crate) fn mix_column(a: u8, b: u8, c: u8, d: u8) -> [u8; 4] {
	let (ab, bc, cd) = (a ^ b, b ^ c, c ^ d);
	let (abx, bcx, cdx) = (xtime(ab), xtime(bc), xtime(cd));
	[abx ^ bc ^ d, bcx ^ a ^ cd, cdx ^ ab ^ d, abx ^ bcx ^ cdx ^ ab ^ c]
}

/// One full AES encryption round: SubBytes, ShiftRows, MixColumns and AddRoundKey.
///
/// The state is in the usual column-major byte order.
pub(crate) fn aes_round(state: &mut [u8; 16], key: &[u8; 16]) {
	let shifted: [u8; 16] = std::array::from_fn(|i| {
		let (col, row) = (i / 4, i % 4);
		SBOX[state[4 * ((col + row) % 4) + row] as usize]
	});

	for col in 0..4 {
		let mixed = mix_column(
			shifted[4 * col],
			shifted[4 * col + 1],
			shifted[4 * col + 2],
			shifted[4 * col + 3],
		);
		for row in 0..4 {
			state[4 * col + row] = mixed[row] ^ key[4 * col + row];
		}
	}
}

#[cfg(test)]
mod tests {
	use hex_literal::hex;

	use super::*;

	#[test]
	fn test_sbox_values() {
		assert_eq!(SBOX[0x00], 0x63);
		assert_eq!(SBOX[0x01], 0x7c);
		assert_eq!(SBOX[0x53], 0xed);
		assert_eq!(SBOX[0xff], 0x16);
	}

	#[test]
	fn test_first_round_of_fips_197_example() {
		let mut state = hex!("193de3bea0f4e22b9ac68d2ae9f84808");
		let key = hex!("a0fafe1788542cb123a339392a6c7605");
		aes_round(&mut state, &key);
		assert_eq!(state, hex!("a49c7ff2689f352b6b5bea43026a5049"));
	}
}
