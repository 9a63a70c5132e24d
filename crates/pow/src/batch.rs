// Copyright 2025 Irreducible Inc.

use rayon::prelude::*;
use tracing::instrument;

use crate::{
	error::Error,
	pipeline::PowHash,
	soterg::{pow_hash_with, PowVariant},
};

/// Hashes many headers on the rayon thread pool.
///
/// Results are returned in input order, one per header, so a bad header does not hide the
/// results of the others.
#[instrument("pow::hash_batch", skip_all, fields(count = headers.len()))]
pub fn hash_batch<V, H>(variant: &V, headers: &[H]) -> Vec<Result<PowHash, Error>>
where
	V: PowVariant,
	H: AsRef<[u8]> + Sync,
{
	headers
		.par_iter()
		.map(|header| pow_hash_with(variant, header.as_ref()))
		.collect()
}

/// Hashes `headers` into `out`, failing on the first invalid header.
///
/// # Panics
/// Panics if `out` and `headers` have different lengths.
#[instrument("pow::hash_batch_into", skip_all, fields(count = headers.len()))]
pub fn hash_batch_into<V, H>(variant: &V, headers: &[H], out: &mut [PowHash]) -> Result<(), Error>
where
	V: PowVariant,
	H: AsRef<[u8]> + Sync,
{
	assert_eq!(headers.len(), out.len(), "output length must match the number of headers");
	headers
		.par_iter()
		.zip(out.par_iter_mut())
		.try_for_each(|(header, out)| {
			*out = pow_hash_with(variant, header.as_ref())?;
			Ok(())
		})
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;
	use rand::{rngs::StdRng, RngCore, SeedableRng};

	use super::*;
	use crate::{error::InputError, soterg::SoterG};

	fn random_headers(count: usize) -> Vec<[u8; 80]> {
		let mut rng = StdRng::seed_from_u64(0);
		(0..count)
			.map(|_| {
				let mut header = [0u8; 80];
				rng.fill_bytes(&mut header);
				header
			})
			.collect()
	}

	#[test]
	fn test_batch_matches_sequential() {
		let headers = random_headers(8);
		let batch = hash_batch(&SoterG, &headers);
		for (header, result) in headers.iter().zip(batch) {
			assert_eq!(result, pow_hash_with(&SoterG, header));
		}

		let mut out = vec![[0u8; 32]; headers.len()];
		hash_batch_into(&SoterG, &headers, &mut out).unwrap();
		for (header, digest) in headers.iter().zip(&out) {
			assert_eq!(Ok(*digest), pow_hash_with(&SoterG, header));
		}
	}

	#[test]
	fn test_batch_reports_each_invalid_header() {
		let headers = vec![vec![0u8; 80], vec![0u8; 79], vec![1u8; 80]];
		let results = hash_batch(&SoterG, &headers);
		assert!(results[0].is_ok());
		assert_matches!(
			&results[1],
			Err(Error::Input(InputError::WrongLength {
				expected: 80,
				actual: 79
			}))
		);
		assert!(results[2].is_ok());

		let mut out = vec![[0u8; 32]; headers.len()];
		assert_matches!(hash_batch_into(&SoterG, &headers, &mut out), Err(Error::Input(_)));
	}
}
