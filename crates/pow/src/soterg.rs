// Copyright 2025 Irreducible Inc.

use tracing::{error, instrument};

use crate::{
	error::{Error, InternalError},
	header::Header,
	order::HashOrder,
	pipeline::{PipelineDefinition, PowHash},
};

/// A chained proof-of-work hash: chooses the pipeline for a header and runs it.
pub trait PowVariant: Send + Sync {
	fn pipeline(&self, header: &Header<'_>) -> Result<PipelineDefinition<'static>, InternalError>;

	fn hash(&self, header: &Header<'_>) -> Result<PowHash, InternalError> {
		self.pipeline(header)?.compute(header.as_bytes())
	}
}

/// The timestamp-ordered SoterG construction.
///
/// The header's `time` field, masked with [`TIME_MASK`](crate::order::TIME_MASK), selects
/// the order of the twelve algorithms.
#[derive(Debug, Default, Clone, Copy)]
pub struct SoterG;

impl PowVariant for SoterG {
	fn pipeline(&self, header: &Header<'_>) -> Result<PipelineDefinition<'static>, InternalError> {
		HashOrder::from_time(header.time()).pipeline()
	}
}

/// Applies the same algorithm order to every header.
#[derive(Debug, Clone, Copy)]
pub struct FixedOrder(pub HashOrder);

impl PowVariant for FixedOrder {
	fn pipeline(&self, _header: &Header<'_>) -> Result<PipelineDefinition<'static>, InternalError> {
		self.0.pipeline()
	}
}

/// Hashes one 80-byte block header with `variant`.
///
/// Wrong-length input is the caller's fault and is returned as [`Error::Input`]. Internal
/// failures are logged before being returned.
#[instrument(skip_all, fields(len = input.len()), level = "debug")]
pub fn pow_hash_with(variant: &impl PowVariant, input: &[u8]) -> Result<PowHash, Error> {
	let header = Header::new(input)?;
	variant.hash(&header).map_err(|err| {
		error!(%err, "proof-of-work pipeline failed");
		err.into()
	})
}

/// Computes the SoterG proof-of-work hash of an 80-byte block header.
pub fn get_pow_hash(input: &[u8]) -> Result<PowHash, Error> {
	pow_hash_with(&SoterG, input)
}
