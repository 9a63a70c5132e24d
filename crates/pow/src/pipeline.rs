// Copyright 2025 Irreducible Inc.

use std::fmt;

use soterg_hash::{Algorithm, Primitive};
use tracing::{instrument, trace};

use crate::{
	adapter::{adapt, adapt_array},
	error::InternalError,
	header::HEADER_SIZE,
};

/// Size in bytes of the proof-of-work digest.
pub const DIGEST_SIZE: usize = 32;

pub type PowHash = [u8; DIGEST_SIZE];

/// An ordered, non-empty sequence of hash primitives applied one after another.
///
/// Every stage hashes the full output of the previous stage, adapted to the stage's declared
/// input width when it has one. The final state is adapted to [`DIGEST_SIZE`] bytes.
#[derive(Clone)]
pub struct PipelineDefinition<'a> {
	stages: Vec<&'a dyn Primitive>,
}

impl<'a> PipelineDefinition<'a> {
	pub fn new(stages: Vec<&'a dyn Primitive>) -> Result<Self, InternalError> {
		if stages.is_empty() {
			return Err(InternalError::EmptyPipeline);
		}
		Ok(Self { stages })
	}

	pub fn stages(&self) -> &[&'a dyn Primitive] {
		&self.stages
	}

	pub fn len(&self) -> usize {
		self.stages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.stages.is_empty()
	}

	/// Runs every stage over `header` and returns the truncated digest.
	#[instrument("pipeline::compute", skip_all, fields(stages = self.stages.len()), level = "debug")]
	pub fn compute(&self, header: &[u8; HEADER_SIZE]) -> Result<PowHash, InternalError> {
		let mut state = header.to_vec();
		for (stage, primitive) in self.stages.iter().enumerate() {
			if let Some(width) = primitive.input_width() {
				state = adapt(state, width);
			}
			state = primitive.digest(&state);

			let expected = primitive.output_width();
			if state.len() != expected {
				return Err(InternalError::OutputWidthMismatch {
					stage,
					primitive: primitive.name(),
					expected,
					actual: state.len(),
				});
			}
			trace!(stage, primitive = primitive.name(), "stage complete");
		}
		Ok(adapt_array(&state))
	}
}

impl PipelineDefinition<'static> {
	pub fn from_algorithms(algorithms: &[Algorithm]) -> Result<Self, InternalError> {
		Self::new(algorithms.iter().map(|algorithm| algorithm.primitive()).collect())
	}
}

impl fmt::Debug for PipelineDefinition<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(&self.stages).finish()
	}
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;
	use soterg_hash::{sha2::Sha512, Digest, DigestPrimitive};

	use super::*;

	/// Returns its input padded or cut to a fixed width, so stage wiring is easy to follow.
	struct Identity {
		input: Option<usize>,
		output: usize,
		declared: usize,
	}

	impl Primitive for Identity {
		fn name(&self) -> &'static str {
			"identity"
		}

		fn output_width(&self) -> usize {
			self.declared
		}

		fn input_width(&self) -> Option<usize> {
			self.input
		}

		fn digest(&self, data: &[u8]) -> Vec<u8> {
			adapt(data.to_vec(), self.output)
		}
	}

	fn header() -> [u8; HEADER_SIZE] {
		std::array::from_fn(|i| i as u8 + 1)
	}

	#[test]
	fn test_empty_pipeline_is_rejected() {
		assert_matches!(PipelineDefinition::new(vec![]), Err(InternalError::EmptyPipeline));
		assert_matches!(PipelineDefinition::from_algorithms(&[]), Err(InternalError::EmptyPipeline));
	}

	#[test]
	fn test_single_stage_truncates_to_digest_size() {
		let pipeline = PipelineDefinition::from_algorithms(&[Algorithm::Sha512]).unwrap();
		let expected = Sha512::digest(header());
		assert_eq!(pipeline.compute(&header()).unwrap(), expected[..DIGEST_SIZE]);
	}

	#[test]
	fn test_stages_chain_full_state() {
		let sha = DigestPrimitive::<Sha512>::new("sha512");
		let pipeline = PipelineDefinition::new(vec![&sha as &dyn Primitive, &sha]).unwrap();
		let expected = Sha512::digest(Sha512::digest(header()));
		assert_eq!(pipeline.compute(&header()).unwrap(), expected[..DIGEST_SIZE]);
	}

	#[test]
	fn test_input_width_is_adapted() {
		let narrow = Identity {
			input: Some(4),
			output: 16,
			declared: 16,
		};
		let pipeline = PipelineDefinition::new(vec![&narrow as &dyn Primitive]).unwrap();
		let mut expected = [0u8; DIGEST_SIZE];
		expected[..4].copy_from_slice(&[1, 2, 3, 4]);
		assert_eq!(pipeline.compute(&header()).unwrap(), expected);
	}

	#[test]
	fn test_output_width_mismatch_is_internal_error() {
		let sha = DigestPrimitive::<Sha512>::new("sha512");
		let liar = Identity {
			input: None,
			output: 10,
			declared: 64,
		};
		let pipeline = PipelineDefinition::new(vec![&sha as &dyn Primitive, &liar]).unwrap();
		assert_matches!(
			pipeline.compute(&header()),
			Err(InternalError::OutputWidthMismatch {
				stage: 1,
				primitive: "identity",
				expected: 64,
				actual: 10,
			})
		);
	}
}
