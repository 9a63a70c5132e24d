// Copyright 2025 Irreducible Inc.

use soterg_hash::AlgorithmError;

/// The caller supplied an unusable input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
	#[error("header must be exactly {expected} bytes, got {actual}")]
	WrongLength { expected: usize, actual: usize },
}

/// A failure inside the hashing pipeline. None of these depend on the input bytes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternalError {
	#[error("the pipeline has no stages")]
	EmptyPipeline,
	#[error("stage {stage} ({primitive}) produced {actual} bytes, expected {expected}")]
	OutputWidthMismatch {
		stage: usize,
		primitive: &'static str,
		expected: usize,
		actual: usize,
	},
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Input(#[from] InputError),
	#[error("internal error: {0}")]
	Internal(#[from] InternalError),
}

/// A textual algorithm order could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderParseError {
	#[error("an order has exactly {expected} algorithm codes, got {actual}")]
	WrongLength { expected: usize, actual: usize },
	#[error(transparent)]
	Algorithm(#[from] AlgorithmError),
}
