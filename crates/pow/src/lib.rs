// Copyright 2025 Irreducible Inc.

//! The SoterG proof-of-work hash.
//!
//! An 80-byte block header is validated, then fed through twelve chained 512-bit hash
//! functions whose order is derived from the header timestamp. The first 32 bytes of the
//! last digest are the proof-of-work hash.
//!
//! [`get_pow_hash`] is the entry point. [`PipelineDefinition`] runs any ordered list of
//! [`Primitive`](soterg_hash::Primitive)s and [`hash_batch`] hashes many headers in parallel.

pub mod adapter;
pub mod batch;
pub mod error;
pub mod header;
pub mod order;
pub mod pipeline;
pub mod soterg;

pub use batch::*;
pub use error::*;
pub use header::{Header, HEADER_SIZE};
pub use order::{time_hash, HashOrder, TIME_MASK};
pub use pipeline::*;
pub use soterg::*;
