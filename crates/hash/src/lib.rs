// Copyright 2023-2025 Irreducible Inc.

//! The 512-bit hash functions chained by the SoterG proof-of-work, behind one object-safe
//! [`Primitive`] interface.
//!
//! BLAKE, Luffa, CubeHash, SIMD, ECHO and Hamsi are implemented here on top of the
//! [`digest`] core API. Grøstl, JH, Keccak, Skein, Shabal and SHA-512 come from their
//! RustCrypto or `tiny-keccak` implementations.

mod aes;
pub mod algorithm;
pub mod blake;
pub mod cubehash;
pub mod echo;
pub mod hamsi;
pub mod keccak;
pub mod luffa;
pub mod primitive;
pub mod sha2;
pub mod simd;

pub use algorithm::*;
pub use blake::Blake512;
pub use cubehash::CubeHash512;
pub use digest::{self, Digest};
pub use echo::Echo512;
pub use hamsi::Hamsi512;
pub use keccak::Keccak512;
pub use luffa::Luffa512;
pub use primitive::*;
pub use simd::Simd512;
