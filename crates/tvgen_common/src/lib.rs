//! Shared foundational types used across the tvgen test-vector generators.
//!
//! This crate provides sized hexadecimal literals in HDL syntax, bit-width
//! helpers, and the seeded random engines every generator draws from.

#![warn(missing_docs)]

pub mod hex;
pub mod mt19937;
pub mod rng;

pub use hex::{hex_digits, max_value, DontCare, SizedHex};
pub use mt19937::Mt19937;
pub use rng::{Engine, SeededRng, VectorRng, DEFAULT_SEED};
