//! Deterministic test-vector datasets for HDL testbenches.
//!
//! Each generator module separates computing a dataset from rendering it:
//! `generate` draws from an explicitly passed [`VectorRng`](tvgen_common::VectorRng)
//! and returns plain data, and the dataset's `Display` impl prints the HDL
//! statements the testbench includes. The [`catalog`] module maps command
//! selectors onto the generators.

#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod gcd;
pub mod net_msg;
pub mod sorter;
pub mod src_sink;
pub mod variant;

pub use catalog::{all_jobs, generate, Dataset, Generator, Job};
pub use error::DatasetError;
pub use variant::Variant;
