//! Core types for the Whistle official-assignment engine.
//!
//! This crate holds the row shapes the host system hands to the engine and
//! the verdict shape it gets back. It is free of evaluation logic, storage
//! and I/O; every other crate depends on it.

pub mod assignment;
pub mod error;
pub mod fixture;
pub mod grade;
pub mod official;
pub mod verdict;

pub use error::{Error, Result};
