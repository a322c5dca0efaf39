//! Integration and property tests for the starksig library
//!
//! Shared reference data lives in [`vectors`].

pub mod vectors;
