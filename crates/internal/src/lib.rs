//! Internal utilities shared by the starksig crates
//!
//! Nothing in here is part of the public API; the helpers are re-exported
//! through `starksig::internal` only for advanced use.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;

pub use constant_time::{ct_eq, ct_eq_choice, ct_is_zero, ct_lt_be};
