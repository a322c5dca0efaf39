//! Constant values for the starksig library
//!
//! This crate is constants-only and always `no_std`.

#![no_std]

pub mod traditional;
