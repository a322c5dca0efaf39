//! Elliptic Curve Primitives
//!
//! Constant-time arithmetic on the STARK curve, the foundation for the
//! STARK ECDSA signature scheme.

pub mod stark;

pub use stark::{FieldElement as StarkFieldElement, Point as StarkPoint, Scalar as StarkScalar};
