//! Authentication primitives.
//!
//! - [`jwt`] -- JWT access-token validation (and generation, for the
//!   identity surface and tests).

pub mod jwt;
