//! Domain logic for workout programming and load monitoring.
//!
//! This crate has no database or HTTP dependencies. Persistence lives in
//! `fieldhouse-db`; computations here run against values loaded by the
//! caller.

pub mod access;
pub mod error;
pub mod load;
pub mod progress;
pub mod readiness;
pub mod roles;
pub mod session;
pub mod types;
pub mod validation;
pub mod week;
