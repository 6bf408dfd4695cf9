//! Request extractors that establish the caller's [`AccessContext`].
//!
//! [`AccessContext`]: fieldhouse_core::access::AccessContext

pub mod auth;
pub mod rbac;
