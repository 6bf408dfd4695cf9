//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts (with `validator` rules)
//! - A `Deserialize` update DTO (all `Option` fields) where the entity is editable

pub mod assignment;
pub mod exercise;
pub mod exercise_log;
pub mod readiness;
pub mod template;
pub mod user;
pub mod workout_session;
