//! User entity model and DTOs.
//!
//! Accounts are provisioned by the identity surface. The training
//! subsystem reads them to confirm that an assignment targets a real athlete.

use fieldhouse_core::roles::Role;
use fieldhouse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub display_name: String,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Parsed role; `None` if the stored value is unrecognised.
    pub fn parsed_role(&self) -> Option<Role> {
        Role::from_str_value(&self.role).ok()
    }

    pub fn is_athlete(&self) -> bool {
        self.parsed_role() == Some(Role::Athlete)
    }
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub display_name: String,
    pub role: Role,
}
