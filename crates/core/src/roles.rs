//! Well-known role names and their parsed form.
//!
//! These must match the `role` check constraint in
//! `20260301000001_create_users_table.sql`.

use serde::{Deserialize, Serialize};

pub const ROLE_MEMBER: &str = "member";
pub const ROLE_ATHLETE: &str = "athlete";
pub const ROLE_ADMIN: &str = "admin";

/// All valid role strings.
pub const VALID_ROLES: &[&str] = &[ROLE_MEMBER, ROLE_ATHLETE, ROLE_ADMIN];

/// A facility account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Member,
    Athlete,
    Admin,
}

impl Role {
    /// Convert from a database / token claim string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            ROLE_MEMBER => Ok(Self::Member),
            ROLE_ATHLETE => Ok(Self::Athlete),
            ROLE_ADMIN => Ok(Self::Admin),
            _ => Err(format!(
                "Invalid role '{s}'. Must be one of: {}",
                VALID_ROLES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => ROLE_MEMBER,
            Self::Athlete => ROLE_ATHLETE,
            Self::Admin => ROLE_ADMIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_valid_role() {
        for name in VALID_ROLES {
            let role = Role::from_str_value(name).unwrap();
            assert_eq!(role.as_str(), *name);
        }
    }

    #[test]
    fn rejects_unknown_role() {
        let err = Role::from_str_value("coach").unwrap_err();
        assert!(err.contains("Invalid role"));
    }
}
