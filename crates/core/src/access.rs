//! Explicit caller context and capability checks.
//!
//! Every training operation receives an [`AccessContext`] value instead of
//! reading a "current user" from ambient state. Admin-only operations call
//! [`AccessContext::require_admin`]; athlete-scoped operations call
//! [`AccessContext::require_self_or_admin`] with the target athlete id.

use crate::error::CoreError;
use crate::roles::Role;
use crate::types::DbId;

/// The authenticated caller of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessContext {
    pub user_id: DbId,
    pub role: Role,
}

impl AccessContext {
    pub fn new(user_id: DbId, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Catalog management and assignment creation.
    pub fn require_admin(&self) -> Result<(), CoreError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(CoreError::Forbidden("Admin role required".into()))
        }
    }

    /// The caller must be the athlete `athlete_id` (with the athlete role),
    /// or an admin acting on their behalf.
    pub fn require_self_or_admin(&self, athlete_id: DbId) -> Result<(), CoreError> {
        if self.is_admin() {
            return Ok(());
        }
        if self.role != Role::Athlete {
            return Err(CoreError::Forbidden("Athlete role required".into()));
        }
        if self.user_id != athlete_id {
            return Err(CoreError::Forbidden(format!(
                "User {} may not act on athlete {athlete_id}",
                self.user_id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn admin_passes_every_check() {
        let ctx = AccessContext::new(1, Role::Admin);
        assert!(ctx.require_admin().is_ok());
        assert!(ctx.require_self_or_admin(99).is_ok());
    }

    #[test]
    fn athlete_cannot_perform_admin_writes() {
        let ctx = AccessContext::new(7, Role::Athlete);
        assert_matches!(ctx.require_admin(), Err(CoreError::Forbidden(_)));
    }

    #[test]
    fn athlete_is_scoped_to_self() {
        let ctx = AccessContext::new(7, Role::Athlete);
        assert!(ctx.require_self_or_admin(7).is_ok());
        assert_matches!(ctx.require_self_or_admin(8), Err(CoreError::Forbidden(_)));
    }

    #[test]
    fn member_has_no_athlete_scope() {
        let ctx = AccessContext::new(3, Role::Member);
        assert_matches!(ctx.require_self_or_admin(3), Err(CoreError::Forbidden(_)));
    }
}
