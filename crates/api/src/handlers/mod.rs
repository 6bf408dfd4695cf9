pub mod analytics;
pub mod assignments;
pub mod exercises;
pub mod readiness;
pub mod sessions;
pub mod templates;

use fieldhouse_core::error::CoreError;
use fieldhouse_core::types::DbId;
use fieldhouse_db::models::user::User;
use fieldhouse_db::repositories::UserRepo;
use fieldhouse_db::DbPool;

use crate::error::{AppError, AppResult};

/// Reject ids that do not name a user with the athlete role.
pub(crate) async fn ensure_athlete(pool: &DbPool, athlete_id: DbId) -> AppResult<()> {
    let user = UserRepo::find_by_id(pool, athlete_id).await?;
    if !user.as_ref().is_some_and(User::is_athlete) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown athlete id: {athlete_id}"
        ))));
    }
    Ok(())
}
