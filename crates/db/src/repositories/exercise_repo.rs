//! Repository for the `exercises` catalog table.

use fieldhouse_core::types::DbId;
use sqlx::PgPool;

use crate::models::exercise::{CreateExercise, ExerciseDefinition, UpdateExercise};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, category, description, created_at, updated_at";

/// Provides CRUD operations for exercise definitions.
pub struct ExerciseRepo;

impl ExerciseRepo {
    /// Insert a new exercise, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateExercise,
    ) -> Result<ExerciseDefinition, sqlx::Error> {
        let query = format!(
            "INSERT INTO exercises (name, category, description) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ExerciseDefinition>(&query)
            .bind(input.name.trim())
            .bind(input.category.trim())
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find an exercise by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ExerciseDefinition>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exercises WHERE id = $1");
        sqlx::query_as::<_, ExerciseDefinition>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every exercise, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<ExerciseDefinition>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exercises ORDER BY name, id");
        sqlx::query_as::<_, ExerciseDefinition>(&query)
            .fetch_all(pool)
            .await
    }

    /// Return the subset of `ids` that do not exist in the catalog.
    pub async fn find_missing(pool: &PgPool, ids: &[DbId]) -> Result<Vec<DbId>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let found: Vec<DbId> = sqlx::query_scalar("SELECT id FROM exercises WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(pool)
            .await?;
        let mut missing: Vec<DbId> = ids.iter().copied().filter(|id| !found.contains(id)).collect();
        missing.sort_unstable();
        missing.dedup();
        Ok(missing)
    }

    /// Update an exercise. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateExercise,
    ) -> Result<Option<ExerciseDefinition>, sqlx::Error> {
        let query = format!(
            "UPDATE exercises SET \
                name = COALESCE($2, name), \
                category = COALESCE($3, category), \
                description = COALESCE($4, description), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ExerciseDefinition>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(input.category.as_deref().map(str::trim))
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete an exercise. Fails with a foreign-key violation while any
    /// template or log still references it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
