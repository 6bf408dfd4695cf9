//! Repository for `workout_templates` and their owned `template_exercises`.

use fieldhouse_core::types::DbId;
use sqlx::PgPool;

use crate::models::template::{
    AddTemplateExercise, CreateTemplate, TemplateExercise, TemplateWithExercises,
    UpdateTemplate, WorkoutTemplate,
};

/// Column list for `workout_templates` queries.
const COLUMNS: &str = "id, title, category, created_at, updated_at";

/// Column list for `template_exercises` joined with `exercises` (aliased `e`).
const EXERCISE_COLUMNS: &str = "te.id, te.template_id, te.exercise_id, e.name AS exercise_name, \
                                te.position, te.sets, te.reps, te.weight, te.notes";

/// Provides CRUD operations for workout templates.
pub struct TemplateRepo;

impl TemplateRepo {
    /// Insert a template and its prescribed exercises in one transaction.
    ///
    /// Exercises are numbered `0..n` in the order given.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTemplate,
    ) -> Result<WorkoutTemplate, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO workout_templates (title, category) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        let template = sqlx::query_as::<_, WorkoutTemplate>(&insert_query)
            .bind(input.title.trim())
            .bind(input.category.trim())
            .fetch_one(&mut *tx)
            .await?;

        for (position, exercise) in input.exercises.iter().enumerate() {
            sqlx::query(
                "INSERT INTO template_exercises \
                    (template_id, exercise_id, position, sets, reps, weight, notes) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7)",
            )
            .bind(template.id)
            .bind(exercise.exercise_id)
            .bind(position as i32)
            .bind(exercise.sets)
            .bind(exercise.reps)
            .bind(exercise.weight)
            .bind(&exercise.notes)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(template)
    }

    /// Find a template by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<WorkoutTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workout_templates WHERE id = $1");
        sqlx::query_as::<_, WorkoutTemplate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a template by ID, enriched with its ordered exercises.
    pub async fn find_by_id_with_exercises(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TemplateWithExercises>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(template) => {
                let exercises = Self::list_exercises(pool, template.id).await?;
                Ok(Some(TemplateWithExercises {
                    template,
                    exercises,
                }))
            }
            None => Ok(None),
        }
    }

    /// List every template, ordered by title.
    pub async fn list(pool: &PgPool) -> Result<Vec<WorkoutTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workout_templates ORDER BY title, id");
        sqlx::query_as::<_, WorkoutTemplate>(&query)
            .fetch_all(pool)
            .await
    }

    /// The prescribed exercises of a template in position order.
    pub async fn list_exercises(
        pool: &PgPool,
        template_id: DbId,
    ) -> Result<Vec<TemplateExercise>, sqlx::Error> {
        let query = format!(
            "SELECT {EXERCISE_COLUMNS} \
             FROM template_exercises te \
             JOIN exercises e ON e.id = te.exercise_id \
             WHERE te.template_id = $1 \
             ORDER BY te.position"
        );
        sqlx::query_as::<_, TemplateExercise>(&query)
            .bind(template_id)
            .fetch_all(pool)
            .await
    }

    /// Add a prescribed exercise. Without an explicit position it is
    /// appended after the current last one.
    ///
    /// A position already taken violates `uq_template_exercises_position`.
    pub async fn add_exercise(
        pool: &PgPool,
        template_id: DbId,
        input: &AddTemplateExercise,
    ) -> Result<TemplateExercise, sqlx::Error> {
        let query = format!(
            "WITH inserted AS ( \
                INSERT INTO template_exercises \
                    (template_id, exercise_id, position, sets, reps, weight, notes) \
                VALUES ($1, $2, \
                    COALESCE($3, (SELECT COALESCE(MAX(position) + 1, 0) \
                                  FROM template_exercises WHERE template_id = $1)), \
                    $4, $5, $6, $7) \
                RETURNING * \
             ) \
             SELECT {EXERCISE_COLUMNS} \
             FROM inserted te \
             JOIN exercises e ON e.id = te.exercise_id"
        );
        sqlx::query_as::<_, TemplateExercise>(&query)
            .bind(template_id)
            .bind(input.exercise_id)
            .bind(input.position)
            .bind(input.sets)
            .bind(input.reps)
            .bind(input.weight)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Update template metadata. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTemplate,
    ) -> Result<Option<WorkoutTemplate>, sqlx::Error> {
        let query = format!(
            "UPDATE workout_templates SET \
                title = COALESCE($2, title), \
                category = COALESCE($3, category), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkoutTemplate>(&query)
            .bind(id)
            .bind(input.title.as_deref().map(str::trim))
            .bind(input.category.as_deref().map(str::trim))
            .fetch_optional(pool)
            .await
    }

    /// Delete a template; its exercises cascade. Fails with a foreign-key
    /// violation while assignments still reference the template.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM workout_templates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
