//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod assignment_repo;
pub mod exercise_log_repo;
pub mod exercise_repo;
pub mod readiness_repo;
pub mod template_repo;
pub mod user_repo;
pub mod workout_session_repo;

pub use assignment_repo::AssignmentRepo;
pub use exercise_log_repo::ExerciseLogRepo;
pub use exercise_repo::ExerciseRepo;
pub use readiness_repo::ReadinessRepo;
pub use template_repo::TemplateRepo;
pub use user_repo::UserRepo;
pub use workout_session_repo::WorkoutSessionRepo;
