//! Assignments, sessions, exercise logs and weekly progress.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_auth, post_json_auth, put_json_auth, seed_actors, Actors};
use fieldhouse_core::roles::Role;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_exercise(pool: &PgPool, token: &str, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/exercises",
        serde_json::json!({"name": name, "category": "strength"}),
        token,
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn create_template(pool: &PgPool, token: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/templates",
        serde_json::json!({"title": "Week Block", "category": "strength"}),
        token,
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn assign(pool: &PgPool, actors: &Actors, template_id: i64, week_start: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/assignments",
        serde_json::json!({
            "athlete_id": actors.athlete.id,
            "template_id": template_id,
            "week_start": week_start,
        }),
        &actors.admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn start_session(pool: &PgPool, token: &str, assignment_id: i64) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_auth(
        app,
        &format!("/api/v1/assignments/{assignment_id}/session"),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"].clone()
}

async fn log_exercise(
    pool: &PgPool,
    token: &str,
    session_id: i64,
    exercise_id: i64,
    completed: bool,
) -> axum::http::Response<axum::body::Body> {
    let app = common::build_test_app(pool.clone());
    put_json_auth(
        app,
        &format!("/api/v1/sessions/{session_id}/logs/{exercise_id}"),
        serde_json::json!({"completed": completed, "sets": 3, "reps": 8}),
        token,
    )
    .await
}

// ---------------------------------------------------------------------------
// Assignments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assignment_week_end_is_derived(pool: PgPool) {
    let actors = seed_actors(&pool).await;
    let template_id = create_template(&pool, &actors.admin_token).await;
    let id = assign(&pool, &actors, template_id, "2026-12-28").await;

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/assignments/{id}"),
        &actors.athlete_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["week_start"], "2026-12-28");
    assert_eq!(json["data"]["week_end"], "2027-01-03");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assignment_for_non_athlete_returns_400(pool: PgPool) {
    let actors = seed_actors(&pool).await;
    let member = common::create_user(&pool, "visitor", Role::Member).await;
    let template_id = create_template(&pool, &actors.admin_token).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/assignments",
        serde_json::json!({
            "athlete_id": member.id,
            "template_id": template_id,
            "week_start": "2026-03-02",
        }),
        &actors.admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assignment_with_unrepresentable_week_returns_400(pool: PgPool) {
    let actors = seed_actors(&pool).await;
    let template_id = create_template(&pool, &actors.admin_token).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/assignments",
        serde_json::json!({
            "athlete_id": actors.athlete.id,
            "template_id": template_id,
            "week_start": "+262142-12-31",
        }),
        &actors.admin_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_week_listing_drops_partial_overlap(pool: PgPool) {
    let actors = seed_actors(&pool).await;
    let template_id = create_template(&pool, &actors.admin_token).await;
    let inside = assign(&pool, &actors, template_id, "2026-03-02").await;
    assign(&pool, &actors, template_id, "2026-03-05").await;

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!(
            "/api/v1/assignments?athlete_id={}&week_start=2026-03-02&week_end=2026-03-08",
            actors.athlete.id
        ),
        &actors.athlete_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [inside]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inverted_week_range_returns_400(pool: PgPool) {
    let actors = seed_actors(&pool).await;
    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        "/api/v1/assignments?week_start=2026-03-08&week_end=2026-03-02",
        &actors.admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ensure_session_is_idempotent(pool: PgPool) {
    let actors = seed_actors(&pool).await;
    let template_id = create_template(&pool, &actors.admin_token).await;
    let assignment_id = assign(&pool, &actors, template_id, "2026-03-02").await;

    let first = start_session(&pool, &actors.athlete_token, assignment_id).await;
    let second = start_session(&pool, &actors.athlete_token, assignment_id).await;

    assert_eq!(first["id"], second["id"]);
    assert_eq!(first["status"], "in_progress");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ensure_session_for_missing_assignment_returns_404(pool: PgPool) {
    let actors = seed_actors(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_auth(app, "/api/v1/assignments/999999/session", &actors.admin_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_complete_twice_keeps_completed_at(pool: PgPool) {
    let actors = seed_actors(&pool).await;
    let template_id = create_template(&pool, &actors.admin_token).await;
    let assignment_id = assign(&pool, &actors, template_id, "2026-03-02").await;
    let session = start_session(&pool, &actors.athlete_token, assignment_id).await;
    let uri = format!("/api/v1/sessions/{}/complete", session["id"]);

    let app = common::build_test_app(pool.clone());
    let first = body_json(post_auth(app, &uri, &actors.athlete_token).await).await;
    assert_eq!(first["data"]["status"], "completed");
    assert!(first["data"]["completed_at"].is_string());

    let app = common::build_test_app(pool);
    let response = post_auth(app, &uri, &actors.athlete_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let second = body_json(response).await;
    assert_eq!(second["data"]["completed_at"], first["data"]["completed_at"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_other_athlete_cannot_start_session(pool: PgPool) {
    let actors = seed_actors(&pool).await;
    let other = common::create_user(&pool, "thrower", Role::Athlete).await;
    let template_id = create_template(&pool, &actors.admin_token).await;
    let assignment_id = assign(&pool, &actors, template_id, "2026-03-02").await;

    let app = common::build_test_app(pool);
    let response = post_auth(
        app,
        &format!("/api/v1/assignments/{assignment_id}/session"),
        &common::token_for(other.id, Role::Athlete),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Exercise logs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_second_log_overwrites_first(pool: PgPool) {
    let actors = seed_actors(&pool).await;
    let exercise_id = create_exercise(&pool, &actors.admin_token, "Lunge").await;
    let template_id = create_template(&pool, &actors.admin_token).await;
    let assignment_id = assign(&pool, &actors, template_id, "2026-03-02").await;
    let session_id = start_session(&pool, &actors.athlete_token, assignment_id).await["id"]
        .as_i64()
        .unwrap();

    let response = log_exercise(&pool, &actors.athlete_token, session_id, exercise_id, false).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = log_exercise(&pool, &actors.athlete_token, session_id, exercise_id, true).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/sessions/{session_id}"),
        &actors.athlete_token,
    )
    .await;
    let json = body_json(response).await;
    let logs = json["data"]["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["completed"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_log_for_unknown_exercise_returns_400(pool: PgPool) {
    let actors = seed_actors(&pool).await;
    let template_id = create_template(&pool, &actors.admin_token).await;
    let assignment_id = assign(&pool, &actors, template_id, "2026-03-02").await;
    let session_id = start_session(&pool, &actors.athlete_token, assignment_id).await["id"]
        .as_i64()
        .unwrap();

    let response = log_exercise(&pool, &actors.athlete_token, session_id, 999999, true).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_log_for_unknown_session_returns_404(pool: PgPool) {
    let actors = seed_actors(&pool).await;
    let exercise_id = create_exercise(&pool, &actors.admin_token, "Plank").await;

    let response = log_exercise(&pool, &actors.admin_token, 999999, exercise_id, true).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_progress_counts_sessions_and_logs(pool: PgPool) {
    let actors = seed_actors(&pool).await;
    let mut exercises = Vec::new();
    for name in ["Squat", "Bench", "Row", "Carry"] {
        exercises.push(create_exercise(&pool, &actors.admin_token, name).await);
    }
    let template_id = create_template(&pool, &actors.admin_token).await;

    let mut sessions = Vec::new();
    for _ in 0..3 {
        let assignment_id = assign(&pool, &actors, template_id, "2026-03-02").await;
        let session = start_session(&pool, &actors.athlete_token, assignment_id).await;
        sessions.push(session["id"].as_i64().unwrap());
    }

    // Two sessions fully logged and completed; the third has 1 of 4 done.
    for &session_id in &sessions[..2] {
        for &exercise_id in &exercises {
            log_exercise(&pool, &actors.athlete_token, session_id, exercise_id, true).await;
        }
        let app = common::build_test_app(pool.clone());
        post_auth(
            app,
            &format!("/api/v1/sessions/{session_id}/complete"),
            &actors.athlete_token,
        )
        .await;
    }
    for (i, &exercise_id) in exercises.iter().enumerate() {
        log_exercise(&pool, &actors.athlete_token, sessions[2], exercise_id, i == 0).await;
    }

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!(
            "/api/v1/athletes/{}/progress?week_start=2026-03-02&week_end=2026-03-08",
            actors.athlete.id
        ),
        &actors.athlete_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json["data"],
        serde_json::json!({
            "workoutsCompleted": 2,
            "workoutsTotal": 3,
            "exercisesCompleted": 9,
            "exercisesTotal": 12,
        })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_progress_for_empty_week_is_zero(pool: PgPool) {
    let actors = seed_actors(&pool).await;
    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!(
            "/api/v1/athletes/{}/progress?week_start=2026-03-02&week_end=2026-03-08",
            actors.athlete.id
        ),
        &actors.admin_token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["workoutsTotal"], 0);
    assert_eq!(json["data"]["exercisesTotal"], 0);
}
