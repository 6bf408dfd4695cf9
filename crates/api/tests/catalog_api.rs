//! Exercise catalog and workout template endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth, seed_actors};
use sqlx::PgPool;

async fn create_exercise(pool: &PgPool, token: &str, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/exercises",
        serde_json::json!({"name": name, "category": "strength"}),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_get_exercise(pool: PgPool) {
    let actors = seed_actors(&pool).await;
    let id = create_exercise(&pool, &actors.admin_token, "Back Squat").await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/exercises/{id}"), &actors.athlete_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Back Squat");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_exercise_name_returns_400(pool: PgPool) {
    let actors = seed_actors(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/exercises",
        serde_json::json!({"name": "   ", "category": "strength"}),
        &actors.admin_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_and_delete_exercise(pool: PgPool) {
    let actors = seed_actors(&pool).await;
    let id = create_exercise(&pool, &actors.admin_token, "Press").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/exercises/{id}"),
        serde_json::json!({"name": "Overhead Press"}),
        &actors.admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["name"], "Overhead Press");

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/exercises/{id}"), &actors.admin_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/exercises/{id}"), &actors.admin_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_template_exercises_come_back_in_order(pool: PgPool) {
    let actors = seed_actors(&pool).await;
    let squat = create_exercise(&pool, &actors.admin_token, "Squat").await;
    let bench = create_exercise(&pool, &actors.admin_token, "Bench").await;
    let row = create_exercise(&pool, &actors.admin_token, "Row").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/templates",
        serde_json::json!({
            "title": "Full Body A",
            "category": "strength",
            "exercises": [
                {"exercise_id": squat, "sets": 5, "reps": 5},
                {"exercise_id": bench, "sets": 3, "reps": 8},
            ],
        }),
        &actors.admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let template = body_json(response).await;
    let template_id = template["data"]["id"].as_i64().unwrap();
    assert_eq!(template["data"]["title"], "Full Body A");
    assert_eq!(template["data"]["exercises"][0]["exercise_name"], "Squat");
    assert_eq!(template["data"]["exercises"][1]["position"], 1);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/templates/{template_id}/exercises"),
        serde_json::json!({"exercise_id": row, "sets": 3, "reps": 10}),
        &actors.admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["position"], 2);

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/templates/{template_id}"),
        &actors.athlete_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json["data"]["exercises"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["exercise_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Squat", "Bench", "Row"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_template_with_unknown_exercise_returns_400(pool: PgPool) {
    let actors = seed_actors(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/templates",
        serde_json::json!({
            "title": "Ghost",
            "category": "strength",
            "exercises": [{"exercise_id": 424242}],
        }),
        &actors.admin_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("424242"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_assigned_template_returns_409(pool: PgPool) {
    let actors = seed_actors(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/templates",
        serde_json::json!({"title": "Deload", "category": "recovery"}),
        &actors.admin_token,
    )
    .await;
    let template_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/assignments",
        serde_json::json!({
            "athlete_id": actors.athlete.id,
            "template_id": template_id,
            "week_start": "2026-03-02",
        }),
        &actors.admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = delete_auth(
        app,
        &format!("/api/v1/templates/{template_id}"),
        &actors.admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
