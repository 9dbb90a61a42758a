//! Integration tests for the user registry.

mod helpers;

use axum::http::StatusCode;
use helpers::{TestApp, UNKNOWN_PASSPORT_NUMBER, id_of, unique_passport};

#[tokio::test]
async fn test_create_user_enriches_from_people_service() {
    let Some(app) = TestApp::new().await else { return };
    let (serie, number) = unique_passport();

    let response = app
        .request(
            "POST",
            "/api/v1/users",
            Some(serde_json::json!({ "passportNumber": format!("{serie:04} {number:06}") })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let user = &response.body["data"];
    assert_eq!(user["name"], "Ivan");
    assert_eq!(user["patronymic"], "Sergeevich");
    assert_eq!(user["passportSerie"], serie);
    assert_eq!(user["passportNumber"], number);
}

#[tokio::test]
async fn test_duplicate_passport_conflicts() {
    let Some(app) = TestApp::new().await else { return };
    let (serie, number) = unique_passport();
    let body = serde_json::json!({ "passportNumber": format!("{serie:04} {number:06}") });

    let first = app.request("POST", "/api/v1/users", Some(body.clone())).await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app.request("POST", "/api/v1/users", Some(body)).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["error"], "CONFLICT");

    let rows: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM users WHERE passport_serie = $1 AND passport_number = $2",
    )
    .bind(serie)
    .bind(number)
    .fetch_one(&app.db_pool)
    .await
    .unwrap();
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn test_unknown_person_is_not_found() {
    let Some(app) = TestApp::new().await else { return };

    let response = app
        .request(
            "POST",
            "/api/v1/users",
            Some(serde_json::json!({
                "passportNumber": format!("1234 {UNKNOWN_PASSPORT_NUMBER:06}")
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_then_get_round_trip() {
    let Some(app) = TestApp::new().await else { return };
    let user = app.create_user().await;
    let id = id_of(&user);

    let updated = app
        .request(
            "PUT",
            &format!("/api/v1/users/{id}"),
            Some(serde_json::json!({ "address": "X" })),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);

    let fetched = app.request("GET", &format!("/api/v1/users/{id}"), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    let fetched = &fetched.body["data"];
    assert_eq!(fetched["address"], "X");
    for field in ["name", "surname", "patronymic", "passportSerie", "passportNumber", "createdAt"] {
        assert_eq!(fetched[field], user[field], "{field} changed");
    }
}

#[tokio::test]
async fn test_empty_update_returns_unchanged_user() {
    let Some(app) = TestApp::new().await else { return };
    let user = app.create_user().await;
    let id = id_of(&user);

    let response = app
        .request("PUT", &format!("/api/v1/users/{id}"), Some(serde_json::json!({})))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"], user);
}

#[tokio::test]
async fn test_update_to_taken_passport_conflicts() {
    let Some(app) = TestApp::new().await else { return };
    let first = app.create_user().await;
    let second = app.create_user().await;

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/users/{}", id_of(&second)),
            Some(serde_json::json!({
                "passportSerie": first["passportSerie"],
                "passportNumber": first["passportNumber"],
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let Some(app) = TestApp::new().await else { return };

    let response = app
        .request(
            "PUT",
            "/api/v1/users/9223372036854775807",
            Some(serde_json::json!({ "name": "Nobody" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user() {
    let Some(app) = TestApp::new().await else { return };
    let id = id_of(&app.create_user().await);
    let path = format!("/api/v1/users/{id}");

    assert_eq!(app.request("DELETE", &path, None).await.status, StatusCode::NO_CONTENT);
    assert_eq!(app.request("GET", &path, None).await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.request("DELETE", &path, None).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_users_filters_by_passport() {
    let Some(app) = TestApp::new().await else { return };
    let user = app.create_user().await;
    app.create_user().await;

    let response = app
        .request(
            "GET",
            &format!(
                "/api/v1/users?passportSerie={}&passportNumber={}",
                user["passportSerie"], user["passportNumber"]
            ),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let users = response.body["data"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["id"], user["id"]);
}

#[tokio::test]
async fn test_list_users_page_size() {
    let Some(app) = TestApp::new().await else { return };
    app.create_user().await;
    app.create_user().await;

    let response = app.request("GET", "/api/v1/users?page=1&pageSize=1", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);
}
