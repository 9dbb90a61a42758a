//! Integration tests for session start/stop and statistics.

mod helpers;

use axum::http::StatusCode;
use chrono::{TimeDelta, TimeZone, Utc};
use helpers::{TestApp, id_of};

const TASK: i64 = 7;

#[tokio::test]
async fn test_start_twice_conflicts() {
    let Some(app) = TestApp::new().await else { return };
    let user_id = id_of(&app.create_user().await);
    let path = format!("/api/v1/sessions/{user_id}/{TASK}");

    let first = app.request("POST", &path, None).await;
    assert_eq!(first.status, StatusCode::CREATED);
    assert!(first.body["data"].get("end").is_none());

    let second = app.request("POST", &path, None).await;
    assert_eq!(second.status, StatusCode::CONFLICT);

    assert_eq!(app.open_sessions(user_id, TASK).await, 1);
}

#[tokio::test]
async fn test_concurrent_starts_open_one_session() {
    let Some(app) = TestApp::new().await else { return };
    let user_id = id_of(&app.create_user().await);
    let path = format!("/api/v1/sessions/{user_id}/{TASK}");

    let (a, b) = tokio::join!(
        app.request("POST", &path, None),
        app.request("POST", &path, None)
    );

    let mut statuses = [a.status, b.status];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::CONFLICT]);
    assert_eq!(app.open_sessions(user_id, TASK).await, 1);
}

#[tokio::test]
async fn test_stop_closes_session_once() {
    let Some(app) = TestApp::new().await else { return };
    let user_id = id_of(&app.create_user().await);
    let path = format!("/api/v1/sessions/{user_id}/{TASK}");

    assert_eq!(app.request("POST", &path, None).await.status, StatusCode::CREATED);

    let stopped = app.request("DELETE", &path, None).await;
    assert_eq!(stopped.status, StatusCode::OK);
    let session = &stopped.body["data"];
    let begin: chrono::DateTime<Utc> = serde_json::from_value(session["begin"].clone()).unwrap();
    let end: chrono::DateTime<Utc> = serde_json::from_value(session["end"].clone()).unwrap();
    assert!(end >= begin);

    let again = app.request("DELETE", &path, None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    assert_eq!(app.request("POST", &path, None).await.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_start_for_unknown_user_is_not_found() {
    let Some(app) = TestApp::new().await else { return };

    let response = app
        .request("POST", &format!("/api/v1/sessions/{}/{TASK}", i64::MAX), None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_sessions_in_start_order() {
    let Some(app) = TestApp::new().await else { return };
    let user_id = id_of(&app.create_user().await);
    let at = |h, m| Utc.with_ymd_and_hms(2024, 5, 1, h, m, 0).unwrap();

    app.insert_session(user_id, 2, at(12, 0), Some(at(12, 30))).await;
    app.insert_session(user_id, 1, at(9, 0), Some(at(9, 15))).await;

    let response = app
        .request("GET", &format!("/api/v1/sessions/{user_id}"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let sessions = response.body["data"].as_array().unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0]["taskId"], 1);
    assert_eq!(sessions[1]["taskId"], 2);
}

#[tokio::test]
async fn test_stats_window_excludes_later_open_session() {
    let Some(app) = TestApp::new().await else { return };
    let user_id = id_of(&app.create_user().await);
    let at = |h, m| Utc.with_ymd_and_hms(2024, 5, 1, h, m, 0).unwrap();

    app.insert_session(user_id, TASK, at(10, 0), Some(at(10, 30))).await;
    app.insert_session(user_id, TASK, at(11, 0), None).await;

    let response = app
        .request(
            "GET",
            &format!("/api/v1/users/{user_id}/stats?before=05-01-2024%2010:45"),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let stats = response.body["data"].as_array().unwrap();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0]["taskId"], TASK);
    assert_eq!(stats[0]["time"], "0h30m00s");
    assert_eq!(stats[0]["seconds"], 1800);
}

#[tokio::test]
async fn test_stats_open_session_counts_until_now() {
    let Some(app) = TestApp::new().await else { return };
    let user_id = id_of(&app.create_user().await);
    let now = Utc::now();

    app.insert_session(
        user_id,
        TASK,
        now - TimeDelta::hours(2),
        Some(now - TimeDelta::minutes(90)),
    )
    .await;
    app.insert_session(user_id, TASK, now - TimeDelta::minutes(15), None)
        .await;

    let response = app
        .request("GET", &format!("/api/v1/users/{user_id}/stats"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let seconds = response.body["data"][0]["seconds"].as_i64().unwrap();
    assert!((45 * 60..45 * 60 + 60).contains(&seconds), "got {seconds}");
}

#[tokio::test]
async fn test_stats_sorted_by_duration() {
    let Some(app) = TestApp::new().await else { return };
    let user_id = id_of(&app.create_user().await);
    let at = |h, m| Utc.with_ymd_and_hms(2024, 5, 1, h, m, 0).unwrap();

    app.insert_session(user_id, 1, at(9, 0), Some(at(11, 0))).await;
    app.insert_session(user_id, 2, at(9, 0), Some(at(9, 5))).await;
    app.insert_session(user_id, 3, at(9, 0), Some(at(10, 0))).await;

    let response = app
        .request("GET", &format!("/api/v1/users/{user_id}/stats"), None)
        .await;

    let tasks: Vec<i64> = response.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["taskId"].as_i64().unwrap())
        .collect();
    assert_eq!(tasks, vec![2, 3, 1]);
}

#[tokio::test]
async fn test_stats_for_unknown_user_is_not_found() {
    let Some(app) = TestApp::new().await else { return };

    let response = app
        .request("GET", &format!("/api/v1/users/{}/stats", i64::MAX), None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_user_removes_sessions() {
    let Some(app) = TestApp::new().await else { return };
    let user_id = id_of(&app.create_user().await);

    let path = format!("/api/v1/sessions/{user_id}/{TASK}");
    assert_eq!(app.request("POST", &path, None).await.status, StatusCode::CREATED);
    assert_eq!(
        app.request("DELETE", &format!("/api/v1/users/{user_id}"), None)
            .await
            .status,
        StatusCode::NO_CONTENT
    );

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sessions WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}
