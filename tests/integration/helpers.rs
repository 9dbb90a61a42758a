//! Shared test helpers for integration tests.
//!
//! Tests run against the database named by `TRACKER_TEST_DATABASE_URL` and
//! are skipped when it is unset. They never truncate tables, so every test
//! works with freshly created users and unique passports.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use tracker_api::{AppState, build_router};
use tracker_core::config::AppConfig;
use tracker_core::error::AppError;
use tracker_core::result::AppResult;
use tracker_core::traits::{PeopleDirectory, Person};
use tracker_database::DatabasePool;

/// Passport number the fake directory does not know.
pub const UNKNOWN_PASSPORT_NUMBER: i32 = 0;

/// In-process stand-in for the people lookup service.
#[derive(Debug)]
pub struct FakePeople;

#[async_trait]
impl PeopleDirectory for FakePeople {
    async fn lookup(&self, passport_serie: i32, passport_number: i32) -> AppResult<Person> {
        if passport_number == UNKNOWN_PASSPORT_NUMBER {
            return Err(AppError::not_found("Person not found"));
        }
        Ok(Person {
            name: "Ivan".to_string(),
            surname: "Petrov".to_string(),
            patronymic: Some("Sergeevich".to_string()),
            address: format!("Moscow, block {passport_serie}"),
        })
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
}

/// Response captured from the router.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    /// Create a new test application, or `None` when no test database is configured.
    pub async fn new() -> Option<Self> {
        let Ok(url) = std::env::var("TRACKER_TEST_DATABASE_URL") else {
            eprintln!("TRACKER_TEST_DATABASE_URL not set, skipping");
            return None;
        };

        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "database": { "url": url, "max_connections": 5, "min_connections": 0 },
            "people": { "base_url": "http://127.0.0.1:1" },
        }))
        .expect("test config");

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        tracker_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let db_pool = db.into_pool();
        let state = AppState::new(config, db_pool.clone(), Arc::new(FakePeople));

        Some(Self {
            router: build_router(state),
            db_pool,
        })
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);
        let body = match body {
            Some(json) => {
                req = req.header("Content-Type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(req.body(body).expect("Failed to build request"))
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response is not JSON")
        };

        TestResponse { status, body }
    }

    /// Create a user through the API and return the `data` object.
    pub async fn create_user(&self) -> Value {
        let (serie, number) = unique_passport();
        let response = self
            .request(
                "POST",
                "/api/v1/users",
                Some(serde_json::json!({ "passportNumber": format!("{serie:04} {number:06}") })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"].clone()
    }

    /// Insert a session row directly, bypassing the request clock.
    pub async fn insert_session(
        &self,
        user_id: i64,
        task_id: i64,
        begin: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    ) {
        sqlx::query("INSERT INTO sessions (user_id, task_id, sess_begin, sess_end) VALUES ($1, $2, $3, $4)")
            .bind(user_id)
            .bind(task_id)
            .bind(begin)
            .bind(end)
            .execute(&self.db_pool)
            .await
            .expect("Failed to insert session");
    }

    /// Count open sessions for a user and task.
    pub async fn open_sessions(&self, user_id: i64, task_id: i64) -> i64 {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM sessions WHERE user_id = $1 AND task_id = $2 AND sess_end IS NULL",
        )
        .bind(user_id)
        .bind(task_id)
        .fetch_one(&self.db_pool)
        .await
        .expect("Failed to count sessions")
    }
}

/// A passport pair that is very unlikely to exist yet.
pub fn unique_passport() -> (i32, i32) {
    let n = uuid::Uuid::new_v4().as_u128();
    let serie = (n % 10_000) as i32;
    let number = ((n / 10_000) % 999_999) as i32 + 1;
    (serie, number)
}

/// The `id` of a user or session object.
pub fn id_of(value: &Value) -> i64 {
    value["id"].as_i64().expect("object has an id")
}
