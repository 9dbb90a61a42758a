//! Work session repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use tracker_core::error::{AppError, ErrorKind};
use tracker_core::result::AppResult;
use tracker_core::types::window::DurationWindow;
use tracker_entity::Id;
use tracker_entity::session::{CreateSession, Session};

use super::{is_foreign_key_violation, is_unique_violation};

/// Name of the partial unique index allowing one open session per user and task.
pub const OPEN_SESSION_CONSTRAINT: &str = "sessions_open_user_task_key";

/// Repository for work session queries and state transitions.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the most recently started session for a task and user.
    pub async fn find_last_by_task_and_user(
        &self,
        task_id: Id,
        user_id: Id,
    ) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>(
            "SELECT * FROM sessions WHERE task_id = $1 AND user_id = $2 \
             ORDER BY sess_begin DESC, id DESC LIMIT 1",
        )
        .bind(task_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find last session", e)
        })
    }

    /// List every session of a user in start order.
    pub async fn find_by_user(&self, user_id: Id) -> AppResult<Vec<Session>> {
        sqlx::query_as::<_, Session>(
            "SELECT * FROM sessions WHERE user_id = $1 ORDER BY sess_begin ASC, id ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list sessions", e))
    }

    /// List the sessions of a user that overlap `window`.
    ///
    /// Open sessions overlap any window that starts before `before`.
    pub async fn find_by_user_in_window(
        &self,
        user_id: Id,
        window: &DurationWindow,
    ) -> AppResult<Vec<Session>> {
        sqlx::query_as::<_, Session>(
            "SELECT * FROM sessions WHERE user_id = $1 \
               AND ($2::timestamptz IS NULL OR sess_end IS NULL OR sess_end > $2) \
               AND ($3::timestamptz IS NULL OR sess_begin < $3) \
             ORDER BY sess_begin ASC, id ASC",
        )
        .bind(user_id)
        .bind(window.after)
        .bind(window.before)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list sessions in window", e)
        })
    }

    /// Insert a new open session.
    ///
    /// Fails with a conflict when the user already has an open session for
    /// the task, and with not-found when the user does not exist.
    pub async fn create(&self, data: &CreateSession) -> AppResult<Session> {
        sqlx::query_as::<_, Session>(
            "INSERT INTO sessions (user_id, task_id, sess_begin) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.task_id)
        .bind(data.begin)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e, OPEN_SESSION_CONSTRAINT) {
                AppError::conflict(format!(
                    "Session for task {} is already running",
                    data.task_id
                ))
            } else if is_foreign_key_violation(&e) {
                AppError::not_found(format!("User {} not found", data.user_id))
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to create session", e)
            }
        })
    }

    /// Close the open session for a task and user in a single statement.
    ///
    /// The end is never set before the begin. Returns `None` when no
    /// session is open.
    pub async fn close_open(
        &self,
        user_id: Id,
        task_id: Id,
        end: DateTime<Utc>,
    ) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>(
            "UPDATE sessions SET sess_end = GREATEST($3, sess_begin), updated_at = NOW() \
             WHERE sess_end IS NULL AND id = ( \
                 SELECT id FROM sessions \
                 WHERE user_id = $1 AND task_id = $2 AND sess_end IS NULL \
                 ORDER BY sess_begin DESC LIMIT 1 \
                 FOR UPDATE \
             ) RETURNING *",
        )
        .bind(user_id)
        .bind(task_id)
        .bind(end)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to close session", e))
    }
}
