//! Work session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::Id;

/// A timed interval of work on a task by a user.
///
/// A session is open while `end` is `None`. For a given `(user, task)`
/// pair at most one session is open at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Surrogate identifier.
    pub id: Id,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
    /// Start of work.
    #[sqlx(rename = "sess_begin")]
    pub begin: DateTime<Utc>,
    /// End of work, `None` while the session is running.
    #[sqlx(rename = "sess_end")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    /// The task worked on.
    pub task_id: Id,
    /// The user working.
    pub user_id: Id,
}

impl Session {
    /// Whether the session is still running.
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }
}

/// Data required to open a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSession {
    /// The user working.
    pub user_id: Id,
    /// The task worked on.
    pub task_id: Id,
    /// Start of work.
    pub begin: DateTime<Utc>,
}
