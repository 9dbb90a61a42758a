//! Session lifecycle service.

use std::sync::Arc;

use tracing::{debug, info};

use tracker_core::error::AppError;
use tracker_core::types::DurationWindow;
use tracker_database::repositories::{SessionRepository, UserRepository};
use tracker_entity::Id;
use tracker_entity::session::{CreateSession, Session};
use tracker_entity::stats::TaskDuration;

use crate::context::RequestContext;
use crate::stats::aggregator;

/// Starts and stops work sessions and computes per-task statistics.
#[derive(Debug, Clone)]
pub struct SessionService {
    /// Session repository.
    session_repo: Arc<SessionRepository>,
    /// User repository, for existence checks.
    user_repo: Arc<UserRepository>,
}

impl SessionService {
    /// Creates a new session service.
    pub fn new(session_repo: Arc<SessionRepository>, user_repo: Arc<UserRepository>) -> Self {
        Self {
            session_repo,
            user_repo,
        }
    }

    /// Starts a session for the task, beginning at the request time.
    ///
    /// Fails with a conflict while the previous session for the same task
    /// is still open. A concurrent start that slips past the lookup is
    /// rejected by the open-session index with the same error.
    pub async fn start(
        &self,
        ctx: &RequestContext,
        user_id: Id,
        task_id: Id,
    ) -> Result<Session, AppError> {
        let last = self
            .session_repo
            .find_last_by_task_and_user(task_id, user_id)
            .await?;

        if last.as_ref().is_some_and(Session::is_open) {
            return Err(AppError::conflict(format!(
                "Session for task {task_id} is already running"
            )));
        }

        let session = self
            .session_repo
            .create(&CreateSession {
                user_id,
                task_id,
                begin: ctx.request_time,
            })
            .await?;

        info!(
            request_id = %ctx.request_id,
            user_id,
            task_id,
            session_id = session.id,
            "Session started"
        );

        Ok(session)
    }

    /// Stops the open session for the task at the request time.
    pub async fn stop(
        &self,
        ctx: &RequestContext,
        user_id: Id,
        task_id: Id,
    ) -> Result<Session, AppError> {
        let session = self
            .session_repo
            .close_open(user_id, task_id, ctx.request_time)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("No open session for task {task_id}"))
            })?;

        info!(
            request_id = %ctx.request_id,
            user_id,
            task_id,
            session_id = session.id,
            "Session stopped"
        );

        Ok(session)
    }

    /// Lists all sessions of a user in start order.
    pub async fn list(
        &self,
        _ctx: &RequestContext,
        user_id: Id,
    ) -> Result<Vec<Session>, AppError> {
        self.ensure_user_exists(user_id).await?;
        self.session_repo.find_by_user(user_id).await
    }

    /// Computes per-task time spent within the window, shortest first.
    ///
    /// A `before` later than the request time is pulled back to it.
    pub async fn stats(
        &self,
        ctx: &RequestContext,
        user_id: Id,
        window: DurationWindow,
    ) -> Result<Vec<TaskDuration>, AppError> {
        self.ensure_user_exists(user_id).await?;

        let now = ctx.request_time;
        let window = window.clamp_to(now);
        let sessions = self
            .session_repo
            .find_by_user_in_window(user_id, &window)
            .await?;

        debug!(
            request_id = %ctx.request_id,
            user_id,
            sessions = sessions.len(),
            "Aggregating sessions"
        );

        Ok(aggregator::aggregate(&sessions, window, now))
    }

    async fn ensure_user_exists(&self, user_id: Id) -> Result<(), AppError> {
        if self.user_repo.exists(user_id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(format!("User {user_id} not found")))
        }
    }
}
