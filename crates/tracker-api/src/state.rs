//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use tracker_core::config::AppConfig;
use tracker_core::traits::PeopleDirectory;
use tracker_database::repositories::{SessionRepository, UserRepository};
use tracker_service::{SessionService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// User registry
    pub user_service: Arc<UserService>,
    /// Session lifecycle and statistics
    pub session_service: Arc<SessionService>,
}

impl AppState {
    /// Wires repositories and services around a pool and a people directory.
    pub fn new(config: AppConfig, db_pool: PgPool, people: Arc<dyn PeopleDirectory>) -> Self {
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let session_repo = Arc::new(SessionRepository::new(db_pool.clone()));

        let user_service = Arc::new(UserService::new(Arc::clone(&user_repo), people));
        let session_service = Arc::new(SessionService::new(session_repo, user_repo));

        Self {
            config: Arc::new(config),
            db_pool,
            user_service,
            session_service,
        }
    }
}
