//! User registry service.

use std::sync::Arc;

use tracing::{debug, info};

use tracker_core::error::AppError;
use tracker_core::traits::PeopleDirectory;
use tracker_core::types::PageRequest;
use tracker_database::repositories::UserRepository;
use tracker_entity::Id;
use tracker_entity::user::{CreateUser, UpdateUser, User, UserFilter};

use super::passport::Passport;
use super::validation::{validate_filter, validate_update};
use crate::context::RequestContext;

/// Handles user lookup, creation, update, and deletion.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// External people lookup used to enrich new users.
    people: Arc<dyn PeopleDirectory>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repo: Arc<UserRepository>, people: Arc<dyn PeopleDirectory>) -> Self {
        Self { user_repo, people }
    }

    /// Lists users matching the filter, one page at a time.
    pub async fn find(
        &self,
        _ctx: &RequestContext,
        filter: &UserFilter,
        page: &PageRequest,
    ) -> Result<Vec<User>, AppError> {
        validate_filter(filter)?;
        self.user_repo.find(filter, page).await
    }

    /// Gets a user by ID.
    pub async fn get(&self, _ctx: &RequestContext, id: Id) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    /// Creates a user from a `"SERIE NUMBER"` passport string.
    ///
    /// Name and address come from the people lookup service.
    pub async fn create(&self, ctx: &RequestContext, passport: &str) -> Result<User, AppError> {
        let passport = Passport::parse(passport)?;

        let person = self.people.lookup(passport.serie, passport.number).await?;
        let data = CreateUser::from_person(person, passport.serie, passport.number);
        let user = self.user_repo.create(&data).await?;

        info!(request_id = %ctx.request_id, user_id = user.id, "User created");
        debug!(request_id = %ctx.request_id, user_id = user.id, %passport, "Passport registered");

        Ok(user)
    }

    /// Applies a partial update. An empty patch returns the user unchanged.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Id,
        patch: &UpdateUser,
    ) -> Result<User, AppError> {
        validate_update(patch)?;

        let user = self.get(ctx, id).await?;
        if patch.is_empty() {
            return Ok(user);
        }

        let updated = self.user_repo.update(id, patch).await?;

        info!(request_id = %ctx.request_id, user_id = id, "User updated");

        Ok(updated)
    }

    /// Deletes a user together with their sessions.
    pub async fn delete(&self, ctx: &RequestContext, id: Id) -> Result<(), AppError> {
        self.get(ctx, id).await?;

        if !self.user_repo.delete(id).await? {
            return Err(AppError::not_found(format!("User {id} not found")));
        }

        info!(request_id = %ctx.request_id, user_id = id, "User deleted");

        Ok(())
    }
}
