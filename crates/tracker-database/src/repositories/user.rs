//! User repository implementation.

use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use tracker_core::error::{AppError, ErrorKind};
use tracker_core::result::AppResult;
use tracker_core::types::pagination::PageRequest;
use tracker_entity::Id;
use tracker_entity::user::{CreateUser, UpdateUser, User, UserFilter};

use super::{is_unique_violation, to_sql_bound};

/// Name of the `(passport_serie, passport_number)` unique constraint.
pub const PASSPORT_CONSTRAINT: &str = "users_passport_key";

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Id) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Returns `true` if a user with the given id exists.
    pub async fn exists(&self, id: Id) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check user", e))
    }

    /// List users matching every set field of `filter`, oldest first.
    pub async fn find(&self, filter: &UserFilter, page: &PageRequest) -> AppResult<Vec<User>> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM users WHERE TRUE");

        if let Some(name) = &filter.name {
            query.push(" AND name = ").push_bind(name.clone());
        }
        if let Some(surname) = &filter.surname {
            query.push(" AND surname = ").push_bind(surname.clone());
        }
        if let Some(patronymic) = &filter.patronymic {
            query.push(" AND patronymic = ").push_bind(patronymic.clone());
        }
        if let Some(serie) = filter.passport_serie {
            query.push(" AND passport_serie = ").push_bind(serie);
        }
        if let Some(number) = filter.passport_number {
            query.push(" AND passport_number = ").push_bind(number);
        }
        if let Some(address) = &filter.address {
            query.push(" AND address = ").push_bind(address.clone());
        }

        query
            .push(" ORDER BY created_at ASC, id ASC LIMIT ")
            .push_bind(to_sql_bound(page.limit()))
            .push(" OFFSET ")
            .push_bind(to_sql_bound(page.offset()));

        debug!(sql = query.sql(), "find users");

        query
            .build_query_as::<User>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    /// Insert a new user.
    ///
    /// A duplicate passport pair is reported as a conflict by the unique
    /// constraint, not by a pre-check.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, surname, patronymic, passport_serie, passport_number, address) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.surname)
        .bind(&data.patronymic)
        .bind(data.passport_serie)
        .bind(data.passport_number)
        .bind(&data.address)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e, PASSPORT_CONSTRAINT) {
                AppError::conflict(format!(
                    "User with passport {:04} {:06} already exists",
                    data.passport_serie, data.passport_number
                ))
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to create user", e)
            }
        })
    }

    /// Apply the set fields of `data` to the user.
    pub async fn update(&self, id: Id, data: &UpdateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET name = COALESCE($2, name), \
                              surname = COALESCE($3, surname), \
                              patronymic = COALESCE($4, patronymic), \
                              passport_serie = COALESCE($5, passport_serie), \
                              passport_number = COALESCE($6, passport_number), \
                              address = COALESCE($7, address), \
                              updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.surname)
        .bind(&data.patronymic)
        .bind(data.passport_serie)
        .bind(data.passport_number)
        .bind(&data.address)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e, PASSPORT_CONSTRAINT) {
                AppError::conflict("User with this passport already exists")
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to update user", e)
            }
        })?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    /// Delete a user by ID. Returns `true` if a row was removed.
    ///
    /// The user's sessions are removed by `ON DELETE CASCADE`.
    pub async fn delete(&self, id: Id) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;

        Ok(result.rows_affected() > 0)
    }
}
