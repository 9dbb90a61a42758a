//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use tracker_core::error::AppError;
use tracker_core::types::pagination::{DEFAULT_PAGE_SIZE, PageRequest};
use tracker_core::types::DurationWindow;
use tracker_entity::user::{UpdateUser, UserFilter};

use crate::extractors::time::parse_optional;

/// Create user request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Passport as `"SERIE NUMBER"`, e.g. `"1234 567890"`.
    #[validate(length(min = 1, message = "Passport number is required"))]
    pub passport_number: String,
}

/// Partial user update body. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub patronymic: Option<String>,
    pub passport_serie: Option<i32>,
    pub passport_number: Option<i32>,
    pub address: Option<String>,
}

impl From<UpdateUserRequest> for UpdateUser {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            name: req.name,
            surname: req.surname,
            patronymic: req.patronymic,
            passport_serie: req.passport_serie,
            passport_number: req.passport_number,
            address: req.address,
        }
    }
}

/// Query parameters of `GET /users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersQuery {
    /// Page number (1-based, default: 1).
    pub page: Option<u64>,
    /// Items per page (default: 10, max: 100).
    pub page_size: Option<u64>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub patronymic: Option<String>,
    pub passport_serie: Option<i32>,
    pub passport_number: Option<i32>,
    pub address: Option<String>,
}

impl ListUsersQuery {
    /// Splits into the column filter and the page request.
    pub fn into_parts(self) -> (UserFilter, PageRequest) {
        let page = PageRequest::new(
            self.page.unwrap_or(1),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        );
        let filter = UserFilter {
            name: self.name,
            surname: self.surname,
            patronymic: self.patronymic,
            passport_serie: self.passport_serie,
            passport_number: self.passport_number,
            address: self.address,
        };
        (filter, page)
    }
}

/// Query parameters of `GET /users/{userId}/stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsQuery {
    /// Ignore time before this instant.
    pub after: Option<String>,
    /// Ignore time after this instant.
    pub before: Option<String>,
}

impl StatsQuery {
    /// Parses both bounds into a window.
    pub fn into_window(self) -> Result<DurationWindow, AppError> {
        let after = parse_optional("after", self.after.as_deref())?;
        let before = parse_optional("before", self.before.as_deref())?;
        DurationWindow::new(after, before)
    }
}
