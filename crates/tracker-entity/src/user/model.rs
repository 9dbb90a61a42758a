//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use tracker_core::traits::Person;

use crate::Id;

/// A tracked person, identified naturally by passport serie and number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Surrogate identifier.
    pub id: Id,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
    /// Given name.
    pub name: String,
    /// Family name.
    pub surname: String,
    /// Patronymic (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patronymic: Option<String>,
    /// Passport serie, first half of the natural key.
    pub passport_serie: i32,
    /// Passport number, second half of the natural key.
    pub passport_number: i32,
    /// Postal address.
    pub address: String,
}

/// Data required to insert a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Given name.
    pub name: String,
    /// Family name.
    pub surname: String,
    /// Patronymic.
    pub patronymic: Option<String>,
    /// Passport serie.
    pub passport_serie: i32,
    /// Passport number.
    pub passport_number: i32,
    /// Postal address.
    pub address: String,
}

impl CreateUser {
    /// Build insert data from a people lookup result.
    pub fn from_person(person: Person, passport_serie: i32, passport_number: i32) -> Self {
        Self {
            name: person.name,
            surname: person.surname,
            patronymic: person.patronymic,
            passport_serie,
            passport_number,
            address: person.address,
        }
    }
}

/// Partial update of a user; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New given name.
    pub name: Option<String>,
    /// New family name.
    pub surname: Option<String>,
    /// New patronymic.
    pub patronymic: Option<String>,
    /// New passport serie.
    pub passport_serie: Option<i32>,
    /// New passport number.
    pub passport_number: Option<i32>,
    /// New address.
    pub address: Option<String>,
}

impl UpdateUser {
    /// Returns `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Equality filter over user columns; unset fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFilter {
    /// Exact name.
    pub name: Option<String>,
    /// Exact surname.
    pub surname: Option<String>,
    /// Exact patronymic.
    pub patronymic: Option<String>,
    /// Exact passport serie.
    pub passport_serie: Option<i32>,
    /// Exact passport number.
    pub passport_number: Option<i32>,
    /// Exact address.
    pub address: Option<String>,
}
