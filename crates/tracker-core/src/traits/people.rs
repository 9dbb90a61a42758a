//! External people lookup trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// Personal data returned by the people lookup service for a passport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Given name.
    pub name: String,
    /// Family name.
    pub surname: String,
    /// Patronymic, when the person has one.
    #[serde(default)]
    pub patronymic: Option<String>,
    /// Postal address.
    pub address: String,
}

/// Resolves a passport serie/number pair to a person.
///
/// Implementations must report an unknown passport as
/// [`ErrorKind::NotFound`](crate::error::ErrorKind::NotFound) and any
/// transport or protocol failure as
/// [`ErrorKind::ExternalService`](crate::error::ErrorKind::ExternalService).
#[async_trait]
pub trait PeopleDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// Look up the person holding the given passport.
    async fn lookup(&self, passport_serie: i32, passport_number: i32) -> AppResult<Person>;
}
