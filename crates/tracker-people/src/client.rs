//! `reqwest`-backed implementation of [`PeopleDirectory`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tracing::{debug, warn};

use tracker_core::config::PeopleConfig;
use tracker_core::error::{AppError, ErrorKind};
use tracker_core::result::AppResult;
use tracker_core::traits::{PeopleDirectory, Person};

/// Looks people up over HTTP at `GET {base_url}/info`.
#[derive(Debug, Clone)]
pub struct HttpPeopleDirectory {
    client: reqwest::Client,
    info_url: Url,
}

impl HttpPeopleDirectory {
    /// Build a client from configuration.
    pub fn new(config: &PeopleConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;
        Self::with_client(client, &config.base_url)
    }

    /// Build a directory around an existing client.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> AppResult<Self> {
        let info_url = Url::parse(&format!("{}/info", base_url.trim_end_matches('/')))
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Invalid people service URL '{base_url}'"),
                    e,
                )
            })?;
        Ok(Self { client, info_url })
    }

    fn lookup_url(&self, passport_serie: i32, passport_number: i32) -> AppResult<Url> {
        Url::parse_with_params(
            self.info_url.as_str(),
            &[
                ("passportSerie", passport_serie.to_string()),
                ("passportNumber", passport_number.to_string()),
            ],
        )
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to build lookup URL", e))
    }
}

#[async_trait]
impl PeopleDirectory for HttpPeopleDirectory {
    async fn lookup(&self, passport_serie: i32, passport_number: i32) -> AppResult<Person> {
        let url = self.lookup_url(passport_serie, passport_number)?;
        debug!(%url, "Looking up person");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(error = %e, "People service request failed");
            AppError::with_source(ErrorKind::ExternalService, "People service unavailable", e)
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::not_found(format!(
                "Person with passport {passport_serie:04} {passport_number:06} not found"
            )));
        }
        if !status.is_success() {
            warn!(status = status.as_u16(), "People service returned an error");
            return Err(AppError::external_service(format!(
                "People service responded with status {status}"
            )));
        }

        response.json::<Person>().await.map_err(|e| {
            warn!(error = %e, "People service returned an invalid body");
            AppError::with_source(
                ErrorKind::ExternalService,
                "People service returned an invalid response",
                e,
            )
        })
    }
}
