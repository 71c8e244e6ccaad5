//! # Lifecycle Runner
//!
//! Drives the booking lifecycle for each fixture row against the remote API:
//! create, read, update, delete, then confirm absence. Rows are processed one
//! at a time and steps are strictly ordered; the first failed check aborts
//! the whole run.

use std::time::Instant;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::info;

use crate::auth::AuthMethod;
use crate::booking::{Booking, CreatedBooking};
use crate::config::{RunConfig, UpdateProfile};
use crate::fixtures::FixtureRow;
use crate::http::client::{ApiClient, HttpError};
use crate::http::response::HttpResponse;

/// Checks evaluated per row: two at each of create, read and update, plus
/// the deletion status and the post-delete 404.
const CHECKS_PER_LIFECYCLE: usize = 8;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("{what}: expected {expected}, got {actual}")]
    Check {
        what: String,
        expected: String,
        actual: String,
    },
    #[error("response body has no `{field}` field: {body}")]
    MissingField { field: &'static str, body: String },
}

/// Summary of a completed run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub rows: usize,
    pub checks: usize,
    pub duration_ms: u128,
}

/// Runs booking lifecycles with one client and one set of credentials.
pub struct Runner {
    client: ApiClient,
    admin: AuthMethod,
    update: UpdateProfile,
}

impl Runner {
    pub fn new(config: &RunConfig) -> Result<Self, HttpError> {
        Ok(Runner {
            client: ApiClient::new(&config.base_url)?,
            admin: AuthMethod::basic(&config.admin.username, &config.admin.password),
            update: config.update.clone(),
        })
    }

    /// Process every fixture row sequentially.
    pub async fn run(&self, rows: &[FixtureRow]) -> Result<RunReport, RunError> {
        let started = Instant::now();
        let mut report = RunReport::default();

        for (idx, row) in rows.iter().enumerate() {
            info!(row = idx + 1, firstname = %row.firstname, "starting booking lifecycle");

            let id = self.create_booking(row).await?;
            self.verify_booking(id, row).await?;
            self.update_booking(id).await?;
            self.delete_booking(id).await?;

            report.rows += 1;
            report.checks += CHECKS_PER_LIFECYCLE;
        }

        report.duration_ms = started.elapsed().as_millis();
        Ok(report)
    }

    /// `POST /booking`; returns the id assigned by the API.
    async fn create_booking(&self, row: &FixtureRow) -> Result<u64, RunError> {
        info!("creating booking");
        let payload = Booking::from(row);
        let response = self.client.post_json("booking", &payload).await?;
        expect_status("booking creation", &response, StatusCode::OK)?;

        let created: CreatedBooking = response.json().map_err(|_| RunError::MissingField {
            field: "bookingid",
            body: response.body.clone(),
        })?;
        info!(
            bookingid = created.bookingid,
            duration_ms = response.duration_ms as u64,
            "created booking"
        );
        Ok(created.bookingid)
    }

    /// `GET /booking/{id}`; the stored firstname must match the fixture.
    async fn verify_booking(&self, id: u64, row: &FixtureRow) -> Result<(), RunError> {
        info!(bookingid = id, "fetching and validating booking");
        let response = self.client.get(&format!("booking/{id}")).await?;
        expect_status("booking fetch", &response, StatusCode::OK)?;
        expect_field("fetched firstname", &response, "firstname", &row.firstname)
    }

    /// Authenticated `PUT /booking/{id}` with the replacement payload.
    async fn update_booking(&self, id: u64) -> Result<(), RunError> {
        info!(bookingid = id, "updating and validating booking");
        let payload = self.update.to_booking();
        let response = self
            .client
            .put_json(&format!("booking/{id}"), &payload, &self.admin)
            .await?;
        expect_status("booking update", &response, StatusCode::OK)?;
        expect_field("updated firstname", &response, "firstname", &self.update.firstname)
    }

    /// Authenticated `DELETE /booking/{id}`, then a follow-up GET that must
    /// come back 404.
    async fn delete_booking(&self, id: u64) -> Result<(), RunError> {
        info!(bookingid = id, "deleting and validating booking");
        let response = self
            .client
            .delete(&format!("booking/{id}"), &self.admin)
            .await?;
        expect_status("booking deletion", &response, StatusCode::CREATED)?;

        let follow_up = self.client.get(&format!("booking/{id}")).await?;
        expect_status("post-delete fetch", &follow_up, StatusCode::NOT_FOUND)
    }
}

fn expect_status(
    what: &str,
    response: &HttpResponse,
    expected: StatusCode,
) -> Result<(), RunError> {
    if response.status != expected {
        return Err(RunError::Check {
            what: format!("{what} status"),
            expected: expected.to_string(),
            actual: response.status.to_string(),
        });
    }
    Ok(())
}

fn expect_field(
    what: &str,
    response: &HttpResponse,
    field: &'static str,
    expected: &str,
) -> Result<(), RunError> {
    let value = response
        .json_field(field)
        .ok_or_else(|| RunError::MissingField {
            field,
            body: response.body.clone(),
        })?;
    let actual = value
        .as_str()
        .map(str::to_owned)
        .unwrap_or_else(|| value.to_string());

    if actual != expected {
        return Err(RunError::Check {
            what: what.to_string(),
            expected: expected.to_string(),
            actual,
        });
    }
    Ok(())
}
