//! REST client for the reports backend.
//!
//! The backend owns every report and validates every write. This client is a
//! thin pass-through: no caching, no retries, no timeouts beyond reqwest's own.
//!
//! # Endpoints
//!
//! - `GET /reports?sort=-created_date` - all reports, newest first
//! - `GET /reports/{id}` - a single report
//! - `PUT /reports/{id}` - update a report
//! - `GET /filter-options` - labels offered by the list view's select boxes

use reqwest::StatusCode;
use thiserror::Error;

use crate::model::{FilterOptionsPayload, Report, ReportUpdate};

/// Default backend base URL.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000/api";

/// Errors returned by [`ReportApiClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend has no report with this id.
    #[error("report '{id}' not found")]
    NotFound { id: String },

    /// The backend answered with a non-success status.
    #[error("backend returned {status} for {url}")]
    Status { status: StatusCode, url: String },

    /// Connection, protocol or decoding failure.
    #[error("backend request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// Client for the reports backend API.
#[derive(Clone)]
pub struct ReportApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for ReportApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportApiClient {
    /// Create a client pointing at [`DEFAULT_BACKEND_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BACKEND_URL)
    }

    /// Create a client with a custom base URL (e.g. `http://backend:5000/api`).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn report_url(&self, id: &str) -> String {
        format!("{}/reports/{}", self.base_url, urlencoding::encode(id))
    }

    /// Fetch every report, sorted newest first by the backend.
    pub async fn list_reports(&self) -> Result<Vec<Report>> {
        let url = format!("{}/reports?sort=-created_date", self.base_url);

        let response = self.client.get(&url).send().await?;
        let response = check_status(response, &url)?;
        Ok(response.json::<Vec<Report>>().await?)
    }

    /// Fetch a single report.
    pub async fn get_report(&self, id: &str) -> Result<Report> {
        let url = self.report_url(id);

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound { id: id.to_string() });
        }
        let response = check_status(response, &url)?;
        Ok(response.json::<Report>().await?)
    }

    /// Send a (partial) update and return the report as stored by the backend.
    pub async fn update_report(&self, id: &str, update: &ReportUpdate) -> Result<Report> {
        let url = self.report_url(id);

        let response = self.client.put(&url).json(update).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound { id: id.to_string() });
        }
        let response = check_status(response, &url)?;
        Ok(response.json::<Report>().await?)
    }

    /// Fetch the filter option labels. Any list may be absent from the response.
    pub async fn fetch_filter_options(&self) -> Result<FilterOptionsPayload> {
        let url = format!("{}/filter-options", self.base_url);

        let response = self.client.get(&url).send().await?;
        let response = check_status(response, &url)?;
        Ok(response.json::<FilterOptionsPayload>().await?)
    }
}

fn check_status(response: reqwest::Response, url: &str) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ClientError::Status {
            status,
            url: url.to_string(),
        })
    }
}
