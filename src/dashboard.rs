//! Dashboard views over the reports backend.
//!
//! This module composes the backend client with the filter and aggregation
//! engines to produce the two views the front-end renders:
//! - the report list view, filtered by the user's current selection
//! - the analytics view, summarizing the whole collection
//!
//! Each view fetches the collection once and computes everything from that
//! snapshot. Nothing is cached between requests.
//!
//! # Usage
//!
//! ```ignore
//! let dashboard = Dashboard::new(ReportApiClient::with_base_url(url));
//! let view = dashboard.list_view(&FilterSpec::default().with_city("Calgary")).await;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::aggregation::aggregate;
use crate::client::{ReportApiClient, Result};
use crate::filter::filter_reports;
use crate::model::{AggregationResult, FilterOptions, FilterSpec, Report, ReportUpdate};

/// Dashboard backed by a reports API client.
#[derive(Clone)]
pub struct Dashboard {
    client: ReportApiClient,
}

impl Dashboard {
    /// Create a new dashboard on top of the given client.
    pub fn new(client: ReportApiClient) -> Self {
        Self { client }
    }

    /// Fetch the collection. A failure degrades to an empty collection plus
    /// the error message for the view to display.
    async fn fetch_reports(&self) -> (Vec<Report>, Option<String>) {
        match self.client.list_reports().await {
            Ok(reports) => (reports, None),
            Err(e) => {
                warn!(error = %e, "Failed to fetch reports");
                (Vec::new(), Some(e.to_string()))
            }
        }
    }

    /// Build the list view for the given filter selection.
    pub async fn list_view(&self, spec: &FilterSpec) -> ReportListView {
        let (reports, error) = self.fetch_reports().await;
        let view = ReportListView::from_reports(&reports, spec, error);

        info!(
            total = view.total,
            shown = view.shown,
            filtered = view.filtered,
            "Report list built"
        );
        view
    }

    /// Build the analytics view over the whole collection.
    pub async fn analytics_view(&self) -> AnalyticsView {
        let (reports, error) = self.fetch_reports().await;
        let summary = aggregate(&reports);

        info!(
            total = summary.total,
            resolution_rate = summary.resolution_rate,
            "Analytics computed"
        );
        AnalyticsView {
            generated_at: Utc::now(),
            summary,
            error,
        }
    }

    /// Labels for the list view's select boxes.
    ///
    /// Falls back to [`FilterOptions::default`] when the backend cannot supply them.
    pub async fn filter_options(&self) -> FilterOptions {
        match self.client.fetch_filter_options().await {
            Ok(payload) => FilterOptions::default().merge(payload),
            Err(e) => {
                warn!(error = %e, "Failed to fetch filter options, using defaults");
                FilterOptions::default()
            }
        }
    }

    pub async fn get_report(&self, id: &str) -> Result<Report> {
        self.client.get_report(id).await
    }

    pub async fn update_report(&self, id: &str, update: &ReportUpdate) -> Result<Report> {
        self.client.update_report(id, update).await
    }
}

/// Report list view response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportListView {
    /// Matching reports, in backend order (newest first).
    pub reports: Vec<Report>,

    /// Number of matching reports.
    pub shown: usize,

    /// Number of reports before filtering.
    pub total: usize,

    /// Whether any filter constraint was active.
    pub filtered: bool,

    /// Set when the collection could not be fetched.
    #[serde(default)]
    pub error: Option<String>,
}

impl ReportListView {
    /// Apply `spec` to a fetched collection.
    pub fn from_reports(reports: &[Report], spec: &FilterSpec, error: Option<String>) -> Self {
        let matching = filter_reports(reports, spec);
        Self {
            shown: matching.len(),
            total: reports.len(),
            filtered: spec.is_active(),
            reports: matching,
            error,
        }
    }
}

/// Analytics view response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsView {
    /// When this summary was computed.
    pub generated_at: DateTime<Utc>,

    pub summary: AggregationResult,

    /// Set when the collection could not be fetched.
    #[serde(default)]
    pub error: Option<String>,
}
