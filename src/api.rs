//! HTTP API handlers for the reports dashboard.
//!
//! - **GET /reports**: filtered report list. Query parameters `status`,
//!   `urgency`, `city` and `search` map onto [`FilterSpec`].
//! - **GET /reports/:id** and **PUT /reports/:id**: pass-through to the backend.
//! - **GET /analytics**: summary statistics over every report.
//! - **GET /filters/options**: labels for the list view's select boxes.
//!
//! The list and analytics views never fail: when the backend is unreachable
//! they answer with an empty collection and an `error` message.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

use crate::client::ClientError;
use crate::dashboard::{AnalyticsView, Dashboard, ReportListView};
use crate::model::{FilterOptions, FilterSpec, Report, ReportUpdate};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Dashboard,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/reports", get(get_reports))
        .route("/reports/:id", get(get_report).put(put_report))
        .route("/analytics", get(get_analytics))
        .route("/filters/options", get(get_filter_options))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Map a backend failure onto the status returned to the front-end.
fn error_status(error: &ClientError) -> StatusCode {
    match error {
        ClientError::NotFound { .. } => StatusCode::NOT_FOUND,
        ClientError::Status { .. } | ClientError::Http(_) => StatusCode::BAD_GATEWAY,
    }
}

/// GET /reports - Filtered report list.
///
/// # Query Parameters
///
/// - `status`, `urgency`, `city` (optional): exact label, or `all`
/// - `search` (optional): case-insensitive text in station, description or category
///
/// # Response
///
/// ```json
/// {
///     "reports": [ ... ],
///     "shown": 1,
///     "total": 2,
///     "filtered": true,
///     "error": null
/// }
/// ```
#[instrument(skip(state))]
pub async fn get_reports(
    State(state): State<AppState>,
    Query(spec): Query<FilterSpec>,
) -> Json<ReportListView> {
    Json(state.dashboard.list_view(&spec).await)
}

/// GET /reports/:id - A single report.
#[instrument(skip(state))]
pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Report>, StatusCode> {
    match state.dashboard.get_report(&id).await {
        Ok(report) => {
            info!(id = %id, "Report fetched");
            Ok(Json(report))
        }
        Err(e) => {
            warn!(id = %id, error = %e, "Failed to fetch report");
            Err(error_status(&e))
        }
    }
}

/// PUT /reports/:id - Update a report.
///
/// # Request Body
///
/// ```json
/// {
///     "status": "In Progress",
///     "inspector_notes": "Technician dispatched"
/// }
/// ```
///
/// Any subset of report fields, up to a complete report. The object is
/// forwarded to the backend untouched; only a body with no keys is rejected.
/// Returns the report as stored by the backend.
#[instrument(skip(state, update))]
pub async fn put_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<ReportUpdate>,
) -> Result<Json<Report>, StatusCode> {
    if update.is_empty() {
        warn!(id = %id, "Rejected empty report update");
        return Err(StatusCode::BAD_REQUEST);
    }

    match state.dashboard.update_report(&id, &update).await {
        Ok(report) => {
            info!(
                id = %id,
                status = ?report.status,
                "Report updated"
            );
            Ok(Json(report))
        }
        Err(e) => {
            warn!(id = %id, error = %e, "Failed to update report");
            Err(error_status(&e))
        }
    }
}

/// GET /analytics - Summary statistics over all reports.
#[instrument(skip(state))]
pub async fn get_analytics(State(state): State<AppState>) -> Json<AnalyticsView> {
    Json(state.dashboard.analytics_view().await)
}

/// GET /filters/options - Select box labels; defaults when the backend has none.
#[instrument(skip(state))]
pub async fn get_filter_options(State(state): State<AppState>) -> Json<FilterOptions> {
    Json(state.dashboard.filter_options().await)
}

/// GET /health - Simple health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}
