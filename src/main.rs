//! Transit Reports - dashboard service for transit accessibility reports.
//!
//! # API Endpoints
//!
//! - `GET /reports` - Filtered report list
//! - `GET /reports/:id` - Report detail
//! - `PUT /reports/:id` - Update a report
//! - `GET /analytics` - Summary statistics
//! - `GET /filters/options` - Filter select labels
//! - `GET /health` - Health check

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use transit_reports::api::{AppState, router};
use transit_reports::client::ReportApiClient;
use transit_reports::config::Config;
use transit_reports::dashboard::Dashboard;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("transit_reports=info".parse()?))
        .init();

    let config = Config::from_env();

    info!(
        port = config.port,
        backend_url = %config.backend_url,
        "Starting transit-reports server"
    );

    let client = ReportApiClient::with_base_url(&config.backend_url);
    let state = AppState {
        dashboard: Dashboard::new(client),
    };
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    info!(%addr, "transit-reports is listening");

    axum::serve(listener, app).await?;

    Ok(())
}
