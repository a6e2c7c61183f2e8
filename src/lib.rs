//! Transit Reports - filtering and analytics for transit station accessibility reports.
//!
//! # Overview
//!
//! Riders report accessibility problems at transit stations (broken elevators,
//! missing tactile paving, blocked ramps). A separate backend stores those
//! reports. This crate serves the inspector dashboard on top of it: a filtered
//! report list and an analytics summary, both computed fresh from the backend's
//! collection on every request.
//!
//! # Modules
//!
//! - [`model`]: Reports, filter selections, filter options and summary types
//! - [`filter`]: The list view's filter engine
//! - [`aggregation`]: Counts, rankings and rates for the analytics view
//! - [`client`]: REST client for the reports backend
//! - [`dashboard`]: Views composed from the client and both engines
//! - [`api`]: HTTP API handlers
//! - [`config`]: Environment configuration

pub mod aggregation;
pub mod api;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod filter;
pub mod model;
