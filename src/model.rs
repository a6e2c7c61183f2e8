//! Data models for transit accessibility reports.
//!
//! Reports are owned by the backend and arrive here already validated. Every
//! label (status, urgency, category, station, city) is kept as an open string:
//! the backend may introduce new labels at any time and the engines in this
//! crate only ever compare labels for equality.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sentinel filter value meaning "no constraint on this field".
pub const ALL: &str = "all";

/// Documented report status labels.
pub mod status {
    pub const SUBMITTED: &str = "Submitted";
    pub const UNDER_REVIEW: &str = "Under Review";
    pub const IN_PROGRESS: &str = "In Progress";
    pub const RESOLVED: &str = "Resolved";
    pub const CLOSED: &str = "Closed";
}

/// Documented urgency labels, most severe first.
pub mod urgency {
    pub const CRITICAL: &str = "Critical";
    pub const HIGH: &str = "High";
    pub const MEDIUM: &str = "Medium";
    pub const LOW: &str = "Low";
}

/// A single accessibility issue reported against a transit station.
///
/// Label fields are optional so that an incomplete record from the backend is
/// still accepted; see [`Report::status`] and friends for the normalized view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Opaque identifier assigned by the backend.
    pub id: String,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub urgency_level: Option<String>,

    #[serde(default)]
    pub issue_category: Option<String>,

    #[serde(default)]
    pub station_name: Option<String>,

    #[serde(default)]
    pub station_city: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Creation time exactly as the backend sent it.
    ///
    /// The backend already sorts by it; use [`Report::created_at`] for a parsed value.
    #[serde(default)]
    pub created_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inspector_notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter_contact: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<String>,
}

impl Report {
    /// Create a report with the label fields used by filtering and aggregation.
    pub fn new(
        id: &str,
        status: &str,
        urgency_level: &str,
        issue_category: &str,
        station_name: &str,
        station_city: &str,
        description: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            status: Some(status.to_string()),
            urgency_level: Some(urgency_level.to_string()),
            issue_category: Some(issue_category.to_string()),
            station_name: Some(station_name.to_string()),
            station_city: Some(station_city.to_string()),
            description: Some(description.to_string()),
            ..Default::default()
        }
    }

    /// Status label, or `None` when missing or empty.
    pub fn status(&self) -> Option<&str> {
        present(&self.status)
    }

    /// Urgency label, or `None` when missing or empty.
    pub fn urgency(&self) -> Option<&str> {
        present(&self.urgency_level)
    }

    /// Issue category label, or `None` when missing or empty.
    pub fn category(&self) -> Option<&str> {
        present(&self.issue_category)
    }

    /// Station name, or `None` when missing or empty.
    pub fn station(&self) -> Option<&str> {
        present(&self.station_name)
    }

    /// Station city, or `None` when missing or empty.
    pub fn city(&self) -> Option<&str> {
        present(&self.station_city)
    }

    /// Free-form description, or `None` when missing or empty.
    pub fn description(&self) -> Option<&str> {
        present(&self.description)
    }

    /// Parsed creation time, or `None` when missing or in an unrecognized format.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        present(&self.created_date).and_then(parse_timestamp)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Accepts RFC 3339 timestamps and naive ISO timestamps (read as UTC).
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Partial or complete update payload for `PUT /reports/{id}`.
///
/// The JSON object is forwarded to the backend exactly as received: every key,
/// including explicit `null`s and keys this crate does not know about. The
/// backend validates the write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportUpdate {
    fields: Map<String, Value>,
}

impl ReportUpdate {
    /// Set a field, replacing any previous value for the same key.
    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn with_status(self, status: &str) -> Self {
        self.with_field("status", status)
    }

    pub fn with_urgency(self, urgency: &str) -> Self {
        self.with_field("urgency_level", urgency)
    }

    pub fn with_inspector_notes(self, notes: &str) -> Self {
        self.with_field("inspector_notes", notes)
    }

    /// Value of `key` in the payload, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns true when the payload carries no keys at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// User-selected constraints for the report list view.
///
/// Each field is optional. A field that is absent, empty, or set to
/// [`ALL`] places no constraint. Deserializes straight from query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub urgency: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    /// Case-insensitive substring searched in station name, description and category.
    #[serde(default)]
    pub search: Option<String>,
}

impl FilterSpec {
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    pub fn with_urgency(mut self, urgency: &str) -> Self {
        self.urgency = Some(urgency.to_string());
        self
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    /// Status constraint, if active.
    pub fn status_constraint(&self) -> Option<&str> {
        selection(&self.status)
    }

    /// Urgency constraint, if active.
    pub fn urgency_constraint(&self) -> Option<&str> {
        selection(&self.urgency)
    }

    /// City constraint, if active.
    pub fn city_constraint(&self) -> Option<&str> {
        selection(&self.city)
    }

    /// Search text, if non-empty. `"all"` is an ordinary search term here.
    pub fn search_text(&self) -> Option<&str> {
        present(&self.search)
    }

    /// True when at least one constraint is active.
    pub fn is_active(&self) -> bool {
        self.status_constraint().is_some()
            || self.urgency_constraint().is_some()
            || self.city_constraint().is_some()
            || self.search_text().is_some()
    }
}

fn selection(value: &Option<String>) -> Option<&str> {
    present(value).filter(|v| *v != ALL)
}

/// Label choices offered by the list view's select boxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub cities: Vec<String>,
    pub statuses: Vec<String>,
    pub urgencies: Vec<String>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            cities: vec!["Edmonton".to_string(), "Calgary".to_string()],
            statuses: [
                status::SUBMITTED,
                status::UNDER_REVIEW,
                status::IN_PROGRESS,
                status::RESOLVED,
                status::CLOSED,
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            urgencies: [urgency::CRITICAL, urgency::HIGH, urgency::MEDIUM, urgency::LOW]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Filter options as returned by the backend; any list may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterOptionsPayload {
    #[serde(default)]
    pub cities: Option<Vec<String>>,
    #[serde(default)]
    pub statuses: Option<Vec<String>>,
    #[serde(default)]
    pub urgencies: Option<Vec<String>>,
}

impl FilterOptions {
    /// Overlay whatever lists the backend supplied onto the current options.
    pub fn merge(mut self, payload: FilterOptionsPayload) -> Self {
        if let Some(cities) = payload.cities {
            self.cities = cities;
        }
        if let Some(statuses) = payload.statuses {
            self.statuses = statuses;
        }
        if let Some(urgencies) = payload.urgencies {
            self.urgencies = urgencies;
        }
        self
    }
}

/// A label with its number of reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Summary statistics derived from a report collection.
///
/// Recomputed for every request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    /// Number of reports.
    pub total: usize,

    pub by_status: HashMap<String, usize>,
    pub by_urgency: HashMap<String, usize>,
    pub by_category: HashMap<String, usize>,
    pub by_city: HashMap<String, usize>,

    /// Keyed by `"Station (City)"`.
    pub by_station: HashMap<String, usize>,

    /// Every category, most reported first.
    pub category_ranking: Vec<LabelCount>,

    /// Urgency counts in first-encounter order.
    pub urgency_breakdown: Vec<LabelCount>,

    /// City counts in first-encounter order.
    pub city_breakdown: Vec<LabelCount>,

    /// The ten most reported stations, most reported first.
    pub top_stations: Vec<LabelCount>,

    pub top_category: Option<LabelCount>,
    pub top_station: Option<LabelCount>,

    /// Reports with urgency "Critical".
    pub critical_count: usize,

    /// Reports with status "Resolved".
    pub resolved_count: usize,

    /// Reports still "Submitted" or "Under Review".
    pub pending_count: usize,

    /// Percentage of resolved reports, one decimal place.
    pub resolution_rate: f64,
}
