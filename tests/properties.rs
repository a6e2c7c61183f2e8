//! Property tests for the filter and aggregation engines.

use std::collections::HashSet;

use proptest::prelude::*;

use transit_reports::aggregation::{TOP_STATIONS_LIMIT, aggregate, station_key};
use transit_reports::filter::filter_reports;
use transit_reports::model::{FilterSpec, Report};

const STATUSES: &[&str] = &["Submitted", "Under Review", "In Progress", "Resolved", "Closed", ""];
const URGENCIES: &[&str] = &["Critical", "High", "Medium", "Low"];
const CATEGORIES: &[&str] = &["Elevator Outage", "Ramp Access", "Signage", "Tactile Paving"];
const CITIES: &[&str] = &["Edmonton", "Calgary", "Red Deer"];
const SEARCHES: &[&str] = &["", "ramp", "RAMP", "Elev", "central", "zzz"];

fn pick(options: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::sample::select(options).prop_map(str::to_string)
}

fn arb_report() -> impl Strategy<Value = Report> {
    (
        pick(STATUSES),
        pick(URGENCIES),
        pick(CATEGORIES),
        0..15u8,
        pick(CITIES),
        "[a-zA-Z ]{0,20}",
    )
        .prop_map(|(status, urgency, category, station, city, description)| {
            Report::new(
                "id",
                &status,
                &urgency,
                &category,
                &format!("Station {station}"),
                &city,
                &description,
            )
        })
}

fn arb_reports() -> impl Strategy<Value = Vec<Report>> {
    prop::collection::vec(arb_report(), 0..60)
}

fn arb_constraint(options: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![Just("all".to_string()), pick(options)])
}

fn arb_spec() -> impl Strategy<Value = FilterSpec> {
    (
        arb_constraint(STATUSES),
        arb_constraint(URGENCIES),
        arb_constraint(CITIES),
        prop::option::of(pick(SEARCHES)),
    )
        .prop_map(|(status, urgency, city, search)| FilterSpec {
            status,
            urgency,
            city,
            search,
        })
}

proptest! {
    #[test]
    fn filter_is_idempotent(reports in arb_reports(), spec in arb_spec()) {
        let once = filter_reports(&reports, &spec);
        let twice = filter_reports(&once, &spec);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn empty_spec_is_identity(reports in arb_reports()) {
        prop_assert_eq!(filter_reports(&reports, &FilterSpec::default()), reports);
    }

    #[test]
    fn status_filter_partitions(reports in arb_reports()) {
        let spec = FilterSpec::default().with_status("Resolved");
        let kept = filter_reports(&reports, &spec);

        prop_assert!(kept.iter().all(|r| r.status() == Some("Resolved")));
        let excluded = reports.len() - kept.len();
        let not_resolved = reports.iter().filter(|r| r.status() != Some("Resolved")).count();
        prop_assert_eq!(excluded, not_resolved);
    }

    #[test]
    fn search_ignores_case(reports in arb_reports()) {
        let lower = filter_reports(&reports, &FilterSpec::default().with_search("ramp"));
        let upper = filter_reports(&reports, &FilterSpec::default().with_search("RAMP"));
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn filter_result_is_ordered_subsequence(reports in arb_reports(), spec in arb_spec()) {
        let kept = filter_reports(&reports, &spec);
        let mut remaining = reports.iter();
        for report in &kept {
            prop_assert!(remaining.any(|r| r == report));
        }
    }

    #[test]
    fn aggregate_total_matches_length(reports in arb_reports()) {
        let result = aggregate(&reports);

        prop_assert_eq!(result.total, reports.len());
        prop_assert_eq!(result.by_status.values().sum::<usize>(), reports.len());
        prop_assert_eq!(result.by_station.values().sum::<usize>(), reports.len());
        if reports.is_empty() {
            prop_assert_eq!(result.resolution_rate, 0.0);
        }
        prop_assert!((0.0..=100.0).contains(&result.resolution_rate));
    }

    #[test]
    fn top_stations_bounded_and_sorted(reports in arb_reports()) {
        let result = aggregate(&reports);
        let distinct: HashSet<String> = reports.iter().map(station_key).collect();

        prop_assert_eq!(result.top_stations.len(), distinct.len().min(TOP_STATIONS_LIMIT));
        prop_assert!(result.top_stations.windows(2).all(|w| w[0].count >= w[1].count));
        prop_assert_eq!(result.top_station.as_ref(), result.top_stations.first());
    }
}

#[test]
fn two_report_scenario() {
    let reports = vec![
        Report::new("1", "Resolved", "Critical", "Elevator Outage", "Central", "Calgary", ""),
        Report::new("2", "Submitted", "Low", "Signage", "Central", "Calgary", ""),
    ];

    let result = aggregate(&reports);
    assert_eq!(result.total, 2);
    assert_eq!(result.by_status.get("Resolved"), Some(&1));
    assert_eq!(result.by_status.get("Submitted"), Some(&1));
    assert_eq!(result.by_status.len(), 2);
    assert_eq!(result.by_station.get("Central (Calgary)"), Some(&2));
    assert_eq!(result.by_station.len(), 1);
    assert_eq!(result.resolution_rate, 50.0);

    let spec = FilterSpec::default()
        .with_city("Calgary")
        .with_status("Resolved");
    assert_eq!(filter_reports(&reports, &spec), vec![reports[0].clone()]);
}
