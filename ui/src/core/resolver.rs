//! View-model lookups over the dataset.
//!
//! Every function here is total: an unknown dashboard or quarter key yields
//! an empty value of the same shape (empty `Vec`, empty strings, `None` for
//! the snapshot) so views can render without branching on errors.

use super::dataset::{CardCopy, Dashboard, Dataset, QuarterRecord};

/// Entry for the dashboard choice control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardOption {
    pub key: &'static str,
    pub label: &'static str,
}

/// Badge label and description for the page header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardCopy {
    pub label: &'static str,
    pub description: &'static str,
}

/// One row of the quarterly summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryRow {
    pub metric: &'static str,
    pub value: &'static str,
}

pub fn find_dashboard(dataset: &Dataset, dashboard_key: &str) -> Option<&'static Dashboard> {
    dataset
        .dashboards()
        .iter()
        .find(|dashboard| dashboard.key == dashboard_key)
}

pub fn dashboard_keys(dataset: &Dataset) -> Vec<&'static str> {
    dataset.dashboards().iter().map(|dashboard| dashboard.key).collect()
}

pub fn dashboard_options(dataset: &Dataset) -> Vec<DashboardOption> {
    dataset
        .dashboards()
        .iter()
        .map(|dashboard| DashboardOption {
            key: dashboard.key,
            label: dashboard.label,
        })
        .collect()
}

pub fn quarter_options(dataset: &Dataset, dashboard_key: &str) -> Vec<&'static str> {
    find_dashboard(dataset, dashboard_key)
        .map(|dashboard| dashboard.quarters.iter().map(|quarter| quarter.key).collect())
        .unwrap_or_default()
}

pub fn dashboard_copy(dataset: &Dataset, dashboard_key: &str) -> DashboardCopy {
    find_dashboard(dataset, dashboard_key)
        .map(|dashboard| DashboardCopy {
            label: dashboard.label,
            description: dashboard.description,
        })
        .unwrap_or_default()
}

pub fn card_copy(dataset: &Dataset, dashboard_key: &str) -> CardCopy {
    find_dashboard(dataset, dashboard_key)
        .map(|dashboard| dashboard.cards)
        .unwrap_or_default()
}

/// `None` means "no such quarter for this dashboard"; chart views switch to
/// their empty rendering path on it.
pub fn quarter_snapshot(
    dataset: &Dataset,
    dashboard_key: &str,
    quarter_key: &str,
) -> Option<&'static QuarterRecord> {
    find_dashboard(dataset, dashboard_key).and_then(|dashboard| dashboard.quarter(quarter_key))
}

pub fn summary_rows(dataset: &Dataset, dashboard_key: &str, quarter_key: &str) -> Vec<SummaryRow> {
    quarter_snapshot(dataset, dashboard_key, quarter_key)
        .map(|quarter| {
            quarter
                .summary
                .iter()
                .map(|&(metric, value)| SummaryRow { metric, value })
                .collect()
        })
        .unwrap_or_default()
}

pub fn insights(dataset: &Dataset, dashboard_key: &str, quarter_key: &str) -> Vec<&'static str> {
    quarter_snapshot(dataset, dashboard_key, quarter_key)
        .map(|quarter| quarter.insights.to_vec())
        .unwrap_or_default()
}
