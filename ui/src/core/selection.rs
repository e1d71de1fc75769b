//! Active (dashboard, quarter) selection and its repair rules.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::dataset::Dataset;
use super::resolver::{find_dashboard, quarter_options};

/// A validated pair that always points at an existing quarter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub dashboard: String,
    pub quarter: String,
}

impl Selection {
    pub fn new(dashboard: impl Into<String>, quarter: impl Into<String>) -> Self {
        Self {
            dashboard: dashboard.into(),
            quarter: quarter.into(),
        }
    }
}

/// Untrusted selection as read back from storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedSelection {
    pub dashboard: Option<String>,
    pub quarter: Option<String>,
}

impl PersistedSelection {
    /// Parse a stored payload. Anything that isn't a JSON object gives `None`;
    /// fields that aren't strings are dropped.
    pub fn from_json(raw: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(raw).ok()?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Option<Self> {
        let record = value.as_object()?;
        let field = |name: &str| record.get(name).and_then(Value::as_str).map(str::to_string);
        Some(Self {
            dashboard: field("dashboard"),
            quarter: field("quarter"),
        })
    }
}

impl From<&Selection> for PersistedSelection {
    fn from(selection: &Selection) -> Self {
        Self {
            dashboard: Some(selection.dashboard.clone()),
            quarter: Some(selection.quarter.clone()),
        }
    }
}

/// First dashboard, first quarter. `None` only when the dataset can't
/// produce any valid selection.
pub fn default_selection(dataset: &Dataset) -> Option<Selection> {
    let dashboard = dataset.dashboards().first()?;
    let quarter = dashboard.quarters.first()?;
    Some(Selection::new(dashboard.key, quarter.key))
}

/// Reconcile a possibly stale or malformed stored selection with the dataset.
///
/// An unknown dashboard resets to the default selection (the stored quarter
/// is not salvaged); a known dashboard with an unknown or missing quarter
/// keeps the dashboard and takes its first quarter.
pub fn normalize_selection(
    dataset: &Dataset,
    candidate: Option<&PersistedSelection>,
) -> Option<Selection> {
    let fallback = default_selection(dataset)?;

    let Some(candidate) = candidate else {
        return Some(fallback);
    };
    let Some(dashboard) = candidate
        .dashboard
        .as_deref()
        .filter(|key| !key.is_empty())
        .and_then(|key| find_dashboard(dataset, key))
    else {
        return Some(fallback);
    };

    let valid_quarters = quarter_options(dataset, dashboard.key);
    let Some(&first_quarter) = valid_quarters.first() else {
        return Some(fallback);
    };

    let quarter = match candidate.quarter.as_deref() {
        Some(quarter) if valid_quarters.iter().any(|valid| *valid == quarter) => quarter,
        _ => first_quarter,
    };

    Some(Selection::new(dashboard.key, quarter))
}

/// Switching dashboards always lands on that dashboard's first quarter.
pub fn select_dashboard(dataset: &Dataset, dashboard_key: &str) -> Option<Selection> {
    let dashboard = find_dashboard(dataset, dashboard_key)?;
    let quarter = dashboard.quarters.first()?;
    Some(Selection::new(dashboard.key, quarter.key))
}

/// Switch quarter within the current dashboard; `None` if the quarter isn't offered there.
pub fn select_quarter(dataset: &Dataset, current: &Selection, quarter_key: &str) -> Option<Selection> {
    let dashboard = find_dashboard(dataset, &current.dashboard)?;
    let quarter = dashboard.quarter(quarter_key)?;
    Some(Selection::new(dashboard.key, quarter.key))
}
