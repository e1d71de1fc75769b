//! Dashboard page building blocks and the page-level state they share.

pub mod charts;
pub mod controls;
pub mod export;
pub mod insights;
pub mod language;
pub mod summary;

pub use charts::{detect_chart_mode, ChartMode, ChartsPanel};
pub use controls::SelectionControls;
pub use export::ExportButton;
pub use insights::InsightsCard;
pub use language::LanguagePicker;
pub use summary::SummaryCard;

use crate::core::selection::{normalize_selection, select_dashboard, select_quarter};
use crate::core::storage::{self, SelectionStore};
use crate::core::{Dataset, Selection};

/// Mutable page state. `selection` is `None` only for a dataset that can't
/// produce any valid selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub selection: Option<Selection>,
}

impl DashboardState {
    /// Restore from the platform store, falling back to defaults when storage
    /// is missing or broken.
    pub fn restore(dataset: &Dataset) -> Self {
        match storage::platform_store() {
            Ok(store) => Self::restore_from(dataset, &store),
            Err(err) => {
                tracing::warn!(%err, "selection storage unavailable; using defaults");
                Self {
                    selection: normalize_selection(dataset, None),
                }
            }
        }
    }

    pub fn restore_from<S: SelectionStore + ?Sized>(dataset: &Dataset, store: &S) -> Self {
        let stored = match storage::load_selection(store) {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!(%err, "could not read stored selection; using defaults");
                None
            }
        };
        let selection = normalize_selection(dataset, stored.as_ref());
        tracing::debug!(?stored, ?selection, "restored dashboard selection");
        Self { selection }
    }

    /// Returns `true` when the selection changed.
    pub fn choose_dashboard(&mut self, dataset: &Dataset, dashboard_key: &str) -> bool {
        match select_dashboard(dataset, dashboard_key) {
            Some(next) => self.replace(next),
            None => false,
        }
    }

    /// Returns `true` when the selection changed.
    pub fn choose_quarter(&mut self, dataset: &Dataset, quarter_key: &str) -> bool {
        let Some(current) = self.selection.as_ref() else {
            return false;
        };
        match select_quarter(dataset, current, quarter_key) {
            Some(next) => self.replace(next),
            None => false,
        }
    }

    /// Best effort; failures are logged and the in-memory state stays authoritative.
    pub fn persist(&self) {
        if self.selection.is_none() {
            return;
        }
        match storage::platform_store() {
            Ok(store) => {
                self.persist_to(&store);
            }
            Err(err) => {
                tracing::warn!(%err, "selection storage unavailable; not persisting");
            }
        }
    }

    pub fn persist_to<S: SelectionStore + ?Sized>(&self, store: &S) -> bool {
        let Some(selection) = self.selection.as_ref() else {
            return false;
        };
        match storage::save_selection(store, selection) {
            Ok(()) => {
                tracing::debug!(
                    dashboard = %selection.dashboard,
                    quarter = %selection.quarter,
                    "persisted selection"
                );
                true
            }
            Err(err) => {
                tracing::warn!(%err, "could not persist selection");
                false
            }
        }
    }

    fn replace(&mut self, next: Selection) -> bool {
        if self.selection.as_ref() == Some(&next) {
            return false;
        }
        self.selection = Some(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::{MemoryStore, StorageUnavailable, SELECTION_KEY};

    struct LockedStore;

    impl SelectionStore for LockedStore {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageUnavailable> {
            Err(StorageUnavailable::Denied("private mode".into()))
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StorageUnavailable> {
            Err(StorageUnavailable::Denied("private mode".into()))
        }
    }

    #[test]
    fn restore_uses_stored_selection() {
        let store = MemoryStore::new();
        store
            .write(SELECTION_KEY, r#"{"dashboard":"marketing","quarter":"Q3"}"#)
            .unwrap();
        let state = DashboardState::restore_from(&Dataset::builtin(), &store);
        assert_eq!(state.selection, Some(Selection::new("marketing", "Q3")));
    }

    #[test]
    fn broken_storage_degrades_to_default() {
        let data = Dataset::builtin();
        let mut state = DashboardState::restore_from(&data, &LockedStore);
        assert_eq!(state.selection, Some(Selection::new("revenue", "Q1")));

        assert!(state.choose_quarter(&data, "Q2"));
        assert!(!state.persist_to(&LockedStore));
        assert_eq!(state.selection, Some(Selection::new("revenue", "Q2")));
    }

    #[test]
    fn choices_report_changes() {
        let data = Dataset::builtin();
        let mut state = DashboardState::restore_from(&data, &MemoryStore::new());

        assert!(!state.choose_dashboard(&data, "revenue"));
        assert!(state.choose_quarter(&data, "Q4"));
        assert!(!state.choose_quarter(&data, "Q8"));
        assert_eq!(state.selection, Some(Selection::new("revenue", "Q4")));

        assert!(state.choose_dashboard(&data, "product"));
        assert_eq!(state.selection, Some(Selection::new("product", "Q1")));
        assert!(!state.choose_dashboard(&data, "finance"));
    }

    #[test]
    fn persisted_choice_survives_reload() {
        let data = Dataset::builtin();
        let store = MemoryStore::new();
        let mut state = DashboardState::restore_from(&data, &store);
        state.choose_dashboard(&data, "marketing");
        state.choose_quarter(&data, "Q2");
        assert!(state.persist_to(&store));

        let reloaded = DashboardState::restore_from(&data, &store);
        assert_eq!(reloaded, state);
    }

    #[test]
    fn empty_dataset_has_nothing_to_choose() {
        let empty = Dataset::new(&[]);
        let mut state = DashboardState::restore_from(&empty, &MemoryStore::new());
        assert_eq!(state.selection, None);
        assert!(!state.choose_quarter(&empty, "Q1"));
        assert!(!state.persist_to(&MemoryStore::new()));
    }
}
