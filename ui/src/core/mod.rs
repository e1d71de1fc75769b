//! Platform-agnostic dashboard logic: data, lookups, selection, export, persistence.

pub mod csv;
pub mod dataset;
pub mod format;
pub mod resolver;
pub mod selection;
pub mod storage;

pub use dataset::{Dashboard, Dataset, QuarterRecord, MONTHS, MONTH_COUNT};
pub use format::FormatterKind;
pub use selection::{PersistedSelection, Selection};
