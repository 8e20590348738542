// scorecard-core/src/infrastructure/store/mod.rs

pub mod coercion;
pub mod record_store;

pub use record_store::{LoadSource, Loaded, RecordStore, SaveOutcome, Workbook};
