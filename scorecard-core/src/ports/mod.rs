// scorecard-core/src/ports/mod.rs

pub mod worksheet;

pub use worksheet::{Cell, RawTable, Sheet, WorksheetBackend};
