// scorecard-core/src/application/capture.rs

//! Capture-and-save: the only path by which rows are created or changed.
//!
//! The backend only knows whole-table writes, so the find-or-append happens
//! here against a fresh load, and the full table is written back. When that
//! load was served from the snapshot the table is never written: the merge
//! stays in memory.

use tracing::{info, instrument};

use crate::domain::goals::GoalConfig;
use crate::domain::record::MonthlyRecord;
use crate::error::ScorecardError;
use crate::infrastructure::store::{RecordStore, SaveOutcome};

/// Replaces the row with the same (year, month) or appends one.
/// Returns `true` when an existing row was replaced.
pub fn upsert_record(records: &mut Vec<MonthlyRecord>, record: MonthlyRecord) -> bool {
    match records.iter_mut().find(|r| r.key() == record.key()) {
        Some(existing) => {
            *existing = record;
            true
        }
        None => {
            records.push(record);
            false
        }
    }
}

/// Replaces the row of the same year or appends one.
pub fn upsert_goal(goals: &mut Vec<GoalConfig>, goal: GoalConfig) -> bool {
    match goals.iter_mut().find(|g| g.year == goal.year) {
        Some(existing) => {
            *existing = goal;
            true
        }
        None => {
            goals.push(goal);
            false
        }
    }
}

/// Validates `record`, merges it into the latest `Datos` rows and writes the
/// worksheet back.
///
/// A failed write is not an error: the outcome says the change only lives in
/// the session snapshot.
#[instrument(skip(store, record), fields(year = record.year, month = %record.month))]
pub fn capture_month(
    store: &mut RecordStore,
    record: MonthlyRecord,
) -> Result<SaveOutcome, ScorecardError> {
    // 1. Validation
    record.check()?;

    // 2. Fusion avec la dernière lecture
    let loaded = store.load_records();
    let degraded = loaded.is_degraded();
    let mut rows = loaded.rows;
    let replaced = upsert_record(&mut rows, record);
    info!(replaced, degraded, "Monthly capture merged");

    // 3. Écriture (whole table) only over a table we actually read
    if degraded {
        return Ok(store.stash_records(rows));
    }
    Ok(store.save_records(rows))
}

#[instrument(skip(store, goal), fields(year = goal.year))]
pub fn configure_goals(
    store: &mut RecordStore,
    goal: GoalConfig,
) -> Result<SaveOutcome, ScorecardError> {
    goal.check()?;

    let loaded = store.load_goals();
    let degraded = loaded.is_degraded();
    let mut rows = loaded.rows;
    let replaced = upsert_goal(&mut rows, goal);
    info!(replaced, degraded, "Goal configuration merged");

    if degraded {
        return Ok(store.stash_goals(rows));
    }
    Ok(store.save_goals(rows))
}
