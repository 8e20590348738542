// scorecard-core/src/infrastructure/store/record_store.rs

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::domain::goals::GoalConfig;
use crate::domain::record::MonthlyRecord;
use crate::infrastructure::store::coercion;
use crate::ports::worksheet::{RawTable, Sheet, WorksheetBackend};

/// Where the rows of a load came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadSource {
    Backend,
    /// The backend failed; these are the rows of the last successful load
    /// (or nothing, if there never was one).
    Snapshot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub rows: Vec<T>,
    pub source: LoadSource,
}

impl<T> Loaded<T> {
    pub fn is_degraded(&self) -> bool {
        self.source == LoadSource::Snapshot
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveOutcome {
    /// Written to the backend.
    Persisted,
    /// The backend refused the write; the change lives in the snapshot only
    /// and is lost once a later load succeeds.
    MemoryOnly,
}

/// Both worksheets as one view render sees them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workbook {
    pub records: Vec<MonthlyRecord>,
    pub goals: Vec<GoalConfig>,
    /// At least one worksheet was served from the snapshot.
    pub degraded: bool,
}

/// Typed access to the `Datos` and `Metas` worksheets with a last-known-good
/// snapshot per worksheet.
///
/// The snapshot is owned by the store, not global: one store per session.
/// Mutation goes through `&mut self`; sharing a store between sessions needs a
/// lock around it.
pub struct RecordStore {
    backend: Box<dyn WorksheetBackend>,
    records: Vec<MonthlyRecord>,
    goals: Vec<GoalConfig>,
}

impl RecordStore {
    pub fn new(backend: Box<dyn WorksheetBackend>) -> Self {
        Self {
            backend,
            records: Vec::new(),
            goals: Vec::new(),
        }
    }

    pub fn backend_name(&self) -> &str {
        self.backend.backend_name()
    }

    /// Current snapshot of the monthly records.
    pub fn records(&self) -> &[MonthlyRecord] {
        &self.records
    }

    /// Current snapshot of the goal rows.
    pub fn goals(&self) -> &[GoalConfig] {
        &self.goals
    }

    #[instrument(skip(self), fields(backend = self.backend.backend_name()))]
    pub fn load_records(&mut self) -> Loaded<MonthlyRecord> {
        match self.backend.read(Sheet::Datos) {
            Ok(table) => {
                self.records = coercion::records_from_table(&table);
                info!(rows = self.records.len(), "Monthly records loaded");
                Loaded {
                    rows: self.records.clone(),
                    source: LoadSource::Backend,
                }
            }
            Err(e) => {
                warn!(error = %e, snapshot_rows = self.records.len(), "Backend unavailable, serving monthly records from snapshot");
                Loaded {
                    rows: self.records.clone(),
                    source: LoadSource::Snapshot,
                }
            }
        }
    }

    #[instrument(skip(self), fields(backend = self.backend.backend_name()))]
    pub fn load_goals(&mut self) -> Loaded<GoalConfig> {
        match self.backend.read(Sheet::Metas) {
            Ok(table) => {
                self.goals = coercion::goals_from_table(&table);
                info!(rows = self.goals.len(), "Goal configuration loaded");
                Loaded {
                    rows: self.goals.clone(),
                    source: LoadSource::Backend,
                }
            }
            Err(e) => {
                warn!(error = %e, snapshot_rows = self.goals.len(), "Backend unavailable, serving goals from snapshot");
                Loaded {
                    rows: self.goals.clone(),
                    source: LoadSource::Snapshot,
                }
            }
        }
    }

    /// Loads both worksheets. Each falls back to its own snapshot.
    pub fn load_workbook(&mut self) -> Workbook {
        let records = self.load_records();
        let goals = self.load_goals();
        Workbook {
            degraded: records.is_degraded() || goals.is_degraded(),
            records: records.rows,
            goals: goals.rows,
        }
    }

    /// Replaces the whole `Datos` worksheet with `records`.
    #[instrument(skip(self, records), fields(rows = records.len()))]
    pub fn save_records(&mut self, records: Vec<MonthlyRecord>) -> SaveOutcome {
        let table = coercion::records_to_table(&records);
        self.records = records;
        self.write(Sheet::Datos, &table)
    }

    /// Replaces the whole `Metas` worksheet with `goals`.
    #[instrument(skip(self, goals), fields(rows = goals.len()))]
    pub fn save_goals(&mut self, goals: Vec<GoalConfig>) -> SaveOutcome {
        let table = coercion::goals_to_table(&goals);
        self.goals = goals;
        self.write(Sheet::Metas, &table)
    }

    /// Replaces the `Datos` snapshot without touching the backend.
    ///
    /// Used when the latest load was degraded: writing the whole table back
    /// would overwrite rows the store never managed to read.
    pub fn stash_records(&mut self, records: Vec<MonthlyRecord>) -> SaveOutcome {
        self.records = records;
        warn!(sheet = %Sheet::Datos, "Worksheet not readable, change kept in memory only");
        SaveOutcome::MemoryOnly
    }

    /// `Metas` counterpart of [`RecordStore::stash_records`].
    pub fn stash_goals(&mut self, goals: Vec<GoalConfig>) -> SaveOutcome {
        self.goals = goals;
        warn!(sheet = %Sheet::Metas, "Worksheet not readable, change kept in memory only");
        SaveOutcome::MemoryOnly
    }

    fn write(&self, sheet: Sheet, table: &RawTable) -> SaveOutcome {
        match self.backend.write(sheet, table) {
            Ok(()) => {
                info!(sheet = %sheet, "Worksheet saved");
                SaveOutcome::Persisted
            }
            Err(e) => {
                warn!(sheet = %sheet, error = %e, "Backend write failed, change kept in memory only");
                SaveOutcome::MemoryOnly
            }
        }
    }
}
