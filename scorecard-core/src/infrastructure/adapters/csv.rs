// scorecard-core/src/infrastructure/adapters/csv.rs

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ScorecardError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::worksheet::{Cell, RawTable, Sheet, WorksheetBackend};

/// A spreadsheet exported as one CSV file per worksheet:
/// `<dir>/Datos.csv` and `<dir>/Metas.csv`.
///
/// The directory itself must exist; if it is gone (unmounted share, deleted
/// folder) the backend counts as unreachable. A missing file inside an
/// existing directory is just a worksheet nobody has written yet.
pub struct CsvWorkbook {
    dir: PathBuf,
}

impl CsvWorkbook {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn sheet_path(&self, sheet: Sheet) -> PathBuf {
        self.dir.join(format!("{}.csv", sheet.as_str()))
    }

    fn ensure_reachable(&self) -> Result<(), InfrastructureError> {
        if self.dir.is_dir() {
            Ok(())
        } else {
            Err(InfrastructureError::BackendUnavailable(format!(
                "csv workbook {}",
                self.dir.display()
            )))
        }
    }
}

impl WorksheetBackend for CsvWorkbook {
    fn read(&self, sheet: Sheet) -> Result<RawTable, ScorecardError> {
        self.ensure_reachable()?;
        let path = self.sheet_path(sheet);
        if !path.exists() {
            debug!(path = ?path, "Worksheet file not created yet");
            return Ok(RawTable::default());
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&path)
            .map_err(InfrastructureError::Csv)?;

        let columns: Vec<String> = reader
            .headers()
            .map_err(InfrastructureError::Csv)?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut table = RawTable::new(columns);
        for record in reader.records() {
            let record = record.map_err(InfrastructureError::Csv)?;
            table.rows.push(record.iter().map(Cell::parse).collect());
        }

        debug!(sheet = %sheet, rows = table.rows.len(), "CSV worksheet read");
        Ok(table)
    }

    fn write(&self, sheet: Sheet, table: &RawTable) -> Result<(), ScorecardError> {
        self.ensure_reachable()?;

        // Whole-sheet replacement: stage next to the target, then rename over
        // it so readers never observe a half-written sheet.
        let staging = tempfile::NamedTempFile::new_in(&self.dir).map_err(InfrastructureError::Io)?;
        let mut writer = csv::Writer::from_writer(staging);
        writer
            .write_record(&table.columns)
            .map_err(InfrastructureError::Csv)?;
        for row in &table.rows {
            writer
                .write_record(row.iter().map(|cell| cell.to_string()))
                .map_err(InfrastructureError::Csv)?;
        }
        writer.flush().map_err(InfrastructureError::Io)?;

        let mut staging = writer
            .into_inner()
            .map_err(|e| InfrastructureError::Io(std::io::Error::other(e.to_string())))?;
        staging.flush().map_err(InfrastructureError::Io)?;
        staging
            .persist(self.sheet_path(sheet))
            .map_err(|e| InfrastructureError::Io(e.error))?;

        debug!(sheet = %sheet, rows = table.rows.len(), "CSV worksheet replaced");
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "csv"
    }
}
