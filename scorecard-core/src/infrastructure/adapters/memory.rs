// scorecard-core/src/infrastructure/adapters/memory.rs

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::ScorecardError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::worksheet::{RawTable, Sheet, WorksheetBackend};

/// Worksheets kept in process memory. Clones share the same sheets, so a test
/// can keep a handle and pull the plug while a store owns another handle.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    sheets: Arc<Mutex<HashMap<Sheet, RawTable>>>,
    offline: Arc<AtomicBool>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(self, sheet: Sheet, table: RawTable) -> Self {
        if let Ok(mut sheets) = self.sheets.lock() {
            sheets.insert(sheet, table);
        }
        self
    }

    /// Simulates the backend going away (`false`) or coming back (`true`).
    pub fn set_online(&self, online: bool) {
        self.offline.store(!online, Ordering::SeqCst);
    }

    fn guard(&self) -> Result<(), ScorecardError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(InfrastructureError::BackendUnavailable(self.backend_name().to_string()).into());
        }
        Ok(())
    }

    fn poisoned() -> ScorecardError {
        ScorecardError::InternalError("Memory backend mutex poisoned".into())
    }
}

impl WorksheetBackend for MemoryBackend {
    fn read(&self, sheet: Sheet) -> Result<RawTable, ScorecardError> {
        self.guard()?;
        let sheets = self.sheets.lock().map_err(|_| Self::poisoned())?;
        Ok(sheets.get(&sheet).cloned().unwrap_or_default())
    }

    fn write(&self, sheet: Sheet, table: &RawTable) -> Result<(), ScorecardError> {
        self.guard()?;
        let mut sheets = self.sheets.lock().map_err(|_| Self::poisoned())?;
        sheets.insert(sheet, table.clone());
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::worksheet::Cell;
    use anyhow::Result;

    #[test]
    fn test_memory_backend_shares_state_between_clones() -> Result<()> {
        let backend = MemoryBackend::new();
        let handle = backend.clone();

        let mut table = RawTable::new(vec!["Año".into()]);
        table.rows.push(vec![Cell::Number(2026.0)]);
        backend.write(Sheet::Metas, &table)?;

        assert_eq!(handle.read(Sheet::Metas)?, table);
        assert!(handle.read(Sheet::Datos)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_memory_backend_offline() {
        let backend = MemoryBackend::new();
        backend.set_online(false);
        assert!(backend.read(Sheet::Datos).is_err());
        assert!(backend.write(Sheet::Datos, &RawTable::default()).is_err());
        backend.set_online(true);
        assert!(backend.read(Sheet::Datos).is_ok());
    }
}
