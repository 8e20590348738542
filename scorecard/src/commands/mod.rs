// scorecard/src/commands/mod.rs

pub mod capture;
pub mod employee;
pub mod goals;
pub mod overview;
pub mod render;
pub mod years;

use std::path::Path;

use anyhow::Context;
use chrono::Datelike;
use scorecard_core::domain::FiscalCalendar;
use scorecard_core::infrastructure::config::{DashboardConfig, load_dashboard_config};
use scorecard_core::infrastructure::store::RecordStore;

/// Everything one command invocation works against.
pub struct Project {
    pub config: DashboardConfig,
    pub calendar: FiscalCalendar,
    pub store: RecordStore,
}

impl Project {
    pub fn open(project_dir: &Path) -> anyhow::Result<Self> {
        // A. Configuration (Infra)
        let config = load_dashboard_config(project_dir).with_context(|| {
            format!(
                "Failed to load dashboard configuration from {:?}",
                project_dir
            )
        })?;
        // B. Adapter (the connection itself is opened on first use)
        let backend = config
            .backend
            .open(project_dir)
            .with_context(|| format!("Failed to open backend {:?}", config.backend.path()))?;
        // C. Sélecteur d'année fiscale
        let calendar = config.calendar(chrono::Local::now().year());

        Ok(Self {
            config,
            calendar,
            store: RecordStore::new(backend),
        })
    }

    /// The requested fiscal year, checked against the selector, or the default one.
    pub fn year(&self, requested: Option<i32>) -> anyhow::Result<i32> {
        match requested {
            Some(year) => Ok(self.calendar.validate(year)?),
            None => Ok(self.calendar.default_year()),
        }
    }
}

/// Passive notice: the command goes on with whatever the snapshot holds.
pub fn warn_if_degraded(degraded: bool) {
    if degraded {
        eprintln!("⚠️  Backend unavailable: showing the last loaded data (may be empty or stale).");
    }
}
