// scorecard/src/commands/capture.rs
//
// USE CASE: Monthly capture form. Starts from what is already captured for
// the month (or zeros) and overrides the supplied columns.

use std::path::Path;

use scorecard_core::application::{Ledger, capture_month};
use scorecard_core::domain::Month;
use scorecard_core::infrastructure::store::SaveOutcome;

use super::{Project, warn_if_degraded};

pub fn execute(
    project_dir: &Path,
    year: Option<i32>,
    month: &str,
    assignments: &[String],
) -> anyhow::Result<()> {
    let month: Month = month.parse()?;
    let mut project = Project::open(project_dir)?;
    let year = project.year(year)?;

    let loaded = project.store.load_records();
    warn_if_degraded(loaded.is_degraded());

    let mut record = Ledger::new(&loaded.rows).month_record(year, month);
    for assignment in assignments {
        let metric = record.assign(assignment)?;
        tracing::debug!(column = metric.column(), "Field overridden");
    }

    match capture_month(&mut project.store, record)? {
        SaveOutcome::Persisted => {
            println!("✨ {} {} saved to {}.", month, year, project.store.backend_name());
        }
        SaveOutcome::MemoryOnly => {
            eprintln!(
                "⚠️  {} {} could not be written to {}; the change is kept for this session only.",
                month,
                year,
                project.store.backend_name()
            );
        }
    }
    Ok(())
}
