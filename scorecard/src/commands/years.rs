// scorecard/src/commands/years.rs
//
// USE CASE: List the fiscal year selector.

use std::path::Path;

use super::Project;

pub fn execute(project_dir: &Path) -> anyhow::Result<()> {
    let project = Project::open(project_dir)?;
    let default = project.calendar.default_year();

    for year in project.calendar.years() {
        if year == default {
            println!("{} (default)", year);
        } else {
            println!("{}", year);
        }
    }
    Ok(())
}
