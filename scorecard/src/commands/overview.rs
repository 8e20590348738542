// scorecard/src/commands/overview.rs
//
// USE CASE: Yearly overview of the whole team (the office TV screen).

use std::path::Path;

use scorecard_core::application::build_overview;
use scorecard_core::application::dashboard::{Chart, OverviewView};
use scorecard_core::domain::Month;

use super::render::{money, pct, table};
use super::{Project, warn_if_degraded};

pub fn execute(project_dir: &Path, year: Option<i32>, json: bool) -> anyhow::Result<()> {
    let mut project = Project::open(project_dir)?;
    let year = project.year(year)?;

    let workbook = project.store.load_workbook();
    warn_if_degraded(workbook.degraded);
    let view = build_overview(&workbook, year);

    if json {
        println!("{}", view.to_json()?);
        return Ok(());
    }

    println!("\n📺 {} · {}", project.config.name, year);
    if view.goals.defaulted {
        println!("   (no goals configured for {}, using defaults)", year);
    }
    print_panels(&view);
    print_series(&view);
    Ok(())
}

fn print_panels(view: &OverviewView) {
    let mut summary = table(vec![
        "Employee",
        "Headline",
        "Year to date",
        "Annual goal",
        "Progress",
        "Monthly goal",
    ]);
    for panel in &view.panels {
        summary.add_row(vec![
            panel.employee.full_name().to_string(),
            panel.headline.label().to_string(),
            money(panel.year_to_date),
            money(panel.annual_goal),
            pct(panel.progress_pct),
            money(panel.monthly_goal),
        ]);
    }
    println!("{summary}");
}

fn series_value(chart: &Chart, month: Month) -> Option<f64> {
    let actual = match chart {
        Chart::Monthly { actual, .. } | Chart::Cumulative { actual, .. } => actual,
    };
    actual.iter().find(|p| p.month == month).map(|p| p.value)
}

fn print_series(view: &OverviewView) {
    let mut header = vec!["Month".to_string()];
    header.extend(view.panels.iter().map(|p| match p.chart {
        Chart::Monthly { .. } => p.employee.as_str().to_string(),
        Chart::Cumulative { .. } => format!("{} (cumulative)", p.employee.as_str()),
    }));
    header.push("ideal".to_string());

    let ideal = view.panels.iter().find_map(|p| match &p.chart {
        Chart::Cumulative { ideal, .. } => Some(ideal),
        Chart::Monthly { .. } => None,
    });

    let mut series = table(header.iter().map(String::as_str).collect());
    for month in Month::ALL {
        let mut row = vec![month.to_string()];
        row.extend(
            view.panels
                .iter()
                .map(|p| series_value(&p.chart, month).map(money).unwrap_or_default()),
        );
        row.push(
            ideal
                .and_then(|points| points.iter().find(|p| p.month == month))
                .map(|p| money(p.value))
                .unwrap_or_default(),
        );
        series.add_row(row);
    }
    println!("{series}");
}
