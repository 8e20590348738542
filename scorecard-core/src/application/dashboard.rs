// scorecard-core/src/application/dashboard.rs

//! Read models of the two dashboard screens: the yearly overview shown on the
//! office TV and the per-employee monthly page.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::application::aggregation::{Ledger, SeriesPoint, YearToDate};
use crate::application::evaluation::{Scorecard, evaluate};
use crate::application::goal_resolver::resolve_goals;
use crate::domain::calendar::Month;
use crate::domain::compensation::progress_pct;
use crate::domain::employee::Employee;
use crate::domain::goals::ResolvedGoals;
use crate::domain::metric::Metric;
use crate::error::ScorecardError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::store::Workbook;

/// Chart of one overview panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chart {
    /// Bars per captured month against a flat monthly goal line.
    Monthly {
        actual: Vec<SeriesPoint>,
        monthly_goal: f64,
    },
    /// Running total against the ideal trajectory and the annual goal line.
    Cumulative {
        actual: Vec<SeriesPoint>,
        ideal: Vec<SeriesPoint>,
        annual_goal: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeePanel {
    pub employee: Employee,
    pub headline: Metric,
    pub year_to_date: f64,
    pub annual_goal: f64,
    pub monthly_goal: f64,
    pub progress_pct: f64,
    pub chart: Chart,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewView {
    pub year: i32,
    pub degraded: bool,
    pub goals: ResolvedGoals,
    pub panels: Vec<EmployeePanel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeView {
    pub year: i32,
    pub month: Month,
    pub degraded: bool,
    pub goals: ResolvedGoals,
    pub year_to_date: YearToDate,
    pub scorecard: Scorecard,
}

fn to_json<T: Serialize>(view: &T) -> Result<String, ScorecardError> {
    serde_json::to_string_pretty(view).map_err(|e| InfrastructureError::Json(e).into())
}

impl OverviewView {
    pub fn panel(&self, employee: Employee) -> Option<&EmployeePanel> {
        self.panels.iter().find(|p| p.employee == employee)
    }

    pub fn to_json(&self) -> Result<String, ScorecardError> {
        to_json(self)
    }
}

impl EmployeeView {
    pub fn to_json(&self) -> Result<String, ScorecardError> {
        to_json(self)
    }
}

/// Metric the overview headlines for each employee.
pub fn headline_metric(employee: Employee) -> Metric {
    match employee {
        Employee::Mario => Metric::ServicesSales,
        Employee::David => Metric::DetectedAmount,
        Employee::Hellen => Metric::ProductSales,
    }
}

/// Ideal cumulative trajectory: month m sits at m times the monthly goal.
///
/// Indexed by calendar month, for all twelve months, not by position among
/// the captured months: with a gap (Enero, Marzo captured) Marzo's ideal is
/// 3x the monthly goal, not 2x.
pub fn ideal_trajectory(monthly_goal: f64) -> Vec<SeriesPoint> {
    Month::ALL
        .iter()
        .map(|&month| SeriesPoint {
            month,
            value: f64::from(month.number()) * monthly_goal,
        })
        .collect()
}

fn panel(ledger: &Ledger<'_>, goals: &ResolvedGoals, employee: Employee) -> EmployeePanel {
    let year = goals.year();
    let headline = headline_metric(employee);
    let year_to_date = ledger.sum_year_to_date(year, headline);
    let annual_goal = goals.annual(employee);
    let monthly_goal = goals.monthly(employee);

    let chart = match employee {
        Employee::Mario | Employee::David => Chart::Monthly {
            actual: ledger.monthly_series(year, headline),
            monthly_goal,
        },
        Employee::Hellen => Chart::Cumulative {
            actual: ledger.cumulative_series(year, headline),
            ideal: ideal_trajectory(monthly_goal),
            annual_goal,
        },
    };

    EmployeePanel {
        employee,
        headline,
        year_to_date,
        annual_goal,
        monthly_goal,
        progress_pct: progress_pct(year_to_date, annual_goal),
        chart,
    }
}

#[instrument(skip(workbook), fields(records = workbook.records.len()))]
pub fn build_overview(workbook: &Workbook, year: i32) -> OverviewView {
    let goals = resolve_goals(&workbook.goals, year);
    let ledger = Ledger::new(&workbook.records);
    let panels = Employee::ALL
        .iter()
        .map(|&e| panel(&ledger, &goals, e))
        .collect();

    debug!(year, defaulted = goals.defaulted, "Overview built");
    OverviewView {
        year,
        degraded: workbook.degraded,
        goals,
        panels,
    }
}

#[instrument(skip(workbook), fields(records = workbook.records.len()))]
pub fn build_employee_view(
    workbook: &Workbook,
    year: i32,
    month: Month,
    employee: Employee,
) -> EmployeeView {
    let goals = resolve_goals(&workbook.goals, year);
    let ledger = Ledger::new(&workbook.records);
    let record = ledger.month_record(year, month);
    let year_to_date = ledger.year_to_date(year);
    let scorecard = evaluate(employee, &record, &year_to_date, &goals);

    EmployeeView {
        year,
        month,
        degraded: workbook.degraded,
        goals,
        year_to_date,
        scorecard,
    }
}
