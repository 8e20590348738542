// scorecard-core/src/infrastructure/store/coercion.rs

//! Typed rows <-> raw worksheet cells.
//!
//! Reading never fails: a blank, non-numeric or non-finite numeric cell is
//! zero, a missing column takes its default. Columns are looked up by header.

use tracing::warn;

use crate::domain::calendar::Month;
use crate::domain::goals::{DEFAULT_DAVID_BONUS, DEFAULT_HELLEN_BONUS, DEFAULT_REWARD, GoalConfig};
use crate::domain::metric::Metric;
use crate::domain::record::MonthlyRecord;
use crate::ports::worksheet::{Cell, RawTable};

pub const YEAR_COLUMN: &str = "Año";
pub const MONTH_COLUMN: &str = "Mes";

pub const MARIO_GOAL_COLUMN: &str = "meta_mario";
pub const DAVID_GOAL_COLUMN: &str = "meta_david";
pub const HELLEN_GOAL_COLUMN: &str = "meta_hellen";
pub const REWARD_COLUMN: &str = "premio_mario";
pub const DAVID_BONUS_COLUMN: &str = "bono_david";
pub const HELLEN_BONUS_COLUMN: &str = "bono_hellen";

pub fn datos_columns() -> Vec<String> {
    [YEAR_COLUMN, MONTH_COLUMN]
        .into_iter()
        .chain(Metric::ALL.iter().map(|m| m.column()))
        .map(String::from)
        .collect()
}

pub fn metas_columns() -> Vec<String> {
    [
        YEAR_COLUMN,
        MARIO_GOAL_COLUMN,
        DAVID_GOAL_COLUMN,
        HELLEN_GOAL_COLUMN,
        REWARD_COLUMN,
        DAVID_BONUS_COLUMN,
        HELLEN_BONUS_COLUMN,
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Numeric value of a cell; everything unusable is zero.
pub fn number(cell: Option<&Cell>) -> f64 {
    let value = match cell {
        Some(Cell::Number(n)) => *n,
        Some(Cell::Text(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        Some(Cell::Empty) | None => 0.0,
    };
    if value.is_finite() { value } else { 0.0 }
}

fn text(cell: Option<&Cell>) -> Option<String> {
    match cell {
        Some(Cell::Text(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(n @ Cell::Number(_)) => Some(n.to_string()),
        _ => None,
    }
}

/// Resolves header names to positions once per table.
struct Columns<'a> {
    table: &'a RawTable,
}

impl<'a> Columns<'a> {
    fn cell<'r>(&self, row: &'r [Cell], name: &str) -> Option<&'r Cell> {
        self.table.column_index(name).and_then(|idx| row.get(idx))
    }

    fn has(&self, name: &str) -> bool {
        self.table.column_index(name).is_some()
    }
}

pub fn records_from_table(table: &RawTable) -> Vec<MonthlyRecord> {
    let cols = Columns { table };
    let mut records = Vec::with_capacity(table.rows.len());

    for (line, row) in table.rows.iter().enumerate() {
        let month = match cols.cell(row, MONTH_COLUMN).and_then(|c| text(Some(c))) {
            Some(raw) => match raw.parse::<Month>() {
                Ok(m) => m,
                Err(_) => {
                    warn!(line, month = %raw, "Skipping record with unknown month");
                    continue;
                }
            },
            None => {
                warn!(line, "Skipping record without month");
                continue;
            }
        };

        let mut record = MonthlyRecord::empty(number(cols.cell(row, YEAR_COLUMN)) as i32, month);
        for metric in Metric::ALL {
            record.set(metric, number(cols.cell(row, metric.column())));
        }
        records.push(record);
    }

    records
}

pub fn records_to_table(records: &[MonthlyRecord]) -> RawTable {
    let mut table = RawTable::new(datos_columns());
    for record in records {
        let mut row = vec![
            Cell::Number(record.year.into()),
            Cell::Text(record.month.as_str().to_string()),
        ];
        row.extend(Metric::ALL.iter().map(|m| Cell::Number(record.get(*m))));
        table.rows.push(row);
    }
    table
}

pub fn goals_from_table(table: &RawTable) -> Vec<GoalConfig> {
    let cols = Columns { table };

    // Sheets created before the reward columns existed get the historical
    // values for the whole column; other missing columns are zero.
    let column_or = |row: &[Cell], name: &str, fallback: f64| {
        if cols.has(name) {
            number(cols.cell(row, name))
        } else {
            fallback
        }
    };

    table
        .rows
        .iter()
        .map(|row| {
            let row = row.as_slice();
            GoalConfig {
                year: number(cols.cell(row, YEAR_COLUMN)) as i32,
                mario_goal: number(cols.cell(row, MARIO_GOAL_COLUMN)),
                david_goal: number(cols.cell(row, DAVID_GOAL_COLUMN)),
                hellen_goal: number(cols.cell(row, HELLEN_GOAL_COLUMN)),
                reward: text(cols.cell(row, REWARD_COLUMN))
                    .unwrap_or_else(|| DEFAULT_REWARD.to_string()),
                david_bonus: column_or(row, DAVID_BONUS_COLUMN, DEFAULT_DAVID_BONUS),
                hellen_bonus: column_or(row, HELLEN_BONUS_COLUMN, DEFAULT_HELLEN_BONUS),
            }
        })
        .collect()
}

pub fn goals_to_table(goals: &[GoalConfig]) -> RawTable {
    let mut table = RawTable::new(metas_columns());
    for goal in goals {
        table.rows.push(vec![
            Cell::Number(goal.year.into()),
            Cell::Number(goal.mario_goal),
            Cell::Number(goal.david_goal),
            Cell::Number(goal.hellen_goal),
            Cell::Text(goal.reward.clone()),
            Cell::Number(goal.david_bonus),
            Cell::Number(goal.hellen_bonus),
        ]);
    }
    table
}
