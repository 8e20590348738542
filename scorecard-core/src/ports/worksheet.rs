// scorecard-core/src/ports/worksheet.rs

// What the application needs from a tabular backend, without knowing whether
// the cells live in a spreadsheet, a CSV directory or a DuckDB file.
// Reads and writes always move a whole worksheet: there are no row patches.

use crate::error::ScorecardError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two worksheets the dashboard knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sheet {
    /// Monthly operational records.
    Datos,
    /// Yearly goals and rewards.
    Metas,
}

impl Sheet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Datos => "Datos",
            Self::Metas => "Metas",
        }
    }
}

impl fmt::Display for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single untyped cell, as the backend hands it over.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl Cell {
    /// Sniffs a raw text field: blank is empty, anything that parses as a
    /// float is a number, the rest stays text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(n) => Cell::Number(n),
            Err(_) => Cell::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            // Whole numbers are written without a trailing ".0" so that years
            // and counts look the way a person typed them.
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A worksheet: a header row plus data rows, in backend order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub trait WorksheetBackend: Send + Sync {
    /// Reads a whole worksheet. A worksheet that does not exist yet is an
    /// empty table, not an error; errors mean the backend itself failed.
    fn read(&self, sheet: Sheet) -> Result<RawTable, ScorecardError>;

    /// Replaces the whole worksheet with `table`.
    fn write(&self, sheet: Sheet, table: &RawTable) -> Result<(), ScorecardError>;

    fn backend_name(&self) -> &str;
}
