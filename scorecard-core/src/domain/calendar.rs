// scorecard-core/src/domain/calendar.rs

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

// Declaration order is calendar order, so the derived Ord sorts chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Month {
    #[default]
    Enero,
    Febrero,
    Marzo,
    Abril,
    Mayo,
    Junio,
    Julio,
    Agosto,
    Septiembre,
    Octubre,
    Noviembre,
    Diciembre,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Enero,
        Month::Febrero,
        Month::Marzo,
        Month::Abril,
        Month::Mayo,
        Month::Junio,
        Month::Julio,
        Month::Agosto,
        Month::Septiembre,
        Month::Octubre,
        Month::Noviembre,
        Month::Diciembre,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enero => "Enero",
            Self::Febrero => "Febrero",
            Self::Marzo => "Marzo",
            Self::Abril => "Abril",
            Self::Mayo => "Mayo",
            Self::Junio => "Junio",
            Self::Julio => "Julio",
            Self::Agosto => "Agosto",
            Self::Septiembre => "Septiembre",
            Self::Octubre => "Octubre",
            Self::Noviembre => "Noviembre",
            Self::Diciembre => "Diciembre",
        }
    }

    /// 1-based position in the year.
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Month {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Month::ALL
            .into_iter()
            .find(|m| m.as_str().to_lowercase() == wanted)
            .ok_or_else(|| DomainError::UnknownMonth(s.to_string()))
    }
}

/// First fiscal year the dashboard was put in service.
pub const FIRST_FISCAL_YEAR: i32 = 2026;

/// How many years past the current one the selector reaches (exclusive).
pub const YEARS_AHEAD: i32 = 10;

/// The fiscal-year selector: from a fixed start year up to, but excluding,
/// the current year plus ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiscalCalendar {
    pub start_year: i32,
    pub current_year: i32,
}

impl FiscalCalendar {
    pub fn new(start_year: i32, current_year: i32) -> Self {
        Self {
            start_year,
            current_year,
        }
    }

    pub fn years(&self) -> Vec<i32> {
        (self.start_year..self.current_year + YEARS_AHEAD).collect()
    }

    /// The current year when it is selectable, otherwise the first year.
    pub fn default_year(&self) -> i32 {
        let years = self.years();
        if years.contains(&self.current_year) {
            self.current_year
        } else {
            years.first().copied().unwrap_or(self.start_year)
        }
    }

    pub fn validate(&self, year: i32) -> Result<i32, DomainError> {
        let years = self.years();
        match (years.first(), years.last()) {
            (Some(&first), Some(&last)) if (first..=last).contains(&year) => Ok(year),
            (Some(&first), Some(&last)) => Err(DomainError::FiscalYearOutOfRange { year, first, last }),
            _ => Err(DomainError::FiscalYearOutOfRange {
                year,
                first: self.start_year,
                last: self.start_year,
            }),
        }
    }
}

impl Default for FiscalCalendar {
    fn default() -> Self {
        use chrono::Datelike;
        Self::new(FIRST_FISCAL_YEAR, chrono::Local::now().year())
    }
}
