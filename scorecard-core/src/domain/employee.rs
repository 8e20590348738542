// scorecard-core/src/domain/employee.rs

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three people the dashboard tracks. The roster is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Employee {
    /// Services sales lead; owns the annual reward (trip).
    Mario,
    /// Site architect; detects additional work on running projects.
    David,
    /// Product sales; owns the digital-activity KPI.
    Hellen,
}

impl Employee {
    pub const ALL: [Employee; 3] = [Employee::Mario, Employee::David, Employee::Hellen];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mario => "mario",
            Self::David => "david",
            Self::Hellen => "hellen",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            Self::Mario => "Mario Corral",
            Self::David => "Arq. David Puga",
            Self::Hellen => "Lic. Hellen García",
        }
    }

    pub fn role(&self) -> &'static str {
        match self {
            Self::Mario => "Services Sales",
            Self::David => "Site Operations",
            Self::Hellen => "Product Sales",
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}

impl std::str::FromStr for Employee {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mario" => Ok(Self::Mario),
            "david" => Ok(Self::David),
            "hellen" => Ok(Self::Hellen),
            _ => Err(DomainError::UnknownEmployee(s.to_string())),
        }
    }
}
