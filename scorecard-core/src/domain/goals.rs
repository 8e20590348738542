// scorecard-core/src/domain/goals.rs

use crate::domain::employee::Employee;
use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_MARIO_GOAL: f64 = 10_623_610.66;
pub const DEFAULT_DAVID_GOAL: f64 = 1_000_000.00;
pub const DEFAULT_HELLEN_GOAL: f64 = 1_000_000.00;
pub const DEFAULT_REWARD: &str = "Viaje Los Cabos";
pub const DEFAULT_DAVID_BONUS: f64 = 15_000.0;
pub const DEFAULT_HELLEN_BONUS: f64 = 25_000.0;

/// One row of the `Metas` worksheet: the annual goals and rewards of a year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct GoalConfig {
    pub year: i32,
    #[validate(range(min = 0.0))]
    pub mario_goal: f64,
    #[validate(range(min = 0.0))]
    pub david_goal: f64,
    #[validate(range(min = 0.0))]
    pub hellen_goal: f64,
    /// Non-monetary incentive tied to Mario's goal, e.g. a trip destination.
    pub reward: String,
    #[validate(range(min = 0.0))]
    pub david_bonus: f64,
    #[validate(range(min = 0.0))]
    pub hellen_bonus: f64,
}

impl GoalConfig {
    /// What a year without a configuration row gets.
    pub fn defaults_for(year: i32) -> Self {
        Self {
            year,
            mario_goal: DEFAULT_MARIO_GOAL,
            david_goal: DEFAULT_DAVID_GOAL,
            hellen_goal: DEFAULT_HELLEN_GOAL,
            reward: DEFAULT_REWARD.to_string(),
            david_bonus: DEFAULT_DAVID_BONUS,
            hellen_bonus: DEFAULT_HELLEN_BONUS,
        }
    }

    pub fn annual_goal(&self, employee: Employee) -> f64 {
        match employee {
            Employee::Mario => self.mario_goal,
            Employee::David => self.david_goal,
            Employee::Hellen => self.hellen_goal,
        }
    }

    /// Range rules plus finiteness: `inf` / `NaN` would not survive a save
    /// and reload (the coercion layer reads them back as 0).
    pub fn check(&self) -> Result<(), DomainError> {
        self.validate()
            .map_err(|e| DomainError::InvalidCapture(e.to_string()))?;

        let amounts = [
            ("mario_goal", self.mario_goal),
            ("david_goal", self.david_goal),
            ("hellen_goal", self.hellen_goal),
            ("david_bonus", self.david_bonus),
            ("hellen_bonus", self.hellen_bonus),
        ];
        match amounts.iter().find(|(_, v)| !v.is_finite()) {
            Some((field, value)) => Err(DomainError::InvalidCapture(format!(
                "{}: {} is not a finite amount",
                field, value
            ))),
            None => Ok(()),
        }
    }
}

/// Goals of one year as a view consumes them. Built once per view and reused,
/// so every card of the view agrees on the same numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedGoals {
    pub config: GoalConfig,
    /// True when no `Metas` row existed and the hard-coded defaults apply.
    pub defaulted: bool,
}

impl ResolvedGoals {
    pub fn year(&self) -> i32 {
        self.config.year
    }

    pub fn annual(&self, employee: Employee) -> f64 {
        self.config.annual_goal(employee)
    }

    /// Annual goal spread evenly over twelve months, unrounded.
    pub fn monthly(&self, employee: Employee) -> f64 {
        self.annual(employee) / 12.0
    }
}
