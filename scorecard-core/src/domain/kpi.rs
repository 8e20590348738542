// scorecard-core/src/domain/kpi.rs

use serde::{Deserialize, Serialize};

/// Which way a KPI has to move to be good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Higher is better: attained when actual >= target.
    Direct,
    /// Lower is better: attained when 0 < actual <= target.
    /// A zero means "not reported yet", never "perfect".
    Inverse,
}

impl Direction {
    pub fn is_attained(&self, actual: f64, target: f64) -> bool {
        match self {
            Self::Direct => actual >= target,
            Self::Inverse => actual <= target && actual > 0.0,
        }
    }
}

/// How a value is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Currency,
    Percent,
    Count,
    Score,
}

/// One evaluated KPI card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiResult {
    pub title: &'static str,
    pub actual: f64,
    pub target: f64,
    pub direction: Direction,
    pub unit: Unit,
    pub attained: bool,
    /// What the KPI feeds into (commission, bonus, operating requirement).
    pub stake: String,
}

impl KpiResult {
    pub fn evaluate(
        title: &'static str,
        actual: f64,
        target: f64,
        direction: Direction,
        unit: Unit,
        stake: impl Into<String>,
    ) -> Self {
        Self {
            title,
            actual,
            target,
            direction,
            unit,
            attained: direction.is_attained(actual, target),
            stake: stake.into(),
        }
    }
}

pub const MIN_MAILINGS: i64 = 2;
pub const MIN_SOCIAL_POSTS: i64 = 2;
pub const MIN_ARTICLES: i64 = 1;

/// The digital-activity composite: every sub-threshold must hold,
/// there is no partial credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DigitalActivity {
    pub mailings: i64,
    pub social_posts: i64,
    pub articles: i64,
    pub attained: bool,
}

impl DigitalActivity {
    pub fn evaluate(mailings: i64, social_posts: i64, articles: i64) -> Self {
        Self {
            mailings,
            social_posts,
            articles,
            attained: mailings >= MIN_MAILINGS
                && social_posts >= MIN_SOCIAL_POSTS
                && articles >= MIN_ARTICLES,
        }
    }
}
