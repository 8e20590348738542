// scorecard-core/src/application/evaluation.rs

//! KPI evaluation: turns one month's record, the year-to-date sums and the
//! resolved goals into an employee scorecard. Pure and idempotent.

use serde::Serialize;

use crate::application::aggregation::YearToDate;
use crate::domain::calendar::Month;
use crate::domain::compensation::{
    ServicesCommission, bonus_unlocked, progress_pct, services_commission, site_commission,
};
use crate::domain::employee::Employee;
use crate::domain::goals::ResolvedGoals;
use crate::domain::kpi::{DigitalActivity, Direction, KpiResult, Unit};
use crate::domain::record::MonthlyRecord;

pub const MIN_NEW_CLIENTS: f64 = 1.0;
pub const MIN_TECHNICAL_CONTENT: f64 = 2.0;
/// Percent of schedule / budget deviation tolerated.
pub const MAX_SCHEDULE_DEVIATION: f64 = 5.0;
pub const MIN_SATISFACTION: f64 = 9.0;
pub const MIN_SAFETY_COURSES: f64 = 2.0;
pub const MIN_APPOINTMENTS: f64 = 4.0;

/// Cumulative money card of an employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Wallet {
    Services {
        commission: ServicesCommission,
        reward: String,
        reward_progress_pct: f64,
    },
    Site {
        commission: f64,
        bonus: f64,
        bonus_unlocked: bool,
    },
    Product {
        bonus: f64,
        bonus_unlocked: bool,
    },
}

impl Wallet {
    pub fn for_employee(employee: Employee, ytd: &YearToDate, goals: &ResolvedGoals) -> Self {
        match employee {
            Employee::Mario => Wallet::Services {
                // David's detected amount is an explicit input: Mario earns on it too.
                commission: services_commission(ytd.new_client_revenue, ytd.detected_amount),
                reward: goals.config.reward.clone(),
                reward_progress_pct: progress_pct(ytd.services_sales, goals.annual(Employee::Mario)),
            },
            Employee::David => Wallet::Site {
                commission: site_commission(ytd.detected_amount),
                bonus: goals.config.david_bonus,
                bonus_unlocked: bonus_unlocked(ytd.detected_amount, goals.annual(Employee::David)),
            },
            Employee::Hellen => Wallet::Product {
                bonus: goals.config.hellen_bonus,
                bonus_unlocked: bonus_unlocked(ytd.product_sales, goals.annual(Employee::Hellen)),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    pub employee: Employee,
    pub year: i32,
    pub month: Month,
    pub kpis: Vec<KpiResult>,
    /// Only Hellen has the composite digital-activity KPI.
    pub digital: Option<DigitalActivity>,
    pub wallet: Wallet,
}

impl Scorecard {
    pub fn attained_count(&self) -> usize {
        self.kpis.iter().filter(|k| k.attained).count()
            + usize::from(self.digital.is_some_and(|d| d.attained))
    }

    pub fn kpi_count(&self) -> usize {
        self.kpis.len() + usize::from(self.digital.is_some())
    }
}

/// Builds the monthly scorecard of `employee`.
pub fn evaluate(
    employee: Employee,
    record: &MonthlyRecord,
    ytd: &YearToDate,
    goals: &ResolvedGoals,
) -> Scorecard {
    let monthly_goal = goals.monthly(employee);

    let (kpis, digital) = match employee {
        Employee::Mario => (
            vec![
                KpiResult::evaluate(
                    "Services sales",
                    record.services_sales,
                    monthly_goal,
                    Direction::Direct,
                    Unit::Currency,
                    format!("Counts toward {}", goals.config.reward),
                ),
                KpiResult::evaluate(
                    "New clients",
                    record.new_clients as f64,
                    MIN_NEW_CLIENTS,
                    Direction::Direct,
                    Unit::Count,
                    "Earns the 5% new-client commission",
                ),
                KpiResult::evaluate(
                    "Technical content published",
                    record.technical_content as f64,
                    MIN_TECHNICAL_CONTENT,
                    Direction::Direct,
                    Unit::Count,
                    "Leadership operating requirement",
                ),
            ],
            None,
        ),
        Employee::David => (
            vec![
                KpiResult::evaluate(
                    "Additional work detected",
                    record.detected_amount,
                    monthly_goal,
                    Direction::Direct,
                    Unit::Currency,
                    "Counts toward the 1% commission and the bonus",
                ),
                KpiResult::evaluate(
                    "Schedule / budget deviation",
                    record.schedule_deviation,
                    MAX_SCHEDULE_DEVIATION,
                    Direction::Inverse,
                    Unit::Percent,
                    "Requirement for the one-month salary bonus",
                ),
                KpiResult::evaluate(
                    "Customer satisfaction (NPS)",
                    record.satisfaction,
                    MIN_SATISFACTION,
                    Direction::Direct,
                    Unit::Score,
                    "Post-sale quality KPI",
                ),
                KpiResult::evaluate(
                    "Safety courses",
                    record.safety_courses as f64,
                    MIN_SAFETY_COURSES,
                    Direction::Direct,
                    Unit::Count,
                    "Safety KPI (site log)",
                ),
            ],
            None,
        ),
        Employee::Hellen => (
            vec![
                KpiResult::evaluate(
                    "Product sales",
                    record.product_sales,
                    monthly_goal,
                    Direction::Direct,
                    Unit::Currency,
                    format!("Accumulates toward the ${:.0} bonus", goals.config.hellen_bonus),
                ),
                KpiResult::evaluate(
                    "Appointments (CRM)",
                    record.appointments as f64,
                    MIN_APPOINTMENTS,
                    Direction::Direct,
                    Unit::Count,
                    "Main prospecting engine",
                ),
            ],
            Some(DigitalActivity::evaluate(
                record.mailings,
                record.social_posts,
                record.articles,
            )),
        ),
    };

    Scorecard {
        employee,
        year: record.year,
        month: record.month,
        kpis,
        digital,
        wallet: Wallet::for_employee(employee, ytd, goals),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::aggregation::Ledger;
    use crate::application::goal_resolver::resolve_goals;
    use crate::domain::goals::GoalConfig;

    fn march_2026() -> MonthlyRecord {
        MonthlyRecord {
            new_client_revenue: 200_000.0,
            detected_amount: 50_000.0,
            ..MonthlyRecord::empty(2026, Month::Marzo)
        }
    }

    #[test]
    fn test_mario_commission_includes_david_detected_amount() {
        let records = vec![march_2026()];
        let ledger = Ledger::new(&records);
        let ytd = ledger.year_to_date(2026);
        let goals = resolve_goals(&[], 2026);

        let card = evaluate(Employee::Mario, &ledger.month_record(2026, Month::Marzo), &ytd, &goals);
        match card.wallet {
            Wallet::Services { commission, .. } => {
                assert!((commission.total - 10_500.0).abs() < 1e-9);
            }
            other => panic!("Expected services wallet, got {:?}", other),
        }
    }

    #[test]
    fn test_david_bonus_unlocks_exactly_at_goal() {
        let ytd = YearToDate {
            year: 2026,
            detected_amount: 1_000_000.0,
            ..Default::default()
        };
        let goals = resolve_goals(&[], 2026);
        assert_eq!(goals.annual(Employee::David), 1_000_000.0);

        match Wallet::for_employee(Employee::David, &ytd, &goals) {
            Wallet::Site {
                commission,
                bonus,
                bonus_unlocked,
            } => {
                assert!(bonus_unlocked);
                assert_eq!(bonus, 15_000.0);
                assert!((commission - 10_000.0).abs() < 1e-9);
            }
            other => panic!("Expected site wallet, got {:?}", other),
        }
    }

    #[test]
    fn test_hellen_bonus_follows_configured_goal() {
        let ytd = YearToDate {
            year: 2027,
            product_sales: 600_000.0,
            ..Default::default()
        };
        let config = GoalConfig {
            hellen_goal: 500_000.0,
            hellen_bonus: 40_000.0,
            ..GoalConfig::defaults_for(2027)
        };
        let goals = resolve_goals(&[config], 2027);
        assert_eq!(
            Wallet::for_employee(Employee::Hellen, &ytd, &goals),
            Wallet::Product {
                bonus: 40_000.0,
                bonus_unlocked: true
            }
        );
    }

    #[test]
    fn test_reward_progress_with_zero_goal_is_zero() {
        let ytd = YearToDate {
            year: 2026,
            services_sales: 5_000_000.0,
            ..Default::default()
        };
        let config = GoalConfig {
            mario_goal: 0.0,
            ..GoalConfig::defaults_for(2026)
        };
        let goals = resolve_goals(&[config], 2026);
        match Wallet::for_employee(Employee::Mario, &ytd, &goals) {
            Wallet::Services {
                reward_progress_pct, ..
            } => assert_eq!(reward_progress_pct, 0.0),
            other => panic!("Expected services wallet, got {:?}", other),
        }
    }

    #[test]
    fn test_unreported_deviation_is_not_attained() {
        let record = MonthlyRecord::empty(2026, Month::Enero);
        let goals = resolve_goals(&[], 2026);
        let card = evaluate(Employee::David, &record, &YearToDate::default(), &goals);

        let deviation = card
            .kpis
            .iter()
            .find(|k| k.direction == Direction::Inverse)
            .map(|k| k.attained);
        assert_eq!(deviation, Some(false));
    }

    #[test]
    fn test_hellen_digital_activity_one_short() {
        let record = MonthlyRecord {
            mailings: 2,
            social_posts: 1,
            articles: 1,
            appointments: 4,
            ..MonthlyRecord::empty(2026, Month::Mayo)
        };
        let goals = resolve_goals(&[], 2026);
        let card = evaluate(Employee::Hellen, &record, &YearToDate::default(), &goals);

        assert_eq!(card.digital.map(|d| d.attained), Some(false));
        assert_eq!(card.kpi_count(), 3);
        // Appointments met; sales and the composite are not.
        assert_eq!(card.attained_count(), 1);
    }

    #[test]
    fn test_monthly_targets_use_twelfth_of_goal() {
        let record = MonthlyRecord {
            services_sales: 10_623_610.66 / 12.0,
            new_clients: 1,
            technical_content: 2,
            ..MonthlyRecord::empty(2026, Month::Junio)
        };
        let goals = resolve_goals(&[], 2026);
        let card = evaluate(Employee::Mario, &record, &YearToDate::default(), &goals);
        assert!(card.kpis.iter().all(|k| k.attained));
        assert_eq!(card.kpis[0].target, 10_623_610.66 / 12.0);
    }
}
