// scorecard-core/src/application/goal_resolver.rs

use tracing::debug;

use crate::domain::goals::{GoalConfig, ResolvedGoals};

/// The goals of `year`: its configuration row when one exists, the
/// hard-coded defaults otherwise. Call once per view and reuse the result.
pub fn resolve_goals(goals: &[GoalConfig], year: i32) -> ResolvedGoals {
    match goals.iter().find(|g| g.year == year) {
        Some(config) => ResolvedGoals {
            config: config.clone(),
            defaulted: false,
        },
        None => {
            debug!(year, "No goal configuration row, using defaults");
            ResolvedGoals {
                config: GoalConfig::defaults_for(year),
                defaulted: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::Employee;

    #[test]
    fn test_missing_year_gets_defaults() {
        let resolved = resolve_goals(&[], 2028);
        assert!(resolved.defaulted);
        assert_eq!(resolved.config, GoalConfig::defaults_for(2028));
    }

    #[test]
    fn test_configured_year_is_used_verbatim() {
        let configured = GoalConfig {
            year: 2027,
            mario_goal: 0.0,
            david_goal: 2_000_000.0,
            hellen_goal: 1_500_000.0,
            reward: "Crucero Caribe".into(),
            david_bonus: 0.0,
            hellen_bonus: 30_000.0,
        };
        let rows = vec![GoalConfig::defaults_for(2026), configured.clone()];

        let resolved = resolve_goals(&rows, 2027);
        assert!(!resolved.defaulted);
        // Zero values are real configuration, not holes to fill.
        assert_eq!(resolved.config, configured);
        assert_eq!(resolved.annual(Employee::Mario), 0.0);
        assert_eq!(resolved.monthly(Employee::Hellen), 125_000.0);
    }
}
