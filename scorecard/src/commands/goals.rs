// scorecard/src/commands/goals.rs
//
// USE CASE: Goal configuration per fiscal year.

use std::path::Path;

use scorecard_core::application::{configure_goals, resolve_goals};
use scorecard_core::domain::{Employee, GoalConfig};
use scorecard_core::infrastructure::store::SaveOutcome;

use super::render::{money, table};
use super::{Project, warn_if_degraded};
use crate::cli::GoalArgs;

pub fn show(project_dir: &Path, year: Option<i32>) -> anyhow::Result<()> {
    let mut project = Project::open(project_dir)?;
    let year = project.year(year)?;

    let loaded = project.store.load_goals();
    warn_if_degraded(loaded.is_degraded());
    let goals = resolve_goals(&loaded.rows, year);

    println!("\n🎯 Goals {}", year);
    if goals.defaulted {
        println!("   (not configured, showing defaults)");
    }
    let mut rows = table(vec!["Employee", "Annual goal", "Monthly goal", "Incentive"]);
    for employee in Employee::ALL {
        let incentive = match employee {
            Employee::Mario => goals.config.reward.clone(),
            Employee::David => money(goals.config.david_bonus),
            Employee::Hellen => money(goals.config.hellen_bonus),
        };
        rows.add_row(vec![
            employee.full_name().to_string(),
            money(goals.annual(employee)),
            money(goals.monthly(employee)),
            incentive,
        ]);
    }
    println!("{rows}");
    Ok(())
}

/// Goals form: pre-filled from the goals in force, overridden by the flags.
pub fn merge(current: GoalConfig, args: GoalArgs) -> GoalConfig {
    GoalConfig {
        year: current.year,
        mario_goal: args.mario_goal.unwrap_or(current.mario_goal),
        david_goal: args.david_goal.unwrap_or(current.david_goal),
        hellen_goal: args.hellen_goal.unwrap_or(current.hellen_goal),
        reward: args.reward.unwrap_or(current.reward),
        david_bonus: args.david_bonus.unwrap_or(current.david_bonus),
        hellen_bonus: args.hellen_bonus.unwrap_or(current.hellen_bonus),
    }
}

pub fn set(project_dir: &Path, args: GoalArgs) -> anyhow::Result<()> {
    let mut project = Project::open(project_dir)?;
    let year = project.year(args.year)?;

    let loaded = project.store.load_goals();
    warn_if_degraded(loaded.is_degraded());
    let current = resolve_goals(&loaded.rows, year).config;

    match configure_goals(&mut project.store, merge(current, args))? {
        SaveOutcome::Persisted => println!("✨ Goals for {} saved.", year),
        SaveOutcome::MemoryOnly => eprintln!(
            "⚠️  Goals for {} could not be written to {}; kept for this session only.",
            year,
            project.store.backend_name()
        ),
    }
    Ok(())
}
