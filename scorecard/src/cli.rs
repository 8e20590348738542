// scorecard/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scorecard")]
#[command(about = "KPI, goal and bonus dashboard for the CODESA sales team", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Project directory (holds scorecard.yaml)
    #[arg(long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📅 Lists the selectable fiscal years
    Years,

    /// 📺 Yearly overview of the three employees (TV view)
    Overview {
        /// Fiscal year (default: current year when selectable)
        #[arg(long)]
        year: Option<i32>,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },

    /// 👤 Monthly KPI cards and wallet of one employee
    Employee {
        /// mario | david | hellen
        employee: String,

        #[arg(long)]
        year: Option<i32>,

        /// Month name (Enero .. Diciembre)
        #[arg(long, default_value = "Enero")]
        month: String,

        #[arg(long)]
        json: bool,
    },

    /// ✍️ Captures (or corrects) the figures of one month
    Capture {
        #[arg(long)]
        month: String,

        #[arg(long)]
        year: Option<i32>,

        /// Column assignment, repeatable (ex: --set m_ventas=850000)
        #[arg(long = "set", value_name = "COLUMN=VALUE")]
        assignments: Vec<String>,
    },

    /// 🎯 Shows or edits the goals of a fiscal year
    Goals {
        #[command(subcommand)]
        action: GoalsAction,
    },
}

#[derive(Subcommand)]
pub enum GoalsAction {
    /// Shows the goals in force for a year
    Show {
        #[arg(long)]
        year: Option<i32>,
    },
    /// Overrides some fields of a year's goals; the rest keep their value
    Set(GoalArgs),
}

#[derive(Args, Debug, Default)]
pub struct GoalArgs {
    #[arg(long)]
    pub year: Option<i32>,

    /// Annual services sales goal
    #[arg(long)]
    pub mario_goal: Option<f64>,

    /// Annual detected additional work goal
    #[arg(long)]
    pub david_goal: Option<f64>,

    /// Annual product sales goal
    #[arg(long)]
    pub hellen_goal: Option<f64>,

    /// Reward for reaching the services goal (ex: "Viaje Los Cabos")
    #[arg(long)]
    pub reward: Option<String>,

    #[arg(long)]
    pub david_bonus: Option<f64>,

    #[arg(long)]
    pub hellen_bonus: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_overview_defaults() -> Result<()> {
        let args = Cli::parse_from(["scorecard", "overview"]);
        assert_eq!(args.project_dir.to_string_lossy(), ".");
        match args.command {
            Commands::Overview { year, json } => {
                assert_eq!(year, None);
                assert!(!json);
                Ok(())
            }
            _ => bail!("Expected Overview command"),
        }
    }

    #[test]
    fn test_cli_parse_employee() -> Result<()> {
        let args = Cli::parse_from([
            "scorecard",
            "employee",
            "hellen",
            "--month",
            "Marzo",
            "--year",
            "2027",
            "--project-dir",
            "/tmp",
        ]);
        assert_eq!(args.project_dir.to_string_lossy(), "/tmp");
        match args.command {
            Commands::Employee {
                employee,
                year,
                month,
                json,
            } => {
                assert_eq!(employee, "hellen");
                assert_eq!(year, Some(2027));
                assert_eq!(month, "Marzo");
                assert!(!json);
                Ok(())
            }
            _ => bail!("Expected Employee command"),
        }
    }

    #[test]
    fn test_cli_parse_capture_repeated_set() -> Result<()> {
        let args = Cli::parse_from([
            "scorecard",
            "capture",
            "--month",
            "Enero",
            "--set",
            "m_ventas=850000",
            "--set",
            "d_sat=9.5",
        ]);
        match args.command {
            Commands::Capture {
                month, assignments, ..
            } => {
                assert_eq!(month, "Enero");
                assert_eq!(assignments, vec!["m_ventas=850000", "d_sat=9.5"]);
                Ok(())
            }
            _ => bail!("Expected Capture command"),
        }
    }

    #[test]
    fn test_cli_parse_goals_set() -> Result<()> {
        let args = Cli::parse_from([
            "scorecard",
            "goals",
            "set",
            "--hellen-goal",
            "1200000",
            "--reward",
            "Crucero",
        ]);
        match args.command {
            Commands::Goals {
                action: GoalsAction::Set(goal),
            } => {
                assert_eq!(goal.hellen_goal, Some(1_200_000.0));
                assert_eq!(goal.reward.as_deref(), Some("Crucero"));
                assert_eq!(goal.mario_goal, None);
                Ok(())
            }
            _ => bail!("Expected Goals Set command"),
        }
    }
}
