// scorecard/src/main.rs

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands, GoalsAction};

fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // Logs go to stderr so `--json` output stays clean.
    // RUST_LOG=debug scorecard overview ... to see the details
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // 2. Parsing des arguments
    let cli = Cli::parse();
    let project_dir = cli.project_dir;

    // 3. Dispatch vers les cas d'usage
    match cli.command {
        Commands::Years => commands::years::execute(&project_dir),
        Commands::Overview { year, json } => commands::overview::execute(&project_dir, year, json),
        Commands::Employee {
            employee,
            year,
            month,
            json,
        } => commands::employee::execute(&project_dir, &employee, year, &month, json),
        Commands::Capture {
            month,
            year,
            assignments,
        } => commands::capture::execute(&project_dir, year, &month, &assignments),
        Commands::Goals { action } => match action {
            GoalsAction::Show { year } => commands::goals::show(&project_dir, year),
            GoalsAction::Set(args) => commands::goals::set(&project_dir, args),
        },
    }
}
