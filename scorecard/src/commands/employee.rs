// scorecard/src/commands/employee.rs
//
// USE CASE: Monthly KPI cards and cumulative wallet of one employee.

use std::path::Path;

use scorecard_core::application::{EmployeeView, Wallet, build_employee_view};
use scorecard_core::domain::kpi::{MIN_ARTICLES, MIN_MAILINGS, MIN_SOCIAL_POSTS};
use scorecard_core::domain::{Direction, Employee, Month};

use super::render::{lock, money, pct, status, table, value};
use super::{Project, warn_if_degraded};

pub fn execute(
    project_dir: &Path,
    employee: &str,
    year: Option<i32>,
    month: &str,
    json: bool,
) -> anyhow::Result<()> {
    let employee: Employee = employee.parse()?;
    let month: Month = month.parse()?;
    let mut project = Project::open(project_dir)?;
    let year = project.year(year)?;

    let workbook = project.store.load_workbook();
    warn_if_degraded(workbook.degraded);
    let view = build_employee_view(&workbook, year, month, employee);

    if json {
        println!("{}", view.to_json()?);
        return Ok(());
    }

    print_cards(&view);
    print_wallet(&view.scorecard.wallet);
    Ok(())
}

fn print_cards(view: &EmployeeView) {
    let card = &view.scorecard;
    println!(
        "\n👤 {} · {} · {} {}",
        card.employee.full_name(),
        card.employee.role(),
        card.month,
        card.year
    );

    let mut kpis = table(vec!["KPI", "Actual", "Target", "Status", "Stake"]);
    for kpi in &card.kpis {
        let target = match kpi.direction {
            Direction::Direct => format!("≥ {}", value(kpi.target, kpi.unit)),
            Direction::Inverse => format!("≤ {}", value(kpi.target, kpi.unit)),
        };
        kpis.add_row(vec![
            kpi.title.to_string(),
            value(kpi.actual, kpi.unit),
            target,
            status(kpi.attained).to_string(),
            kpi.stake.clone(),
        ]);
    }
    if let Some(digital) = card.digital {
        kpis.add_row(vec![
            "Digital activity".to_string(),
            format!(
                "{} mail · {} FB · {} art",
                digital.mailings, digital.social_posts, digital.articles
            ),
            format!(
                "{} · {} · {}",
                MIN_MAILINGS, MIN_SOCIAL_POSTS, MIN_ARTICLES
            ),
            status(digital.attained).to_string(),
            "Brand presence".to_string(),
        ]);
    }
    println!("{kpis}");
    println!(
        "   {}/{} KPIs achieved this month",
        card.attained_count(),
        card.kpi_count()
    );
}

fn print_wallet(wallet: &Wallet) {
    println!("\n💼 Wallet (year to date)");
    let mut rows = table(vec!["Item", "Value"]);
    match wallet {
        Wallet::Services {
            commission,
            reward,
            reward_progress_pct,
        } => {
            rows.add_row(vec!["New-client commission (5%)".to_string(), money(commission.new_clients)]);
            rows.add_row(vec!["Detected-work commission (1%)".to_string(), money(commission.detected_work)]);
            rows.add_row(vec!["Total commission".to_string(), money(commission.total)]);
            rows.add_row(vec![format!("Reward: {}", reward), pct(*reward_progress_pct)]);
        }
        Wallet::Site {
            commission,
            bonus,
            bonus_unlocked,
        } => {
            rows.add_row(vec!["Detected-work commission (1%)".to_string(), money(*commission)]);
            rows.add_row(vec![
                format!("Bonus {}", money(*bonus)),
                lock(*bonus_unlocked).to_string(),
            ]);
        }
        Wallet::Product {
            bonus,
            bonus_unlocked,
        } => {
            rows.add_row(vec![
                format!("Bonus {}", money(*bonus)),
                lock(*bonus_unlocked).to_string(),
            ]);
        }
    }
    println!("{rows}");
}
