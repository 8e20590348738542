// scorecard/src/commands/render.rs
//
// Terminal formatting shared by the commands.

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use scorecard_core::domain::Unit;

pub fn table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// `$1,234,567.89`
pub fn money(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = format!("{:.2}", amount.abs());
    let (whole, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{}${}.{}", sign, grouped, frac)
}

pub fn value(amount: f64, unit: Unit) -> String {
    match unit {
        Unit::Currency => money(amount),
        Unit::Percent => format!("{:.1}%", amount),
        Unit::Count => format!("{:.0}", amount),
        Unit::Score => format!("{:.1}", amount),
    }
}

pub fn pct(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn status(attained: bool) -> &'static str {
    if attained { "✅ ACHIEVED" } else { "⏳ IN PROGRESS" }
}

pub fn lock(unlocked: bool) -> &'static str {
    if unlocked { "🔓 UNLOCKED" } else { "🔒 LOCKED" }
}
