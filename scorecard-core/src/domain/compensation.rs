// scorecard-core/src/domain/compensation.rs

//! Money rules: commissions, reward progress and bonus unlocks.
//!
//! Everything here is a pure function of year-to-date figures and goals.

/// Mario's commission on revenue from newly opened clients.
pub const NEW_CLIENT_COMMISSION_RATE: f64 = 0.05;

/// Commission on additional work detected on site. Paid to David, and also
/// credited to Mario, who closes the sale.
pub const DETECTED_WORK_COMMISSION_RATE: f64 = 0.01;

/// `actual / goal` clamped to [0, 1]. A goal of zero or less yields 0.
pub fn progress_ratio(actual: f64, goal: f64) -> f64 {
    if goal > 0.0 {
        (actual / goal).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// [`progress_ratio`] as a percentage in [0, 100].
pub fn progress_pct(actual: f64, goal: f64) -> f64 {
    progress_ratio(actual, goal) * 100.0
}

/// Inclusive: reaching the goal exactly unlocks the bonus.
pub fn bonus_unlocked(actual: f64, goal: f64) -> bool {
    actual >= goal
}

/// Mario's cumulative commission split by source.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ServicesCommission {
    pub new_clients: f64,
    pub detected_work: f64,
    pub total: f64,
}

/// Mario's commission depends on David's detected amount: the coupling is
/// part of the pay plan, so the figure is an explicit argument.
pub fn services_commission(
    ytd_new_client_revenue: f64,
    ytd_detected_amount_by_david: f64,
) -> ServicesCommission {
    let new_clients = ytd_new_client_revenue * NEW_CLIENT_COMMISSION_RATE;
    let detected_work = ytd_detected_amount_by_david * DETECTED_WORK_COMMISSION_RATE;
    ServicesCommission {
        new_clients,
        detected_work,
        total: new_clients + detected_work,
    }
}

pub fn site_commission(ytd_detected_amount: f64) -> f64 {
    ytd_detected_amount * DETECTED_WORK_COMMISSION_RATE
}
