// scorecard-core/src/application/mod.rs

pub mod aggregation;
pub mod capture;
pub mod dashboard;
pub mod evaluation;
pub mod goal_resolver;

// --- RE-EXPORTS (FACADE PATTERN) ---
// The CLI does `use scorecard_core::application::{build_overview, capture_month};`
// without knowing the file layout.

pub use aggregation::{Ledger, YearToDate};
pub use capture::{capture_month, configure_goals, upsert_goal, upsert_record};
pub use dashboard::{EmployeeView, OverviewView, build_employee_view, build_overview};
pub use evaluation::{Scorecard, Wallet, evaluate};
pub use goal_resolver::resolve_goals;
