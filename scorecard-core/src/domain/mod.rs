pub mod calendar;
pub mod compensation;
pub mod employee;
pub mod error;
pub mod goals;
pub mod kpi;
pub mod metric;
pub mod record;

pub use calendar::{FiscalCalendar, Month};
pub use employee::Employee;
pub use error::DomainError;
pub use goals::{GoalConfig, ResolvedGoals};
pub use kpi::{DigitalActivity, Direction, KpiResult, Unit};
pub use metric::{Metric, MetricKind};
pub use record::MonthlyRecord;
