pub mod project;

pub use project::{BackendConfig, DashboardConfig, load_dashboard_config};
