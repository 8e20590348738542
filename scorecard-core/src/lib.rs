// scorecard-core/src/lib.rs

#![allow(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::perf)]

// --- MODULES HEXAGONAUX ---

// 1. Ports: the worksheet contract every backend fulfils.
pub mod ports;

// 2. Domain: months, employees, metrics, goals and the KPI / money rules.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure: DuckDB / CSV / memory backends, the record store with
// its snapshot cache, configuration files.
pub mod infrastructure;

// 4. Application: aggregation, goal resolution, evaluation, views, capture.
pub mod application;

// 5. Erreurs (façade)
pub mod error;

pub use error::ScorecardError;
