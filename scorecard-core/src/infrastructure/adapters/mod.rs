// scorecard-core/src/infrastructure/adapters/mod.rs

pub mod csv;
pub mod duckdb;
pub mod memory;

pub use self::csv::CsvWorkbook;
pub use self::duckdb::DuckDbBackend;
pub use self::memory::MemoryBackend;
