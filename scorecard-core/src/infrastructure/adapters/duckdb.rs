// scorecard-core/src/infrastructure/adapters/duckdb.rs

use duckdb::types::Value;
use duckdb::{Config, Connection, params_from_iter};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

use crate::error::ScorecardError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::worksheet::{Cell, RawTable, Sheet, WorksheetBackend};

/// Worksheets stored as DuckDB tables, one table per sheet.
///
/// The connection is opened on first use and retried on every call until it
/// succeeds: a database that cannot be opened (locked, bad path, permissions)
/// is an unreachable backend, not a startup failure.
pub struct DuckDbBackend {
    db_path: String,
    conn: Arc<Mutex<Option<Connection>>>,
}

impl DuckDbBackend {
    /// `":memory:"` for an in-process database.
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
            conn: Arc::new(Mutex::new(None)),
        }
    }

    fn open(&self) -> Result<Connection, InfrastructureError> {
        let config = Config::default();

        let opened = if self.db_path == ":memory:" {
            Connection::open_in_memory_with_flags(config)
        } else {
            Connection::open_with_flags(&self.db_path, config)
        };

        opened.map_err(|e| {
            warn!(path = %self.db_path, error = %e, "DuckDB database could not be opened");
            InfrastructureError::BackendUnavailable(format!("duckdb {} ({})", self.db_path, e))
        })
    }

    fn with_connection<T>(
        &self,
        f: impl FnOnce(&mut Connection) -> Result<T, ScorecardError>,
    ) -> Result<T, ScorecardError> {
        let mut guard = self.conn.lock().map_err(|_| {
            ScorecardError::Infrastructure(InfrastructureError::Io(std::io::Error::other(
                "DuckDB Mutex Poisoned",
            )))
        })?;

        // 1. Connexion paresseuse (lazy): open once, keep it for later calls
        if guard.is_none() {
            *guard = Some(self.open()?);
        }

        // 2. Run the statement(s)
        let conn = guard
            .as_mut()
            .ok_or_else(|| ScorecardError::InternalError("DuckDB connection missing".into()))?;
        f(conn)
    }

    fn table_exists(conn: &Connection, sheet: Sheet) -> Result<bool, InfrastructureError> {
        let count: i64 = conn.query_row(
            "SELECT count(*) FROM information_schema.tables WHERE table_name = ?",
            [sheet.as_str()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn value_to_cell(value: Value) -> Cell {
    match value {
        Value::Null => Cell::Empty,
        Value::Boolean(b) => Cell::Number(if b { 1.0 } else { 0.0 }),
        Value::TinyInt(n) => Cell::Number(n.into()),
        Value::SmallInt(n) => Cell::Number(n.into()),
        Value::Int(n) => Cell::Number(n.into()),
        Value::BigInt(n) => Cell::Number(n as f64),
        Value::HugeInt(n) => Cell::Number(n as f64),
        Value::UTinyInt(n) => Cell::Number(n.into()),
        Value::USmallInt(n) => Cell::Number(n.into()),
        Value::UInt(n) => Cell::Number(n.into()),
        Value::UBigInt(n) => Cell::Number(n as f64),
        Value::Float(n) => Cell::Number(n.into()),
        Value::Double(n) => Cell::Number(n),
        Value::Text(s) => Cell::Text(s),
        other => Cell::Text(format!("{:?}", other)),
    }
}

fn cell_to_value(cell: &Cell) -> Value {
    match cell {
        Cell::Empty => Value::Null,
        Cell::Number(n) => Value::Double(*n),
        Cell::Text(s) => Value::Text(s.clone()),
    }
}

/// A column is DOUBLE when it holds nothing but numbers and blanks.
fn column_type(table: &RawTable, idx: usize) -> &'static str {
    let numeric = table
        .rows
        .iter()
        .filter_map(|row| row.get(idx))
        .all(|cell| !matches!(cell, Cell::Text(_)));
    if numeric { "DOUBLE" } else { "VARCHAR" }
}

impl DuckDbBackend {
    fn read_sheet(conn: &Connection, sheet: Sheet) -> Result<RawTable, ScorecardError> {
        if !Self::table_exists(conn, sheet)? {
            debug!(sheet = %sheet, "Worksheet table not created yet");
            return Ok(RawTable::default());
        }

        let columns: Vec<String> = {
            let mut stmt = conn
                .prepare(&format!("PRAGMA table_info('{}')", sheet.as_str()))
                .map_err(InfrastructureError::from)?;
            stmt.query_map([], |row| row.get::<_, String>("name"))
                .map_err(InfrastructureError::from)?
                .collect::<Result<Vec<_>, _>>()
                .map_err(InfrastructureError::from)?
        };

        let mut table = RawTable::new(columns);
        let mut stmt = conn
            .prepare(&format!("SELECT * FROM {}", quote_ident(sheet.as_str())))
            .map_err(InfrastructureError::from)?;
        let mut rows = stmt.query([]).map_err(InfrastructureError::from)?;

        while let Some(row) = rows.next().map_err(InfrastructureError::from)? {
            let mut cells = Vec::with_capacity(table.columns.len());
            for idx in 0..table.columns.len() {
                let value: Value = row.get(idx).map_err(InfrastructureError::from)?;
                cells.push(value_to_cell(value));
            }
            table.rows.push(cells);
        }

        debug!(sheet = %sheet, rows = table.rows.len(), "DuckDB worksheet read");
        Ok(table)
    }

    fn write_sheet(
        conn: &mut Connection,
        sheet: Sheet,
        table: &RawTable,
    ) -> Result<(), ScorecardError> {
        let name = quote_ident(sheet.as_str());

        let column_defs: Vec<String> = table
            .columns
            .iter()
            .enumerate()
            .map(|(idx, col)| format!("{} {}", quote_ident(col), column_type(table, idx)))
            .collect();

        // Drop + recreate inside one transaction: the sheet is replaced whole
        // or not at all.
        let tx = conn.transaction().map_err(InfrastructureError::from)?;
        tx.execute_batch(&format!("DROP TABLE IF EXISTS {name};"))
            .map_err(InfrastructureError::from)?;

        if !table.columns.is_empty() {
            tx.execute_batch(&format!("CREATE TABLE {name} ({});", column_defs.join(", ")))
                .map_err(InfrastructureError::from)?;

            let placeholders = vec!["?"; table.columns.len()].join(", ");
            let insert = format!("INSERT INTO {name} VALUES ({placeholders})");
            let mut stmt = tx.prepare(&insert).map_err(InfrastructureError::from)?;
            for row in &table.rows {
                let values = (0..table.columns.len())
                    .map(|idx| row.get(idx).map(cell_to_value).unwrap_or(Value::Null));
                stmt.execute(params_from_iter(values))
                    .map_err(InfrastructureError::from)?;
            }
        }
        tx.commit().map_err(InfrastructureError::from)?;

        debug!(sheet = %sheet, rows = table.rows.len(), "DuckDB worksheet replaced");
        Ok(())
    }
}

impl WorksheetBackend for DuckDbBackend {
    fn read(&self, sheet: Sheet) -> Result<RawTable, ScorecardError> {
        self.with_connection(|conn| Self::read_sheet(conn, sheet))
    }

    fn write(&self, sheet: Sheet, table: &RawTable) -> Result<(), ScorecardError> {
        self.with_connection(|conn| Self::write_sheet(conn, sheet, table))
    }

    fn backend_name(&self) -> &str {
        "duckdb"
    }
}
