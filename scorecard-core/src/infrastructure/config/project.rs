// scorecard-core/src/infrastructure/config/project.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::domain::calendar::{FIRST_FISCAL_YEAR, FiscalCalendar};
use crate::infrastructure::adapters::{CsvWorkbook, DuckDbBackend};
use crate::infrastructure::error::InfrastructureError;
use crate::ports::worksheet::WorksheetBackend;

const CONFIG_CANDIDATES: [&str; 2] = ["scorecard.yaml", "scorecard_project_conf.yaml"];

/// Where the two worksheets live.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BackendConfig {
    /// Directory holding `Datos.csv` and `Metas.csv`.
    Csv { path: PathBuf },
    /// DuckDB database file with `Datos` and `Metas` tables.
    DuckDB { path: PathBuf },
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig::Csv {
            path: PathBuf::from("data"),
        }
    }
}

impl BackendConfig {
    pub fn path(&self) -> &Path {
        match self {
            Self::Csv { path } | Self::DuckDB { path } => path,
        }
    }

    fn set_path(&mut self, new_path: PathBuf) {
        match self {
            Self::Csv { path } | Self::DuckDB { path } => *path = new_path,
        }
    }

    /// Instantiates the adapter. Relative paths are taken from `project_dir`.
    pub fn open(&self, project_dir: &Path) -> Result<Box<dyn WorksheetBackend>, InfrastructureError> {
        let path = if self.path().is_absolute() {
            self.path().to_path_buf()
        } else {
            project_dir.join(self.path())
        };
        match self {
            Self::Csv { .. } => Ok(Box::new(CsvWorkbook::new(path))),
            Self::DuckDB { .. } => {
                let db_path = path.to_str().ok_or_else(|| {
                    InfrastructureError::ConfigError(format!("Non UTF-8 database path {:?}", path))
                })?;
                Ok(Box::new(DuckDbBackend::new(db_path)))
            }
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DashboardConfig {
    pub name: String,

    #[serde(default = "default_fiscal_start_year")]
    pub fiscal_start_year: i32,

    #[serde(default)]
    pub backend: BackendConfig,
}

fn default_fiscal_start_year() -> i32 {
    FIRST_FISCAL_YEAR
}

impl DashboardConfig {
    pub fn calendar(&self, current_year: i32) -> FiscalCalendar {
        FiscalCalendar::new(self.fiscal_start_year, current_year)
    }
}

#[instrument(skip(project_dir))]
pub fn load_dashboard_config(project_dir: &Path) -> Result<DashboardConfig, InfrastructureError> {
    // 1. Localisation du fichier
    let config_path = find_main_config(project_dir)?;
    info!(path = ?config_path, "Loading dashboard configuration");

    // 2. Parsing YAML
    let content = fs::read_to_string(&config_path)?;
    let mut config: DashboardConfig = serde_yaml::from_str(&content)?;

    // 3. Surcharges via variables d'environnement
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    Ok(config)
}

fn find_main_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    for filename in CONFIG_CANDIDATES {
        let p = root.join(filename);
        if p.exists() {
            return Ok(p);
        }
    }
    Err(InfrastructureError::ConfigNotFound(format!(
        "No configuration file found in {:?}. Checked: {:?}",
        root, CONFIG_CANDIDATES
    )))
}

/// Layering: `SCORECARD_BACKEND_PATH=/mnt/share/kpis scorecard overview`.
fn apply_env_overrides(
    config: &mut DashboardConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), InfrastructureError> {
    if let Some(val) = lookup("SCORECARD_BACKEND_PATH") {
        info!(old = ?config.backend.path(), new = ?val, "Overriding backend path via ENV");
        config.backend.set_path(PathBuf::from(val));
    }
    if let Some(val) = lookup("SCORECARD_FISCAL_START_YEAR") {
        let year = val.trim().parse::<i32>().map_err(|_| {
            InfrastructureError::ConfigError(format!(
                "SCORECARD_FISCAL_START_YEAR must be a year, got '{}'",
                val
            ))
        })?;
        info!(old = config.fiscal_start_year, new = year, "Overriding fiscal start year via ENV");
        config.fiscal_start_year = year;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_load_minimal_config_uses_defaults() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("scorecard.yaml"), "name: CODESA\n")?;

        let config = load_dashboard_config(dir.path())?;
        assert_eq!(config.name, "CODESA");
        assert_eq!(config.fiscal_start_year, 2026);
        assert_eq!(config.backend, BackendConfig::default());
        Ok(())
    }

    #[test]
    fn test_load_duckdb_backend() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join("scorecard_project_conf.yaml"),
            "name: CODESA\nfiscal_start_year: 2025\nbackend:\n  type: duckdb\n  path: kpis.duckdb\n",
        )?;

        let config = load_dashboard_config(dir.path())?;
        assert_eq!(config.fiscal_start_year, 2025);
        assert_eq!(
            config.backend,
            BackendConfig::DuckDB {
                path: PathBuf::from("kpis.duckdb")
            }
        );

        let backend = config.backend.open(dir.path())?;
        assert_eq!(backend.backend_name(), "duckdb");
        Ok(())
    }

    #[test]
    fn test_missing_config() -> Result<()> {
        let dir = tempdir()?;
        assert!(matches!(
            load_dashboard_config(dir.path()),
            Err(InfrastructureError::ConfigNotFound(_))
        ));
        Ok(())
    }

    #[test]
    fn test_env_overrides() -> Result<()> {
        let env: HashMap<&str, &str> = HashMap::from([
            ("SCORECARD_BACKEND_PATH", "/mnt/share/kpis"),
            ("SCORECARD_FISCAL_START_YEAR", "2030"),
        ]);
        let mut config = DashboardConfig {
            name: "CODESA".into(),
            fiscal_start_year: 2026,
            backend: BackendConfig::default(),
        };

        apply_env_overrides(&mut config, |key| env.get(key).map(|v| v.to_string()))?;
        assert_eq!(config.backend.path(), Path::new("/mnt/share/kpis"));
        assert_eq!(config.fiscal_start_year, 2030);

        let bad: HashMap<&str, &str> = HashMap::from([("SCORECARD_FISCAL_START_YEAR", "soon")]);
        assert!(apply_env_overrides(&mut config, |key| bad.get(key).map(|v| v.to_string())).is_err());
        Ok(())
    }
}
