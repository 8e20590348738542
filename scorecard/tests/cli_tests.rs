use anyhow::{Context, Result};
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// A throwaway dashboard project with a CSV workbook.
struct ScorecardTestEnv {
    _tmp: TempDir,
    root: PathBuf,
}

impl ScorecardTestEnv {
    fn new() -> Result<Self> {
        Self::with_backend_dir("data", true)
    }

    fn with_backend_dir(dir: &str, create: bool) -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let root = tmp.path().to_path_buf();
        fs::write(
            root.join("scorecard.yaml"),
            format!(
                "name: \"CODESA test\"\nfiscal_start_year: 2026\nbackend:\n  type: csv\n  path: {}\n",
                dir
            ),
        )?;
        if create {
            fs::create_dir_all(root.join(dir))?;
        }
        Ok(Self { _tmp: tmp, root })
    }

    fn scorecard(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("scorecard"));
        cmd.current_dir(&self.root)
            .env_remove("SCORECARD_BACKEND_PATH")
            .env_remove("SCORECARD_FISCAL_START_YEAR")
            .env_remove("RUST_LOG");
        cmd
    }

    fn json(&self, args: &[&str]) -> Result<serde_json::Value> {
        let output = self.scorecard().args(args).output()?;
        anyhow::ensure!(
            output.status.success(),
            "scorecard {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).context("stdout is not JSON")
    }
}

#[test]
fn test_years_lists_start_year() -> Result<()> {
    let env = ScorecardTestEnv::new()?;
    env.scorecard()
        .arg("years")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2026"))
        .stdout(predicate::str::contains("(default)"));
    Ok(())
}

#[test]
fn test_capture_feeds_mario_commission() -> Result<()> {
    let env = ScorecardTestEnv::new()?;

    env.scorecard()
        .args([
            "capture",
            "--year",
            "2026",
            "--month",
            "Marzo",
            "--set",
            "m_ventas_nuevos=200000",
            "--set",
            "d_monto_det=50000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("saved"));

    let view = env.json(&["employee", "mario", "--year", "2026", "--month", "Marzo", "--json"])?;
    assert_eq!(view["scorecard"]["wallet"]["kind"], "services");
    let total = view["scorecard"]["wallet"]["commission"]["total"]
        .as_f64()
        .context("commission total missing")?;
    assert!((total - 10_500.0).abs() < 1e-6);
    assert_eq!(view["degraded"], false);
    Ok(())
}

#[test]
fn test_second_capture_keeps_untouched_columns() -> Result<()> {
    let env = ScorecardTestEnv::new()?;
    let capture = |assignment: &str| {
        env.scorecard()
            .args(["capture", "--year", "2026", "--month", "Mayo", "--set", assignment])
            .assert()
            .success();
    };
    capture("h_ventas=120000");
    capture("h_citas=5");

    let view = env.json(&["employee", "hellen", "--year", "2026", "--month", "Mayo", "--json"])?;
    let kpis = view["scorecard"]["kpis"]
        .as_array()
        .context("kpis is not an array")?;
    assert_eq!(kpis[0]["actual"], 120_000.0);
    assert_eq!(kpis[1]["actual"], 5.0);
    assert_eq!(kpis[1]["attained"], true);

    let datos = fs::read_to_string(env.root.join("data/Datos.csv"))?;
    assert_eq!(datos.lines().count(), 2);
    insta::assert_snapshot!(
        datos.lines().next().unwrap_or_default(),
        @"Año,Mes,m_ventas,m_clientes,m_ventas_nuevos,m_contenido,d_monto_det,d_crono_dev,d_sat,d_seg,d_eval,d_obra,h_ventas,h_citas,h_mail,h_fb,h_art"
    );
    Ok(())
}

#[test]
fn test_goals_set_then_show() -> Result<()> {
    let env = ScorecardTestEnv::new()?;

    env.scorecard()
        .args(["goals", "set", "--year", "2027", "--hellen-goal", "500000", "--reward", "Crucero"])
        .assert()
        .success();

    env.scorecard()
        .args(["goals", "show", "--year", "2027"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$500,000.00"))
        .stdout(predicate::str::contains("Crucero"))
        .stdout(predicate::str::contains("$10,623,610.66"))
        .stdout(predicate::str::contains("not configured").not());
    Ok(())
}

#[test]
fn test_overview_json_for_unconfigured_year() -> Result<()> {
    let env = ScorecardTestEnv::new()?;
    let view = env.json(&["overview", "--year", "2026", "--json"])?;

    assert_eq!(view["goals"]["defaulted"], true);
    let panels = view["panels"].as_array().context("panels is not an array")?;
    assert_eq!(panels.len(), 3);
    assert_eq!(panels[2]["chart"]["kind"], "cumulative");
    assert_eq!(panels[2]["chart"]["ideal"].as_array().map(Vec::len), Some(12));
    Ok(())
}

#[test]
fn test_unreachable_backend_degrades_with_warning() -> Result<()> {
    let env = ScorecardTestEnv::with_backend_dir("share", false)?;
    env.scorecard()
        .args(["overview", "--year", "2026"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Backend unavailable"));
    Ok(())
}

#[test]
fn test_unopenable_duckdb_degrades_with_warning() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    fs::write(
        tmp.path().join("scorecard.yaml"),
        "name: \"CODESA test\"\nbackend:\n  type: duckdb\n  path: kpis.duckdb\n",
    )?;
    // A directory where the database file should be.
    fs::create_dir_all(tmp.path().join("kpis.duckdb"))?;

    Command::new(assert_cmd::cargo::cargo_bin!("scorecard"))
        .current_dir(tmp.path())
        .env_remove("SCORECARD_BACKEND_PATH")
        .env_remove("SCORECARD_FISCAL_START_YEAR")
        .args(["overview", "--year", "2026"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Backend unavailable"));
    Ok(())
}

#[test]
fn test_non_finite_goal_is_rejected() -> Result<()> {
    let env = ScorecardTestEnv::new()?;
    env.scorecard()
        .args(["goals", "set", "--year", "2026", "--mario-goal", "inf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a finite amount"));
    assert!(!env.root.join("data/Metas.csv").exists());
    Ok(())
}

#[test]
fn test_unknown_month_fails() -> Result<()> {
    let env = ScorecardTestEnv::new()?;
    env.scorecard()
        .args(["employee", "mario", "--month", "Smarch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown month"));
    Ok(())
}

#[test]
fn test_year_outside_selector_fails() -> Result<()> {
    let env = ScorecardTestEnv::new()?;
    env.scorecard()
        .args(["overview", "--year", "2019"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the selectable range"));
    Ok(())
}

#[test]
fn test_out_of_range_capture_is_rejected() -> Result<()> {
    let env = ScorecardTestEnv::new()?;
    env.scorecard()
        .args(["capture", "--year", "2026", "--month", "Enero", "--set", "d_sat=12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid capture"));
    assert!(!env.root.join("data/Datos.csv").exists());
    Ok(())
}

#[test]
fn test_missing_config_fails() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    Command::new(assert_cmd::cargo::cargo_bin!("scorecard"))
        .current_dir(tmp.path())
        .arg("years")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
    Ok(())
}
