#![expect(clippy::unwrap_used, reason = "test code")]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pinrex(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pinrex").unwrap();
    cmd.env("PINREX_DB_PATH", temp_dir.path().join("catalog.db"))
        .env_remove("DATABASE_URL")
        .env_remove("PINREX_DB_USER");
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("pinrex").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chemistry research catalog"));
}

#[test]
fn test_cli_normalize() {
    let mut cmd = Command::cargo_bin("pinrex").unwrap();
    cmd.args(["normalize", "  Methanol (HPLC grade) "])
        .assert()
        .success()
        .stdout("methanolhplcgrade\n");
}

#[test]
fn test_cli_migrate_reports_version() {
    let temp_dir = TempDir::new().unwrap();
    let report = stdout_json(pinrex(&temp_dir).arg("migrate"));
    assert_eq!(report["backend"], "sqlite");
    assert_eq!(report["schema_version"], 4);
}

#[test]
fn test_cli_teardown_requires_confirmation() {
    let temp_dir = TempDir::new().unwrap();
    pinrex(&temp_dir)
        .arg("teardown")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    let report = stdout_json(pinrex(&temp_dir).args(["teardown", "--yes"]));
    assert_eq!(report["schema_version"], 0);
}

#[test]
fn test_cli_add_and_find_solvent_by_name() {
    let temp_dir = TempDir::new().unwrap();
    let solvent = stdout_json(pinrex(&temp_dir).args(["add-solvent", "--smiles", "CO"]));
    let sol_id = solvent["id"].as_i64().unwrap().to_string();

    let name = stdout_json(pinrex(&temp_dir).args([
        "add-name",
        "solvent",
        &sol_id,
        "Methanol (HPLC grade)",
        "--convention",
        "common",
    ]));
    assert_eq!(name["search_name"], "methanolhplcgrade");

    let found = stdout_json(pinrex(&temp_dir).args(["find", "solvent", "METHANOL(HPLC GRADE)"]));
    assert_eq!(found.as_array().unwrap().len(), 1);
    assert_eq!(found[0]["smiles"], "CO");

    let names = stdout_json(pinrex(&temp_dir).args(["names", "solvent", &sol_id]));
    assert_eq!(names[0]["name"], "Methanol (HPLC grade)");
}

#[test]
fn test_cli_rename_name() {
    let temp_dir = TempDir::new().unwrap();
    let polymer = stdout_json(pinrex(&temp_dir).args(["add-polymer", "--rid", "PS-7"]));
    let pol_id = polymer["id"].as_i64().unwrap().to_string();
    let name = stdout_json(pinrex(&temp_dir).args(["add-name", "polymer", &pol_id, "PS"]));
    let name_id = name["id"].as_i64().unwrap().to_string();

    let renamed =
        stdout_json(pinrex(&temp_dir).args(["rename-name", "polymer", &name_id, "Poly(styrene)"]));
    assert_eq!(renamed["search_name"], "polystyrene");

    let stats = stdout_json(pinrex(&temp_dir).arg("stats"));
    assert_eq!(stats["polymer_count"], 1);
    assert_eq!(stats["name_count"], 1);
}

#[test]
fn test_cli_rejects_unknown_kind() {
    let temp_dir = TempDir::new().unwrap();
    pinrex(&temp_dir)
        .args(["find", "enzyme", "lipase"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("chemical|polymer|solvent"));
}

#[test]
fn test_cli_duplicate_chemical_fails() {
    let temp_dir = TempDir::new().unwrap();
    pinrex(&temp_dir).args(["add-chemical", "--smiles", "CCO"]).assert().success();
    pinrex(&temp_dir)
        .args(["add-chemical", "--smiles", "CCO"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate"));
}
