#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

struct Shop {
    home: TempDir,
}

impl Shop {
    fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
        }
    }

    fn db(&self) -> PathBuf {
        self.home.path().join("coffee.sqlite")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("roastery"));
        cmd.env("ROASTERY_HOME", self.home.path())
            .env_remove("RUST_LOG")
            .arg("--no-color")
            .arg("--db")
            .arg(self.db());
        cmd
    }

    fn init(&self) {
        self.cmd()
            .arg("init")
            .assert()
            .success()
            .stdout(predicate::str::contains("Initialized coffee table"));
    }

    fn add_kenya(&self) {
        self.cmd()
            .args([
                "add",
                "--variety",
                "Kenya AA",
                "--roast",
                "2",
                "--grind",
                "1",
                "--taste",
                "Bright, citrus",
                "--price",
                "450",
                "--volume",
                "250",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Added #1: Kenya AA"));
    }

    fn add_kenya_ab(&self) {
        self.cmd()
            .args([
                "add", "--variety", "Kenya AB", "--roast", "light", "--grind", "ground", "--taste",
                "Winey", "--price", "300", "--volume", "250",
            ])
            .assert()
            .success();
    }
}

#[test]
fn add_then_list_shows_labels() {
    let shop = Shop::new();
    shop.init();
    shop.add_kenya();

    shop.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kenya AA"))
        .stdout(predicate::str::contains("Medium"))
        .stdout(predicate::str::contains("Whole Bean"))
        .stdout(predicate::str::contains("Bright, citrus"));
}

#[test]
fn list_json_has_codes_translated() {
    let shop = Shop::new();
    shop.init();
    shop.add_kenya();

    let output = shop.cmd().args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows[0]["id"], 1);
    assert_eq!(rows[0]["roast_degree"], "Medium");
    assert_eq!(rows[0]["ground_or_bean"], "Whole Bean");
    assert_eq!(rows[0]["price"], "450");
}

#[test]
fn show_json_returns_stored_codes() {
    let shop = Shop::new();
    shop.init();
    shop.add_kenya();

    let output = shop.cmd().args(["show", "1", "--json"]).output().unwrap();
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records[0]["roast_degree"], 2);
    assert_eq!(records[0]["ground_or_bean"], 1);
    assert_eq!(records[0]["package_volume"], 250);
}

#[test]
fn validation_failure_is_reported_and_nothing_written() {
    let shop = Shop::new();
    shop.init();

    shop.cmd()
        .args([
            "add", "--variety", "Kenya AA", "--taste", "Nutty", "--price", "-1", "--volume", "1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("price must be a non-negative integer"));

    shop.cmd()
        .args(["add", "--taste", "Nutty", "--price", "1", "--volume", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("variety is empty"));

    shop.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found."));
}

#[test]
fn edit_requires_exactly_one_row() {
    let shop = Shop::new();
    shop.init();
    shop.add_kenya();
    shop.add_kenya_ab();

    shop.cmd()
        .args(["edit", "--price", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing selected"));

    shop.cmd()
        .args(["edit", "1", "2", "--price", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("multiple rows selected"));
}

#[test]
fn edit_changes_given_fields_only() {
    let shop = Shop::new();
    shop.init();
    shop.add_kenya();

    shop.cmd()
        .args(["edit", "1", "--roast", "strong", "--price", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated #1: Kenya AA"))
        .stdout(predicate::str::contains("Strong"));

    let output = shop.cmd().args(["show", "1", "--json"]).output().unwrap();
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records[0]["price"], 500);
    assert_eq!(records[0]["roast_degree"], 3);
    assert_eq!(records[0]["taste_description"], "Bright, citrus");
}

#[test]
fn missing_database_is_reported_not_created() {
    let shop = Shop::new();

    shop.cmd()
        .arg("list")
        .assert()
        .failure()
        .stdout(predicate::str::contains("No products found."))
        .stdout(predicate::str::contains("could not load records"));

    assert!(!shop.db().exists());
}

#[test]
fn show_missing_record_is_not_found() {
    let shop = Shop::new();
    shop.init();

    shop.cmd()
        .args(["show", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Record not found: 7"));
}

#[test]
fn config_database_is_used_without_flag() {
    let home = TempDir::new().unwrap();
    let db = home.path().join("shop.sqlite");
    let base = || {
        let mut cmd = Command::new(cargo_bin("roastery"));
        cmd.env("ROASTERY_HOME", home.path()).arg("--no-color");
        cmd
    };

    base()
        .args(["config", "database", db.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("database set to"));

    base().arg("init").assert().success();
    assert!(db.exists());

    base()
        .args(["config", "color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));
}

#[test]
fn shell_keeps_going_after_errors() {
    let shop = Shop::new();
    shop.init();

    let script = [
        "edit 1 --price 3",
        r#"add --variety "Kenya AA" --roast medium --grind bean --taste "Bright, citrus" --price 450 --volume 0"#,
        r#"add --variety "Kenya AA" --roast medium --grind bean --taste "Bright, citrus" --price 450 --volume 250"#,
        "bogus",
        "edit 1 --volume 500",
        "quit",
        "list",
    ]
    .join("\n");

    shop.cmd()
        .arg("shell")
        .write_stdin(script)
        .assert()
        .success()
        .stderr(predicate::str::contains("selected row is not in the list"))
        .stderr(predicate::str::contains("volume must be a positive integer"))
        .stdout(predicate::str::contains("Added #1: Kenya AA"))
        .stdout(predicate::str::contains("unrecognized subcommand"))
        .stdout(predicate::str::contains("Updated #1: Kenya AA"))
        .stdout(predicate::str::contains("500"));
}

#[test]
fn no_color_keeps_log_output_plain() {
    let shop = Shop::new();

    shop.cmd()
        .env("RUST_LOG", "warn")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("list view refresh failed"))
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn color_off_in_config_keeps_log_output_plain() {
    let home = TempDir::new().unwrap();
    let base = || {
        let mut cmd = Command::new(cargo_bin("roastery"));
        cmd.env("ROASTERY_HOME", home.path())
            .env("RUST_LOG", "warn")
            .arg("--db")
            .arg(home.path().join("absent.sqlite"));
        cmd
    };

    base().args(["config", "color", "false"]).assert().success();

    base()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("list view refresh failed"))
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn uri_looking_database_name_is_a_plain_file() {
    let shop = Shop::new();
    let name = "file:shop.sqlite?mode=memory";
    let base = || {
        let mut cmd = Command::new(cargo_bin("roastery"));
        cmd.current_dir(shop.home.path())
            .env("ROASTERY_HOME", shop.home.path())
            .env_remove("RUST_LOG")
            .args(["--no-color", "--db", name]);
        cmd
    };

    base().arg("init").assert().success();
    assert!(shop.home.path().join(name).exists());

    base()
        .args([
            "add", "--variety", "Kenya AA", "--roast", "2", "--grind", "1", "--taste",
            "Bright, citrus", "--price", "450", "--volume", "250",
        ])
        .assert()
        .success();

    base()
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kenya AA"));
}
