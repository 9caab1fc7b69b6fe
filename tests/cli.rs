//! End-to-end CLI tests
//!
//! Each test runs the binary against an isolated data directory via the
//! MONEYFOLD_DATA_DIR override, so tests never touch real user data.

use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn moneyfold(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("moneyfold").unwrap();
    cmd.env("MONEYFOLD_DATA_DIR", data_dir.path());
    cmd
}

fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_login_whoami_logout() {
    let data_dir = TempDir::new().unwrap();

    moneyfold(&data_dir)
        .args(["login", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as 'alice'"));

    moneyfold(&data_dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"));

    moneyfold(&data_dir)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out of 'alice'"));

    moneyfold(&data_dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[test]
fn test_login_rejects_invalid_profile_name() {
    let data_dir = TempDir::new().unwrap();

    moneyfold(&data_dir)
        .args(["login", "../escape"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid profile name"));
}

#[test]
fn test_envelope_add_and_list() {
    let data_dir = TempDir::new().unwrap();

    moneyfold(&data_dir).args(["login", "alice"]).assert().success();

    moneyfold(&data_dir)
        .args(["envelope", "add", "Groceries", "--balance", "150.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created envelope: Groceries"));

    moneyfold(&data_dir)
        .args(["envelope", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("$150.00"));
}

#[test]
fn test_envelope_add_rejects_bad_balance() {
    let data_dir = TempDir::new().unwrap();

    moneyfold(&data_dir).args(["login", "alice"]).assert().success();

    moneyfold(&data_dir)
        .args(["envelope", "add", "Groceries", "--balance", "not-money"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid balance"));

    // Currency symbols in the fraction must fail cleanly, not crash
    moneyfold(&data_dir)
        .args(["envelope", "add", "Groceries", "--balance", "10.5€"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid balance"));
}

#[test]
fn test_envelopes_are_isolated_per_profile() {
    let data_dir = TempDir::new().unwrap();

    moneyfold(&data_dir).args(["login", "alice"]).assert().success();
    moneyfold(&data_dir)
        .args(["envelope", "add", "Groceries"])
        .assert()
        .success();

    moneyfold(&data_dir).args(["login", "bob"]).assert().success();
    moneyfold(&data_dir)
        .args(["envelope", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No envelopes found"));

    moneyfold(&data_dir).args(["login", "alice"]).assert().success();
    moneyfold(&data_dir)
        .args(["envelope", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"));
}

#[test]
fn test_import_requires_login() {
    let data_dir = TempDir::new().unwrap();
    let csv = write_csv(&data_dir, "export.csv", "Date,Description,Amount\n");

    moneyfold(&data_dir)
        .args(["import", csv.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No profile is logged in"));
}

#[test]
fn test_import_rejects_non_csv() {
    let data_dir = TempDir::new().unwrap();
    let xlsx = write_csv(&data_dir, "export.xlsx", "not a spreadsheet");

    moneyfold(&data_dir).args(["login", "alice"]).assert().success();

    moneyfold(&data_dir)
        .args(["import", xlsx.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("xlsx"));
}

#[test]
fn test_import_allocation_and_categorization_flow() {
    let data_dir = TempDir::new().unwrap();
    let csv = write_csv(
        &data_dir,
        "bank.csv",
        "Date,Description,Amount\n\
         2025-01-15,Paycheck,100.00\n\
         2025-01-16,Grocery Store,-50.00\n",
    );

    moneyfold(&data_dir).args(["login", "alice"]).assert().success();
    moneyfold(&data_dir)
        .args(["envelope", "add", "Groceries"])
        .assert()
        .success();
    moneyfold(&data_dir)
        .args(["envelope", "add", "Rent"])
        .assert()
        .success();

    // Keep the income list as-is, allocate $60 to Groceries, nothing to
    // Rent, then assign the grocery expense to envelope 1 (Groceries).
    moneyfold(&data_dir)
        .args(["import", csv.to_str().unwrap()])
        .write_stdin("\n60\n\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income to allocate (total $100.00)"))
        .stdout(predicate::str::contains("Categorization complete"))
        .stdout(predicate::str::contains("$10.00"));

    // $60 in, $50 out
    moneyfold(&data_dir)
        .args(["envelope", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$10.00"));
}

#[test]
fn test_second_import_suggests_remembered_envelope() {
    let data_dir = TempDir::new().unwrap();
    let first = write_csv(
        &data_dir,
        "first.csv",
        "Date,Description,Amount\n2025-01-16,Grocery Store,-50.00\n",
    );
    let second = write_csv(
        &data_dir,
        "second.csv",
        "Date,Description,Amount\n2025-02-16,GROCERY STORE,-20.00\n",
    );

    moneyfold(&data_dir).args(["login", "alice"]).assert().success();
    moneyfold(&data_dir)
        .args(["envelope", "add", "Groceries", "--balance", "100.00"])
        .assert()
        .success();

    // No income in either file, so import goes straight to categorization
    moneyfold(&data_dir)
        .args(["import", first.to_str().unwrap()])
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No income found"));

    // Same merchant key despite the different casing
    moneyfold(&data_dir)
        .args(["import", second.to_str().unwrap()])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Assign to 'Groceries' like last time?"))
        .stdout(predicate::str::contains("$30.00"));
}

#[test]
fn test_categorization_skip_leaves_balances_alone() {
    let data_dir = TempDir::new().unwrap();
    let csv = write_csv(
        &data_dir,
        "bank.csv",
        "Date,Description,Amount\n2025-01-16,Mystery Charge,-25.00\n",
    );

    moneyfold(&data_dir).args(["login", "alice"]).assert().success();
    moneyfold(&data_dir)
        .args(["envelope", "add", "Groceries", "--balance", "100.00"])
        .assert()
        .success();

    moneyfold(&data_dir)
        .args(["import", csv.to_str().unwrap()])
        .write_stdin("s\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("$100.00"));
}

#[test]
fn test_credit_debit_columns_are_understood() {
    let data_dir = TempDir::new().unwrap();
    let csv = write_csv(
        &data_dir,
        "bank.csv",
        "Date,Description,Credit,Debit\n\
         2025-01-15,Payroll,\"$1,200.50\",$0.00\n\
         2025-01-16,Coffee,,$4.50\n",
    );

    moneyfold(&data_dir).args(["login", "alice"]).assert().success();
    moneyfold(&data_dir)
        .args(["envelope", "add", "Spending"])
        .assert()
        .success();

    // Allocate everything to Spending, then assign the coffee there too
    moneyfold(&data_dir)
        .args(["import", csv.to_str().unwrap()])
        .write_stdin("\n1200.50\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("$1200.50"))
        .stdout(predicate::str::contains("$1196.00"));
}

#[test]
fn test_user_delete_removes_profile_data() {
    let data_dir = TempDir::new().unwrap();

    moneyfold(&data_dir).args(["login", "alice"]).assert().success();
    moneyfold(&data_dir)
        .args(["envelope", "add", "Groceries"])
        .assert()
        .success();

    moneyfold(&data_dir)
        .args(["user", "delete", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted profile 'alice'"));

    moneyfold(&data_dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));

    moneyfold(&data_dir).args(["login", "alice"]).assert().success();
    moneyfold(&data_dir)
        .args(["envelope", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No envelopes found"));
}

#[test]
fn test_rejected_rows_never_reach_the_register() {
    let data_dir = TempDir::new().unwrap();
    let csv = write_csv(
        &data_dir,
        "bank.csv",
        "Date,Description,Amount\n\
         2025-01-14,RunningBalance forward,500.00\n\
         2025-01-15,Zero row,0\n\
         2025-01-16,Coffee,-4.50\n",
    );

    moneyfold(&data_dir).args(["login", "alice"]).assert().success();
    moneyfold(&data_dir)
        .args(["envelope", "add", "Spending"])
        .assert()
        .success();

    moneyfold(&data_dir)
        .args(["import", csv.to_str().unwrap()])
        .write_stdin("s\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 transaction(s)"))
        .stdout(predicate::str::contains("Coffee"))
        .stdout(predicate::str::contains("RunningBalance").not());
}
