use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wallet(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wallet").unwrap();
    cmd.env("MY_WALLET_DATA_DIR", temp_dir.path());
    cmd
}

#[test]
fn add_list_and_summarize() {
    let temp_dir = TempDir::new().unwrap();

    wallet(&temp_dir)
        .args(["add", "12.50", "-c", "Food", "-m", "Lunch", "-d", "2024-01-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"));

    wallet(&temp_dir)
        .args(["add", "500", "-c", "Rent", "-m", "Jan rent", "-d", "2024-01-06"])
        .assert()
        .success();

    wallet(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("Jan rent"));

    wallet(&temp_dir)
        .args(["summary", "--csv"])
        .assert()
        .success()
        .stdout("category,amount\nFood,12.50\nRent,500.00\nTotal,512.50\n");

    let store = std::fs::read_to_string(temp_dir.path().join("data").join("expenses.csv")).unwrap();
    assert_eq!(
        store,
        "id,date,category,amount,description\n\
         0,2024-01-05,Food,12.50,Lunch\n\
         1,2024-01-06,Rent,500.00,Jan rent\n"
    );
}

#[test]
fn delete_renumbers_and_needs_force() {
    let temp_dir = TempDir::new().unwrap();

    for (amount, category) in [("12.50", "Food"), ("500", "Rent")] {
        wallet(&temp_dir)
            .args(["add", amount, "-c", category, "-m", "x"])
            .assert()
            .success();
    }

    wallet(&temp_dir)
        .args(["delete", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    wallet(&temp_dir)
        .args(["delete", "0", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense deleted successfully!"));

    wallet(&temp_dir)
        .args(["summary", "--csv"])
        .assert()
        .success()
        .stdout("category,amount\nRent,500.00\nTotal,500.00\n");
}

#[test]
fn invalid_amount_is_reported() {
    let temp_dir = TempDir::new().unwrap();

    wallet(&temp_dir)
        .args(["add", "lots", "-c", "Food", "-m", "Lunch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid amount"));

    wallet(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn invalid_amount_can_be_silenced() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{"silent_invalid_amount": true}"#,
    )
    .unwrap();

    wallet(&temp_dir)
        .args(["add", "lots", "-c", "Food", "-m", "Lunch"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn update_without_selection_fails() {
    let temp_dir = TempDir::new().unwrap();

    wallet(&temp_dir)
        .args(["update", "-a", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No expense selected"));
}

#[test]
fn history_shows_changes() {
    let temp_dir = TempDir::new().unwrap();

    wallet(&temp_dir)
        .args(["add", "12.50", "-c", "Food", "-m", "Lunch"])
        .assert()
        .success();
    wallet(&temp_dir)
        .args(["update", "0", "-a", "13"])
        .assert()
        .success();

    wallet(&temp_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE expense #0"))
        .stdout(predicate::str::contains("amount: 12.50 -> 13.00"));
}
