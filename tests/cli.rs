use assert_cmd::Command;
use predicates::prelude::*;
use std::error::Error;
use std::path::PathBuf;
use tempfile::TempDir;

const CARD_ID: &str = "5b1f3c2e-8a4d-4f61-9c7e-2d0a6b9e1f34";

fn write_ledger(dir: &TempDir) -> Result<PathBuf, Box<dyn Error>> {
    let ledger = serde_json::json!({
        "paymentMethods": [
            {
                "id": CARD_ID,
                "name": "Shinhan",
                "type": "CREDIT",
                "billingDay": 14,
                "performanceStartDay": 15
            },
            {
                "id": "7c2a9d41-1e5b-4b3f-8f60-3a9e2c7d5b10",
                "name": "Wallet",
                "type": "CASH"
            }
        ],
        "benefitTiers": [
            {
                "id": "2f8e6d4c-9b1a-4c3e-a7d5-6e0f1b2c3d4e",
                "paymentMethodId": CARD_ID,
                "thresholdAmount": 300000,
                "benefitDesc": "5% cashback",
                "sortOrder": "0"
            }
        ],
        "transactions": [
            {
                "id": "0e6c1a9b-3f2d-4c8e-b5a7-91d4f0e2c6b8",
                "transactionDate": "2025-02-01",
                "amount": 2000000
            },
            {
                "id": "1a2b3c4d-5e6f-4a8b-9c0d-1e2f3a4b5c6d",
                "paymentMethodId": CARD_ID,
                "transactionDate": "2025-02-20",
                "amount": -150000,
                "memo": "groceries"
            },
            {
                "id": "9f8e7d6c-5b4a-4392-8170-6f5e4d3c2b1a",
                "paymentMethodId": CARD_ID,
                "transactionDate": "2025-03-20",
                "amount": -70000
            }
        ]
    });

    let path = dir.path().join("ledger.json");
    std::fs::write(&path, serde_json::to_string_pretty(&ledger)?)?;
    Ok(path)
}

fn cardcycle(data_dir: &TempDir) -> Result<Command, Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("cardcycle")?;
    cmd.env("CARDCYCLE_DATA_DIR", data_dir.path())
        .env_remove("CARDCYCLE_LEDGER")
        .env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn dashboard_json_reports_performance_and_billing() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let ledger = write_ledger(&dir)?;

    let output = cardcycle(&dir)?
        .arg("--ledger")
        .arg(&ledger)
        .args(["dashboard", "--month", "2025-03", "--today", "2025-03-10", "--json"])
        .output()?;
    assert!(output.status.success());

    let dashboard: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(dashboard["month"], "2025-03");
    assert_eq!(dashboard["cashflow"]["expense"], 70000);
    assert_eq!(dashboard["cashflow"]["carryOver"], 1850000);

    let card = &dashboard["cardPerformances"][0];
    assert_eq!(card["cardName"], "Shinhan");
    assert_eq!(card["current"]["window"]["start"], "2025-02-15");
    assert_eq!(card["current"]["window"]["end"], "2025-03-14");
    assert_eq!(card["current"]["amount"], 150000);
    assert_eq!(card["current"]["nextTierRemaining"], 150000);
    assert!(card["previousPerformance"].is_object());

    assert_eq!(dashboard["billing"]["currentMonthBilling"], 0);
    assert_eq!(dashboard["billing"]["nextMonthBilling"], 150000);
    Ok(())
}

#[test]
fn dashboard_text_without_carry_over() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let ledger = write_ledger(&dir)?;

    cardcycle(&dir)?
        .arg("--ledger")
        .arg(&ledger)
        .args(["dashboard", "--month", "2025-03", "--today", "2025-03-20", "--no-carry-over"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Dashboard 2025-03 (as of 2025-03-20)")
                .and(predicate::str::contains("Shinhan [Credit Card]"))
                .and(predicate::str::contains("Pending").not()),
        );
    Ok(())
}

#[test]
fn dashboard_malformed_month_falls_back_to_today() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let ledger = write_ledger(&dir)?;

    cardcycle(&dir)?
        .arg("--ledger")
        .arg(&ledger)
        .args(["dashboard", "--month", "sometime", "--today", "2025-02-03", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""month": "2025-02""#));
    Ok(())
}

#[test]
fn window_shows_card_windows() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let ledger = write_ledger(&dir)?;

    cardcycle(&dir)?
        .arg("--ledger")
        .arg(&ledger)
        .args(["window", "shinhan", "--month", "2025-03"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("2025-02-15 .. 2025-03-14")
                .and(predicate::str::contains("Window charged in:   2025-04"))
                .and(predicate::str::contains("Expected charge:     2025-04-14")),
        );
    Ok(())
}

#[test]
fn window_unknown_card_fails() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let ledger = write_ledger(&dir)?;

    cardcycle(&dir)?
        .arg("--ledger")
        .arg(&ledger)
        .args(["window", "Nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Payment method not found"));
    Ok(())
}

#[test]
fn label_filters_by_billing_month() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let ledger = write_ledger(&dir)?;

    let output = cardcycle(&dir)?
        .arg("--ledger")
        .arg(&ledger)
        .args(["label", "--month", "2025-04", "--card", "Shinhan", "--json"])
        .output()?;
    assert!(output.status.success());

    let labels: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let labels = labels.as_array().ok_or("expected an array")?;
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0]["transactionDate"], "2025-02-20");
    assert_eq!(labels[0]["billingMonth"], "2025-04");
    Ok(())
}

#[test]
fn trends_json_is_cumulative() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let ledger = write_ledger(&dir)?;

    let output = cardcycle(&dir)?
        .arg("--ledger")
        .arg(&ledger)
        .args(["trends", "--month", "2025-03", "--months", "2", "--json"])
        .output()?;
    assert!(output.status.success());

    let trends: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(trends["months"], serde_json::json!(["2025-02", "2025-03"]));
    assert_eq!(trends["income"]["values"], serde_json::json!([2000000, 2000000]));
    assert_eq!(trends["expenses"][0]["label"], "Shinhan");
    assert_eq!(trends["expenses"][0]["values"], serde_json::json!([150000, 220000]));
    Ok(())
}

#[test]
fn trends_rejects_span_before_year_one() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let ledger = write_ledger(&dir)?;

    cardcycle(&dir)?
        .arg("--ledger")
        .arg(&ledger)
        .args(["trends", "--month", "2025-03", "-n", "18446744073709551615"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 24291"));
    Ok(())
}

#[test]
fn init_creates_empty_ledger() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    cardcycle(&dir)?
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:    no"));

    cardcycle(&dir)?
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("ledger.json").exists());

    cardcycle(&dir)?
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:    yes"));

    cardcycle(&dir)?
        .args(["dashboard", "--today", "2025-03-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No active payment methods."));
    Ok(())
}

#[test]
fn missing_explicit_ledger_fails() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    cardcycle(&dir)?
        .arg("--ledger")
        .arg(dir.path().join("absent.json"))
        .arg("dashboard")
        .assert()
        .failure();
    Ok(())
}
