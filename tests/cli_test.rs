use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

mod common;

#[test]
fn test_merchant_demo_prints_link() {
    let mut cmd = Command::new(cargo_bin!("bitdash-demo"));
    cmd.args(["demo", "merchant", "--name", "Acme Inc", "--delay-ms", "0"]);

    cmd.assert()
        .success()
        .stdout(
            predicate::str::is_match(r"Link: https://cash\.bitdash\.app/[a-z0-9]{8}\n").unwrap(),
        )
        .stdout(predicate::str::contains("[x] Create - Generate payment links and QR codes"))
        .stdout(predicate::str::contains("[>] Share - Share with your customers"))
        .stdout(predicate::str::contains("Fixed amount: $25.00"));
}

#[test]
fn test_investor_demo_with_custom_host() {
    let mut cmd = Command::new(cargo_bin!("bitdash-demo"));
    cmd.args([
        "demo",
        "investor",
        "--name",
        "Fatima",
        "--delay-ms",
        "0",
        "--host",
        "example.test",
    ]);

    cmd.assert()
        .success()
        .stdout(
            predicate::str::is_match(r"Link: https://invest\.example\.test/[a-z0-9]{8}").unwrap(),
        )
        .stdout(predicate::str::contains("Fixed amount").not())
        .stdout(predicate::str::contains("Fatima's Profile"))
        .stdout(predicate::str::contains("Investment: $1000.00"))
        .stdout(predicate::str::contains("Asset: US STOCKS"))
        .stdout(predicate::str::contains("Risk: Moderate"));
}

#[test]
fn test_stock_demo_prints_portfolio_preview() {
    let mut cmd = Command::new(cargo_bin!("bitdash-demo"));
    cmd.args([
        "demo",
        "stock",
        "--name",
        "Omar",
        "--delay-ms",
        "0",
        "--set",
        "initial_investment=500",
        "--set",
        "asset_preference=halal_etfs",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Link: https://invest.bitdash.app/"))
        .stdout(predicate::str::contains("Omar's Profile"))
        .stdout(predicate::str::contains("Investment: $500.00"))
        .stdout(predicate::str::contains("Asset: HALAL ETFS"));
}

#[test]
fn test_demo_fields_override_defaults() {
    let mut cmd = Command::new(cargo_bin!("bitdash-demo"));
    cmd.args([
        "demo",
        "merchant",
        "--name",
        "Acme Inc",
        "--delay-ms",
        "0",
        "--set",
        "payment_amount=40",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Fixed amount: $40.00"));

    let mut cmd = Command::new(cargo_bin!("bitdash-demo"));
    cmd.args([
        "demo",
        "merchant",
        "--name",
        "Acme Inc",
        "--delay-ms",
        "0",
        "--set",
        "payment_type=variable",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Customer will enter amount"));
}

#[test]
fn test_blank_name_blocks_demo() {
    let mut cmd = Command::new(cargo_bin!("bitdash-demo"));
    cmd.args(["demo", "merchant", "--name", "   ", "--delay-ms", "0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("business_name"));
}

#[test]
fn test_unknown_demo_kind() {
    let mut cmd = Command::new(cargo_bin!("bitdash-demo"));
    cmd.args(["demo", "forex", "--name", "Acme", "--delay-ms", "0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown demo"));
}

#[test]
fn test_demo_uses_translation_catalog() {
    let mut catalog = NamedTempFile::new().unwrap();
    writeln!(
        catalog,
        r#"{{"merchantDemo.steps.share.title": "Partager", "merchantDemo.step3.preview.fixedAmount": "Montant fixe : {{{{amount}}}} $"}}"#
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("bitdash-demo"));
    cmd.arg("--catalog")
        .arg(catalog.path())
        .args(["demo", "merchant", "--name", "Acme Inc", "--delay-ms", "0"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[>] Partager - Share with your customers"))
        .stdout(predicate::str::contains("Montant fixe : 25.00 $"));
}

#[test]
fn test_dashboard_summary() {
    let file = NamedTempFile::new().unwrap();
    common::write_trades_csv(
        file.path(),
        &[
            (1, "EURUSD", "2024-03-01T10:00:00Z", "100"),
            (2, "EURUSD", "2024-03-01T15:00:00Z", "-40"),
            (3, "XAUUSD", "2024-03-02T09:00:00Z", "20"),
            (4, "BTCUSD", "2024-03-03T09:00:00Z", "0"),
        ],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("bitdash-demo"));
    cmd.arg("dashboard").arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total trades: 4"))
        .stdout(predicate::str::contains("Winning trades: 2"))
        .stdout(predicate::str::contains("Losing trades: 1"))
        .stdout(predicate::str::contains("Net P&L: 80"))
        .stdout(predicate::str::contains("Win rate: 50.00%"))
        .stdout(predicate::str::contains("Margin health: 100.00%"))
        .stdout(predicate::str::contains("2024-03-01,60,60,2"))
        .stdout(predicate::str::contains("2024-03-02,20,80,1"));
}

#[test]
fn test_dashboard_skips_bad_rows() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "id, symbol, created_at, profit_loss").unwrap();
    writeln!(file, "1, EURUSD, 2024-03-01T10:00:00Z, 10").unwrap();
    writeln!(file, "2, EURUSD, not-a-date, 5").unwrap();
    writeln!(file, "3, EURUSD, 2024-03-01T11:00:00Z, abc").unwrap();
    writeln!(file, "4, EURUSD, 2024-03-02T10:00:00Z, -2").unwrap();

    let mut cmd = Command::new(cargo_bin!("bitdash-demo"));
    cmd.arg("dashboard").arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading trade"))
        .stdout(predicate::str::contains("Total trades: 2"))
        .stdout(predicate::str::contains("Net P&L: 8"));
}

#[test]
fn test_dashboard_margin_health() {
    let file = NamedTempFile::new().unwrap();
    common::write_trades_csv(file.path(), &[(1, "EURUSD", "2024-03-01T10:00:00Z", "5")]).unwrap();

    let mut cmd = Command::new(cargo_bin!("bitdash-demo"));
    cmd.arg("dashboard")
        .arg(file.path())
        .args(["--margin-level", "75"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Margin health: 50.00%"))
        .stdout(predicate::str::contains("Margin call: yes"));
}

#[test]
fn test_dashboard_zero_margin_level_uses_default() {
    let file = NamedTempFile::new().unwrap();
    common::write_trades_csv(file.path(), &[(1, "EURUSD", "2024-03-01T10:00:00Z", "5")]).unwrap();

    let mut cmd = Command::new(cargo_bin!("bitdash-demo"));
    cmd.arg("dashboard")
        .arg(file.path())
        .args(["--margin-level", "0", "--stop-out-level", "0"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Margin health: 100.00%"))
        .stdout(predicate::str::contains("Margin call").not());
}

#[test]
fn test_dashboard_json_output() {
    let file = NamedTempFile::new().unwrap();
    common::write_trades_csv(file.path(), &[(1, "EURUSD", "2024-03-01T10:00:00Z", "5")]).unwrap();

    let output = Command::new(cargo_bin!("bitdash-demo"))
        .arg("dashboard")
        .arg(file.path())
        .arg("--json")
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["stats"]["total_trades"], 1);
    assert_eq!(summary["daily"][0]["date"], "2024-03-01");
}

#[test]
fn test_dashboard_missing_file() {
    let mut cmd = Command::new(cargo_bin!("bitdash-demo"));
    cmd.args(["dashboard", "does/not/exist.csv"]);

    cmd.assert().failure();
}

#[test]
fn test_risk_disclosure_for_platform() {
    let mut cmd = Command::new(cargo_bin!("bitdash-demo"));
    cmd.args(["risk", "--platform", "BitLDN", "--account-type", "retail"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Risk Disclosure - BitLDN (en, ltr)"))
        .stdout(predicate::str::contains("## Market Risk"))
        .stdout(predicate::str::contains("## Leverage Risk"))
        .stdout(predicate::str::contains("## BitLDN Specific Risk Statement:"))
        .stdout(predicate::str::contains("## Important Disclaimers"))
        .stdout(predicate::str::contains("- Trading in financial instruments"));
}

#[test]
fn test_risk_disclosure_rtl_and_common_only() {
    let mut cmd = Command::new(cargo_bin!("bitdash-demo"));
    cmd.args(["--locale", "ar", "risk", "--platform", "BitShop"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("(ar, rtl)"))
        .stdout(predicate::str::contains("## Regulatory and Legal Risk"))
        .stdout(predicate::str::contains("The following disclosure outlines"))
        .stdout(predicate::str::contains("## General Risk Statement:"))
        .stdout(predicate::str::contains("## BitShop Specific Risk Statement:"))
        .stdout(predicate::str::contains(
            "This platform involves financial risks that you should fully understand",
        ))
        .stdout(predicate::str::contains("Leverage Risk").not())
        .stdout(predicate::str::contains("Important Disclaimers").not());
}
