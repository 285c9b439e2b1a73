use assert_cmd::Command;
use chrono::NaiveDate;
use predicates::prelude::*;
use tempfile::TempDir;

use financeflow::models::Money;
use financeflow::source::{demo_dataset, Dataset};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
}

/// A command isolated from the user's real configuration
fn financeflow(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("financeflow").unwrap();
    cmd.env("FINANCEFLOW_DATA_DIR", config_dir.path())
        .env_remove("FINANCEFLOW_DATA")
        .env_remove("RUST_LOG");
    cmd
}

fn demo(config_dir: &TempDir) -> Command {
    let mut cmd = financeflow(config_dir);
    cmd.args(["--demo", "--as-of", "2024-01-20"]);
    cmd
}

#[test]
fn test_summary_for_current_month() {
    let dir = TempDir::new().unwrap();
    demo(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 5.500,00"))
        .stdout(predicate::str::contains("R$ 4.200,00"))
        .stdout(predicate::str::contains("R$ 1.300,00"));
}

#[test]
fn test_budgets_show_status_tiers() {
    let dir = TempDir::new().unwrap();
    demo(&dir)
        .arg("budgets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lazer"))
        .stdout(predicate::str::contains("EXCEDIDO"))
        .stdout(predicate::str::contains("81,25%"));
}

#[test]
fn test_budgets_csv_export() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("budgets.csv");

    demo(&dir)
        .args(["budgets", "--output"])
        .arg(&out)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&out).unwrap();
    assert!(csv.contains("300.00,380.00,-80.00,126.67,exceeded"));
}

#[test]
fn test_goals_pending_filter() {
    let dir = TempDir::new().unwrap();
    demo(&dir)
        .args(["goals", "--pending"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Viagem para Europa"))
        .stdout(predicate::str::contains("Notebook Novo").not());
}

#[test]
fn test_contribute_updates_progress() {
    let dir = TempDir::new().unwrap();
    demo(&dir)
        .args(["contribute", "viagem para europa", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 2.500,00 de R$ 8.000,00 (31%)"));
}

#[test]
fn test_contribute_rejects_zero() {
    let dir = TempDir::new().unwrap();
    demo(&dir)
        .args(["contribute", "Viagem para Europa", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid contribution"));
}

#[test]
fn test_contribute_rejects_malformed_amounts() {
    let dir = TempDir::new().unwrap();
    for amount in ["99999999999999999", "10.999"] {
        demo(&dir)
            .args(["contribute", "Viagem para Europa", amount])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid money format"));
    }
}

#[test]
fn test_contribute_unknown_goal() {
    let dir = TempDir::new().unwrap();
    demo(&dir)
        .args(["contribute", "Casa na praia", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Goal not found"));
}

#[test]
fn test_contribute_save_requires_file() {
    let dir = TempDir::new().unwrap();
    demo(&dir)
        .args(["contribute", "Viagem para Europa", "50", "--save"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be saved"));
}

#[test]
fn test_contribute_save_writes_dataset() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("finance.json");
    demo_dataset(today()).save(&file).unwrap();

    financeflow(&dir)
        .arg("--data")
        .arg(&file)
        .args(["--as-of", "2024-01-20", "contribute", "Viagem para Europa", "250,50", "--save"])
        .assert()
        .success();

    let saved = Dataset::load(&file).unwrap();
    let goal = saved.find_goal("Viagem para Europa").unwrap();
    assert_eq!(goal.current_amount, Money::from_cents(265050));
}

#[test]
fn test_categories_ranking() {
    let dir = TempDir::new().unwrap();
    demo(&dir)
        .args(["categories", "--top", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moradia"))
        .stdout(predicate::str::contains("Alimentação"))
        .stdout(predicate::str::contains("Saúde").not());
}

#[test]
fn test_categories_list_by_kind() {
    let dir = TempDir::new().unwrap();
    demo(&dir)
        .args(["categories", "--list", "--kind", "income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salário"))
        .stdout(predicate::str::contains("Transporte").not());
}

#[test]
fn test_daily_series_has_requested_days() {
    let dir = TempDir::new().unwrap();
    demo(&dir)
        .args(["daily", "--days", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gastos diários (7 dias)"))
        .stdout(predicate::str::contains("20/01/2024"));
}

#[test]
fn test_daily_rejects_oversized_window() {
    let dir = TempDir::new().unwrap();
    demo(&dir)
        .args(["daily", "--days", "200000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--days"));

    demo(&dir)
        .args(["trend", "--months", "0"])
        .assert()
        .failure();
}

#[test]
fn test_trend() {
    let dir = TempDir::new().unwrap();
    demo(&dir)
        .args(["trend", "--months", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-11"))
        .stdout(predicate::str::contains("2024-01"));
}

#[test]
fn test_dashboard_is_the_default() {
    let dir = TempDir::new().unwrap();
    demo(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Maiores gastos do mês"))
        .stdout(predicate::str::contains("Insights"));
}

#[test]
fn test_ask_matches_rules() {
    let dir = TempDir::new().unwrap();
    financeflow(&dir)
        .args(["ask", "Como", "criar", "uma", "reserva?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 a 6 meses"));

    financeflow(&dir)
        .args(["ask", "Qual o melhor orçamento?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("50-30-20"));
}

#[test]
fn test_ask_without_question_greets() {
    let dir = TempDir::new().unwrap();
    financeflow(&dir)
        .arg("ask")
        .assert()
        .success()
        .stdout(predicate::str::contains("Olá!"))
        .stdout(predicate::str::contains("Onde devo investir meu dinheiro?"));
}

#[test]
fn test_insights_and_suggestions() {
    let dir = TempDir::new().unwrap();
    demo(&dir)
        .arg("insights")
        .assert()
        .success()
        .stdout(predicate::str::contains("saldo positivo"))
        .stdout(predicate::str::contains("'Lazer'"));

    demo(&dir).arg("suggest").assert().success();
}

#[test]
fn test_categorize_suggest() {
    let dir = TempDir::new().unwrap();
    demo(&dir)
        .args(["categorize", "suggest", "Uber - Aeroporto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transporte"));

    demo(&dir)
        .args(["categorize", "suggest", "xyz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhuma categoria encontrada"));
}

#[test]
fn test_categorize_batch() {
    let dir = TempDir::new().unwrap();
    demo(&dir)
        .args(["categorize", "batch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Drogaria Raia"))
        .stdout(predicate::str::contains("Processadas: 2"));
}

#[test]
fn test_export_json_to_stdout() {
    let dir = TempDir::new().unwrap();
    let output = demo(&dir)
        .args(["export", "all", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["balance"], 130000);
    assert_eq!(value["as_of"], "2024-01-20");
}

#[test]
fn test_config_set_and_show() {
    let dir = TempDir::new().unwrap();
    financeflow(&dir)
        .args(["config", "set", "warning_threshold_percent", "90"])
        .assert()
        .success();

    financeflow(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("warning_threshold_percent:  90"));

    // Food sits at 81.25%, below the new warning tier
    demo(&dir)
        .arg("budgets")
        .assert()
        .success()
        .stdout(predicate::str::contains("No controle: 2"));
}

#[test]
fn test_config_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    financeflow(&dir)
        .args(["config", "set", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown setting"));
}

#[test]
fn test_missing_data_file_fails() {
    let dir = TempDir::new().unwrap();
    financeflow(&dir)
        .args(["--data", "does-not-exist.json", "summary"])
        .assert()
        .failure();
}
