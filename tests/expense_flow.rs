//! End-to-end scenarios over the store and dispatcher on a temp file.

use expense_buddy::dispatch::Dispatcher;
use expense_buddy::ops::{BudgetTrends, ExpenseLogger, SavingTip};
use expense_buddy::store::ExpenseStore;
use serde_json::json;
use std::sync::Arc;
use tempfile::tempdir;

fn setup(dir: &tempfile::TempDir) -> (ExpenseStore, Dispatcher) {
    let path = dir.path().join("expenses.json");
    let store = ExpenseStore::open(path.to_str().unwrap().to_string()).unwrap();

    let mut dispatcher = Dispatcher::new();
    dispatcher.register(Arc::new(ExpenseLogger::new(store.clone())));
    dispatcher.register(Arc::new(BudgetTrends::new(store.clone())));
    dispatcher.register(Arc::new(SavingTip::new(store.clone())));

    (store, dispatcher)
}

fn log(dispatcher: &Dispatcher, date: &str, amount: f64, category: &str, note: &str) {
    let result = dispatcher
        .dispatch(
            "ExpenseLogger",
            json!({"expense": {"date": date, "amount": amount, "category": category, "note": note}}),
        )
        .unwrap();
    assert!(result.get("error").is_none(), "unexpected error: {result}");
}

#[test]
fn morning_coffee_is_filed_under_food() {
    let dir = tempdir().unwrap();
    let (store, dispatcher) = setup(&dir);

    let result = dispatcher
        .dispatch(
            "ExpenseLogger",
            json!({"expense": {
                "date": "2024-01-01",
                "amount": 50,
                "category": "",
                "note": "morning coffee"
            }}),
        )
        .unwrap();

    assert_eq!(result["expense"]["category"], "Food");
    assert!(result["status"].as_str().unwrap().contains("Food"));
    assert_eq!(store.list()[0].category, "Food");
}

#[test]
fn overspending_triggers_the_warning_tip() {
    let dir = tempdir().unwrap();
    let (store, dispatcher) = setup(&dir);

    store.set_budget(200.0).unwrap();
    log(&dispatcher, "2024-01-01", 100.0, "Food", "");
    log(&dispatcher, "2024-01-02", 150.0, "Transport", "");

    let trends = dispatcher.dispatch("BudgetTrends", json!({})).unwrap();
    assert_eq!(trends["weekly_total"], 250.0);
    assert_eq!(trends["weekly_budget"], 200.0);

    let advice = dispatcher.dispatch("SavingTip", json!({})).unwrap();
    assert!(advice["tip"].as_str().unwrap().contains("over budget"));
    assert_eq!(advice["streak"], "Try again next week!");
}

#[test]
fn trend_totals_agree_across_buckets() {
    let dir = tempdir().unwrap();
    let (_store, dispatcher) = setup(&dir);

    log(&dispatcher, "2024-01-01", 12.5, "", "lunch");
    log(&dispatcher, "2024-01-01", 3.0, "", "bus ticket");
    log(&dispatcher, "2024-01-02", 40.0, "", "grocery run");

    let trends = dispatcher.dispatch("BudgetTrends", json!({})).unwrap();

    let daily_sum: f64 = trends["daily_totals"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_f64().unwrap())
        .sum();
    let category_sum: f64 = trends["categories"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_f64().unwrap())
        .sum();

    assert_eq!(trends["weekly_total"].as_f64().unwrap(), daily_sum);
    assert_eq!(trends["weekly_total"].as_f64().unwrap(), category_sum);
}

#[test]
fn reset_keeps_the_budget() {
    let dir = tempdir().unwrap();
    let (store, dispatcher) = setup(&dir);

    store.set_budget(300.0).unwrap();
    log(&dispatcher, "2024-01-01", 20.0, "Food", "");
    store.clear().unwrap();

    assert!(store.is_empty());
    assert_eq!(store.get_budget(), 300.0);

    let trends = dispatcher.dispatch("BudgetTrends", json!({})).unwrap();
    assert_eq!(trends["weekly_total"], 0.0);
    assert_eq!(trends["weekly_budget"], 300.0);
}

#[test]
fn unknown_operation_fails_hard_with_the_registry_listed() {
    let dir = tempdir().unwrap();
    let (_store, dispatcher) = setup(&dir);

    let err = dispatcher.dispatch("NoSuchOperation", json!({})).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("'NoSuchOperation' not found"));
    assert!(message.contains("ExpenseLogger"));
    assert!(message.contains("BudgetTrends"));
    assert!(message.contains("SavingTip"));
}

#[test]
fn malformed_arguments_become_a_soft_error_payload() {
    let dir = tempdir().unwrap();
    let (_store, dispatcher) = setup(&dir);

    let result = dispatcher.dispatch("ExpenseLogger", json!({})).unwrap();
    let error = result["error"].as_str().unwrap();
    assert!(error.starts_with("ExpenseLogger failed to run:"));
}
