mod common;

use chrono::NaiveDate;
use pocket_ledger::ledger::Ledger;
use pocket_ledger::storage::StorageBackend;

fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn round_trip_preserves_entries_order_and_budget() {
    let (storage, _config) = common::setup_test_env();

    let mut ledger = Ledger::new();
    ledger
        .add_earning("Salary", 1800.0, sample_date(2025, 5, 1))
        .unwrap();
    ledger
        .add_earning("Freelance", 350.0, sample_date(2025, 5, 3))
        .unwrap();
    ledger
        .add_expense("Rent", 900.0, sample_date(2025, 5, 2))
        .unwrap();
    ledger
        .add_expense("Groceries", 140.0, sample_date(2025, 5, 4))
        .unwrap();
    ledger.set_budget(700.0).unwrap();

    storage.save(&ledger).expect("save ledger");
    let loaded = storage.load().expect("load ledger");

    assert_eq!(loaded.earnings, ledger.earnings);
    assert_eq!(loaded.expenses, ledger.expenses);
    assert_eq!(loaded.budget, 700.0);
    assert_eq!(loaded.balance(), ledger.balance());
}

#[test]
fn absent_slot_is_the_zero_state() {
    let (storage, _config) = common::setup_test_env();
    let loaded = storage.load().expect("load ledger");
    assert!(loaded.is_empty());
    assert_eq!(loaded.budget, 0.0);
}

#[test]
fn malformed_slot_is_treated_as_absent() {
    let (storage, _config) = common::setup_test_env();
    std::fs::write(storage.slot_path(), "[1, 2, oops").expect("write garbage");

    let loaded = storage.load().expect("load ledger");
    assert!(loaded.is_empty());
    assert_eq!(loaded.budget, 0.0);
}

#[test]
fn slot_without_ids_still_loads_with_fresh_ids() {
    let (storage, _config) = common::setup_test_env();
    let legacy = r#"{
        "earnings": [{"source": "Salary", "amount": 500.0, "date": "2025-05-01"}],
        "expenses": [{"category": "Rent", "amount": 250.0, "date": "2025-05-02"}],
        "budget": 600.0
    }"#;
    std::fs::write(storage.slot_path(), legacy).expect("write legacy slot");

    let loaded = storage.load().expect("load ledger");
    assert_eq!(loaded.earnings.len(), 1);
    assert_eq!(loaded.earnings[0].source, "Salary");
    assert_eq!(loaded.expenses[0].category, "Rent");
    assert_eq!(loaded.budget, 600.0);
}
