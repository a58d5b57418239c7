use chrono::NaiveDate;
use pocket_ledger::ledger::Ledger;
use pocket_ledger::recommend::review_ledger;

fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn worked_example_reduces_largest_expense_first() {
    let mut ledger = Ledger::new();
    ledger
        .add_earning("Salary", 500.0, sample_date(2025, 1, 5))
        .unwrap();
    ledger
        .add_expense("Food", 300.0, sample_date(2025, 1, 10))
        .unwrap();
    ledger
        .add_expense("Rent", 250.0, sample_date(2025, 1, 12))
        .unwrap();
    ledger.set_budget(600.0).unwrap();

    let review = review_ledger(&ledger);
    assert_eq!(review.balance, -50.0);
    assert_eq!(review.shortfall, Some(-650.0));

    let suggestions: Vec<(&str, f64)> = review
        .recommendations
        .iter()
        .map(|r| (r.category.as_str(), r.reduce_by))
        .collect();
    assert_eq!(suggestions, vec![("Food", 300.0), ("Rent", 250.0)]);
}

#[test]
fn inactive_budget_always_yields_empty_recommendations() {
    let mut ledger = Ledger::new();
    ledger
        .add_expense("Rent", 900.0, sample_date(2025, 2, 1))
        .unwrap();

    let review = review_ledger(&ledger);
    assert_eq!(review.shortfall, None);
    assert!(review.recommendations.is_empty());
}

#[test]
fn within_budget_yields_praise_and_no_suggestions() {
    let mut ledger = Ledger::new();
    ledger
        .add_earning("Salary", 2000.0, sample_date(2025, 2, 1))
        .unwrap();
    ledger
        .add_expense("Rent", 600.0, sample_date(2025, 2, 2))
        .unwrap();
    ledger.set_budget(1000.0).unwrap();

    let review = review_ledger(&ledger);
    assert!(review.shortfall.unwrap() >= 0.0);
    assert!(review.recommendations.is_empty());
    assert!(review.message.contains("within your budget"));
}

#[test]
fn reductions_sum_to_the_smaller_of_shortfall_and_total_expenses() {
    let mut ledger = Ledger::new();
    ledger
        .add_earning("Salary", 1000.0, sample_date(2025, 3, 1))
        .unwrap();
    ledger
        .add_expense("Rent", 700.0, sample_date(2025, 3, 2))
        .unwrap();
    ledger
        .add_expense("Groceries", 200.0, sample_date(2025, 3, 3))
        .unwrap();
    ledger
        .add_expense("Movies", 50.0, sample_date(2025, 3, 4))
        .unwrap();

    // Shortfall smaller than total expenses: covered by partial cuts.
    ledger.set_budget(400.0).unwrap();
    let review = review_ledger(&ledger);
    let total: f64 = review.recommendations.iter().map(|r| r.reduce_by).sum();
    assert_eq!(total, 350.0);
    for recommendation in &review.recommendations {
        let source = ledger
            .expenses
            .iter()
            .find(|entry| entry.category == recommendation.category)
            .unwrap();
        assert!(recommendation.reduce_by <= source.amount);
    }

    // Shortfall larger than total expenses: the sum caps at the total.
    ledger.set_budget(5000.0).unwrap();
    let review = review_ledger(&ledger);
    let total: f64 = review.recommendations.iter().map(|r| r.reduce_by).sum();
    assert_eq!(total, 950.0);
}

#[test]
fn suggestions_come_in_descending_amount_order() {
    let mut ledger = Ledger::new();
    ledger
        .add_expense("Movies", 50.0, sample_date(2025, 4, 1))
        .unwrap();
    ledger
        .add_expense("Rent", 700.0, sample_date(2025, 4, 2))
        .unwrap();
    ledger
        .add_expense("Groceries", 200.0, sample_date(2025, 4, 3))
        .unwrap();
    ledger.set_budget(100.0).unwrap();

    let review = review_ledger(&ledger);
    let amounts: Vec<f64> = review
        .recommendations
        .iter()
        .map(|r| r.reduce_by)
        .collect();
    let mut sorted = amounts.clone();
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
    assert_eq!(amounts, sorted);
    assert_eq!(review.recommendations[0].category, "Rent");
}
