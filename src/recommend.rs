//! Budget review: balance, shortfall, and greedy expense-reduction advice.

use serde::Serialize;

use crate::ledger::{EarningEntry, ExpenseEntry, Ledger};

/// A single "reduce category X by amount Y" suggestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub category: String,
    pub reduce_by: f64,
}

/// Everything derived from the ledger in one pass. Never persisted;
/// recomputed from scratch after each mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetReview {
    pub balance: f64,
    /// `balance - budget` while a budget is active; `None` otherwise.
    /// Negative means the balance fell short of the target.
    pub shortfall: Option<f64>,
    pub recommendations: Vec<Recommendation>,
    pub message: String,
}

impl BudgetReview {
    pub fn over_budget(&self) -> bool {
        self.shortfall.is_some_and(|value| value < 0.0)
    }
}

/// Derives the review for a whole ledger.
pub fn review_ledger(ledger: &Ledger) -> BudgetReview {
    review(&ledger.earnings, &ledger.expenses, ledger.budget)
}

/// Total over well-formed input: upstream validation guarantees positive
/// finite amounts, so nothing here can fail.
pub fn review(earnings: &[EarningEntry], expenses: &[ExpenseEntry], budget: f64) -> BudgetReview {
    let total_earnings: f64 = earnings.iter().map(|entry| entry.amount).sum();
    let total_expenses: f64 = expenses.iter().map(|entry| entry.amount).sum();
    let balance = total_earnings - total_expenses;

    if budget <= 0.0 {
        return BudgetReview {
            balance,
            shortfall: None,
            recommendations: Vec::new(),
            message: "No budget target is set.".into(),
        };
    }

    let shortfall = balance - budget;
    if shortfall >= 0.0 {
        return BudgetReview {
            balance,
            shortfall: Some(shortfall),
            recommendations: Vec::new(),
            message: "You are within your budget. Great job!".into(),
        };
    }

    let target = -shortfall;
    // Stable sort keeps the original relative order of equal amounts.
    let mut by_amount: Vec<&ExpenseEntry> = expenses.iter().collect();
    by_amount.sort_by(|a, b| b.amount.total_cmp(&a.amount));

    let mut remaining = target;
    let mut recommendations = Vec::new();
    for expense in by_amount {
        if remaining <= 0.0 {
            break;
        }
        let cut = expense.amount.min(remaining);
        remaining -= cut;
        let cut = round2(cut);
        if cut > 0.0 {
            recommendations.push(Recommendation {
                category: expense.category.clone(),
                reduce_by: cut,
            });
        }
    }

    BudgetReview {
        balance,
        shortfall: Some(shortfall),
        recommendations,
        message: format!(
            "You need to reduce your expenses by {:.2} to meet your budget.",
            target
        ),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
