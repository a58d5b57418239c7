use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Result, TrackerError};

use super::entry::{EarningEntry, ExpenseEntry};

/// Authoritative store of earnings, expenses, and the budget target.
///
/// A budget of `0.0` (or anything non-positive after deserialization) means
/// no budget constraint is active. Entries keep insertion order; every
/// derived value is recomputed from this state, never cached.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub earnings: Vec<EarningEntry>,
    #[serde(default)]
    pub expenses: Vec<ExpenseEntry>,
    #[serde(default)]
    pub budget: f64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an income entry, returning the id assigned to it.
    pub fn add_earning(
        &mut self,
        source: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Result<Uuid> {
        let source = source.into();
        validate_label("earning source", &source)?;
        validate_amount("earning amount", amount)?;
        let entry = EarningEntry::new(source, amount, date);
        let id = entry.id;
        self.earnings.push(entry);
        Ok(id)
    }

    /// Records a spending entry, returning the id assigned to it.
    pub fn add_expense(
        &mut self,
        category: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Result<Uuid> {
        let category = category.into();
        validate_label("expense category", &category)?;
        validate_amount("expense amount", amount)?;
        let entry = ExpenseEntry::new(category, amount, date);
        let id = entry.id;
        self.expenses.push(entry);
        Ok(id)
    }

    /// Removes the earning with the given id. Unknown ids are rejected and
    /// leave the ledger untouched.
    pub fn remove_earning(&mut self, id: Uuid) -> Result<EarningEntry> {
        match self.earnings.iter().position(|entry| entry.id == id) {
            Some(index) => Ok(self.earnings.remove(index)),
            None => Err(TrackerError::InvalidReference(format!(
                "no earning with id {id}"
            ))),
        }
    }

    /// Removes the expense with the given id. Unknown ids are rejected and
    /// leave the ledger untouched.
    pub fn remove_expense(&mut self, id: Uuid) -> Result<ExpenseEntry> {
        match self.expenses.iter().position(|entry| entry.id == id) {
            Some(index) => Ok(self.expenses.remove(index)),
            None => Err(TrackerError::InvalidReference(format!(
                "no expense with id {id}"
            ))),
        }
    }

    /// Replaces the budget target wholesale.
    pub fn set_budget(&mut self, amount: f64) -> Result<()> {
        validate_amount("budget", amount)?;
        self.budget = amount;
        Ok(())
    }

    /// Returns to the "no budget constraint" state.
    pub fn clear_budget(&mut self) {
        self.budget = 0.0;
    }

    pub fn budget_active(&self) -> bool {
        self.budget > 0.0
    }

    pub fn total_earnings(&self) -> f64 {
        self.earnings.iter().map(|entry| entry.amount).sum()
    }

    pub fn total_expenses(&self) -> f64 {
        self.expenses.iter().map(|entry| entry.amount).sum()
    }

    pub fn balance(&self) -> f64 {
        self.total_earnings() - self.total_expenses()
    }

    pub fn entry_count(&self) -> usize {
        self.earnings.len() + self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.earnings.is_empty() && self.expenses.is_empty()
    }
}

fn validate_label(what: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TrackerError::Validation(format!("{what} cannot be empty")));
    }
    Ok(())
}

fn validate_amount(what: &str, amount: f64) -> Result<()> {
    if !amount.is_finite() {
        return Err(TrackerError::Validation(format!("{what} must be a number")));
    }
    if amount <= 0.0 {
        return Err(TrackerError::Validation(format!(
            "{what} must be greater than 0"
        )));
    }
    Ok(())
}
