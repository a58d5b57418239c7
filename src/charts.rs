//! Chart series derivation. Builds the data behind the grouped bar and
//! category pie views; rendering lives with the CLI.

use serde::Serialize;

use crate::ledger::{taxonomy, ExpenseEntry, Ledger, CATEGORY_GROUPS};

/// Grouped bar data: one label per distinct earning source or expense
/// category (first appearance wins the position), with summed amounts per
/// side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub labels: Vec<String>,
    pub earnings: Vec<f64>,
    pub expenses: Vec<f64>,
}

impl BarSeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn max_amount(&self) -> f64 {
        self.earnings
            .iter()
            .chain(self.expenses.iter())
            .copied()
            .fold(0.0, f64::max)
    }
}

pub fn bar_series(ledger: &Ledger) -> BarSeries {
    let mut series = BarSeries {
        labels: Vec::new(),
        earnings: Vec::new(),
        expenses: Vec::new(),
    };

    for entry in &ledger.earnings {
        let index = series.slot(&entry.source);
        series.earnings[index] += entry.amount;
    }
    for entry in &ledger.expenses {
        let index = series.slot(&entry.category);
        series.expenses[index] += entry.amount;
    }

    series
}

impl BarSeries {
    fn slot(&mut self, label: &str) -> usize {
        match self.labels.iter().position(|existing| existing == label) {
            Some(index) => index,
            None => {
                self.labels.push(label.to_string());
                self.earnings.push(0.0);
                self.expenses.push(0.0);
                self.labels.len() - 1
            }
        }
    }
}

/// One pie slice per taxonomy group, including zero-valued groups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub group: &'static str,
    pub total: f64,
}

pub fn pie_slices(expenses: &[ExpenseEntry]) -> Vec<PieSlice> {
    CATEGORY_GROUPS
        .iter()
        .map(|group| {
            let total = expenses
                .iter()
                .filter(|entry| taxonomy::group_for(&entry.category) == Some(group.name))
                .map(|entry| entry.amount)
                .sum();
            PieSlice {
                group: group.name,
                total,
            }
        })
        .collect()
}
