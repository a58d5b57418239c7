use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single recorded income event. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningEntry {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub source: String,
    pub amount: f64,
    pub date: NaiveDate,
}

impl EarningEntry {
    pub fn new(source: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            source: source.into(),
            amount,
            date,
        }
    }
}

/// A single recorded spending event. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
}

impl ExpenseEntry {
    pub fn new(category: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: category.into(),
            amount,
            date,
        }
    }
}
