//! Static grouping of expense category labels into named buckets.
//!
//! Used only to aggregate expenses for the category pie chart; never
//! persisted and not consulted by the recommendation engine.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// A named bucket and the category labels that fall into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryGroup {
    pub name: &'static str,
    pub labels: &'static [&'static str],
}

pub static CATEGORY_GROUPS: &[CategoryGroup] = &[
    CategoryGroup {
        name: "Housing",
        labels: &["Rent", "Mortgage", "Property Taxes", "Home Insurance"],
    },
    CategoryGroup {
        name: "Utilities",
        labels: &["Electricity", "Water", "Gas", "Internet", "Phone"],
    },
    CategoryGroup {
        name: "Transportation",
        labels: &["Fuel", "Public Transport", "Car Insurance", "Maintenance"],
    },
    CategoryGroup {
        name: "Food",
        labels: &["Groceries", "Dining Out", "Takeout"],
    },
    CategoryGroup {
        name: "Entertainment",
        labels: &["Movies", "Concerts", "Hobbies", "Streaming Services"],
    },
    CategoryGroup {
        name: "Healthcare",
        labels: &["Medical Bills", "Insurance", "Prescriptions"],
    },
    CategoryGroup {
        name: "Education",
        labels: &["Tuition", "Books", "Supplies", "Courses"],
    },
    CategoryGroup {
        name: "PersonalCare",
        labels: &["Clothing", "Grooming", "Fitness"],
    },
    CategoryGroup {
        name: "Debt",
        labels: &["Loan Repayments", "Credit Card Payments"],
    },
    CategoryGroup {
        name: "Miscellaneous",
        labels: &["Gifts", "Donations", "Other"],
    },
];

static GROUP_BY_LABEL: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for group in CATEGORY_GROUPS {
        for label in group.labels {
            index.insert(*label, group.name);
        }
    }
    index
});

/// Resolves the group a category label belongs to. Labels outside the
/// taxonomy belong to no group and are ignored by the pie chart.
pub fn group_for(category: &str) -> Option<&'static str> {
    GROUP_BY_LABEL.get(category).copied()
}
