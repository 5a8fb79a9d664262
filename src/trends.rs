//! Spending trend aggregation

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::store::Expense;

/// Derived view over the stored history. Never persisted; recomputed on
/// every request. `weekly_total` always equals the sum of either bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSnapshot {
    pub daily_totals: BTreeMap<String, f64>,
    pub weekly_total: f64,
    pub weekly_budget: f64,
    pub categories: BTreeMap<String, f64>,
}

/// Buckets all expenses by date string and by category in a single pass.
/// Dates are compared as opaque strings; no bucket is created for a date
/// or category without expenses.
pub fn aggregate(expenses: &[Expense], weekly_budget: f64) -> TrendSnapshot {
    let mut daily_totals: BTreeMap<String, f64> = BTreeMap::new();
    let mut categories: BTreeMap<String, f64> = BTreeMap::new();
    let mut weekly_total = 0.0;

    for expense in expenses {
        *daily_totals.entry(expense.date.clone()).or_insert(0.0) += expense.amount;
        *categories.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
        weekly_total += expense.amount;
    }

    TrendSnapshot {
        daily_totals,
        weekly_total,
        weekly_budget,
        categories,
    }
}
