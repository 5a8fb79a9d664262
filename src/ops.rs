//! The operations registered on the dispatcher

use serde_json::{json, Value};

use crate::advisor::advise;
use crate::categorize::categorize;
use crate::dispatch::Operation;
use crate::store::{Expense, ExpenseStore};
use crate::trends::aggregate;
use crate::BoxError;

/// Categorizes and appends the expense passed in `args.expense`.
pub struct ExpenseLogger {
    store: ExpenseStore,
}

impl ExpenseLogger {
    pub fn new(store: ExpenseStore) -> Self {
        ExpenseLogger { store }
    }
}

impl Operation for ExpenseLogger {
    fn name(&self) -> &'static str {
        "ExpenseLogger"
    }

    fn run(&self, args: Value) -> Result<Value, BoxError> {
        let expense_value = args
            .get("expense")
            .cloned()
            .ok_or("missing 'expense' argument")?;
        let mut expense: Expense = serde_json::from_value(expense_value)?;

        expense.category = categorize(&expense.category, &expense.note);
        self.store.append(expense.clone())?;

        Ok(json!({
            "status": format!("Expense logged! (Category: {})", expense.category),
            "expense": expense,
        }))
    }
}

/// Reduces the stored history into the trend snapshot.
pub struct BudgetTrends {
    store: ExpenseStore,
}

impl BudgetTrends {
    pub fn new(store: ExpenseStore) -> Self {
        BudgetTrends { store }
    }
}

impl Operation for BudgetTrends {
    fn name(&self) -> &'static str {
        "BudgetTrends"
    }

    fn run(&self, _args: Value) -> Result<Value, BoxError> {
        let snapshot = aggregate(&self.store.list(), self.store.get_budget());
        Ok(serde_json::to_value(snapshot)?)
    }
}

/// Derives the tip and streak messages from the current trends.
pub struct SavingTip {
    store: ExpenseStore,
}

impl SavingTip {
    pub fn new(store: ExpenseStore) -> Self {
        SavingTip { store }
    }
}

impl Operation for SavingTip {
    fn name(&self) -> &'static str {
        "SavingTip"
    }

    fn run(&self, _args: Value) -> Result<Value, BoxError> {
        let snapshot = aggregate(&self.store.list(), self.store.get_budget());
        Ok(serde_json::to_value(advise(&snapshot))?)
    }
}
