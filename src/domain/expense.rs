use serde::{Deserialize, Serialize};

/// Identifier handed out by the ledger at creation time.
/// Not guaranteed unique once entries have been removed.
pub type ExpenseId = usize;

/// A single recorded expense. Expenses are immutable once created;
/// removal matches on the whole value, not on the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    /// Human-readable label (e.g., "Coffee")
    pub name: String,
    /// Amount spent, expected non-negative
    pub amount: f64,
    /// Free-form grouping label (e.g., "Food", "Transport")
    pub category: String,
}

impl Expense {
    pub fn new(
        id: ExpenseId,
        name: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            category: category.into(),
        }
    }
}
