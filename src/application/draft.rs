use crate::domain::parse_amount;

use super::AppError;

/// The three text fields of the entry form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub name: String,
    pub amount: String,
    pub category: String,
}

/// A draft that passed validation and can become an [`crate::domain::Expense`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub name: String,
    pub amount: f64,
    pub category: String,
}

impl ExpenseDraft {
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            category: category.into(),
        }
    }

    /// Check the draft is fit for the ledger: name and category non-blank,
    /// amount parseable as a number. Text fields are kept as typed.
    pub fn validate(&self) -> Result<ValidDraft, AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::BlankName);
        }
        if self.category.trim().is_empty() {
            return Err(AppError::BlankCategory);
        }
        let amount = parse_amount(&self.amount).map_err(|source| AppError::InvalidAmount {
            input: self.amount.clone(),
            source,
        })?;

        Ok(ValidDraft {
            name: self.name.clone(),
            amount,
            category: self.category.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.amount.is_empty() && self.category.is_empty()
    }
}
