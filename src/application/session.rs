use tracing::{debug, warn};

use crate::domain::{Expense, ExpenseLedger, SortKey};

use super::{AppError, ExpenseDraft};

/// Which screen the user is looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// The entry list with totals and sort controls
    #[default]
    List,
    /// The form for staging a new entry
    EntryForm,
}

/// One user session: the ledger plus the transient presentation state
/// around it. This is the primary interface for any front-end.
#[derive(Debug, Default)]
pub struct ExpenseSession {
    ledger: ExpenseLedger,
    view: ViewMode,
    draft: ExpenseDraft,
}

impl ExpenseSession {
    /// Start a session with an empty ledger on the list view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session around an existing ledger (e.g. one with subscribers).
    pub fn with_ledger(ledger: ExpenseLedger) -> Self {
        Self {
            ledger,
            ..Self::default()
        }
    }

    // ========================
    // View and form state
    // ========================

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn open_form(&mut self) {
        self.view = ViewMode::EntryForm;
    }

    /// Leave the form without submitting. Whatever was typed stays in the draft.
    pub fn cancel_form(&mut self) {
        self.view = ViewMode::List;
    }

    pub fn draft(&self) -> &ExpenseDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ExpenseDraft {
        &mut self.draft
    }

    pub fn set_draft(&mut self, draft: ExpenseDraft) {
        self.draft = draft;
    }

    /// Turn the current draft into a ledger entry.
    ///
    /// On a validation failure nothing reaches the ledger and the form stays
    /// open. On success the draft is cleared and the view returns to the list.
    pub fn submit(&mut self) -> Result<Expense, AppError> {
        let valid = match self.draft.validate() {
            Ok(valid) => valid,
            Err(e) => {
                warn!(error = %e, "rejected expense draft");
                return Err(e);
            }
        };

        let expense = Expense::new(
            self.ledger.next_id(),
            valid.name,
            valid.amount,
            valid.category,
        );
        self.ledger.add(expense.clone());
        self.draft.clear();
        self.view = ViewMode::List;
        Ok(expense)
    }

    // ========================
    // Ledger operations
    // ========================

    /// Remove the entry shown at 1-based `row` of the current list.
    /// The ledger matches it by value, not by id.
    pub fn remove_row(&mut self, row: usize) -> Result<Expense, AppError> {
        let len = self.ledger.len();
        let expense = row
            .checked_sub(1)
            .and_then(|index| self.ledger.entries().get(index))
            .cloned()
            .ok_or(AppError::RowOutOfRange { row, len })?;

        self.ledger.remove(&expense);
        debug!(row, id = expense.id, "removed expense");
        Ok(expense)
    }

    pub fn sort(&mut self, key: SortKey) {
        self.ledger.sort_by(key);
    }

    pub fn total(&self) -> f64 {
        self.ledger.sum()
    }

    pub fn entries(&self) -> &[Expense] {
        self.ledger.entries()
    }

    pub fn ledger(&self) -> &ExpenseLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut ExpenseLedger {
        &mut self.ledger
    }

    pub fn into_ledger(self) -> ExpenseLedger {
        self.ledger
    }
}
