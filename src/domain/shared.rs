use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{Expense, ExpenseLedger, SortKey};

/// Thread-safe handle to a single [`ExpenseLedger`].
///
/// Every call takes the same lock, so mutations from different threads
/// never interleave. Cloning the handle shares the ledger.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<ExpenseLedger>>,
}

impl SharedLedger {
    pub fn new(ledger: ExpenseLedger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    pub fn add(&self, entry: Expense) {
        self.lock().add(entry);
    }

    pub fn remove(&self, entry: &Expense) -> bool {
        self.lock().remove(entry)
    }

    pub fn sort_by(&self, key: SortKey) {
        self.lock().sort_by(key);
    }

    pub fn sum(&self) -> f64 {
        self.lock().sum()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Owned copy of the current entries, taken under the lock.
    pub fn snapshot(&self) -> Vec<Expense> {
        self.lock().entries().to_vec()
    }

    /// Run several operations under a single lock acquisition,
    /// e.g. reading `next_id` and adding without another writer in between.
    pub fn with_ledger<R>(&self, f: impl FnOnce(&mut ExpenseLedger) -> R) -> R {
        f(&mut self.lock())
    }

    // Every ledger operation either completes or does nothing,
    // so a panic elsewhere cannot leave it half-updated.
    fn lock(&self) -> MutexGuard<'_, ExpenseLedger> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
