use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Expense, ExpenseId};

/// Field an [`ExpenseLedger`] can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Amount,
    Category,
    Id,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Name,
        SortKey::Amount,
        SortKey::Category,
        SortKey::Id,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Amount => "amount",
            SortKey::Category => "category",
            SortKey::Id => "id",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "amount" => Ok(SortKey::Amount),
            "category" => Ok(SortKey::Category),
            "id" => Ok(SortKey::Id),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSortKeyError(pub String);

impl fmt::Display for ParseSortKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sort key '{}' (expected name, amount, category or id)",
            self.0
        )
    }
}

impl std::error::Error for ParseSortKeyError {}

/// Change notification delivered to ledger subscribers after each mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerEvent {
    Added(Expense),
    Removed(Expense),
    Sorted(SortKey),
}

pub type SubscriptionId = usize;

type Observer = Box<dyn FnMut(&LedgerEvent) + Send>;

/// Ordered in-memory collection of expenses.
///
/// Entries keep insertion order until one of the `sort_by_*` methods
/// reorders them. All sorts are stable. No operation can fail.
#[derive(Default)]
pub struct ExpenseLedger {
    entries: Vec<Expense>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: SubscriptionId,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. The ledger does not validate; callers must reject
    /// blank names/categories and unparseable amounts before getting here.
    pub fn add(&mut self, entry: Expense) {
        self.entries.push(entry.clone());
        self.notify(LedgerEvent::Added(entry));
    }

    /// Remove the first entry equal to `entry`.
    /// Returns false (and changes nothing) when no entry matches.
    pub fn remove(&mut self, entry: &Expense) -> bool {
        match self.entries.iter().position(|e| e == entry) {
            Some(index) => {
                let removed = self.entries.remove(index);
                self.notify(LedgerEvent::Removed(removed));
                true
            }
            None => false,
        }
    }

    pub fn sort_by_name(&mut self) {
        self.entries.sort_by(|a, b| a.name.cmp(&b.name));
        self.notify(LedgerEvent::Sorted(SortKey::Name));
    }

    /// Uses IEEE total ordering, so NaN amounts still sort deterministically.
    pub fn sort_by_amount(&mut self) {
        self.entries.sort_by(|a, b| a.amount.total_cmp(&b.amount));
        self.notify(LedgerEvent::Sorted(SortKey::Amount));
    }

    pub fn sort_by_category(&mut self) {
        self.entries.sort_by(|a, b| a.category.cmp(&b.category));
        self.notify(LedgerEvent::Sorted(SortKey::Category));
    }

    pub fn sort_by_id(&mut self) {
        self.entries.sort_by_key(|e| e.id);
        self.notify(LedgerEvent::Sorted(SortKey::Id));
    }

    pub fn sort_by(&mut self, key: SortKey) {
        match key {
            SortKey::Name => self.sort_by_name(),
            SortKey::Amount => self.sort_by_amount(),
            SortKey::Category => self.sort_by_category(),
            SortKey::Id => self.sort_by_id(),
        }
    }

    /// Total of all current amounts. 0 for an empty ledger.
    pub fn sum(&self) -> f64 {
        // fold from +0.0: `Iterator::sum` on f64 starts at -0.0
        self.entries.iter().fold(0.0, |total, e| total + e.amount)
    }

    pub fn entries(&self) -> &[Expense] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Id for the next entry: the current size of the ledger.
    /// After removals this can repeat an id still held by a surviving entry.
    pub fn next_id(&self) -> ExpenseId {
        self.entries.len()
    }

    /// Register a callback invoked after every add, successful remove and sort.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&LedgerEvent) + Send + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub_id, _)| *sub_id != id);
        self.observers.len() != before
    }

    fn notify(&mut self, event: LedgerEvent) {
        for (_, observer) in &mut self.observers {
            observer(&event);
        }
    }
}

impl fmt::Debug for ExpenseLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpenseLedger")
            .field("entries", &self.entries)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<'a> IntoIterator for &'a ExpenseLedger {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
