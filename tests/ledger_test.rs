mod common;

use common::{StandardExpenses, names, next_expense};
use jetspend::domain::{Expense, ExpenseLedger, SortKey};

#[test]
fn test_sum_tracks_adds_and_removes() {
    let mut ledger = StandardExpenses::mixed();
    assert_eq!(ledger.sum(), 119.75);

    let train = ledger.entries()[1].clone();
    ledger.remove(&train);
    assert_eq!(ledger.sum(), 89.75);

    ledger.add(next_expense(&ledger, "Snack", 0.25, "Food"));
    assert_eq!(ledger.sum(), 90.0);
}

#[test]
fn test_sum_after_removing_everything_is_zero() {
    let mut ledger = StandardExpenses::coffee_and_bus();
    for entry in ledger.entries().to_vec() {
        assert!(ledger.remove(&entry));
    }

    assert!(ledger.is_empty());
    assert_eq!(ledger.sum(), 0.0);
}

#[test]
fn test_add_then_remove_restores_sequence() {
    let mut ledger = StandardExpenses::mixed();
    ledger.sort_by_name();
    let before = ledger.entries().to_vec();

    let extra = Expense::new(99, "Taxi", 18.0, "Transport");
    ledger.add(extra.clone());
    assert_eq!(ledger.len(), before.len() + 1);
    assert!(ledger.remove(&extra));

    assert_eq!(ledger.entries(), before.as_slice());
}

#[test]
fn test_remove_absent_keeps_length_and_order() {
    let mut ledger = StandardExpenses::mixed();
    let before = ledger.entries().to_vec();

    // Matching name and amount but a different id is a different value
    let lookalike = Expense::new(42, "Lunch", 12.0, "Food");
    assert!(!ledger.remove(&lookalike));

    assert_eq!(ledger.entries(), before.as_slice());
}

#[test]
fn test_every_sort_is_idempotent() {
    for key in SortKey::ALL {
        let mut ledger = StandardExpenses::mixed();
        ledger.sort_by(key);
        let once = ledger.entries().to_vec();
        ledger.sort_by(key);

        assert_eq!(ledger.entries(), once.as_slice(), "sort by {} twice", key);
    }
}

#[test]
fn test_every_sort_is_stable() {
    for key in SortKey::ALL {
        let mut ledger = StandardExpenses::mixed();
        // Shuffle into a non-insertion order first
        ledger.sort_by_amount();
        let before = ledger.entries().to_vec();
        ledger.sort_by(key);
        let after = ledger.entries();

        let same_key = |a: &Expense, b: &Expense| match key {
            SortKey::Name => a.name == b.name,
            SortKey::Amount => a.amount == b.amount,
            SortKey::Category => a.category == b.category,
            SortKey::Id => a.id == b.id,
        };
        let position = |list: &[Expense], e: &Expense| list.iter().position(|x| x == e);

        for a in &before {
            for b in &before {
                if a != b && same_key(a, b) && position(&before, a) < position(&before, b) {
                    assert!(
                        position(after, a) < position(after, b),
                        "sort by {} reordered {:?} and {:?}",
                        key,
                        a,
                        b
                    );
                }
            }
        }
    }
}

#[test]
fn test_sort_orders() {
    let mut ledger = StandardExpenses::mixed();

    ledger.sort_by_name();
    assert_eq!(
        names(&ledger),
        vec!["Bus", "Cinema", "Groceries", "Lunch", "Lunch", "Train"]
    );

    ledger.sort_by_amount();
    let amounts: Vec<f64> = ledger.iter().map(|e| e.amount).collect();
    assert_eq!(amounts, vec![2.0, 9.5, 12.0, 12.0, 30.0, 54.25]);
    // Equal amounts keep the name order from the previous sort
    assert_eq!(names(&ledger)[2..4], ["Cinema", "Lunch"]);

    ledger.sort_by_category();
    let categories: Vec<&str> = ledger.iter().map(|e| e.category.as_str()).collect();
    assert_eq!(
        categories,
        vec!["Food", "Food", "Food", "Fun", "Transport", "Transport"]
    );

    ledger.sort_by_id();
    let ids: Vec<_> = ledger.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_coffee_and_bus_example() {
    let mut ledger = StandardExpenses::coffee_and_bus();
    assert_eq!(ledger.sum(), 6.5);

    ledger.sort_by_amount();
    assert_eq!(names(&ledger), vec!["Bus", "Coffee"]);
    assert_eq!(ledger.entries()[0].amount, 2.0);
    assert_eq!(ledger.entries()[1].amount, 4.5);

    ledger.sort_by_name();
    assert_eq!(names(&ledger), vec!["Bus", "Coffee"]);
}

#[test]
fn test_remove_second_of_three() {
    let mut ledger = ExpenseLedger::new();
    ledger.add(next_expense(&ledger, "Rent", 800.0, "Home"));
    ledger.add(next_expense(&ledger, "Lunch", 12.0, "Food"));
    ledger.add(next_expense(&ledger, "Train", 30.0, "Transport"));

    let second = ledger.entries()[1].clone();
    assert!(ledger.remove(&second));

    assert_eq!(ledger.len(), 2);
    assert_eq!(names(&ledger), vec!["Rent", "Train"]);
}

#[test]
fn test_empty_ledger() {
    let ledger = ExpenseLedger::new();
    assert_eq!(ledger.sum(), 0.0);
    assert!(ledger.entries().is_empty());
}

#[test]
fn test_ids_are_not_unique_after_removal() {
    let mut ledger = ExpenseLedger::new();
    ledger.add(next_expense(&ledger, "a", 1.0, "x"));
    ledger.add(next_expense(&ledger, "b", 1.0, "x"));
    ledger.add(next_expense(&ledger, "c", 1.0, "x"));

    let first = ledger.entries()[0].clone();
    ledger.remove(&first);
    ledger.add(next_expense(&ledger, "d", 1.0, "x"));

    let ids: Vec<_> = ledger.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 2]);

    // Removal goes by value, so the right "2" disappears
    let d = ledger.entries()[2].clone();
    ledger.remove(&d);
    assert_eq!(names(&ledger), vec!["b", "c"]);
}
