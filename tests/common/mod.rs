// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use jetspend::ExpenseSession;
use jetspend::application::ExpenseDraft;
use jetspend::cli::Repl;
use jetspend::domain::{Expense, ExpenseLedger};

/// Helper to build an expense with the id a ledger of `ledger` would assign
pub fn next_expense(ledger: &ExpenseLedger, name: &str, amount: f64, category: &str) -> Expense {
    Expense::new(ledger.next_id(), name, amount, category)
}

/// Helper to collect entry names in list order
pub fn names(ledger: &ExpenseLedger) -> Vec<String> {
    ledger.iter().map(|e| e.name.clone()).collect()
}

/// Run a scripted session and return it together with everything it printed
pub fn run_script(script: &str) -> Result<(ExpenseSession, String)> {
    let mut out = Vec::new();
    let mut repl = Repl::new(ExpenseSession::new(), script.as_bytes(), &mut out);
    repl.run()?;
    let session = repl.into_session();
    Ok((session, String::from_utf8(out)?))
}

/// Test fixture: a small month of spending
pub struct StandardExpenses;

impl StandardExpenses {
    /// Coffee 4.5 Food, Bus 2 Transport
    pub fn coffee_and_bus() -> ExpenseLedger {
        let mut ledger = ExpenseLedger::new();
        ledger.add(next_expense(&ledger, "Coffee", 4.5, "Food"));
        ledger.add(next_expense(&ledger, "Bus", 2.0, "Transport"));
        ledger
    }

    /// Six entries with repeated names, amounts and categories
    pub fn mixed() -> ExpenseLedger {
        let mut ledger = ExpenseLedger::new();
        for (name, amount, category) in [
            ("Lunch", 12.0, "Food"),
            ("Train", 30.0, "Transport"),
            ("Lunch", 9.5, "Food"),
            ("Cinema", 12.0, "Fun"),
            ("Bus", 2.0, "Transport"),
            ("Groceries", 54.25, "Food"),
        ] {
            ledger.add(next_expense(&ledger, name, amount, category));
        }
        ledger
    }

    /// Submit drafts through a session, as the entry form would
    pub fn submitted(drafts: &[(&str, &str, &str)]) -> Result<ExpenseSession> {
        let mut session = ExpenseSession::new();
        for (name, amount, category) in drafts {
            session.open_form();
            session.set_draft(ExpenseDraft::new(*name, *amount, *category));
            session.submit()?;
        }
        Ok(session)
    }
}
