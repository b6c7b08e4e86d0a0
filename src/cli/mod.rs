use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::application::{ExpenseDraft, ExpenseSession};
use crate::domain::{ExpenseLedger, LedgerEvent, SortKey, format_amount};

mod repl;

pub use repl::*;

/// Jetspend - Expense Tracker
#[derive(Parser)]
#[command(name = "jetspend")]
#[command(about = "Record expenses, sort them, and keep a running total for one session")]
#[command(version)]
pub struct Cli {
    /// Read session commands from a file instead of standard input
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Enable verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session (the default)
    Repl,

    /// Print a list of the given entries
    List {
        /// Entry as "name,amount,category" (repeatable)
        #[arg(short, long = "entry", value_parser = parse_entry_arg)]
        entries: Vec<ExpenseDraft>,

        /// Sort by: name, amount, category, id
        #[arg(long)]
        sort: Option<SortKey>,
    },

    /// Print the total of the given entries
    Total {
        /// Entry as "name,amount,category" (repeatable)
        #[arg(short, long = "entry", value_parser = parse_entry_arg)]
        entries: Vec<ExpenseDraft>,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command.unwrap_or(Commands::Repl) {
            Commands::Repl => {
                let session = ExpenseSession::with_ledger(logged_ledger());
                let stdout = io::stdout();

                match &self.script {
                    Some(path) => {
                        let file = File::open(path).with_context(|| {
                            format!("Failed to open script file: {}", path.display())
                        })?;
                        Repl::new(session, BufReader::new(file), stdout.lock()).run()?;
                    }
                    None => {
                        let stdin = io::stdin();
                        Repl::new(session, stdin.lock(), stdout.lock()).run()?;
                    }
                }
            }

            Commands::List { entries, sort } => {
                let mut session = session_from_drafts(entries)?;
                if let Some(key) = sort {
                    session.sort(key);
                }
                render_list(&mut io::stdout().lock(), session.ledger())?;
            }

            Commands::Total { entries } => {
                let session = session_from_drafts(entries)?;
                println!("{}", format_amount(session.total()));
            }
        }

        Ok(())
    }
}

/// Set up the global tracing subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "jetspend=debug"
    } else {
        "jetspend=error"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Print the entry list the way the list screen shows it:
/// header, one row per entry, and the total. Empty ledgers get a hint instead.
pub fn render_list<W: Write>(out: &mut W, ledger: &ExpenseLedger) -> Result<()> {
    if ledger.is_empty() {
        writeln!(out, "No entries yet.")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<4} {:<4} {:<20} {:>10} {:<15}",
        "#", "ID", "NAME", "AMOUNT", "CATEGORY"
    )?;
    writeln!(out, "{}", "-".repeat(57))?;
    for (row, expense) in ledger.iter().enumerate() {
        writeln!(
            out,
            "{:<4} {:<4} {:<20} {:>10} {:<15}",
            row + 1,
            expense.id,
            expense.name,
            format_amount(expense.amount),
            expense.category
        )?;
    }
    writeln!(out, "{}", "-".repeat(57))?;
    writeln!(out, "Total: {}", format_amount(ledger.sum()))?;
    Ok(())
}

fn logged_ledger() -> ExpenseLedger {
    let mut ledger = ExpenseLedger::new();
    ledger.subscribe(|event| match event {
        LedgerEvent::Added(expense) => debug!(id = expense.id, name = %expense.name, "expense added"),
        LedgerEvent::Removed(expense) => {
            debug!(id = expense.id, name = %expense.name, "expense removed")
        }
        LedgerEvent::Sorted(key) => debug!(%key, "ledger sorted"),
    });
    ledger
}

fn session_from_drafts(drafts: Vec<ExpenseDraft>) -> Result<ExpenseSession> {
    let mut session = ExpenseSession::with_ledger(logged_ledger());
    for draft in drafts {
        let label = draft.name.clone();
        session.set_draft(draft);
        session
            .submit()
            .with_context(|| format!("Invalid entry '{}'", label))?;
    }
    Ok(session)
}

/// Parse "name,amount,category". The category may itself contain commas.
fn parse_entry_arg(s: &str) -> Result<ExpenseDraft> {
    let mut parts = s.splitn(3, ',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(amount), Some(category)) => {
            Ok(ExpenseDraft::new(name, amount, category))
        }
        _ => bail!("Expected name,amount,category but got '{}'", s),
    }
}
