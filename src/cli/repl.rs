use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info};

use crate::application::{ExpenseDraft, ExpenseSession};
use crate::domain::{SortKey, format_amount};
use crate::io::{ExportFormat, Exporter};

use super::render_list;

const HELP: &str = "\
Commands:
  add                          Record a new expense (empty name cancels)
  list                         Show all entries and the total
  sort <name|amount|category|id>
                               Reorder the list
  remove <row>                 Remove the entry shown at <row>
  total                        Show the total of all entries
  export <csv|json> [FILE]     Write entries to FILE (or here)
  help                         Show this help
  quit                         End the session";

/// One line of input in an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Add,
    List,
    Sort(SortKey),
    Remove(usize),
    Total,
    Export {
        format: ExportFormat,
        path: Option<String>,
    },
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default().to_lowercase();
        let rest: Vec<&str> = words.collect();

        let parsed = match (command.as_str(), rest.as_slice()) {
            ("add", []) => SessionCommand::Add,
            ("list" | "ls", []) => SessionCommand::List,
            ("sort", [key]) => SessionCommand::Sort(key.parse()?),
            ("sort", _) => bail!("Usage: sort <name|amount|category|id>"),
            ("remove" | "rm", [row]) => SessionCommand::Remove(
                row.parse()
                    .with_context(|| format!("Invalid row '{}'. Use the # column", row))?,
            ),
            ("remove" | "rm", _) => bail!("Usage: remove <row>"),
            ("total", []) => SessionCommand::Total,
            ("export", [format, path @ ..]) => SessionCommand::Export {
                format: format.parse()?,
                path: (!path.is_empty()).then(|| path.join(" ")),
            },
            ("export", []) => bail!("Usage: export <csv|json> [FILE]"),
            ("help" | "?", _) => SessionCommand::Help,
            ("quit" | "exit" | "q", _) => SessionCommand::Quit,
            (other, _) => bail!(
                "Unknown command '{}'. Type 'help' for a list of commands",
                other
            ),
        };

        Ok(parsed)
    }
}

/// Line-oriented front-end over an [`ExpenseSession`].
///
/// Generic over input and output so it runs the same against a terminal,
/// a script file, or an in-memory buffer.
pub struct Repl<R, W> {
    session: ExpenseSession,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(session: ExpenseSession, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    pub fn session(&self) -> &ExpenseSession {
        &self.session
    }

    pub fn into_session(self) -> ExpenseSession {
        self.session
    }

    /// Process commands until `quit` or end of input.
    /// Command errors are reported and the session goes on; only I/O
    /// failures on the input or output end it.
    pub fn run(&mut self) -> Result<()> {
        info!("session started");
        writeln!(self.output, "Jetspend. Type 'help' for commands.")?;

        while let Some(line) = self.prompt("> ")? {
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<SessionCommand>() {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.output, "Error: {:#}", e)?;
                    continue;
                }
            };
            debug!(?command, "session command");

            match command {
                SessionCommand::Quit => break,
                SessionCommand::Add => {
                    if !self.run_add_form()? {
                        break;
                    }
                }
                command => {
                    if let Err(e) = self.execute(command) {
                        writeln!(self.output, "Error: {:#}", e)?;
                    }
                }
            }
        }

        info!(entries = self.session.entries().len(), "session ended");
        Ok(())
    }

    fn execute(&mut self, command: SessionCommand) -> Result<()> {
        match command {
            SessionCommand::List => {
                render_list(&mut self.output, self.session.ledger())?;
            }

            SessionCommand::Sort(key) => {
                self.session.sort(key);
                render_list(&mut self.output, self.session.ledger())?;
            }

            SessionCommand::Remove(row) => {
                let removed = self.session.remove_row(row)?;
                writeln!(
                    self.output,
                    "Removed: {} ({}, {})",
                    removed.name,
                    format_amount(removed.amount),
                    removed.category
                )?;
            }

            SessionCommand::Total => {
                writeln!(self.output, "Total: {}", format_amount(self.session.total()))?;
            }

            SessionCommand::Export { format, path } => {
                let exporter = Exporter::new(self.session.ledger());
                match path {
                    Some(path) => {
                        let file = File::create(&path)
                            .with_context(|| format!("Failed to create output file: {}", path))?;
                        let count = exporter.export(format, file)?;
                        writeln!(
                            self.output,
                            "Exported {} entries to {} ({})",
                            count,
                            path,
                            format.as_str()
                        )?;
                    }
                    None => {
                        exporter.export(format, &mut self.output)?;
                    }
                }
            }

            SessionCommand::Help => {
                writeln!(self.output, "{}", HELP)?;
            }

            other @ (SessionCommand::Add | SessionCommand::Quit) => {
                bail!("'{:?}' is handled by the session loop", other);
            }
        }

        Ok(())
    }

    /// Walk the user through the entry form. Returns false when input ran out.
    fn run_add_form(&mut self) -> Result<bool> {
        self.session.open_form();

        loop {
            let Some(name) = self.prompt("Name: ")? else {
                self.session.cancel_form();
                return Ok(false);
            };
            if name.trim().is_empty() {
                self.session.cancel_form();
                writeln!(self.output, "Cancelled.")?;
                return Ok(true);
            }

            let Some(amount) = self.prompt("Amount: ")? else {
                self.session.cancel_form();
                return Ok(false);
            };
            let Some(category) = self.prompt("Category: ")? else {
                self.session.cancel_form();
                return Ok(false);
            };

            self.session.set_draft(ExpenseDraft::new(name, amount, category));

            match self.session.submit() {
                Ok(expense) => {
                    writeln!(
                        self.output,
                        "Added: {} ({}, {})",
                        expense.name,
                        format_amount(expense.amount),
                        expense.category
                    )?;
                    return Ok(true);
                }
                Err(e) => {
                    writeln!(self.output, "Error: {}", e)?;
                }
            }
        }
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
