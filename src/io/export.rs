use anyhow::{Result, bail};
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;

use crate::domain::{Expense, ExpenseLedger, format_amount};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => bail!("Unknown export format '{}'. Use csv or json", other),
        }
    }
}

/// Point-in-time dump of the session, as written by JSON export
#[derive(Debug, Serialize)]
pub struct LedgerSnapshot<'a> {
    pub entries: &'a [Expense],
    pub total: f64,
}

/// Exporter for writing the current ledger contents out
pub struct Exporter<'a> {
    ledger: &'a ExpenseLedger,
}

impl<'a> Exporter<'a> {
    pub fn new(ledger: &'a ExpenseLedger) -> Self {
        Self { ledger }
    }

    pub fn export<W: Write>(&self, format: ExportFormat, writer: W) -> Result<usize> {
        match format {
            ExportFormat::Csv => self.export_csv(writer),
            ExportFormat::Json => self.export_json(writer),
        }
    }

    /// Export entries to CSV format, in the current list order
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        // Write header
        csv_writer.write_record(["id", "name", "amount", "category"])?;

        let mut count = 0;
        for expense in self.ledger {
            csv_writer.write_record([
                expense.id.to_string(),
                expense.name.clone(),
                format_amount(expense.amount),
                expense.category.clone(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export entries plus their total as pretty-printed JSON
    pub fn export_json<W: Write>(&self, mut writer: W) -> Result<usize> {
        let snapshot = LedgerSnapshot {
            entries: self.ledger.entries(),
            total: self.ledger.sum(),
        };

        serde_json::to_writer_pretty(&mut writer, &snapshot)?;
        writeln!(writer)?;
        Ok(snapshot.entries.len())
    }
}
