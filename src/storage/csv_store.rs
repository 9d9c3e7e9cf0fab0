use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::domain::{Transaction, TransactionType, coerce_amount, parse_amount};

/// Column names of the backing file, in order.
pub const HEADERS: [&str; 4] = ["Amount", "Type", "Date", "Notes"];

/// One row of the backing file, as written.
#[derive(Debug, Serialize)]
struct TransactionRow {
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Notes")]
    notes: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(tx: &Transaction) -> Self {
        Self {
            amount: tx.amount.to_string(),
            kind: tx.kind.as_str().to_string(),
            date: tx.date.clone(),
            notes: tx.notes.clone(),
        }
    }
}

/// Flat CSV file holding the whole ledger.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read every stored transaction in file order.
    /// A missing file is an empty ledger. Rows with an unknown type or that
    /// can't be decoded are skipped; unreadable amounts count as zero.
    pub fn load(&self) -> Result<Vec<Transaction>> {
        if !self.exists() {
            debug!(path = %self.path.display(), "no ledger file yet, starting empty");
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .with_context(|| format!("Failed to open ledger file: {}", self.path.display()))?;

        let mut transactions = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let line = idx + 2; // header + 1-based

            let record = match result {
                Ok(record) => record,
                Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => {
                    return Err(e).with_context(|| {
                        format!("Failed to read ledger file: {}", self.path.display())
                    });
                }
                Err(e) => {
                    warn!(line, error = %e, "skipping unreadable ledger row");
                    continue;
                }
            };

            // Columns by position; trailing cells may be missing
            let amount_str = record.get(0).unwrap_or("");
            let kind_str = record.get(1).unwrap_or("");
            let date = record.get(2).unwrap_or("");
            let notes = record.get(3).unwrap_or("");

            let kind: TransactionType = match kind_str.parse() {
                Ok(kind) => kind,
                Err(e) => {
                    warn!(line, error = %e, "skipping ledger row");
                    continue;
                }
            };

            if parse_amount(amount_str).is_err() {
                warn!(line, amount = %amount_str, "amount is not a number, counting it as zero");
            }

            transactions.push(
                Transaction {
                    amount: coerce_amount(amount_str),
                    kind,
                    date: date.to_string(),
                    notes: String::new(),
                }
                .with_notes(notes),
            );
        }

        debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "loaded ledger"
        );
        Ok(transactions)
    }

    /// Rewrite the whole file. The new content is staged in a temporary file
    /// in the same directory and renamed over the target, so a failed write
    /// leaves the old file in place and no staging file behind.
    pub fn save(&self, transactions: &[Transaction]) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;

        let mut staged = NamedTempFile::new_in(parent)
            .with_context(|| format!("Failed to create file in: {}", parent.display()))?;
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(staged.as_file_mut());

            writer
                .write_record(HEADERS)
                .context("Failed to write ledger header")?;
            for tx in transactions {
                writer
                    .serialize(TransactionRow::from(tx))
                    .context("Failed to write transaction")?;
            }
            writer.flush().context("Failed to flush ledger file")?;
        }

        // On failure the staged file is dropped, which deletes it
        staged
            .persist(&self.path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to replace ledger file: {}", self.path.display()))?;

        debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "saved ledger"
        );
        Ok(())
    }
}
