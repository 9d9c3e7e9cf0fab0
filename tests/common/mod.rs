// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use budget_manager::{Ledger, TransactionType};
use chrono::NaiveDate;
use tempfile::TempDir;

/// Helper to create a test ledger backed by a file in a temporary directory
pub fn test_ledger() -> Result<(Ledger, TempDir)> {
    let temp_dir = TempDir::new()?;
    let ledger = Ledger::open(temp_dir.path().join("storage.csv"))?;
    Ok((ledger, temp_dir))
}

/// Reopen the ledger file in `temp_dir`, as a fresh process would
pub fn reopen(temp_dir: &TempDir) -> Result<Ledger> {
    Ok(Ledger::open(temp_dir.path().join("storage.csv"))?)
}

/// Helper to parse a date string into NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Test fixture: the January scenario used across test files
pub struct SampleLedger;

impl SampleLedger {
    /// Income 1000.00 on 2025-01-15, Expense 250.50 on 2025-01-20
    pub fn record_january(ledger: &mut Ledger) -> Result<()> {
        ledger.add_transaction(
            TransactionType::Income,
            1000.0,
            Some(parse_date("2025-01-15")),
            Some("Salary"),
        )?;
        ledger.add_transaction(
            TransactionType::Expense,
            250.5,
            Some(parse_date("2025-01-20")),
            Some("Groceries"),
        )?;
        Ok(())
    }
}
