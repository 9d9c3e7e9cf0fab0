mod common;

use std::fs;

use anyhow::Result;
use budget_manager::{CsvStore, Ledger, TransactionType};
use common::{SampleLedger, parse_date, reopen, test_ledger};
use tempfile::TempDir;

#[test]
fn test_reload_matches_in_memory_ledger() -> Result<()> {
    let (mut ledger, temp) = test_ledger()?;
    SampleLedger::record_january(&mut ledger)?;
    ledger.add_transaction(
        TransactionType::Expense,
        12.345,
        Some(parse_date("2025-02-03")),
        Some("Coffee, \"large\""),
    )?;

    let reloaded = reopen(&temp)?;
    assert_eq!(reloaded.list_transactions(), ledger.list_transactions());

    Ok(())
}

#[test]
fn test_every_add_rewrites_the_file() -> Result<()> {
    let (mut ledger, temp) = test_ledger()?;
    let path = temp.path().join("storage.csv");

    ledger.add_transaction(TransactionType::Income, 1.0, Some(parse_date("2025-01-01")), None)?;
    assert_eq!(fs::read_to_string(&path)?.lines().count(), 2);

    ledger.add_transaction(TransactionType::Income, 2.0, Some(parse_date("2025-01-02")), None)?;
    let content = fs::read_to_string(&path)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Amount,Type,Date,Notes");
    assert!(lines[2].starts_with("2,Income,2025-01-02,"));

    Ok(())
}

#[test]
fn test_reads_file_written_by_other_tools() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join("storage.csv");
    fs::write(
        &path,
        "Amount,Type,Date,Notes\n\
         1000.0,Income,2025-01-15,Salary\n\
         250.5,Expense,2025-01-20 00:00:00,—\n",
    )?;

    let ledger = Ledger::open(&path)?;

    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.calculate_balance(), 749.5);
    assert_eq!(ledger.monthly_summary(1, 2025).unwrap().transactions.len(), 2);

    Ok(())
}

#[test]
fn test_unreadable_values_only_affect_their_query() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join("storage.csv");
    fs::write(
        &path,
        "Amount,Type,Date,Notes\n\
         100,Income,2025-01-15,Ok\n\
         oops,Expense,2025-01-16,Bad amount\n\
         40,Expense,not-a-date,Bad date\n",
    )?;

    let mut ledger = Ledger::open(&path)?;

    // Bad amount counts as zero, bad date still counts toward the balance
    assert_eq!(ledger.calculate_balance(), 60.0);

    // Bad date is left out of the monthly view only
    let january = ledger.monthly_summary(1, 2025).unwrap();
    assert_eq!(january.transactions.len(), 2);
    assert_eq!(ledger.len(), 3);

    // ...and survives the next rewrite
    ledger.add_transaction(TransactionType::Income, 1.0, Some(parse_date("2025-02-01")), None)?;
    let content = fs::read_to_string(&path)?;
    assert!(content.contains("not-a-date"));

    Ok(())
}

#[test]
fn test_monthly_summary_does_not_touch_the_store() -> Result<()> {
    let (mut ledger, temp) = test_ledger()?;
    SampleLedger::record_january(&mut ledger)?;
    let path = temp.path().join("storage.csv");
    let before = fs::read(&path)?;

    let first = ledger.monthly_summary(1, 2025);
    let _ = ledger.monthly_summary(2, 2025);
    let second = ledger.monthly_summary(1, 2025);

    assert_eq!(first, second);
    assert_eq!(fs::read(&path)?, before);
    assert_eq!(ledger.len(), 2);

    Ok(())
}

#[test]
fn test_store_reports_open_failures() -> Result<()> {
    let temp = TempDir::new()?;
    // A directory can't be read as a ledger file
    let store = CsvStore::new(temp.path());

    assert!(store.load().is_err());
    assert!(Ledger::new(store).is_err());

    Ok(())
}

#[test]
fn test_short_rows_survive_the_next_add() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join("storage.csv");
    fs::write(&path, "Amount,Type,Date,Notes\n40,Expense,2025-01-10\n60,Income,2025-01-11,\n")?;

    let mut ledger = Ledger::open(&path)?;
    assert_eq!(ledger.len(), 2);
    ledger.add_transaction(TransactionType::Income, 5.0, Some(parse_date("2025-01-12")), None)?;

    let reloaded = Ledger::open(&path)?;
    assert_eq!(reloaded.len(), 3);
    assert_eq!(reloaded.calculate_balance(), 25.0);
    let txs = reloaded.list_transactions().unwrap();
    assert!(txs.iter().all(|tx| tx.notes == "—"));
    assert_eq!(fs::read_dir(temp.path())?.count(), 1);

    Ok(())
}
