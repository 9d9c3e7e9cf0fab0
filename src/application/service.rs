use std::path::Path;

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::domain::{
    Transaction, TransactionType, YearMonth, compute_balance, compute_totals,
    transactions_in_month,
};
use crate::storage::CsvStore;

use super::{BalanceReport, LedgerError, MonthlySummary};

/// The transaction ledger. Owns every recorded transaction and the file they
/// live in; every mutation is flushed to the file before returning.
/// This is the primary interface for any client (menu, subcommands, tests).
pub struct Ledger {
    store: CsvStore,
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Load the ledger from the given store.
    pub fn new(store: CsvStore) -> Result<Self, LedgerError> {
        let transactions = store.load()?;
        Ok(Self {
            store,
            transactions,
        })
    }

    /// Open the ledger file at `path`. A missing file gives an empty ledger;
    /// nothing is written until the first transaction is added.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        Self::new(CsvStore::new(path.as_ref()))
    }

    pub fn store(&self) -> &CsvStore {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    // ========================
    // Mutations
    // ========================

    /// Record a new transaction and rewrite the store.
    /// `date` defaults to today, blank `notes` to the placeholder. If the
    /// write fails the transaction is not kept in memory either.
    pub fn add_transaction(
        &mut self,
        kind: TransactionType,
        amount: f64,
        date: Option<NaiveDate>,
        notes: Option<&str>,
    ) -> Result<&Transaction, LedgerError> {
        if !amount.is_finite() {
            return Err(LedgerError::InvalidAmount(format!(
                "{} is not a finite number",
                amount
            )));
        }

        let date = date.unwrap_or_else(|| Local::now().date_naive());
        let transaction = Transaction::new(kind, amount, date).with_notes(notes.unwrap_or(""));

        self.transactions.push(transaction);
        if let Err(e) = self.store.save(&self.transactions) {
            self.transactions.pop();
            return Err(e.into());
        }

        let recorded = &self.transactions[self.transactions.len() - 1];
        info!(
            kind = %recorded.kind,
            amount = recorded.amount,
            date = %recorded.date,
            "recorded transaction"
        );
        Ok(recorded)
    }

    // ========================
    // Queries
    // ========================

    /// All transactions in insertion order, or `None` when nothing has been
    /// recorded yet.
    pub fn list_transactions(&self) -> Option<&[Transaction]> {
        if self.transactions.is_empty() {
            None
        } else {
            Some(&self.transactions)
        }
    }

    /// Signed balance: total income minus total expense.
    pub fn calculate_balance(&self) -> f64 {
        compute_balance(&self.transactions)
    }

    /// Balance together with the per-type totals it was computed from.
    pub fn balance_report(&self) -> BalanceReport {
        let totals = compute_totals(&self.transactions);
        BalanceReport {
            total_income: totals.income,
            total_expense: totals.expense,
            balance: totals.net(),
        }
    }

    /// Transactions dated in the given month, in insertion order, or `None`
    /// when the month has no records. Transactions with unreadable dates
    /// are ignored here but stay in the ledger. The month is not range
    /// checked; an out-of-range month simply has no records.
    pub fn monthly_summary(&self, month: i32, year: i32) -> Option<MonthlySummary> {
        let matching = transactions_in_month(&self.transactions, YearMonth::new(year, month));
        if matching.is_empty() {
            return None;
        }

        let totals = compute_totals(matching.iter().copied());
        Some(MonthlySummary {
            year,
            month,
            transactions: matching.into_iter().cloned().collect(),
            total_income: totals.income,
            total_expense: totals.expense,
            net: totals.net(),
        })
    }
}
