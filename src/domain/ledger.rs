use std::collections::BTreeMap;

use chrono::Datelike;

use super::{Transaction, TransactionType};

/// Per-type sums over a set of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
}

impl Totals {
    /// Balance = income - expense
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }
}

/// Calendar year-month used to bucket transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: i32,
}

impl YearMonth {
    pub fn new(year: i32, month: i32) -> Self {
        Self { year, month }
    }
}

impl std::fmt::Display for YearMonth {
    /// Rendered as MM-YYYY.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{}", self.month, self.year)
    }
}

/// Sum amounts per transaction type. A type with no transactions sums to zero.
pub fn compute_totals<'a, I>(transactions: I) -> Totals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .fold(Totals::default(), |mut totals, tx| {
            match tx.kind {
                TransactionType::Income => totals.income += tx.amount,
                TransactionType::Expense => totals.expense += tx.amount,
            }
            totals
        })
}

/// Compute the signed balance of a list of transactions.
pub fn compute_balance(transactions: &[Transaction]) -> f64 {
    compute_totals(transactions).net()
}

/// Group transactions by the year-month of their date, keeping insertion
/// order inside each bucket. Transactions whose date doesn't parse are left
/// out. Computed fresh on every call.
pub fn group_by_month(transactions: &[Transaction]) -> BTreeMap<YearMonth, Vec<&Transaction>> {
    let mut buckets: BTreeMap<YearMonth, Vec<&Transaction>> = BTreeMap::new();

    for tx in transactions {
        if let Some(date) = tx.parsed_date() {
            let key = YearMonth::new(date.year(), date.month() as i32);
            buckets.entry(key).or_default().push(tx);
        }
    }

    buckets
}

/// Transactions falling in the given year-month, in insertion order.
pub fn transactions_in_month(transactions: &[Transaction], key: YearMonth) -> Vec<&Transaction> {
    group_by_month(transactions)
        .remove(&key)
        .unwrap_or_default()
}
