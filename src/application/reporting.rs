use serde::{Deserialize, Serialize};

use crate::domain::Transaction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

/// Transactions recorded in one calendar month, with their totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: i32,
    pub transactions: Vec<Transaction>,
    pub total_income: f64,
    pub total_expense: f64,
    pub net: f64,
}

