use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stored in place of empty notes.
pub const NOTES_PLACEHOLDER: &str = "—";

/// Date format used when this program writes a transaction date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money coming in (salary, refunds, gifts)
    Income,
    /// Money going out
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = ParseTransactionTypeError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(ParseTransactionTypeError(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTransactionTypeError(pub String);

impl std::fmt::Display for ParseTransactionTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown transaction type '{}' (expected income or expense)",
            self.0
        )
    }
}

impl std::error::Error for ParseTransactionTypeError {}

/// A single recorded income or expense. Transactions are never edited once
/// recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Amount as entered; the sign is not constrained, `kind` decides direction
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Calendar date as text. Kept verbatim from the store so rows with
    /// unreadable dates survive a rewrite.
    pub date: String,
    pub notes: String,
}

impl Transaction {
    pub fn new(kind: TransactionType, amount: f64, date: NaiveDate) -> Self {
        Self {
            amount,
            kind,
            date: date.format(DATE_FORMAT).to_string(),
            notes: NOTES_PLACEHOLDER.to_string(),
        }
    }

    /// Blank notes fall back to the placeholder.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = if notes.trim().is_empty() {
            NOTES_PLACEHOLDER.to_string()
        } else {
            notes
        };
        self
    }

    /// First ten characters of the stored date, the significant part for display.
    pub fn display_date(&self) -> &str {
        match self.date.char_indices().nth(10) {
            Some((idx, _)) => &self.date[..idx],
            None => &self.date,
        }
    }

    /// Parse the calendar date, or `None` if the stored text isn't a date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.display_date().trim(), DATE_FORMAT).ok()
    }
}
