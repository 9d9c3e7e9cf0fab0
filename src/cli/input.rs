//! Validation for interactive input. Every function here is pure: it turns
//! one line of user text into a value or an [`InputError`] whose message is
//! shown before re-prompting.

use thiserror::Error;

use crate::domain::{TransactionType, parse_amount as parse_money};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input. Please enter a number.")]
    NotANumber,

    #[error("Invalid input. Please enter a valid amount(only numbers).")]
    InvalidAmount,

    #[error("Invalid input! Please enter 'income' or 'expense'.")]
    InvalidTransactionType,
}

/// Whole number, surrounding whitespace ignored. No range check.
pub fn parse_int(input: &str) -> Result<i32, InputError> {
    input.trim().parse().map_err(|_| InputError::NotANumber)
}

/// Finite decimal amount of any sign.
pub fn parse_amount(input: &str) -> Result<f64, InputError> {
    parse_money(input).map_err(|_| InputError::InvalidAmount)
}

/// `income` or `expense`, any letter case.
pub fn parse_transaction_type(input: &str) -> Result<TransactionType, InputError> {
    input
        .parse()
        .map_err(|_| InputError::InvalidTransactionType)
}

/// Title-case free-text notes. Blank input gives `None` so the ledger
/// stores its placeholder.
pub fn normalize_notes(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        None
    } else {
        Some(title_case(input))
    }
}

/// Uppercase the first letter of every run of letters, lowercase the rest.
/// Any non-letter starts a new word, so "o'neil" becomes "O'Neil".
pub fn title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut in_word = false;

    for ch in input.chars() {
        if ch.is_alphabetic() {
            if in_word {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(ch);
            in_word = false;
        }
    }

    result
}
