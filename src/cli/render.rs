use std::io::{self, Write};

use crate::application::MonthlySummary;
use crate::domain::{Transaction, format_amount, format_currency};

pub const TABLE_HEADERS: [&str; 4] = ["Date", "Type", "Amount", "Notes"];
pub const COLUMN_WIDTHS: [usize; 4] = [12, 10, 15, 15];
const COLUMN_SEPARATOR: &str = " | ";

/// Center `text` in `width` characters using `fill`. When the padding can't
/// be split evenly the extra fill goes left if `width` is odd, right
/// otherwise. Text wider than `width` is returned unchanged.
pub fn center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if width <= len {
        return text.to_string();
    }

    let pad = width - len;
    let left = pad / 2 + (pad & width & 1);
    let right = pad - left;

    let mut result = String::with_capacity(text.len() + pad * fill.len_utf8());
    result.extend(std::iter::repeat_n(fill, left));
    result.push_str(text);
    result.extend(std::iter::repeat_n(fill, right));
    result
}

fn join_cells<'a>(cells: impl IntoIterator<Item = &'a str>) -> String {
    cells
        .into_iter()
        .zip(COLUMN_WIDTHS)
        .map(|(cell, width)| center(cell, width, ' '))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
}

pub fn header_row() -> String {
    join_cells(TABLE_HEADERS)
}

pub fn transaction_row(tx: &Transaction) -> String {
    let amount = format_currency(tx.amount);
    join_cells([tx.display_date(), tx.kind.as_str(), &amount, &tx.notes])
}

/// Header, dash rule, then one line per transaction.
pub fn write_transaction_table<W: Write>(out: &mut W, transactions: &[Transaction]) -> io::Result<()> {
    let header = header_row();
    writeln!(out, "{}", header)?;
    writeln!(out, "{}", "-".repeat(header.chars().count()))?;
    for tx in transactions {
        writeln!(out, "{}", transaction_row(tx))?;
    }
    Ok(())
}

pub fn write_all_transactions<W: Write>(
    out: &mut W,
    transactions: Option<&[Transaction]>,
) -> io::Result<()> {
    writeln!(out, "{}", center(" All Transactions ", 60, '='))?;
    match transactions {
        Some(transactions) => write_transaction_table(out, transactions),
        None => writeln!(out, "No transactions recorded yet."),
    }
}

pub fn balance_line(balance: f64) -> String {
    format!("Your Current Balance is: {}", format_amount(balance))
}

pub fn recorded_line(tx: &Transaction) -> String {
    format!(
        "{} of {:.2} recorded successfully on {}.",
        tx.kind, tx.amount, tx.date
    )
}

pub fn summary_header(month: i32, year: i32) -> String {
    center(&format!("Summary for {:02}-{}", month, year), 50, '=')
}

pub fn write_monthly_summary<W: Write>(
    out: &mut W,
    month: i32,
    year: i32,
    summary: Option<&MonthlySummary>,
) -> io::Result<()> {
    writeln!(out, "{}", summary_header(month, year))?;
    let Some(summary) = summary else {
        return writeln!(out, "No records found for that month.");
    };

    write_transaction_table(out, &summary.transactions)?;
    writeln!(out)?;
    writeln!(out, "Total Income:   {:>15}", format_amount(summary.total_income))?;
    writeln!(out, "Total Expense:  {:>15}", format_amount(summary.total_expense))?;
    writeln!(out, "{}", "-".repeat(32))?;
    writeln!(out, "Net:            {:>15}", format_amount(summary.net))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::TransactionType;

    fn make_tx(kind: TransactionType, amount: f64, date: &str, notes: &str) -> Transaction {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        Transaction::new(kind, amount, date).with_notes(notes)
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_center_matches_classic_padding_rule() {
        assert_eq!(center("Date", 12, ' '), "    Date    ");
        assert_eq!(center("Amount", 15, ' '), "     Amount    ");
        assert_eq!(center("Notes", 15, ' '), "     Notes     ");
        assert_eq!(center("ab", 5, '*'), "**ab*");
        assert_eq!(center("abc", 6, '*'), "*abc**");
        assert_eq!(center("too long", 3, ' '), "too long");
        assert_eq!(center("—", 3, ' '), " — ");
    }

    #[test]
    fn test_header_row() {
        let header = header_row();
        assert_eq!(
            header,
            format!(
                "{} | {} | {} | {}",
                "    Date    ", "   Type   ", "     Amount    ", "     Notes     "
            )
        );
        assert_eq!(header.chars().count(), 12 + 10 + 15 + 15 + 3 * 3);
    }

    #[test]
    fn test_transaction_row() {
        let tx = make_tx(TransactionType::Income, 1000.0, "2025-01-15", "Salary");
        assert_eq!(
            transaction_row(&tx),
            format!(
                "{} | {} | {} | {}",
                " 2025-01-15 ", "  Income  ", "   $1,000.00   ", "     Salary    "
            )
        );
    }

    #[test]
    fn test_all_transactions_empty() {
        let output = render(|out| write_all_transactions(out, None));
        let banner = format!("{} All Transactions {}", "=".repeat(21), "=".repeat(21));
        assert!(output.starts_with(&banner));
        assert!(output.contains("No transactions recorded yet."));
        assert!(!output.contains("Date"));
    }

    #[test]
    fn test_all_transactions_table() {
        let txs = vec![
            make_tx(TransactionType::Income, 1000.0, "2025-01-15", ""),
            make_tx(TransactionType::Expense, 250.5, "2025-01-20", "Groceries"),
        ];
        let output = render(|out| write_all_transactions(out, Some(txs.as_slice())));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], header_row());
        assert_eq!(lines[2], "-".repeat(61));
        assert!(lines[3].contains("$1,000.00"));
        assert!(lines[4].contains("$250.50"));
        assert!(lines[4].contains("Groceries"));
    }

    #[test]
    fn test_balance_and_recorded_lines() {
        assert_eq!(balance_line(749.5), "Your Current Balance is: 749.50");
        assert_eq!(balance_line(-1234.0), "Your Current Balance is: -1,234.00");

        let tx = make_tx(TransactionType::Expense, 50.0, "2025-01-20", "");
        assert_eq!(
            recorded_line(&tx),
            "Expense of 50.00 recorded successfully on 2025-01-20."
        );
    }

    #[test]
    fn test_monthly_summary_without_records() {
        let output = render(|out| write_monthly_summary(out, 2, 2025, None));

        let banner = format!("{}Summary for 02-2025{}", "=".repeat(15), "=".repeat(16));
        assert!(output.starts_with(&banner));
        assert!(output.contains("No records found for that month."));
    }
}
