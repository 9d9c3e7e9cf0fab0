pub mod input;
pub mod menu;
pub mod render;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::application::{Ledger, LedgerError};
use crate::domain::{DATE_FORMAT, TransactionType, parse_amount};

pub use menu::Menu;

/// Budget Manager - terminal budget tracker
#[derive(Parser)]
#[command(name = "budget-manager")]
#[command(about = "Record income and expenses in a CSV ledger and query balances")]
#[command(version)]
pub struct Cli {
    /// Ledger file path
    #[arg(
        short,
        long,
        env = "BUDGET_MANAGER_FILE",
        default_value = "storage.csv"
    )]
    pub file: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive numbered menu (the default)
    Menu,

    /// Record a transaction
    Add {
        /// Transaction type: income or expense
        #[arg(value_name = "TYPE")]
        kind: String,

        /// Amount (e.g., "50.00" or "50")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Date of the transaction (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Free-text notes
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// List all transactions
    List {
        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Show the current balance
    Balance {
        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Show the transactions of one month
    Summary {
        /// Month number (1-12)
        #[arg(short, long)]
        month: i32,

        /// Year (e.g., 2025)
        #[arg(short, long)]
        year: i32,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut ledger = Ledger::open(&self.file)
            .with_context(|| format!("Failed to open ledger: {}", self.file.display()))?;

        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self.command.unwrap_or(Commands::Menu) {
            Commands::Menu => {
                let stdin = io::stdin();
                Menu::new(&mut ledger, stdin.lock(), &mut out).run()?;
            }

            Commands::Add {
                kind,
                amount,
                date,
                notes,
            } => {
                let kind: TransactionType = kind
                    .parse()
                    .map_err(|_| LedgerError::UnknownTransactionType(kind.clone()))?;
                let amount =
                    parse_amount(&amount).context("Invalid amount format. Use '50.00' or '50'")?;
                let date = date
                    .map(|s| {
                        NaiveDate::parse_from_str(&s, DATE_FORMAT)
                            .with_context(|| format!("Invalid date format '{}'. Use YYYY-MM-DD", s))
                    })
                    .transpose()?;

                let tx = ledger.add_transaction(kind, amount, date, notes.as_deref())?;
                writeln!(out, "{}", render::recorded_line(tx))?;
            }

            Commands::List { format } => match format.as_str() {
                "json" => {
                    let transactions = ledger.list_transactions().unwrap_or_default();
                    writeln!(out, "{}", serde_json::to_string_pretty(transactions)?)?;
                }
                _ => render::write_all_transactions(&mut out, ledger.list_transactions())?,
            },

            Commands::Balance { format } => match format.as_str() {
                "json" => {
                    let report = ledger.balance_report();
                    writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
                }
                _ => writeln!(out, "{}", render::balance_line(ledger.calculate_balance()))?,
            },

            Commands::Summary {
                month,
                year,
                format,
            } => {
                let summary = ledger.monthly_summary(month, year);
                match format.as_str() {
                    "json" => {
                        // `null` when the month has no records
                        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
                    }
                    _ => render::write_monthly_summary(&mut out, month, year, summary.as_ref())?,
                }
            }
        }

        Ok(())
    }
}
