use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use anyhow::Result;
use tracing::debug;

use crate::application::Ledger;

use super::input::{InputError, normalize_notes, parse_amount, parse_int, parse_transaction_type};
use super::render;

/// Numbered menu loop over a ledger. Reads answers from `input` and writes
/// everything it shows to `output`, so it can run on stdin/stdout or on
/// in-memory buffers.
///
/// Invalid answers are re-prompted without limit. End of input ends the
/// session the same way choosing Exit does.
pub struct Menu<'a, R, W> {
    ledger: &'a mut Ledger,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(ledger: &'a mut Ledger, input: R, output: W) -> Self {
        Self {
            ledger,
            input,
            output,
        }
    }

    /// Run until the user exits or input runs out. Storage failures end the
    /// session with an error.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let Some(choice) = self.prompt_until("Choose an option (1-5): ", parse_int)? else {
                break;
            };
            debug!(choice, "menu selection");

            let flow = match choice {
                1 => self.add_transaction()?,
                2 => self.show_transactions()?,
                3 => self.show_balance()?,
                4 => self.monthly_summary()?,
                5 => ControlFlow::Break(()),
                _ => {
                    writeln!(self.output, "Invalid choice. Please select a valid option.")?;
                    ControlFlow::Continue(())
                }
            };

            if flow.is_break() {
                break;
            }
        }

        writeln!(self.output, "Exiting Budget Manager. Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", render::center(" Budget Manager ", 48, ' '))?;
        writeln!(self.output, "1. Add Transaction")?;
        writeln!(self.output, "2. Show All Transactions")?;
        writeln!(self.output, "3. Calculate Balance")?;
        writeln!(self.output, "4. Monthly Summary")?;
        writeln!(self.output, "5. Exit")?;
        Ok(())
    }

    /// Print `prompt` and read one line; `None` once input is exhausted.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt until `parse` accepts the answer, showing its error each time.
    fn prompt_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn add_transaction(&mut self) -> Result<ControlFlow<()>> {
        let Some(kind) = self.prompt_until(
            "Enter transaction type (income/expense): ",
            parse_transaction_type,
        )?
        else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(amount) = self.prompt_until("Enter amount: ", parse_amount)? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(notes) = self.prompt("Enter notes (Optional): ")? else {
            return Ok(ControlFlow::Break(()));
        };

        let notes = normalize_notes(&notes);
        let tx = self
            .ledger
            .add_transaction(kind, amount, None, notes.as_deref())?;
        writeln!(self.output, "{}", render::recorded_line(tx))?;
        Ok(ControlFlow::Continue(()))
    }

    fn show_transactions(&mut self) -> Result<ControlFlow<()>> {
        render::write_all_transactions(&mut self.output, self.ledger.list_transactions())?;
        Ok(ControlFlow::Continue(()))
    }

    fn show_balance(&mut self) -> Result<ControlFlow<()>> {
        let balance = self.ledger.calculate_balance();
        writeln!(self.output, "{}", render::balance_line(balance))?;
        Ok(ControlFlow::Continue(()))
    }

    fn monthly_summary(&mut self) -> Result<ControlFlow<()>> {
        let Some(month) = self.prompt_until("Enter month (1-12): ", parse_int)? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(year) = self.prompt_until("Enter year (e.g., 2025): ", parse_int)? else {
            return Ok(ControlFlow::Break(()));
        };

        let summary = self.ledger.monthly_summary(month, year);
        render::write_monthly_summary(&mut self.output, month, year, summary.as_ref())?;
        Ok(ControlFlow::Continue(()))
    }
}
