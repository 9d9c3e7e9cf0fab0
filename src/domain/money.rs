use std::fmt;

/// Parse a user-entered amount.
/// Accepts anything `f64` accepts ("50", "12.5", "-3", "1e3") but rejects
/// non-finite values.
pub fn parse_amount(input: &str) -> Result<f64, ParseAmountError> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| ParseAmountError::InvalidFormat)?;
    if !value.is_finite() {
        return Err(ParseAmountError::NotFinite);
    }
    Ok(value)
}

/// Lenient conversion used when reading stored amounts: anything that isn't a
/// finite number counts as zero.
pub fn coerce_amount(input: &str) -> f64 {
    parse_amount(input).unwrap_or(0.0)
}

/// Format with two decimals and a thousands separator.
/// Example: 1234.5 -> "1,234.50", -250.5 -> "-250.50"
pub fn format_amount(amount: f64) -> String {
    let formatted = format!("{:.2}", amount);
    let (sign, digits) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (units, decimals) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, ch) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{}", sign, grouped, decimals)
}

/// Currency form used in transaction tables.
/// Example: 1000.0 -> "$1,000.00", -5.0 -> "$-5.00"
pub fn format_currency(amount: f64) -> String {
    format!("${}", format_amount(amount))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    InvalidFormat,
    NotFinite,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::InvalidFormat => write!(f, "invalid amount format"),
            ParseAmountError::NotFinite => write!(f, "amount must be a finite number"),
        }
    }
}

impl std::error::Error for ParseAmountError {}
