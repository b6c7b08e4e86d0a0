use std::fmt;

/// Parse amount text as typed by the user into a number.
/// Example: "4.5" -> 4.5, " 12 " -> 12.0, "abc" -> error
pub fn parse_amount(input: &str) -> Result<f64, ParseAmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let amount: f64 = input
        .parse()
        .map_err(|_| ParseAmountError::InvalidFormat)?;

    // "inf" and "NaN" parse fine but are not amounts anyone spent
    if !amount.is_finite() {
        return Err(ParseAmountError::InvalidFormat);
    }

    Ok(amount)
}

/// Format an amount for display. No currency symbol, no grouping.
/// Example: 4.5 -> "4.5", 2.0 -> "2", 6.25 -> "6.25"
pub fn format_amount(amount: f64) -> String {
    format!("{}", amount)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    Empty,
    InvalidFormat,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::Empty => write!(f, "amount is empty"),
            ParseAmountError::InvalidFormat => write!(f, "invalid amount format"),
        }
    }
}

impl std::error::Error for ParseAmountError {}
