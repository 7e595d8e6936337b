use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Error returned when user-entered text is not a usable amount.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("amount '{0}' cannot be represented")]
    OutOfRange(String),
}

/// Normalizes input for parsing: trims whitespace and removes commas (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses user-entered text into an amount.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`). Empty or
/// whitespace-only input is an error rather than zero, so callers can keep
/// the previous value.
pub fn parse_amount(s: &str) -> Result<f64, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let decimal: Decimal = normalized.parse().map_err(|e| {
        tracing::debug!(input = %s, "invalid amount: {}", e);
        ParseAmountError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })?;

    decimal
        .to_f64()
        .ok_or_else(|| ParseAmountError::OutOfRange(s.to_string()))
}

/// Rounds an amount to cents, half away from zero.
///
/// Returns `None` for values a [`Decimal`] cannot hold (NaN, infinities,
/// magnitudes beyond ~7.9e28).
pub fn round_amount(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Formats an amount with `,` thousands separators and at most two
/// decimals; trailing zero decimals are dropped.
///
/// Non-finite values print as `NaN`, `inf` or `-inf`.
pub fn format_amount(value: f64) -> String {
    let Some(rounded) = round_amount(value) else {
        return format!("{value}");
    };

    let text = rounded.normalize().to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };

    let mut out = String::with_capacity(text.len() + int_part.len() / 3);
    out.push_str(sign);
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Formats an amount as dollars, e.g. `$1,234.5` or `$-20,000`.
pub fn format_currency(value: f64) -> String {
    format!("${}", format_amount(value))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
