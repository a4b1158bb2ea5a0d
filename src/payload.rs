//! Presence checks and amount parsing shared by the transaction and budget payloads.

use serde::Deserialize;

use crate::Error;

/// An amount as sent by a client, either a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    /// A JSON number, e.g. `12.5`.
    Number(f64),
    /// A string holding a number, e.g. `"12.50"`.
    Text(String),
}

/// Returns the amount if it counts as present.
///
/// Zero and the empty string count as absent, the same as a missing field.
pub fn present_amount(amount: Option<AmountInput>) -> Option<AmountInput> {
    amount.filter(|amount| match amount {
        AmountInput::Number(number) => *number != 0.0,
        AmountInput::Text(text) => !text.is_empty(),
    })
}

/// Returns the text if it is present and not empty.
pub fn present_text(text: Option<String>) -> Option<String> {
    text.filter(|text| !text.is_empty())
}

/// Convert an amount to a number.
///
/// Strings are trimmed before parsing, so `" 12.50 "` becomes `12.5`.
///
/// # Errors
/// Returns [Error::InvalidAmount] if the string is not a finite number.
pub fn parse_amount(amount: AmountInput) -> Result<f64, Error> {
    match amount {
        AmountInput::Number(number) => Ok(number),
        AmountInput::Text(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|number| number.is_finite())
            .ok_or(Error::InvalidAmount(text)),
    }
}
