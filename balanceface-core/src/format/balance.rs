//! Balance readout formatting
//!
//! Each value gets its own buffer wide enough for any `i32`, so the joined
//! line always fits the balance region.

use core::fmt::Write;

use heapless::String;

use super::FormatError;

/// Characters in the widest `i32` (`-2147483648`)
pub const VALUE_TEXT_LEN: usize = 11;

/// Visible characters the balance region holds
pub const BALANCE_TEXT_LEN: usize = 31;

/// Separator between balance and spent-today
pub const SEPARATOR: &str = ", ";

/// One formatted amount
pub type ValueText = String<VALUE_TEXT_LEN>;

/// Formatted balance line, e.g. `"120, 15"`
pub type BalanceText = String<BALANCE_TEXT_LEN>;

const _: () = assert!(2 * VALUE_TEXT_LEN + SEPARATOR.len() <= BALANCE_TEXT_LEN);

/// Format one amount in whole currency units
pub fn format_value(value: i32) -> Result<ValueText, FormatError> {
    let mut text = ValueText::new();
    write!(text, "{}", value).map_err(|_| FormatError::Overflow)?;
    Ok(text)
}

/// Format the balance line as `"<balance>, <spent_today>"`
pub fn format_balance(balance: i32, spent_today: i32) -> Result<BalanceText, FormatError> {
    let balance = format_value(balance)?;
    let spent = format_value(spent_today)?;

    let mut text = BalanceText::new();
    text.push_str(&balance)
        .and_then(|_| text.push_str(SEPARATOR))
        .and_then(|_| text.push_str(&spent))
        .map_err(|_| FormatError::Overflow)?;
    Ok(text)
}
