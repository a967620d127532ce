//! Text formatting for the two display regions
//!
//! All output goes into fixed-capacity `heapless::String`s sized so that no
//! input can overflow them.

pub mod balance;
pub mod time;

pub use balance::{format_balance, format_value, BalanceText, ValueText, BALANCE_TEXT_LEN};
pub use time::{format_time, TimeText, WallTime, TIME_TEXT_LEN};

/// Formatting errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError {
    /// Output did not fit its buffer
    Overflow,
}
