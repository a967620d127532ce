//! Wall clock trait

use crate::format::WallTime;

/// Trait for the platform's local clock
pub trait Clock {
    /// Current local time
    fn now(&self) -> WallTime;

    /// Whether the user selected 24-hour time in the system settings
    fn is_24h_style(&self) -> bool;
}
