//! Work feeding the controller
//!
//! `tick` is an async task that signals the controller once per minute;
//! `inbox` is the synchronous dispatch the controller runs per app-message
//! event.

pub mod inbox;
pub mod tick;

pub use inbox::handle_app_message;
pub use tick::{tick_task, until_next_minute, MinuteGate};
