//! Balance watchface event loop
//!
//! Wires host callbacks to [`WatchFace`](balanceface_core::WatchFace):
//! - minute ticks arrive through a signal
//! - app-message callbacks arrive through a channel
//! - a shutdown signal stops the face and hands the host back
//!
//! Platform adapters start [`tasks::tick_task`] next to
//! [`controller::run_watchface`] and post their callbacks with
//! [`channels::post_app_message`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// Logging shim; must come first so the macros are visible below
#[macro_use]
mod fmt;

pub mod channels;
pub mod controller;
pub mod tasks;

pub use channels::{post_app_message, APP_MESSAGE_CHANNEL, SHUTDOWN, TICK_SIGNAL};
pub use controller::{run, run_watchface};
