//! Board-agnostic core logic for the balance watchface
//!
//! This crate contains all face logic that does not depend on a specific
//! host platform:
//!
//! - Host platform traits (window, clock, outbox)
//! - The `WatchFace` controller and the display resources it owns
//! - Time and balance formatting into bounded buffers
//! - Configuration and screen layout

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod face;
pub mod format;
pub mod traits;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::FaceConfig;
pub use face::{FaceError, MessageOutcome, StartError, TickOutcome, WatchFace};
pub use format::WallTime;
pub use traits::FaceHost;
