//! embedded-graphics window host for the balance watchface
//!
//! This crate provides:
//! - `GraphicsHost`, a `WindowHost` that renders text layers onto any
//!   monochrome `DrawTarget` (OLED, memory LCD, e-paper)
//! - Font resource mapping to built-in monospace fonts
//! - `DisplayError` for backend failures
//!
//! # Architecture
//!
//! The face never draws pixels itself. It asks the host for two text layers
//! and pushes strings to them; this crate keeps each layer's text and
//! repaints its frame whenever the text changes. Combine it with a clock and
//! an outbox through `HostBundle` to get a complete `FaceHost`.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod fonts;
pub mod host;
pub mod layer;

#[cfg(test)]
mod testing;

// Re-export key types
pub use backend::DisplayError;
pub use host::{FontHandle, GraphicsHost, LayerHandle};
pub use layer::TextLayer;
