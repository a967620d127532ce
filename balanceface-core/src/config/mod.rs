//! Configuration types
//!
//! Board-agnostic face configuration and the layout derived from it.

pub mod layout;
pub mod types;

pub use layout::*;
pub use types::*;
