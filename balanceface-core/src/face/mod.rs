//! The watchface controller and the resources it owns

pub mod controller;
pub mod resources;
pub mod stats;

pub use controller::{FaceError, MessageOutcome, StartError, TickOutcome, WatchFace};
pub use resources::{FaceResources, Region};
pub use stats::MessageStats;
