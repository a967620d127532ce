//! Host platform traits
//!
//! These traits define the interface between the face logic and the
//! platform services it runs on.

pub mod bundle;
pub mod clock;
pub mod outbox;
pub mod window;

pub use bundle::{FixedClock, HostBundle, NoOutbox};
pub use clock::Clock;
pub use outbox::Outbox;
pub use window::{HostError, WindowHost};

/// Everything the face needs from its host
pub trait FaceHost: WindowHost + Clock + Outbox {}

// Blanket implementation
impl<T: WindowHost + Clock + Outbox> FaceHost for T {}
