//! Outbound message trait

use balanceface_protocol::{AppMessageResult, Dictionary};

/// Trait for sending messages to the companion app
///
/// A successful return only means the host accepted the message; delivery
/// is reported later as an outbox sent/failed event.
pub trait Outbox {
    /// Queue a message for the companion
    fn send(&mut self, message: &Dictionary) -> Result<(), AppMessageResult>;
}
