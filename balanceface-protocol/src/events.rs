//! App-message events delivered by the host
//!
//! The host reports four kinds of callback; each becomes one variant so a
//! single queue can carry them in dispatch order.

use crate::dictionary::Dictionary;
use crate::messages::MessageKey;
use crate::result::AppMessageResult;

/// A messaging callback from the host
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppMessageEvent {
    /// A complete inbound message is available
    InboxReceived(Dictionary),
    /// An inbound message was dropped before delivery
    InboxDropped(AppMessageResult),
    /// The last outbound message was acknowledged
    OutboxSent,
    /// The last outbound message could not be delivered
    OutboxFailed(AppMessageResult),
}

impl AppMessageEvent {
    /// Build an inbound balance message
    ///
    /// Convenience for host adapters and simulations.
    pub fn balance(balance: i32, spent_today: i32) -> Result<Self, AppMessageResult> {
        let mut dict = Dictionary::new();
        dict.push_int(MessageKey::Balance, balance)?;
        dict.push_int(MessageKey::SpentToday, spent_today)?;
        Ok(AppMessageEvent::InboxReceived(dict))
    }
}
