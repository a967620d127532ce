//! Message channel statistics
//!
//! Counts what the messaging callbacks reported. Nothing here feeds back
//! into the display; it exists for diagnostics.

use balanceface_protocol::AppMessageResult;

/// Counters for the four messaging callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MessageStats {
    /// Inbound messages delivered
    received: u32,
    /// Inbound messages that updated the balance
    applied: u32,
    /// Inbound messages missing a required field
    ignored: u32,
    /// Inbound messages the host dropped
    inbox_dropped: u32,
    /// Outbound messages acknowledged
    outbox_sent: u32,
    /// Outbound messages that failed
    outbox_failed: u32,
    /// Refresh requests handed to the host
    refresh_requests: u32,
    /// Most recent failure reason
    last_failure: Option<AppMessageResult>,
}

impl MessageStats {
    /// Create zeroed statistics
    pub const fn new() -> Self {
        Self {
            received: 0,
            applied: 0,
            ignored: 0,
            inbox_dropped: 0,
            outbox_sent: 0,
            outbox_failed: 0,
            refresh_requests: 0,
            last_failure: None,
        }
    }

    /// Record a delivered message
    ///
    /// # Arguments
    /// - `applied`: whether it carried both fields
    pub fn record_received(&mut self, applied: bool) {
        self.received = self.received.saturating_add(1);
        if applied {
            self.applied = self.applied.saturating_add(1);
        } else {
            self.ignored = self.ignored.saturating_add(1);
        }
    }

    /// Record an inbound drop
    pub fn record_inbox_dropped(&mut self, reason: AppMessageResult) {
        self.inbox_dropped = self.inbox_dropped.saturating_add(1);
        self.last_failure = Some(reason);
    }

    /// Record an acknowledged send
    pub fn record_outbox_sent(&mut self) {
        self.outbox_sent = self.outbox_sent.saturating_add(1);
    }

    /// Record a failed send
    pub fn record_outbox_failed(&mut self, reason: AppMessageResult) {
        self.outbox_failed = self.outbox_failed.saturating_add(1);
        self.last_failure = Some(reason);
    }

    /// Record a refresh request handed to the host
    pub fn record_refresh_request(&mut self) {
        self.refresh_requests = self.refresh_requests.saturating_add(1);
    }

    pub fn received(&self) -> u32 {
        self.received
    }

    pub fn applied(&self) -> u32 {
        self.applied
    }

    pub fn ignored(&self) -> u32 {
        self.ignored
    }

    pub fn inbox_dropped(&self) -> u32 {
        self.inbox_dropped
    }

    pub fn outbox_sent(&self) -> u32 {
        self.outbox_sent
    }

    pub fn outbox_failed(&self) -> u32 {
        self.outbox_failed
    }

    pub fn refresh_requests(&self) -> u32 {
        self.refresh_requests
    }

    pub fn last_failure(&self) -> Option<AppMessageResult> {
        self.last_failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_received_split() {
        let mut stats = MessageStats::new();
        stats.record_received(true);
        stats.record_received(false);
        stats.record_received(true);

        assert_eq!(stats.received(), 3);
        assert_eq!(stats.applied(), 2);
        assert_eq!(stats.ignored(), 1);
        assert!(stats.last_failure().is_none());
    }

    #[test]
    fn test_failures_tracked() {
        let mut stats = MessageStats::new();
        stats.record_inbox_dropped(AppMessageResult::BufferOverflow);
        assert_eq!(stats.inbox_dropped(), 1);
        assert_eq!(stats.last_failure(), Some(AppMessageResult::BufferOverflow));

        stats.record_outbox_failed(AppMessageResult::NotConnected);
        assert_eq!(stats.outbox_failed(), 1);
        assert_eq!(stats.last_failure(), Some(AppMessageResult::NotConnected));

        stats.record_outbox_sent();
        assert_eq!(stats.outbox_sent(), 1);
        // Success does not clear the last failure
        assert_eq!(stats.last_failure(), Some(AppMessageResult::NotConnected));
    }
}
