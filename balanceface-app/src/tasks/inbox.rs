//! App-message dispatch
//!
//! Routes each host callback to the matching face entry point and logs the
//! outcome.

use balanceface_core::{FaceError, FaceHost, MessageOutcome, WatchFace};
use balanceface_protocol::AppMessageEvent;

/// Apply one app-message event to the face
///
/// Only a render failure while applying an inbound message is an error;
/// delivery failures are logged and counted.
pub fn handle_app_message<H: FaceHost>(
    face: &mut WatchFace<H>,
    event: AppMessageEvent,
) -> Result<(), FaceError> {
    match event {
        AppMessageEvent::InboxReceived(message) => match face.on_message(&message)? {
            MessageOutcome::Applied {
                balance,
                spent_today,
            } => {
                debug!("Balance updated: {}, {}", balance, spent_today);
            }
            MessageOutcome::Ignored {
                has_balance,
                has_spent_today,
            } => {
                debug!(
                    "Message ignored (balance: {}, spent today: {})",
                    has_balance, has_spent_today
                );
            }
            MessageOutcome::Oversized { size } => {
                error!("Message dropped: {} bytes exceeds inbox", size);
            }
        },
        AppMessageEvent::InboxDropped(reason) => {
            error!("Message dropped: {:?}", reason);
            face.on_inbox_dropped(reason);
        }
        AppMessageEvent::OutboxSent => {
            info!("Outbox send success");
            face.on_outbox_sent();
        }
        AppMessageEvent::OutboxFailed(reason) => {
            error!("Outbox send failed: {:?}", reason);
            face.on_outbox_failed(reason);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use balanceface_core::testing::RecordingHost;
    use balanceface_core::FaceConfig;
    use balanceface_protocol::{AppMessageResult, Dictionary, MessageKey, Tuple};

    fn face() -> WatchFace<RecordingHost> {
        WatchFace::start(RecordingHost::new().at(8, 15), FaceConfig::default()).unwrap()
    }

    #[test]
    fn test_received_balance_is_shown() {
        let mut face = face();
        let event = AppMessageEvent::balance(120, 15).unwrap();
        handle_app_message(&mut face, event).unwrap();

        assert_eq!(face.balance_text(), "120, 15");
        assert_eq!(face.host().layer_text(1), Some("120, 15"));
    }

    #[test]
    fn test_partial_message_keeps_previous_line() {
        let mut face = face();
        handle_app_message(&mut face, AppMessageEvent::balance(-5, 0).unwrap()).unwrap();

        let mut partial = Dictionary::new();
        partial.push_int(MessageKey::Balance, 99).unwrap();
        handle_app_message(&mut face, AppMessageEvent::InboxReceived(partial)).unwrap();

        assert_eq!(face.balance_text(), "-5, 0");
        assert_eq!(face.stats().ignored(), 1);
    }

    #[test]
    fn test_failures_are_counted() {
        let mut face = face();
        let dropped = AppMessageEvent::InboxDropped(AppMessageResult::BufferOverflow);
        let failed = AppMessageEvent::OutboxFailed(AppMessageResult::NotConnected);
        handle_app_message(&mut face, dropped).unwrap();
        handle_app_message(&mut face, failed).unwrap();
        handle_app_message(&mut face, AppMessageEvent::OutboxSent).unwrap();

        assert_eq!(face.stats().inbox_dropped(), 1);
        assert_eq!(face.stats().outbox_failed(), 1);
        assert_eq!(face.stats().outbox_sent(), 1);
        assert_eq!(face.balance_text(), "");
    }

    #[test]
    fn test_message_over_configured_inbox_is_dropped() {
        let config = FaceConfig {
            inbox_size: 23,
            ..FaceConfig::default()
        };
        let mut face = WatchFace::start(RecordingHost::new(), config).unwrap();

        let mut message = Dictionary::new();
        message.push_int(MessageKey::Balance, 120).unwrap();
        message.push_int(MessageKey::SpentToday, 15).unwrap();
        message.push(Tuple::cstring(5, "note for the watch")).unwrap();
        handle_app_message(&mut face, AppMessageEvent::InboxReceived(message)).unwrap();

        assert_eq!(face.balance_text(), "");
        assert_eq!(face.stats().inbox_dropped(), 1);
    }

    #[test]
    fn test_render_failure_is_reported() {
        let mut face = face();
        face.host_mut().failing_renders = 1;
        let result = handle_app_message(&mut face, AppMessageEvent::balance(1, 2).unwrap());

        assert!(result.is_err());
        assert_eq!(face.balance_text(), "");
    }
}
