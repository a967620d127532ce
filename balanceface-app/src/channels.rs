//! Event queues between the host platform and the controller
//!
//! The host's callbacks post into these; the controller drains them one
//! event at a time, so face state is only touched from one place.

use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, RawMutex};
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use balanceface_core::WallTime;
use balanceface_protocol::{AppMessageEvent, AppMessageResult};

/// Channel capacity for app-message events
pub const APP_MESSAGE_CHANNEL_SIZE: usize = 4;

/// App-message callbacks from the host (received, dropped, sent, failed)
pub static APP_MESSAGE_CHANNEL: Channel<
    CriticalSectionRawMutex,
    AppMessageEvent,
    APP_MESSAGE_CHANNEL_SIZE,
> = Channel::new();

/// Minute tick carrying the current local time
///
/// A signal rather than a queue: a late controller only needs the latest
/// time.
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, WallTime> = Signal::new();

/// Request the controller to stop and release the display
pub static SHUTDOWN: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Queue an app-message event for the controller
///
/// Inbound messages larger than `inbox_size` are replaced by a drop event,
/// as the host would never deliver them. When the queue is full the event
/// is discarded and `Busy` is returned.
pub fn post_app_message<M: RawMutex, const N: usize>(
    channel: &Channel<M, AppMessageEvent, N>,
    event: AppMessageEvent,
    inbox_size: usize,
) -> Result<(), AppMessageResult> {
    let event = match event {
        AppMessageEvent::InboxReceived(message) if message.encoded_size() > inbox_size => {
            warn!(
                "Inbound message of {} bytes exceeds inbox of {}",
                message.encoded_size(),
                inbox_size
            );
            AppMessageEvent::InboxDropped(AppMessageResult::BufferOverflow)
        }
        other => other,
    };

    channel.try_send(event).map_err(|_| {
        warn!("App message queue full, dropping event");
        AppMessageResult::Busy
    })
}
