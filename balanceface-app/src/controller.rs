//! Watchface event loop
//!
//! Waits on the minute tick, the app-message queue and the shutdown signal,
//! and applies each event to the face before taking the next one.

use embassy_futures::select::{select3, Either3};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use balanceface_core::{FaceConfig, FaceHost, StartError, TickOutcome, WallTime, WatchFace};
use balanceface_protocol::AppMessageEvent;

use crate::tasks::handle_app_message;

/// Apply a minute tick to the face
pub fn handle_tick<H: FaceHost>(face: &mut WatchFace<H>, now: WallTime) {
    match face.on_tick(now) {
        Ok(TickOutcome::Updated) => {}
        Ok(TickOutcome::RefreshRequested) => {
            info!("Refresh requested");
        }
        Ok(TickOutcome::RefreshFailed(reason)) => {
            warn!("Refresh request failed: {:?}", reason);
        }
        Err(e) => {
            error!("Time update failed: {:?}", e);
        }
    }
}

/// Run the face until shutdown is signalled, then hand it back
pub async fn run<H, M, const N: usize>(
    mut face: WatchFace<H>,
    tick: &Signal<M, WallTime>,
    inbox: &Channel<M, AppMessageEvent, N>,
    shutdown: &Signal<M, ()>,
) -> WatchFace<H>
where
    H: FaceHost,
    M: RawMutex,
{
    info!("Watchface running");

    loop {
        match select3(tick.wait(), inbox.receive(), shutdown.wait()).await {
            Either3::First(now) => handle_tick(&mut face, now),
            Either3::Second(event) => {
                if let Err(e) = handle_app_message(&mut face, event) {
                    error!("Balance update failed: {:?}", e);
                }
            }
            Either3::Third(()) => break,
        }
    }

    info!("Watchface stopping");
    face
}

/// Start the face, run it until shutdown, then release the display
///
/// Returns the host once every window resource has been handed back.
pub async fn run_watchface<H, M, const N: usize>(
    host: H,
    config: FaceConfig,
    tick: &Signal<M, WallTime>,
    inbox: &Channel<M, AppMessageEvent, N>,
    shutdown: &Signal<M, ()>,
) -> Result<H, StartError<H>>
where
    H: FaceHost,
    M: RawMutex,
{
    let face = match WatchFace::start(host, config) {
        Ok(face) => face,
        Err(e) => {
            error!("Watchface start failed: {:?}", e.error);
            return Err(e);
        }
    };

    let face = run(face, tick, inbox, shutdown).await;
    Ok(face.stop())
}

#[cfg(test)]
mod tests {
    use super::*;
    use balanceface_core::config::FontResource;
    use balanceface_core::testing::RecordingHost;
    use balanceface_protocol::{AppMessageResult, Dictionary, MessageKey, Tuple};
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    struct Queues {
        tick: Signal<NoopRawMutex, WallTime>,
        inbox: Channel<NoopRawMutex, AppMessageEvent, 4>,
        shutdown: Signal<NoopRawMutex, ()>,
    }

    impl Queues {
        fn new() -> Self {
            Self {
                tick: Signal::new(),
                inbox: Channel::new(),
                shutdown: Signal::new(),
            }
        }
    }

    fn at(hour: u8, minute: u8) -> WallTime {
        WallTime::new(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_events_applied_before_shutdown() {
        let q = Queues::new();
        q.tick.signal(at(10, 31));
        q.inbox
            .try_send(AppMessageEvent::balance(120, 15).unwrap())
            .unwrap();
        q.inbox
            .try_send(AppMessageEvent::balance(100, 35).unwrap())
            .unwrap();
        q.shutdown.signal(());

        let face = WatchFace::start(RecordingHost::new().at(10, 30), FaceConfig::default()).unwrap();
        let face = block_on(run(face, &q.tick, &q.inbox, &q.shutdown));

        assert_eq!(face.time_text(), "10:31");
        assert_eq!(face.balance_text(), "100, 35");
        assert_eq!(face.stats().applied(), 2);
    }

    #[test]
    fn test_run_drops_message_over_configured_inbox() {
        let q = Queues::new();
        let mut large = Dictionary::new();
        large.push_int(MessageKey::Balance, 120).unwrap();
        large.push_int(MessageKey::SpentToday, 15).unwrap();
        large.push(Tuple::cstring(3, "resend later please")).unwrap();
        q.inbox
            .try_send(AppMessageEvent::InboxReceived(large))
            .unwrap();
        q.shutdown.signal(());

        let config = FaceConfig {
            inbox_size: 23,
            ..FaceConfig::default()
        };
        let face = WatchFace::start(RecordingHost::new(), config).unwrap();
        let face = block_on(run(face, &q.tick, &q.inbox, &q.shutdown));

        assert_eq!(face.balance_text(), "");
        assert_eq!(face.host().layer_text(1), Some(""));
        assert_eq!(face.stats().inbox_dropped(), 1);
    }

    #[test]
    fn test_run_watchface_releases_host() {
        let q = Queues::new();
        q.inbox
            .try_send(AppMessageEvent::balance(7, 3).unwrap())
            .unwrap();
        q.shutdown.signal(());

        let host = block_on(run_watchface(
            RecordingHost::new(),
            FaceConfig::default(),
            &q.tick,
            &q.inbox,
            &q.shutdown,
        ))
        .unwrap();

        assert_eq!(host.window, None);
        assert_eq!(host.live_layers(), 0);
        assert_eq!(host.live_fonts(), 0);
        assert_eq!(host.windows_destroyed, 1);
    }

    #[test]
    fn test_start_failure_returns_host() {
        let q = Queues::new();
        let mut host = RecordingHost::new();
        host.missing_font = Some(FontResource::PerfectDos20);

        let err = block_on(run_watchface(
            host,
            FaceConfig::default(),
            &q.tick,
            &q.inbox,
            &q.shutdown,
        ))
        .unwrap_err();

        assert_eq!(err.host.window, None);
        assert_eq!(err.host.live_layers(), 0);
        assert_eq!(err.host.live_fonts(), 0);
    }

    #[test]
    fn test_refresh_sent_on_interval() {
        let mut host = RecordingHost::new().at(6, 0);
        host.twenty_four_hour = false;
        let config = FaceConfig {
            refresh_interval_min: Some(1),
            ..FaceConfig::default()
        };
        let mut face = WatchFace::start(host, config).unwrap();

        handle_tick(&mut face, at(18, 1));

        assert_eq!(face.time_text(), "06:01");
        assert_eq!(face.host().sent.len(), 1);
        assert_eq!(
            face.host().sent[0].find_i32(MessageKey::Refresh),
            Some(1)
        );
    }

    #[test]
    fn test_refused_refresh_keeps_running() {
        let mut host = RecordingHost::new();
        host.send_result = Err(AppMessageResult::NotConnected);
        let config = FaceConfig {
            refresh_interval_min: Some(1),
            ..FaceConfig::default()
        };
        let mut face = WatchFace::start(host, config).unwrap();

        handle_tick(&mut face, at(0, 1));

        assert_eq!(face.time_text(), "00:01");
        assert!(face.host().sent.is_empty());
    }
}
