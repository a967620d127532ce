//! Minute tick task
//!
//! Sleeps until the next minute boundary of the host clock and signals the
//! controller with the time read on wake-up.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Timer};

use balanceface_core::traits::Clock;
use balanceface_core::WallTime;

/// Time left until the next minute boundary
pub fn until_next_minute(now: WallTime) -> Duration {
    Duration::from_secs(60 - now.second() as u64)
}

/// Passes each minute of the day once
///
/// Timer wake-ups can land a little early or late; the gate keeps a minute
/// from being signalled twice.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinuteGate {
    last: Option<u16>,
}

impl MinuteGate {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// True if `now` is in a minute not yet passed
    pub fn pass(&mut self, now: WallTime) -> bool {
        let minute = now.minute_of_day();
        if self.last == Some(minute) {
            return false;
        }
        self.last = Some(minute);
        true
    }
}

/// Tick task - signals the controller once per minute with the local time
pub async fn tick_task<C: Clock, M: RawMutex>(clock: &C, signal: &Signal<M, WallTime>) -> ! {
    info!("Tick task started");

    let mut gate = MinuteGate::new();
    // The controller draws the start-up time itself
    gate.pass(clock.now());

    loop {
        Timer::after(until_next_minute(clock.now())).await;

        let now = clock.now();
        if gate.pass(now) {
            trace!("Tick {}:{}", now.hour(), now.minute());
            signal.signal(now);
        }
    }
}
