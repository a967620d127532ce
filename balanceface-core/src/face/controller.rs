//! Watchface controller
//!
//! Owns the window, both text regions and their buffers. The host's event
//! loop calls the `on_*` entry points one at a time; no entry point blocks
//! or keeps state beyond the buffers and counters held here.

use core::fmt;

use balanceface_protocol::{AppMessageResult, Dictionary, MessageKey};

use super::resources::FaceResources;
use super::stats::MessageStats;
use crate::config::{ConfigError, FaceConfig, Layout};
use crate::format::{format_balance, format_time, BalanceText, FormatError, TimeText, WallTime};
use crate::traits::{FaceHost, HostError};

/// Value sent with a refresh request
const REFRESH_REQUEST: i32 = 1;

/// Errors from the face controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceError {
    /// Rejected configuration
    Config(ConfigError),
    /// Window host failure
    Host(HostError),
    /// Text did not fit its buffer
    Format(FormatError),
}

impl From<ConfigError> for FaceError {
    fn from(e: ConfigError) -> Self {
        FaceError::Config(e)
    }
}

impl From<HostError> for FaceError {
    fn from(e: HostError) -> Self {
        FaceError::Host(e)
    }
}

impl From<FormatError> for FaceError {
    fn from(e: FormatError) -> Self {
        FaceError::Format(e)
    }
}

/// Startup failure, returning the host untouched by leaked handles
pub struct StartError<H> {
    pub error: FaceError,
    pub host: H,
}

impl<H> fmt::Debug for StartError<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StartError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

/// Result of a minute tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Time redrawn
    Updated,
    /// Time redrawn and a refresh request handed to the host
    RefreshRequested,
    /// Time redrawn; the refresh request was refused
    RefreshFailed(AppMessageResult),
}

/// Result of an inbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageOutcome {
    /// Balance line replaced
    Applied { balance: i32, spent_today: i32 },
    /// A required field was missing; display unchanged
    Ignored {
        has_balance: bool,
        has_spent_today: bool,
    },
    /// Larger than the configured inbox; counted as an inbox drop
    Oversized { size: usize },
}

/// The watchface
pub struct WatchFace<H: FaceHost> {
    host: H,
    config: FaceConfig,
    layout: Layout,
    resources: FaceResources<H>,
    time_text: TimeText,
    balance_text: BalanceText,
    stats: MessageStats,
    /// Ticks since the last refresh request
    ticks_since_refresh: u16,
}

impl<H: FaceHost> fmt::Debug for WatchFace<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchFace")
            .field("time_text", &self.time_text.as_str())
            .field("balance_text", &self.balance_text.as_str())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl<H: FaceHost> WatchFace<H> {
    /// Create the window and regions, then draw the current time
    ///
    /// On failure everything already acquired is released and the host is
    /// returned with the error.
    pub fn start(mut host: H, config: FaceConfig) -> Result<Self, StartError<H>> {
        if let Err(e) = config.validate() {
            return Err(StartError {
                error: e.into(),
                host,
            });
        }

        if let Err(e) = host.create_window(config.background) {
            return Err(StartError {
                error: e.into(),
                host,
            });
        }

        let layout = Layout::compute(&config, host.root_bounds());

        let resources = match FaceResources::acquire(&mut host, &layout) {
            Ok(resources) => resources,
            Err(e) => {
                host.destroy_window();
                return Err(StartError {
                    error: e.into(),
                    host,
                });
            }
        };

        let mut face = Self {
            host,
            config,
            layout,
            resources,
            time_text: TimeText::new(),
            balance_text: BalanceText::new(),
            stats: MessageStats::new(),
            ticks_since_refresh: 0,
        };

        let now = face.host.now();
        if let Err(error) = face.update_time(now) {
            let host = face.stop();
            return Err(StartError { error, host });
        }

        Ok(face)
    }

    /// Release every display resource and return the host
    pub fn stop(self) -> H {
        let Self {
            mut host,
            resources,
            ..
        } = self;

        resources.release(&mut host);
        host.destroy_window();
        host
    }

    /// Minute tick: redraw the time and request a refresh when due
    pub fn on_tick(&mut self, now: WallTime) -> Result<TickOutcome, FaceError> {
        self.update_time(now)?;

        let Some(interval) = self.config.refresh_interval_min else {
            return Ok(TickOutcome::Updated);
        };

        self.ticks_since_refresh = self.ticks_since_refresh.saturating_add(1);
        if self.ticks_since_refresh < interval {
            return Ok(TickOutcome::Updated);
        }
        self.ticks_since_refresh = 0;

        match self.request_refresh() {
            Ok(()) => Ok(TickOutcome::RefreshRequested),
            Err(reason) => Ok(TickOutcome::RefreshFailed(reason)),
        }
    }

    /// Inbound message: replace the balance line if both fields are present
    ///
    /// A message over the configured inbox size is treated as dropped with
    /// `BufferOverflow`, as the host would never have delivered it.
    pub fn on_message(&mut self, message: &Dictionary) -> Result<MessageOutcome, FaceError> {
        let size = message.encoded_size();
        if size > self.config.inbox_size {
            self.on_inbox_dropped(AppMessageResult::BufferOverflow);
            return Ok(MessageOutcome::Oversized { size });
        }

        let balance = message.find_i32(MessageKey::Balance);
        let spent_today = message.find_i32(MessageKey::SpentToday);

        let (Some(balance), Some(spent_today)) = (balance, spent_today) else {
            self.stats.record_received(false);
            return Ok(MessageOutcome::Ignored {
                has_balance: balance.is_some(),
                has_spent_today: spent_today.is_some(),
            });
        };

        let text = format_balance(balance, spent_today)?;
        self.resources.balance.set_text(&mut self.host, &text)?;
        self.balance_text = text;
        self.stats.record_received(true);

        Ok(MessageOutcome::Applied {
            balance,
            spent_today,
        })
    }

    /// Inbound message dropped by the host
    pub fn on_inbox_dropped(&mut self, reason: AppMessageResult) {
        self.stats.record_inbox_dropped(reason);
    }

    /// Outbound message acknowledged
    pub fn on_outbox_sent(&mut self) {
        self.stats.record_outbox_sent();
    }

    /// Outbound message failed
    pub fn on_outbox_failed(&mut self, reason: AppMessageResult) {
        self.stats.record_outbox_failed(reason);
    }

    /// Text in the time region
    pub fn time_text(&self) -> &str {
        &self.time_text
    }

    /// Text in the balance region (empty until the first complete message)
    pub fn balance_text(&self) -> &str {
        &self.balance_text
    }

    pub fn stats(&self) -> &MessageStats {
        &self.stats
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access, for adapters that feed it between callbacks
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn update_time(&mut self, now: WallTime) -> Result<(), FaceError> {
        let twenty_four_hour = self.config.clock_style.is_24h(self.host.is_24h_style());
        let text = format_time(now, twenty_four_hour)?;
        self.resources.time.set_text(&mut self.host, &text)?;
        self.time_text = text;
        Ok(())
    }

    fn request_refresh(&mut self) -> Result<(), AppMessageResult> {
        let mut request = Dictionary::with_limit(self.config.outbox_size);
        request.push_int(MessageKey::Refresh, REFRESH_REQUEST)?;
        self.host.send(&request)?;
        self.stats.record_refresh_request();
        Ok(())
    }
}
