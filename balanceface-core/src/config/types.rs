//! Configuration type definitions
//!
//! These types describe how the face looks and behaves. They are built in
//! code; nothing is read from files or the environment.

use balanceface_protocol::{INBOX_SIZE, MAX_MESSAGE_SIZE, OUTBOX_SIZE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest inbox that can hold a complete balance message
/// (header + two int32 tuples)
pub const MIN_INBOX_SIZE: usize = 1 + 2 * 11;

/// Smallest outbox that can hold a refresh request
pub const MIN_OUTBOX_SIZE: usize = 1 + 11;

/// Screen shape, which decides where the text regions sit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Platform {
    #[default]
    Rectangular,
    Round,
}

/// Hour convention for the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClockStyle {
    /// Ask the host on every update
    #[default]
    FollowHost,
    /// Always 00-23
    TwentyFourHour,
    /// Always 01-12
    TwelveHour,
}

impl ClockStyle {
    /// Resolve to 24-hour (true) or 12-hour (false)
    pub fn is_24h(self, host_24h: bool) -> bool {
        match self {
            ClockStyle::FollowHost => host_24h,
            ClockStyle::TwentyFourHour => true,
            ClockStyle::TwelveHour => false,
        }
    }
}

/// Custom font resources bundled with the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FontResource {
    /// Perfect DOS VGA, 48 px
    PerfectDos48,
    /// Perfect DOS VGA, 20 px
    PerfectDos20,
}

/// Display colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Black,
    White,
    /// Leave whatever is underneath
    Clear,
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Refresh interval of zero minutes
    ZeroRefreshInterval,
    /// Inbox cannot hold a balance message or exceeds the host limit
    InboxSize,
    /// Outbox cannot hold a refresh request or exceeds the host limit
    OutboxSize,
    /// Text and background colors are identical
    InvisibleText,
}

/// Watchface configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceConfig {
    /// Screen shape
    pub platform: Platform,
    /// Hour convention
    pub clock_style: ClockStyle,
    /// Font for the time region
    pub time_font: FontResource,
    /// Font for the balance region
    pub balance_font: FontResource,
    /// Window background
    pub background: Color,
    /// Text color of both regions
    pub foreground: Color,
    /// Ask the companion for fresh data every N minutes
    ///
    /// `None` never asks; the companion still pushes on its own schedule.
    pub refresh_interval_min: Option<u16>,
    /// Inbox buffer size (bytes)
    pub inbox_size: usize,
    /// Outbox buffer size (bytes)
    pub outbox_size: usize,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            platform: Platform::Rectangular,
            clock_style: ClockStyle::FollowHost,
            time_font: FontResource::PerfectDos48,
            balance_font: FontResource::PerfectDos20,
            background: Color::Black,
            foreground: Color::White,
            refresh_interval_min: None,
            inbox_size: INBOX_SIZE,
            outbox_size: OUTBOX_SIZE,
        }
    }
}

impl FaceConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration for a screen shape
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform,
            ..Self::default()
        }
    }

    /// Check the configuration for values the face cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_interval_min == Some(0) {
            return Err(ConfigError::ZeroRefreshInterval);
        }
        if !(MIN_INBOX_SIZE..=MAX_MESSAGE_SIZE).contains(&self.inbox_size) {
            return Err(ConfigError::InboxSize);
        }
        if !(MIN_OUTBOX_SIZE..=MAX_MESSAGE_SIZE).contains(&self.outbox_size) {
            return Err(ConfigError::OutboxSize);
        }
        if self.foreground == self.background || self.foreground == Color::Clear {
            return Err(ConfigError::InvisibleText);
        }
        Ok(())
    }
}
