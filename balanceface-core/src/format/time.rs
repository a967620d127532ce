//! Wall-clock time and the `HH:MM` readout

use core::fmt::Write;

use heapless::String;

use super::FormatError;

/// Visible characters the time region holds
pub const TIME_TEXT_LEN: usize = 7;

/// Formatted time, e.g. `"03:07"`
pub type TimeText = String<TIME_TEXT_LEN>;

// "HH:MM"
const _: () = assert!(5 <= TIME_TEXT_LEN);

/// Local time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl WallTime {
    /// Seconds in a day
    pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

    /// Create a time, returning `None` if any field is out of range
    pub const fn new(hour: u8, minute: u8, second: u8) -> Option<Self> {
        if hour < 24 && minute < 60 && second < 60 {
            Some(Self {
                hour,
                minute,
                second,
            })
        } else {
            None
        }
    }

    /// Create a time from seconds since local midnight
    ///
    /// Values past one day wrap around.
    pub const fn from_seconds_of_day(seconds: u32) -> Self {
        let s = seconds % Self::SECONDS_PER_DAY;
        Self {
            hour: (s / 3600) as u8,
            minute: ((s / 60) % 60) as u8,
            second: (s % 60) as u8,
        }
    }

    /// Hour, 0-23
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Hour on a 12-hour dial, 1-12
    pub const fn hour_12(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    /// Minute, 0-59
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Second, 0-59
    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Seconds since local midnight
    pub const fn seconds_of_day(&self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32
    }

    /// Minutes since local midnight
    pub const fn minute_of_day(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

/// Format a time as `HH:MM`
///
/// Both fields are zero-padded. In 12-hour mode the hour runs 01-12 and no
/// AM/PM marker is shown.
pub fn format_time(time: WallTime, twenty_four_hour: bool) -> Result<TimeText, FormatError> {
    let hour = if twenty_four_hour {
        time.hour()
    } else {
        time.hour_12()
    };

    let mut text = TimeText::new();
    write!(text, "{:02}:{:02}", hour, time.minute()).map_err(|_| FormatError::Overflow)?;
    Ok(text)
}
