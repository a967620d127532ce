//! Screen layout for the two text regions

use super::types::{Color, FaceConfig, FontResource, Platform};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Time region top edge (rectangular, round)
pub const TIME_TOP: (i16, i16) = (52, 58);
/// Time region height
pub const TIME_HEIGHT: u16 = 50;
/// Balance region top edge (rectangular, round)
pub const BALANCE_TOP: (i16, i16) = (120, 125);
/// Balance region height
pub const BALANCE_HEIGHT: u16 = 25;

/// A rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub x: i16,
    pub y: i16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: i16, y: i16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> i32 {
        self.y as i32 + self.h as i32
    }

    /// True if `other` lies entirely inside this rectangle
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x as i32 + other.w as i32 <= self.x as i32 + self.w as i32
            && other.bottom() <= self.bottom()
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Appearance of a text region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextStyle {
    pub foreground: Color,
    pub background: Color,
    pub alignment: Alignment,
}

/// One text region: where it goes, how it looks, which font it uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegionSpec {
    pub frame: Rect,
    pub style: TextStyle,
    pub font: FontResource,
}

/// Both regions of the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Layout {
    pub time: RegionSpec,
    pub balance: RegionSpec,
}

impl Layout {
    /// Compute the layout for a window with the given root bounds
    ///
    /// Regions span the full window width; their vertical offsets depend on
    /// the screen shape.
    pub fn compute(config: &FaceConfig, bounds: Rect) -> Self {
        let (time_top, balance_top) = match config.platform {
            Platform::Rectangular => (TIME_TOP.0, BALANCE_TOP.0),
            Platform::Round => (TIME_TOP.1, BALANCE_TOP.1),
        };

        let style = TextStyle {
            foreground: config.foreground,
            background: Color::Clear,
            alignment: Alignment::Center,
        };

        Self {
            time: RegionSpec {
                frame: Rect::new(0, time_top, bounds.w, TIME_HEIGHT),
                style,
                font: config.time_font,
            },
            balance: RegionSpec {
                frame: Rect::new(0, balance_top, bounds.w, BALANCE_HEIGHT),
                style,
                font: config.balance_font,
            },
        }
    }
}
