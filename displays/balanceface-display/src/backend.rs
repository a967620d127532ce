//! Display backend errors and color mapping

use balanceface_core::config::Color;
use balanceface_core::traits::HostError;
use embedded_graphics::pixelcolor::BinaryColor;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Draw target reported an error
    Draw,
    /// All layer or font slots are in use
    NoFreeSlot,
    /// Handle does not refer to a live layer or font
    InvalidHandle,
    /// No window has been created
    NoWindow,
}

impl From<DisplayError> for HostError {
    fn from(e: DisplayError) -> Self {
        match e {
            DisplayError::Draw => HostError::Render,
            DisplayError::NoFreeSlot => HostError::OutOfMemory,
            DisplayError::InvalidHandle => HostError::InvalidHandle,
            DisplayError::NoWindow => HostError::NoWindow,
        }
    }
}

/// Map a face color to a monochrome pixel
///
/// `Clear` has no pixel value; the caller paints whatever lies beneath.
pub fn to_binary(color: Color) -> Option<BinaryColor> {
    match color {
        Color::Black => Some(BinaryColor::Off),
        Color::White => Some(BinaryColor::On),
        Color::Clear => None,
    }
}
