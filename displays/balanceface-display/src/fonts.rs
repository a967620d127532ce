//! Bundled font resources mapped to monospace bitmap fonts

use balanceface_core::config::FontResource;
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::MonoFont;

/// Bitmap font used for a resource
///
/// The closest built-in sizes stand in for the custom DOS fonts.
pub fn mono_font(resource: FontResource) -> &'static MonoFont<'static> {
    match resource {
        FontResource::PerfectDos48 => &FONT_10X20,
        FontResource::PerfectDos20 => &FONT_6X10,
    }
}
