//! Text layer state
//!
//! A layer remembers its frame, style, font and current text so it can be
//! repainted without the face resending anything.

use balanceface_core::config::{Rect, TextStyle};
use embedded_graphics::mono_font::MonoFont;
use heapless::String;

/// Maximum characters a layer keeps
pub const LAYER_TEXT_LEN: usize = 32;

/// One text region on screen
#[derive(Clone)]
pub struct TextLayer {
    frame: Rect,
    style: TextStyle,
    font: Option<&'static MonoFont<'static>>,
    text: String<LAYER_TEXT_LEN>,
    /// Whether the layer needs to be repainted
    dirty: bool,
}

impl TextLayer {
    /// Create an empty layer
    pub fn new(frame: Rect, style: TextStyle) -> Self {
        Self {
            frame,
            style,
            font: None,
            text: String::new(),
            dirty: true,
        }
    }

    /// Replace the text, truncating to [`LAYER_TEXT_LEN`] bytes
    pub fn set_text(&mut self, text: &str) {
        let mut end = text.len().min(LAYER_TEXT_LEN);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        self.text.clear();
        let _ = self.text.push_str(&text[..end]);
        self.dirty = true;
    }

    pub fn set_font(&mut self, font: &'static MonoFont<'static>) {
        self.font = Some(font);
        self.dirty = true;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn font(&self) -> Option<&'static MonoFont<'static>> {
        self.font
    }

    /// Check if layer needs repainting
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark layer as clean (after painting)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl core::fmt::Debug for TextLayer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TextLayer")
            .field("frame", &self.frame)
            .field("text", &self.text.as_str())
            .field("dirty", &self.dirty)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use balanceface_core::config::{Alignment, Color};

    fn style() -> TextStyle {
        TextStyle {
            foreground: Color::White,
            background: Color::Clear,
            alignment: Alignment::Center,
        }
    }

    #[test]
    fn test_set_text_marks_dirty() {
        let mut layer = TextLayer::new(Rect::new(0, 0, 144, 25), style());
        layer.mark_clean();
        layer.set_text("120, 15");
        assert_eq!(layer.text(), "120, 15");
        assert!(layer.is_dirty());
    }

    #[test]
    fn test_long_text_truncated() {
        let mut layer = TextLayer::new(Rect::new(0, 0, 144, 25), style());
        layer.set_text("0123456789012345678901234567890123456789");
        assert_eq!(layer.text().len(), LAYER_TEXT_LEN);
        assert!(layer.text().starts_with("0123"));
    }
}
