//! Window host over an embedded-graphics draw target
//!
//! Layers and fonts live in fixed slot tables; handles are slot indexes.
//! Every text change repaints only the affected layer's frame.

use balanceface_core::config::{Alignment, Color, FontResource, Rect, TextStyle};
use balanceface_core::traits::{HostError, WindowHost};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{self, Baseline, Text, TextStyleBuilder};

use crate::backend::{to_binary, DisplayError};
use crate::fonts::mono_font;
use crate::layer::TextLayer;

/// Maximum text layers
pub const MAX_LAYERS: usize = 4;

/// Maximum loaded fonts
pub const MAX_FONTS: usize = 4;

/// Handle to a text layer
#[derive(Debug, PartialEq, Eq)]
pub struct LayerHandle(u8);

/// Handle to a loaded font
#[derive(Debug, PartialEq, Eq)]
pub struct FontHandle(u8);

/// Window host drawing to a monochrome display
pub struct GraphicsHost<D> {
    target: D,
    /// Window background; `None` until a window exists
    background: Option<BinaryColor>,
    layers: [Option<TextLayer>; MAX_LAYERS],
    fonts: [Option<FontResource>; MAX_FONTS],
}

impl<D> GraphicsHost<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    /// Create a host drawing to `target`
    pub fn new(target: D) -> Self {
        Self {
            target,
            background: None,
            layers: core::array::from_fn(|_| None),
            fonts: [None; MAX_FONTS],
        }
    }

    /// Borrow the draw target
    pub fn target(&self) -> &D {
        &self.target
    }

    /// Mutably borrow the draw target
    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Take back the draw target
    pub fn into_target(self) -> D {
        self.target
    }

    /// Look up a live layer
    pub fn layer(&self, handle: &LayerHandle) -> Option<&TextLayer> {
        self.layers.get(handle.0 as usize).and_then(|l| l.as_ref())
    }

    /// Number of live layers
    pub fn live_layers(&self) -> usize {
        self.layers.iter().filter(|l| l.is_some()).count()
    }

    /// Number of loaded fonts
    pub fn live_fonts(&self) -> usize {
        self.fonts.iter().filter(|f| f.is_some()).count()
    }

    /// Whether a window exists
    pub fn has_window(&self) -> bool {
        self.background.is_some()
    }

    /// Repaint every layer with pending changes
    pub fn flush(&mut self) -> Result<(), DisplayError> {
        for index in 0..MAX_LAYERS {
            if self.layers[index].as_ref().is_some_and(|l| l.is_dirty()) {
                self.paint(index)?;
            }
        }
        Ok(())
    }

    fn layer_mut(&mut self, handle: &LayerHandle) -> Result<&mut TextLayer, DisplayError> {
        self.layers
            .get_mut(handle.0 as usize)
            .and_then(|l| l.as_mut())
            .ok_or(DisplayError::InvalidHandle)
    }

    fn fill(&mut self, frame: Rect, color: BinaryColor) -> Result<(), DisplayError> {
        to_rectangle(frame)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Draw)
    }

    /// Clear a layer's frame and draw its text
    fn paint(&mut self, index: usize) -> Result<(), DisplayError> {
        let window_bg = self.background.ok_or(DisplayError::NoWindow)?;
        let Some(layer) = self.layers[index].as_ref() else {
            return Err(DisplayError::InvalidHandle);
        };

        let frame = layer.frame();
        let bg = to_binary(layer.style().background).unwrap_or(window_bg);
        let fg = to_binary(layer.style().foreground);
        let alignment = layer.style().alignment;
        let font = layer.font();

        self.fill(frame, bg)?;

        if let (Some(fg), Some(font)) = (fg, font) {
            let layer = self.layers[index]
                .as_ref()
                .ok_or(DisplayError::InvalidHandle)?;
            let character_style = MonoTextStyle::new(font, fg);
            let text_style = TextStyleBuilder::new()
                .alignment(to_text_alignment(alignment))
                .baseline(Baseline::Top)
                .build();
            let anchor = Point::new(anchor_x(frame, alignment), frame.y as i32);

            Text::with_text_style(layer.text(), anchor, character_style, text_style)
                .draw(&mut self.target)
                .map_err(|_| DisplayError::Draw)?;
        }

        if let Some(layer) = self.layers[index].as_mut() {
            layer.mark_clean();
        }
        Ok(())
    }
}

impl<D> WindowHost for GraphicsHost<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    type Layer = LayerHandle;
    type Font = FontHandle;

    fn create_window(&mut self, background: Color) -> Result<(), HostError> {
        let color = to_binary(background).unwrap_or(BinaryColor::Off);
        self.target
            .clear(color)
            .map_err(|_| DisplayError::Draw)?;
        self.background = Some(color);
        Ok(())
    }

    fn destroy_window(&mut self) {
        self.background = None;
        self.layers = core::array::from_fn(|_| None);
    }

    fn root_bounds(&self) -> Rect {
        let bounds = self.target.bounding_box();
        Rect::new(
            clamp_i16(bounds.top_left.x),
            clamp_i16(bounds.top_left.y),
            clamp_u16(bounds.size.width),
            clamp_u16(bounds.size.height),
        )
    }

    fn create_text_layer(
        &mut self,
        frame: Rect,
        style: &TextStyle,
    ) -> Result<LayerHandle, HostError> {
        if !self.has_window() {
            return Err(DisplayError::NoWindow.into());
        }
        let index = self
            .layers
            .iter()
            .position(|l| l.is_none())
            .ok_or(DisplayError::NoFreeSlot)?;
        self.layers[index] = Some(TextLayer::new(frame, *style));
        Ok(LayerHandle(index as u8))
    }

    fn destroy_text_layer(&mut self, layer: LayerHandle) {
        let index = layer.0 as usize;
        let Some(removed) = self.layers.get_mut(index).and_then(|l| l.take()) else {
            return;
        };
        if let Some(bg) = self.background {
            // Nothing to report to; the layer is gone either way
            let _ = self.fill(removed.frame(), bg);
        }
    }

    fn load_font(&mut self, font: FontResource) -> Result<FontHandle, HostError> {
        let index = self
            .fonts
            .iter()
            .position(|f| f.is_none())
            .ok_or(DisplayError::NoFreeSlot)?;
        self.fonts[index] = Some(font);
        Ok(FontHandle(index as u8))
    }

    fn unload_font(&mut self, font: FontHandle) {
        if let Some(slot) = self.fonts.get_mut(font.0 as usize) {
            *slot = None;
        }
    }

    fn set_font(&mut self, layer: &LayerHandle, font: &FontHandle) -> Result<(), HostError> {
        let resource = self
            .fonts
            .get(font.0 as usize)
            .copied()
            .flatten()
            .ok_or(DisplayError::InvalidHandle)?;
        self.layer_mut(layer)?.set_font(mono_font(resource));
        self.flush()?;
        Ok(())
    }

    fn set_text(&mut self, layer: &LayerHandle, text: &str) -> Result<(), HostError> {
        self.layer_mut(layer)?.set_text(text);
        self.flush()?;
        Ok(())
    }
}

fn to_rectangle(frame: Rect) -> Rectangle {
    Rectangle::new(
        Point::new(frame.x as i32, frame.y as i32),
        Size::new(frame.w as u32, frame.h as u32),
    )
}

fn to_text_alignment(alignment: Alignment) -> text::Alignment {
    match alignment {
        Alignment::Left => text::Alignment::Left,
        Alignment::Center => text::Alignment::Center,
        Alignment::Right => text::Alignment::Right,
    }
}

/// X coordinate the text is anchored at for an alignment
fn anchor_x(frame: Rect, alignment: Alignment) -> i32 {
    let left = frame.x as i32;
    match alignment {
        Alignment::Left => left,
        Alignment::Center => left + frame.w as i32 / 2,
        Alignment::Right => left + frame.w as i32 - 1,
    }
}

fn clamp_i16(v: i32) -> i16 {
    v.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}

fn clamp_u16(v: u32) -> u16 {
    v.min(u16::MAX as u32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FrameBuffer;
    use balanceface_core::config::FaceConfig;
    use balanceface_core::config::Layout;

    fn white_on_clear() -> TextStyle {
        TextStyle {
            foreground: Color::White,
            background: Color::Clear,
            alignment: Alignment::Center,
        }
    }

    #[test]
    fn test_root_bounds() {
        let host = GraphicsHost::new(FrameBuffer::new());
        assert_eq!(host.root_bounds(), Rect::new(0, 0, 144, 168));
    }

    #[test]
    fn test_layer_requires_window() {
        let mut host = GraphicsHost::new(FrameBuffer::new());
        let result = host.create_text_layer(Rect::new(0, 0, 10, 10), &white_on_clear());
        assert_eq!(result, Err(HostError::NoWindow));
    }

    #[test]
    fn test_text_draws_inside_frame() {
        let mut host = GraphicsHost::new(FrameBuffer::new());
        host.create_window(Color::Black).unwrap();

        let layout = Layout::compute(&FaceConfig::default(), host.root_bounds());
        let layer = host
            .create_text_layer(layout.balance.frame, &layout.balance.style)
            .unwrap();
        let font = host.load_font(layout.balance.font).unwrap();
        host.set_font(&layer, &font).unwrap();
        host.set_text(&layer, "120, 15").unwrap();

        let fb = host.target();
        assert!(fb.lit_in(layout.balance.frame) > 0);
        assert_eq!(fb.lit_total(), fb.lit_in(layout.balance.frame));
        assert_eq!(host.layer(&layer).map(|l| l.text()), Some("120, 15"));
    }

    #[test]
    fn test_font_change_repaints_text() {
        let mut host = GraphicsHost::new(FrameBuffer::new());
        host.create_window(Color::Black).unwrap();
        let frame = Rect::new(0, 52, 144, 50);
        let layer = host.create_text_layer(frame, &white_on_clear()).unwrap();

        // No font yet: only the background is painted
        host.set_text(&layer, "08:15").unwrap();
        assert_eq!(host.target().lit_total(), 0);
        assert_eq!(host.layer(&layer).map(|l| l.is_dirty()), Some(false));

        let font = host.load_font(FontResource::PerfectDos48).unwrap();
        host.set_font(&layer, &font).unwrap();
        assert!(host.target().lit_in(frame) > 0);
        assert_eq!(host.layer(&layer).map(|l| l.is_dirty()), Some(false));
    }

    #[test]
    fn test_flush_paints_only_pending_layers() {
        let mut host = GraphicsHost::new(FrameBuffer::new());
        host.create_window(Color::Black).unwrap();
        let layer = host
            .create_text_layer(Rect::new(0, 120, 144, 25), &white_on_clear())
            .unwrap();
        let font = host.load_font(FontResource::PerfectDos20).unwrap();
        host.set_font(&layer, &font).unwrap();
        host.set_text(&layer, "5, 1").unwrap();
        let lit = host.target().lit_total();

        host.flush().unwrap();
        assert_eq!(host.target().lit_total(), lit);
        assert_eq!(host.live_layers(), 1);
    }

    #[test]
    fn test_text_replaced_not_overdrawn() {
        let mut host = GraphicsHost::new(FrameBuffer::new());
        host.create_window(Color::Black).unwrap();
        let frame = Rect::new(0, 120, 144, 25);
        let layer = host.create_text_layer(frame, &white_on_clear()).unwrap();
        let font = host.load_font(FontResource::PerfectDos20).unwrap();
        host.set_font(&layer, &font).unwrap();

        host.set_text(&layer, "-2147483648, -2147483648").unwrap();
        let wide = host.target().lit_total();
        host.set_text(&layer, "1, 1").unwrap();
        let narrow = host.target().lit_total();
        assert!(narrow < wide);

        host.set_text(&layer, "").unwrap();
        assert_eq!(host.target().lit_total(), 0);
    }

    #[test]
    fn test_destroy_layer_clears_frame() {
        let mut host = GraphicsHost::new(FrameBuffer::new());
        host.create_window(Color::Black).unwrap();
        let layer = host
            .create_text_layer(Rect::new(0, 52, 144, 50), &white_on_clear())
            .unwrap();
        let font = host.load_font(FontResource::PerfectDos48).unwrap();
        host.set_font(&layer, &font).unwrap();
        host.set_text(&layer, "12:00").unwrap();
        assert!(host.target().lit_total() > 0);

        host.unload_font(font);
        host.destroy_text_layer(layer);
        assert_eq!(host.target().lit_total(), 0);
        assert_eq!(host.live_layers(), 0);
        assert_eq!(host.live_fonts(), 0);
    }

    #[test]
    fn test_slots_exhausted() {
        let mut host = GraphicsHost::new(FrameBuffer::new());
        host.create_window(Color::Black).unwrap();
        for _ in 0..MAX_LAYERS {
            host.create_text_layer(Rect::new(0, 0, 1, 1), &white_on_clear())
                .unwrap();
        }
        let result = host.create_text_layer(Rect::new(0, 0, 1, 1), &white_on_clear());
        assert_eq!(result, Err(HostError::OutOfMemory));
    }

    #[test]
    fn test_stale_font_handle() {
        let mut host = GraphicsHost::new(FrameBuffer::new());
        host.create_window(Color::Black).unwrap();
        let layer = host
            .create_text_layer(Rect::new(0, 0, 10, 10), &white_on_clear())
            .unwrap();
        let font = host.load_font(FontResource::PerfectDos20).unwrap();
        let stale = FontHandle(font.0);
        host.unload_font(font);
        assert_eq!(host.set_font(&layer, &stale), Err(HostError::InvalidHandle));
    }

    #[test]
    fn test_white_background_window() {
        let mut host = GraphicsHost::new(FrameBuffer::new());
        host.create_window(Color::White).unwrap();
        assert_eq!(host.target().lit_total(), 144 * 168);
    }
}
