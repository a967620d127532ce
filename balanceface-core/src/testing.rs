//! In-memory host for tests and simulations
//!
//! Records every call the face makes so tests can check what reached the
//! screen and that every handle was handed back.

use heapless::{String, Vec};

use balanceface_protocol::{AppMessageResult, Dictionary};

use crate::config::{Color, FontResource, Rect, TextStyle};
use crate::format::WallTime;
use crate::traits::{Clock, HostError, Outbox, WindowHost};

/// Maximum layers and fonts the recording host tracks
pub const MAX_OBJECTS: usize = 8;

/// Maximum outbound messages kept
pub const MAX_SENT: usize = 8;

/// Text layer as seen by the recording host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerRecord {
    pub frame: Rect,
    pub style: TextStyle,
    pub font: Option<FontResource>,
    pub text: String<64>,
}

/// Host that keeps everything in memory
#[derive(Debug, Clone)]
pub struct RecordingHost {
    /// Window background, if a window is live
    pub window: Option<Color>,
    /// Root bounds reported to the face
    pub bounds: Rect,
    /// Layers by handle; `None` once destroyed
    pub layers: Vec<Option<LayerRecord>, MAX_OBJECTS>,
    /// Fonts by handle; `None` once unloaded
    pub fonts: Vec<Option<FontResource>, MAX_OBJECTS>,
    /// Current time reported by the clock
    pub time: WallTime,
    /// System 24-hour setting
    pub twenty_four_hour: bool,
    /// Messages accepted by the outbox
    pub sent: Vec<Dictionary, MAX_SENT>,
    /// Result the outbox returns
    pub send_result: Result<(), AppMessageResult>,
    /// Font resource that fails to load
    pub missing_font: Option<FontResource>,
    /// Number of text updates that fail with `Render`
    pub failing_renders: u8,
    /// Number of windows destroyed
    pub windows_destroyed: u8,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingHost {
    /// Create a host with a 144x168 screen, 24-hour clock at midnight
    pub fn new() -> Self {
        Self {
            window: None,
            bounds: Rect::new(0, 0, 144, 168),
            layers: Vec::new(),
            fonts: Vec::new(),
            time: WallTime::default(),
            twenty_four_hour: true,
            sent: Vec::new(),
            send_result: Ok(()),
            missing_font: None,
            failing_renders: 0,
            windows_destroyed: 0,
        }
    }

    /// Set the clock
    pub fn at(mut self, hour: u8, minute: u8) -> Self {
        self.time = WallTime::new(hour, minute, 0).unwrap_or_default();
        self
    }

    /// Text currently shown by a layer
    pub fn layer_text(&self, layer: usize) -> Option<&str> {
        self.layers
            .get(layer)
            .and_then(|l| l.as_ref())
            .map(|l| l.text.as_str())
    }

    /// Layers not yet destroyed
    pub fn live_layers(&self) -> usize {
        self.layers.iter().filter(|l| l.is_some()).count()
    }

    /// Fonts not yet unloaded
    pub fn live_fonts(&self) -> usize {
        self.fonts.iter().filter(|f| f.is_some()).count()
    }

    fn layer_mut(&mut self, layer: usize) -> Result<&mut LayerRecord, HostError> {
        self.layers
            .get_mut(layer)
            .and_then(|l| l.as_mut())
            .ok_or(HostError::InvalidHandle)
    }
}

impl WindowHost for RecordingHost {
    type Layer = usize;
    type Font = usize;

    fn create_window(&mut self, background: Color) -> Result<(), HostError> {
        self.window = Some(background);
        Ok(())
    }

    fn destroy_window(&mut self) {
        self.window = None;
        self.windows_destroyed = self.windows_destroyed.saturating_add(1);
    }

    fn root_bounds(&self) -> Rect {
        self.bounds
    }

    fn create_text_layer(&mut self, frame: Rect, style: &TextStyle) -> Result<usize, HostError> {
        if self.window.is_none() {
            return Err(HostError::NoWindow);
        }
        let record = LayerRecord {
            frame,
            style: *style,
            font: None,
            text: String::new(),
        };
        self.layers
            .push(Some(record))
            .map_err(|_| HostError::OutOfMemory)?;
        Ok(self.layers.len() - 1)
    }

    fn destroy_text_layer(&mut self, layer: usize) {
        if let Some(slot) = self.layers.get_mut(layer) {
            *slot = None;
        }
    }

    fn load_font(&mut self, font: FontResource) -> Result<usize, HostError> {
        if self.missing_font == Some(font) {
            return Err(HostError::ResourceNotFound);
        }
        self.fonts
            .push(Some(font))
            .map_err(|_| HostError::OutOfMemory)?;
        Ok(self.fonts.len() - 1)
    }

    fn unload_font(&mut self, font: usize) {
        if let Some(slot) = self.fonts.get_mut(font) {
            *slot = None;
        }
    }

    fn set_font(&mut self, layer: &usize, font: &usize) -> Result<(), HostError> {
        let resource = self
            .fonts
            .get(*font)
            .copied()
            .flatten()
            .ok_or(HostError::InvalidHandle)?;
        self.layer_mut(*layer)?.font = Some(resource);
        Ok(())
    }

    fn set_text(&mut self, layer: &usize, text: &str) -> Result<(), HostError> {
        if self.failing_renders > 0 {
            self.failing_renders -= 1;
            return Err(HostError::Render);
        }
        let record = self.layer_mut(*layer)?;
        record.text.clear();
        record
            .text
            .push_str(text)
            .map_err(|_| HostError::OutOfMemory)
    }
}

impl Clock for RecordingHost {
    fn now(&self) -> WallTime {
        self.time
    }

    fn is_24h_style(&self) -> bool {
        self.twenty_four_hour
    }
}

impl Outbox for RecordingHost {
    fn send(&mut self, message: &Dictionary) -> Result<(), AppMessageResult> {
        self.send_result?;
        self.sent
            .push(message.clone())
            .map_err(|_| AppMessageResult::Busy)
    }
}
