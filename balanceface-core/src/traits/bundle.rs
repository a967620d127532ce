//! Host assembled from separate services
//!
//! Platforms usually provide the window, clock and messaging services as
//! separate pieces; `HostBundle` joins them into one [`FaceHost`].
//!
//! [`FaceHost`]: super::FaceHost

use balanceface_protocol::{AppMessageResult, Dictionary};

use super::{Clock, HostError, Outbox, WindowHost};
use crate::config::{Color, FontResource, Rect, TextStyle};
use crate::format::WallTime;

/// Window, clock and outbox services joined into one host
#[derive(Debug, Clone, Default)]
pub struct HostBundle<W, C, O> {
    pub window: W,
    pub clock: C,
    pub outbox: O,
}

impl<W, C, O> HostBundle<W, C, O> {
    pub fn new(window: W, clock: C, outbox: O) -> Self {
        Self {
            window,
            clock,
            outbox,
        }
    }
}

impl<W: WindowHost, C, O> WindowHost for HostBundle<W, C, O> {
    type Layer = W::Layer;
    type Font = W::Font;

    fn create_window(&mut self, background: Color) -> Result<(), HostError> {
        self.window.create_window(background)
    }

    fn destroy_window(&mut self) {
        self.window.destroy_window()
    }

    fn root_bounds(&self) -> Rect {
        self.window.root_bounds()
    }

    fn create_text_layer(
        &mut self,
        frame: Rect,
        style: &TextStyle,
    ) -> Result<Self::Layer, HostError> {
        self.window.create_text_layer(frame, style)
    }

    fn destroy_text_layer(&mut self, layer: Self::Layer) {
        self.window.destroy_text_layer(layer)
    }

    fn load_font(&mut self, font: FontResource) -> Result<Self::Font, HostError> {
        self.window.load_font(font)
    }

    fn unload_font(&mut self, font: Self::Font) {
        self.window.unload_font(font)
    }

    fn set_font(&mut self, layer: &Self::Layer, font: &Self::Font) -> Result<(), HostError> {
        self.window.set_font(layer, font)
    }

    fn set_text(&mut self, layer: &Self::Layer, text: &str) -> Result<(), HostError> {
        self.window.set_text(layer, text)
    }
}

impl<W, C: Clock, O> Clock for HostBundle<W, C, O> {
    fn now(&self) -> WallTime {
        self.clock.now()
    }

    fn is_24h_style(&self) -> bool {
        self.clock.is_24h_style()
    }
}

impl<W, C, O: Outbox> Outbox for HostBundle<W, C, O> {
    fn send(&mut self, message: &Dictionary) -> Result<(), AppMessageResult> {
        self.outbox.send(message)
    }
}

/// Clock fixed at one time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedClock {
    pub time: WallTime,
    pub twenty_four_hour: bool,
}

impl Clock for FixedClock {
    fn now(&self) -> WallTime {
        self.time
    }

    fn is_24h_style(&self) -> bool {
        self.twenty_four_hour
    }
}

/// Outbox for faces that never talk back
///
/// Every send fails with `NotConnected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoOutbox;

impl Outbox for NoOutbox {
    fn send(&mut self, _message: &Dictionary) -> Result<(), AppMessageResult> {
        Err(AppMessageResult::NotConnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FaceConfig;
    use crate::face::{TickOutcome, WatchFace};
    use crate::testing::RecordingHost;

    #[test]
    fn test_bundle_forwards() {
        let clock = FixedClock {
            time: WallTime::new(21, 5, 0).unwrap(),
            twenty_four_hour: false,
        };
        let config = FaceConfig {
            refresh_interval_min: Some(1),
            ..FaceConfig::default()
        };
        let host = HostBundle::new(RecordingHost::new(), clock, NoOutbox);
        let mut face = WatchFace::start(host, config).unwrap();

        // Clock comes from the bundle, not the recording host
        assert_eq!(face.time_text(), "09:05");
        assert_eq!(face.host().window.layer_text(0), Some("09:05"));

        let outcome = face.on_tick(WallTime::new(21, 6, 0).unwrap()).unwrap();
        assert_eq!(
            outcome,
            TickOutcome::RefreshFailed(AppMessageResult::NotConnected)
        );
    }
}
