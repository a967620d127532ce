//! Display resources owned by the face
//!
//! Each text region holds a layer and a font. Acquisition is all or
//! nothing: if a later step fails, everything acquired so far is handed
//! back to the host before the error is returned.

use crate::config::{Layout, RegionSpec};
use crate::traits::{HostError, WindowHost};

/// A text layer and the font it renders with
pub struct Region<H: WindowHost> {
    layer: H::Layer,
    font: H::Font,
}

impl<H: WindowHost> Region<H> {
    /// Create the layer, load its font and attach the font to the layer
    pub fn acquire(host: &mut H, region: &RegionSpec) -> Result<Self, HostError> {
        let layer = host.create_text_layer(region.frame, &region.style)?;

        let font = match host.load_font(region.font) {
            Ok(font) => font,
            Err(e) => {
                host.destroy_text_layer(layer);
                return Err(e);
            }
        };

        if let Err(e) = host.set_font(&layer, &font) {
            host.unload_font(font);
            host.destroy_text_layer(layer);
            return Err(e);
        }

        Ok(Self { layer, font })
    }

    /// Show text in this region
    pub fn set_text(&self, host: &mut H, text: &str) -> Result<(), HostError> {
        host.set_text(&self.layer, text)
    }

    /// Split into handles for release
    fn into_parts(self) -> (H::Layer, H::Font) {
        (self.layer, self.font)
    }
}

/// Both regions of the face
pub struct FaceResources<H: WindowHost> {
    pub time: Region<H>,
    pub balance: Region<H>,
}

impl<H: WindowHost> FaceResources<H> {
    /// Acquire both regions described by the layout
    pub fn acquire(host: &mut H, layout: &Layout) -> Result<Self, HostError> {
        let time = Region::acquire(host, &layout.time)?;

        let balance = match Region::acquire(host, &layout.balance) {
            Ok(region) => region,
            Err(e) => {
                let (layer, font) = time.into_parts();
                host.unload_font(font);
                host.destroy_text_layer(layer);
                return Err(e);
            }
        };

        Ok(Self { time, balance })
    }

    /// Hand every handle back to the host
    ///
    /// Fonts are unloaded before the layers that use them are destroyed.
    pub fn release(self, host: &mut H) {
        let (time_layer, time_font) = self.time.into_parts();
        let (balance_layer, balance_font) = self.balance.into_parts();

        host.unload_font(time_font);
        host.unload_font(balance_font);
        host.destroy_text_layer(time_layer);
        host.destroy_text_layer(balance_layer);
    }
}
