//! Window host trait
//!
//! Abstracts the platform's windowing service: one window, text layers
//! attached to its root layer, and custom fonts.

use crate::config::{Color, FontResource, Rect, TextStyle};

/// Errors reported by the window host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostError {
    /// Host could not allocate the object
    OutOfMemory,
    /// Font or other resource not bundled
    ResourceNotFound,
    /// Handle does not refer to a live object
    InvalidHandle,
    /// No window has been created
    NoWindow,
    /// Drawing to the screen failed
    Render,
}

/// Trait for the platform's windowing service
///
/// The face owns every handle it receives and hands each one back exactly
/// once through the matching destroy/unload call.
pub trait WindowHost {
    /// Handle to a text layer
    type Layer;
    /// Handle to a loaded font
    type Font;

    /// Create the face window and push it onto the window stack
    fn create_window(&mut self, background: Color) -> Result<(), HostError>;

    /// Pop and destroy the face window
    fn destroy_window(&mut self);

    /// Bounds of the window's root layer
    fn root_bounds(&self) -> Rect;

    /// Create a text layer and attach it to the root layer
    fn create_text_layer(
        &mut self,
        frame: Rect,
        style: &TextStyle,
    ) -> Result<Self::Layer, HostError>;

    /// Detach and destroy a text layer
    fn destroy_text_layer(&mut self, layer: Self::Layer);

    /// Load a bundled font resource
    fn load_font(&mut self, font: FontResource) -> Result<Self::Font, HostError>;

    /// Release a loaded font
    fn unload_font(&mut self, font: Self::Font);

    /// Use a font for a text layer
    fn set_font(&mut self, layer: &Self::Layer, font: &Self::Font) -> Result<(), HostError>;

    /// Replace the text shown by a layer
    ///
    /// The host copies or renders `text` before returning; the face may
    /// overwrite its buffer afterwards.
    fn set_text(&mut self, layer: &Self::Layer, text: &str) -> Result<(), HostError>;
}
