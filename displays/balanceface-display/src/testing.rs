//! In-memory monochrome framebuffer for tests

use core::convert::Infallible;

use balanceface_core::config::Rect;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

pub const WIDTH: usize = 144;
pub const HEIGHT: usize = 168;

/// 144x168 framebuffer
pub struct FrameBuffer {
    pixels: [[bool; WIDTH]; HEIGHT],
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            pixels: [[false; WIDTH]; HEIGHT],
        }
    }

    /// Lit pixels on the whole screen
    pub fn lit_total(&self) -> usize {
        self.pixels
            .iter()
            .map(|row| row.iter().filter(|&&p| p).count())
            .sum()
    }

    /// Lit pixels inside a frame
    pub fn lit_in(&self, frame: Rect) -> usize {
        let x0 = frame.x.max(0) as usize;
        let y0 = frame.y.max(0) as usize;
        let x1 = (x0 + frame.w as usize).min(WIDTH);
        let y1 = (y0 + frame.h as usize).min(HEIGHT);
        self.pixels[y0..y1]
            .iter()
            .map(|row| row[x0..x1].iter().filter(|&&p| p).count())
            .sum()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                let (x, y) = (point.x as usize, point.y as usize);
                if x < WIDTH && y < HEIGHT {
                    self.pixels[y][x] = color.is_on();
                }
            }
        }
        Ok(())
    }
}
