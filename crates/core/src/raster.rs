//! Software [`PresentSurface`] backed by a 0RGB pixel buffer.
//!
//! The buffer layout (`0x00RRGGBB`, row-major) is what window framebuffers
//! take directly, and [`Raster::to_rgba8`] converts it for image export.

use crate::color::Color;
use crate::error::EngineError;
use crate::surface::{FillRect, PresentSurface};

/// A `width × height` software framebuffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
    frames_presented: u64,
}

impl Raster {
    /// Creates a raster filled with `background`.
    ///
    /// Returns `EngineError::InvalidDimensions` if either dimension is zero
    /// or the pixel count overflows.
    pub fn new(width: usize, height: usize, background: Color) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .ok_or(EngineError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            pixels: vec![background.to_0rgb(); len],
            frames_presented: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major 0RGB pixels.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Number of times [`PresentSurface::present`] has been called.
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Converts the buffer to RGBA8 bytes (alpha always 255).
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|&p| {
                let c = Color::from_0rgb(p);
                [c.r, c.g, c.b, 255u8]
            })
            .collect()
    }
}

/// Clips the half-open span `[start, start + len)` to `[0, limit)`.
///
/// `start` is truncated toward zero first, matching integer rect anchoring.
/// Non-finite spans clip to nothing.
fn clip_span(start: f64, len: f64, limit: usize) -> Option<(usize, usize)> {
    if !start.is_finite() || !len.is_finite() || len <= 0.0 {
        return None;
    }
    let origin = start.trunc();
    let lo = origin.max(0.0);
    let hi = (origin + len.round()).min(limit as f64);
    if hi <= lo {
        return None;
    }
    Some((lo as usize, hi as usize))
}

impl PresentSurface for Raster {
    fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_0rgb());
    }

    fn fill_rect(&mut self, rect: &FillRect) {
        let Some((x0, x1)) = clip_span(rect.x, rect.w, self.width) else {
            return;
        };
        let Some((y0, y1)) = clip_span(rect.y, rect.h, self.height) else {
            return;
        };
        let packed = rect.color.to_0rgb();
        for y in y0..y1 {
            let row = y * self.width;
            self.pixels[row + x0..row + x1].fill(packed);
        }
    }

    fn present(&mut self) -> Result<(), EngineError> {
        self.frames_presented += 1;
        Ok(())
    }
}
