//! The presentation contract between engines and whatever displays them.
//!
//! Engines never draw directly. Each frame they emit an ordered list of
//! [`FillRect`] commands, and the driving loop replays them against a
//! [`PresentSurface`] via [`present_frame`].

use crate::color::Color;
use crate::error::EngineError;

/// A filled axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub color: Color,
}

impl FillRect {
    /// A `size × size` square anchored at `(x, y)`.
    pub fn square(x: f64, y: f64, size: f64, color: Color) -> Self {
        Self {
            x,
            y,
            w: size,
            h: size,
            color,
        }
    }
}

/// Something frames can be drawn onto and shown.
pub trait PresentSurface {
    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Color);

    /// Fill one rectangle. Parts outside the surface are clipped.
    fn fill_rect(&mut self, rect: &FillRect);

    /// Show the frame drawn since the last `clear`.
    fn present(&mut self) -> Result<(), EngineError>;
}

/// Clears `surface` to `background`, replays `commands` in order, and presents.
pub fn present_frame<S: PresentSurface + ?Sized>(
    surface: &mut S,
    background: Color,
    commands: &[FillRect],
) -> Result<(), EngineError> {
    surface.clear(background);
    for rect in commands {
        surface.fill_rect(rect);
    }
    surface.present()
}
