//! Interactive driver: a resizable minifb window.
//!
//! Keys (acted on when released): `W` grows the feature size, `S` shrinks
//! it, `Space` reseeds the auxiliary noise. `Escape` or closing the window
//! quits.

use crate::driver::{apply_control, reseed_stream, run_frame, Control};
use crate::error::CliError;
use flowfield_core::surface::{FillRect, PresentSurface};
use flowfield_core::{Color, Engine, EngineError, Raster};
use minifb::{Key, ScaleMode, Window, WindowOptions};

const TITLE: &str = "Flow Field";

/// A window that shows a software raster on every `present`.
struct WindowSurface {
    window: Window,
    raster: Raster,
}

impl PresentSurface for WindowSurface {
    fn clear(&mut self, color: Color) {
        self.raster.clear(color);
    }

    fn fill_rect(&mut self, rect: &FillRect) {
        self.raster.fill_rect(rect);
    }

    fn present(&mut self) -> Result<(), EngineError> {
        self.window
            .update_with_buffer(
                self.raster.pixels(),
                self.raster.width(),
                self.raster.height(),
            )
            .map_err(|e| EngineError::Surface(e.to_string()))?;
        self.raster.present()
    }
}

fn control_for(key: Key) -> Option<Control> {
    match key {
        Key::W => Some(Control::FeatureSizeUp),
        Key::S => Some(Control::FeatureSizeDown),
        Key::Space => Some(Control::ReseedAuxiliary),
        _ => None,
    }
}

/// Runs the engine in a window until Escape is pressed or the window closes.
pub fn run(engine: &mut dyn Engine, run_seed: u64, fps: usize) -> Result<u64, CliError> {
    let width = engine.width();
    let height = engine.height();
    let options = WindowOptions {
        resize: true,
        scale_mode: ScaleMode::AspectRatioStretch,
        ..WindowOptions::default()
    };
    let mut window =
        Window::new(TITLE, width, height, options).map_err(|e| CliError::Window(e.to_string()))?;
    window.set_target_fps(fps);
    log::info!("opened {width}x{height} window at {fps} fps");

    let mut surface = WindowSurface {
        window,
        raster: Raster::new(width, height, engine.background())?,
    };
    let mut reseeds = reseed_stream(run_seed);
    let mut commands = Vec::new();

    while surface.window.is_open() && !surface.window.is_key_down(Key::Escape) {
        run_frame(engine, &mut surface, &mut commands)?;
        for control in surface
            .window
            .get_keys_released()
            .into_iter()
            .filter_map(control_for)
        {
            apply_control(engine, control, &mut reseeds);
        }
    }

    let frames = surface.raster.frames_presented();
    log::info!("window closed after {frames} frames");
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_controls() {
        assert_eq!(control_for(Key::W), Some(Control::FeatureSizeUp));
        assert_eq!(control_for(Key::S), Some(Control::FeatureSizeDown));
        assert_eq!(control_for(Key::Space), Some(Control::ReseedAuxiliary));
        assert_eq!(control_for(Key::A), None);
        assert_eq!(control_for(Key::Escape), None);
    }
}
