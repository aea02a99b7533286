//! The `Engine` trait the driving loop consumes.
//!
//! The trait is object-safe so a driver can hold a `Box<dyn Engine>` without
//! knowing which simulation it is stepping.

use crate::color::Color;
use crate::surface::FillRect;
use serde_json::Value;

/// A frame-stepped simulation that draws itself as filled rectangles.
///
/// One call to [`Engine::advance_frame`] is one frame. Parameter changes made
/// between frames take effect at the start of the next one.
pub trait Engine {
    /// Advance every entity by one frame, appending its draw commands to `out`
    /// in render order.
    fn advance_frame(&mut self, out: &mut Vec<FillRect>);

    /// Surface width in pixels.
    fn width(&self) -> usize;

    /// Surface height in pixels.
    fn height(&self) -> usize;

    /// Color the surface is cleared to before each frame.
    fn background(&self) -> Color;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all available parameters, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;

    /// Nudge the noise spatial scale by `delta`, effective next frame.
    fn adjust_feature_size(&mut self, delta: f64);

    /// Replace the auxiliary noise generator with one built from `seed`.
    fn reseed_auxiliary(&mut self, seed: u64);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Minimal engine used to verify trait object safety.
    struct MockEngine {
        frames: usize,
        feature_size: f64,
        aux_seed: u64,
    }

    impl MockEngine {
        fn new() -> Self {
            Self {
                frames: 0,
                feature_size: 20.0,
                aux_seed: 0,
            }
        }
    }

    impl Engine for MockEngine {
        fn advance_frame(&mut self, out: &mut Vec<FillRect>) {
            self.frames += 1;
            out.push(FillRect::square(self.frames as f64, 0.0, 1.0, Color::BLACK));
        }

        fn width(&self) -> usize {
            8
        }

        fn height(&self) -> usize {
            4
        }

        fn background(&self) -> Color {
            Color::WHITE
        }

        fn params(&self) -> Value {
            json!({"frames": self.frames, "feature_size": self.feature_size})
        }

        fn param_schema(&self) -> Value {
            json!({"feature_size": {"type": "number", "default": 20.0}})
        }

        fn adjust_feature_size(&mut self, delta: f64) {
            self.feature_size += delta;
        }

        fn reseed_auxiliary(&mut self, seed: u64) {
            self.aux_seed = seed;
        }
    }

    #[test]
    fn engine_trait_is_object_safe() {
        let engine: Box<dyn Engine> = Box::new(MockEngine::new());
        assert_eq!(engine.width(), 8);
        assert_eq!(engine.height(), 4);
    }

    #[test]
    fn advance_frame_appends_commands() {
        let mut engine = MockEngine::new();
        let mut out = Vec::new();
        engine.advance_frame(&mut out);
        engine.advance_frame(&mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].x, 2.0);
    }

    #[test]
    fn dyn_engine_mut_reference_works() {
        let mut engine = MockEngine::new();
        let engine_ref: &mut dyn Engine = &mut engine;
        engine_ref.adjust_feature_size(-1.0);
        engine_ref.reseed_auxiliary(5);
        assert_eq!(engine_ref.params()["feature_size"], 19.0);
        assert_eq!(engine.aux_seed, 5);
    }
}
