//! Frame loop pieces shared by the window and headless drivers.

use flowfield_core::prng::Xorshift64;
use flowfield_core::surface::{present_frame, FillRect, PresentSurface};
use flowfield_core::{Engine, EngineError, Raster};

/// Mixed into the run seed to derive the reseed stream, so reseeds do not
/// replay the values that seeded the engine itself.
const RESEED_SALT: u64 = 0xA5A5_5A5A_C3C3_3C3C;

/// A user action the driving loop forwards to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    FeatureSizeUp,
    FeatureSizeDown,
    ReseedAuxiliary,
}

/// Source of seeds for [`Control::ReseedAuxiliary`].
pub fn reseed_stream(run_seed: u64) -> Xorshift64 {
    Xorshift64::new(run_seed ^ RESEED_SALT)
}

/// Applies one control to the engine. Effects land on the next frame.
pub fn apply_control(engine: &mut dyn Engine, control: Control, reseeds: &mut Xorshift64) {
    match control {
        Control::FeatureSizeUp => engine.adjust_feature_size(1.0),
        Control::FeatureSizeDown => engine.adjust_feature_size(-1.0),
        Control::ReseedAuxiliary => engine.reseed_auxiliary(reseeds.next_u64()),
    }
}

/// Advances the engine one frame and presents it on `surface`.
///
/// `commands` is scratch space reused across frames.
pub fn run_frame<S: PresentSurface + ?Sized>(
    engine: &mut dyn Engine,
    surface: &mut S,
    commands: &mut Vec<FillRect>,
) -> Result<(), EngineError> {
    commands.clear();
    engine.advance_frame(commands);
    present_frame(surface, engine.background(), commands)
}

/// Runs `frames` frames into an off-screen raster and returns it.
///
/// With zero frames the raster holds just the background.
pub fn run_headless(engine: &mut dyn Engine, frames: usize) -> Result<Raster, EngineError> {
    let mut raster = Raster::new(engine.width(), engine.height(), engine.background())?;
    let mut commands = Vec::new();
    for _ in 0..frames {
        run_frame(engine, &mut raster, &mut commands)?;
    }
    log::info!("rendered {frames} frames headless");
    Ok(raster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowfield_core::Color;
    use flowfield_particles::{FlowEngine, FlowParams};
    use serde_json::json;

    fn engine() -> FlowEngine {
        FlowEngine::from_json(60, 40, 42, &json!({"particle_count": 30})).unwrap()
    }

    #[test]
    fn feature_size_controls_step_by_one() {
        let mut e = engine();
        let mut reseeds = reseed_stream(42);
        apply_control(&mut e, Control::FeatureSizeUp, &mut reseeds);
        apply_control(&mut e, Control::FeatureSizeUp, &mut reseeds);
        apply_control(&mut e, Control::FeatureSizeDown, &mut reseeds);
        assert_eq!(e.params()["feature_size"], 21.0);
    }

    #[test]
    fn reseed_control_draws_from_stream() {
        let mut e = engine();
        let mut reseeds = reseed_stream(42);
        let expected = reseed_stream(42).next_u64();
        apply_control(&mut e, Control::ReseedAuxiliary, &mut reseeds);
        assert_eq!(e.auxiliary_seed(), expected);
    }

    #[test]
    fn run_frame_presents_one_frame_with_particles() {
        let mut e = engine();
        let mut raster = Raster::new(60, 40, Color::WHITE).unwrap();
        let mut commands = Vec::new();
        run_frame(&mut e, &mut raster, &mut commands).unwrap();
        assert_eq!(commands.len(), 30);
        assert_eq!(raster.frames_presented(), 1);
        assert!(raster.pixels().contains(&Color::BLACK.to_0rgb()));
    }

    #[test]
    fn run_headless_zero_frames_is_background_only() {
        let mut e = engine();
        let raster = run_headless(&mut e, 0).unwrap();
        assert_eq!((raster.width(), raster.height()), (60, 40));
        assert!(raster.pixels().iter().all(|&p| p == Color::WHITE.to_0rgb()));
    }

    #[test]
    fn run_headless_is_deterministic() {
        let mut a = engine();
        let mut b = engine();
        assert_eq!(
            run_headless(&mut a, 25).unwrap().pixels(),
            run_headless(&mut b, 25).unwrap().pixels()
        );
    }

    #[test]
    fn run_headless_uses_engine_background() {
        let params = FlowParams {
            particle_count: 0,
            background: Color::rgb(10, 20, 30),
            ..FlowParams::default()
        };
        let mut e = FlowEngine::new(8, 8, 1, params).unwrap();
        let raster = run_headless(&mut e, 3).unwrap();
        assert_eq!(
            Color::from_0rgb(raster.pixels()[4 * 8 + 4]),
            Color::rgb(10, 20, 30)
        );
        assert_eq!(raster.frames_presented(), 3);
    }
}
