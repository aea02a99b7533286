//! Tunable parameters for the flow field and the per-frame snapshot of them.

use flowfield_core::color::Color;
use flowfield_core::error::EngineError;
use flowfield_core::params::{param_color, param_f64, param_usize};
use serde_json::{json, Value};

/// Default number of particles.
pub const DEFAULT_PARTICLE_COUNT: usize = 1000;
/// Upper bound on the particle count; larger requests are clamped to it.
pub const MAX_PARTICLE_COUNT: usize = 100_000;
/// Default noise-sampling cell size in pixels.
pub const DEFAULT_GRID_SIZE: f64 = 10.0;
/// Default noise spatial scale. Larger values give broader currents.
pub const DEFAULT_FEATURE_SIZE: f64 = 20.0;
/// Default magnitude of the per-frame steering vector.
pub const DEFAULT_STEER_MAGNITUDE: f64 = 0.01;
/// Default speed cap in pixels per frame.
pub const DEFAULT_MAX_SPEED: f64 = 1.0;
/// Default side length of a particle's square in pixels.
pub const DEFAULT_PARTICLE_SIZE: f64 = 3.0;
/// Default noise-depth increment per frame.
pub const DEFAULT_Z_STEP: f64 = 0.1;

/// Flow field tunables.
///
/// Use [`Default`] for the classic look: 1000 black specks on white, drifting
/// through 10px cells of noise with feature size 20.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowParams {
    pub particle_count: usize,
    pub grid_size: f64,
    pub feature_size: f64,
    pub steer_magnitude: f64,
    pub max_speed: f64,
    pub particle_size: f64,
    pub z_step: f64,
    pub particle_color: Color,
    pub background: Color,
}

impl Default for FlowParams {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            grid_size: DEFAULT_GRID_SIZE,
            feature_size: DEFAULT_FEATURE_SIZE,
            steer_magnitude: DEFAULT_STEER_MAGNITUDE,
            max_speed: DEFAULT_MAX_SPEED,
            particle_size: DEFAULT_PARTICLE_SIZE,
            z_step: DEFAULT_Z_STEP,
            particle_color: Color::BLACK,
            background: Color::WHITE,
        }
    }
}

impl FlowParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    ///
    /// `particle_count` is clamped to [`MAX_PARTICLE_COUNT`]. Other numeric
    /// values are not range-checked; degenerate values such as a zero
    /// feature size are accepted and show up as NaN trajectories.
    /// Fails only on malformed colors.
    pub fn from_json(params: &Value) -> Result<Self, EngineError> {
        Ok(Self {
            particle_count: param_usize(params, "particle_count", DEFAULT_PARTICLE_COUNT)
                .min(MAX_PARTICLE_COUNT),
            grid_size: param_f64(params, "grid_size", DEFAULT_GRID_SIZE),
            feature_size: param_f64(params, "feature_size", DEFAULT_FEATURE_SIZE),
            steer_magnitude: param_f64(params, "steer_magnitude", DEFAULT_STEER_MAGNITUDE),
            max_speed: param_f64(params, "max_speed", DEFAULT_MAX_SPEED),
            particle_size: param_f64(params, "particle_size", DEFAULT_PARTICLE_SIZE),
            z_step: param_f64(params, "z_step", DEFAULT_Z_STEP),
            particle_color: param_color(params, "particle_color", Color::BLACK)?,
            background: param_color(params, "background", Color::WHITE)?,
        })
    }

    /// Current values as a JSON object, in the same shape `from_json` reads.
    pub fn to_json(&self) -> Value {
        json!({
            "particle_count": self.particle_count,
            "grid_size": self.grid_size,
            "feature_size": self.feature_size,
            "steer_magnitude": self.steer_magnitude,
            "max_speed": self.max_speed,
            "particle_size": self.particle_size,
            "z_step": self.z_step,
            "particle_color": self.particle_color.to_hex(),
            "background": self.background.to_hex(),
        })
    }

    /// Schema for every key `from_json` understands.
    ///
    /// Only the `particle_count` maximum is enforced. The other ranges are
    /// suggested slider bounds, flagged with `"advisory": true`.
    pub fn schema() -> Value {
        json!({
            "particle_count": {
                "type": "integer",
                "default": DEFAULT_PARTICLE_COUNT,
                "min": 0,
                "max": MAX_PARTICLE_COUNT,
                "description": "Number of particles, fixed for the run; larger values are clamped"
            },
            "grid_size": {
                "type": "number",
                "advisory": true,
                "default": DEFAULT_GRID_SIZE,
                "min": 1.0,
                "max": 100.0,
                "description": "Noise-sampling cell size in pixels"
            },
            "feature_size": {
                "type": "number",
                "advisory": true,
                "default": DEFAULT_FEATURE_SIZE,
                "min": 1.0,
                "max": 200.0,
                "description": "Noise spatial scale; larger means broader currents"
            },
            "steer_magnitude": {
                "type": "number",
                "advisory": true,
                "default": DEFAULT_STEER_MAGNITUDE,
                "min": 0.0,
                "max": 1.0,
                "description": "Magnitude of the steering vector added each frame"
            },
            "max_speed": {
                "type": "number",
                "advisory": true,
                "default": DEFAULT_MAX_SPEED,
                "min": 0.0,
                "max": 10.0,
                "description": "Speed cap in pixels per frame"
            },
            "particle_size": {
                "type": "number",
                "advisory": true,
                "default": DEFAULT_PARTICLE_SIZE,
                "min": 1.0,
                "max": 20.0,
                "description": "Side length of each particle square in pixels"
            },
            "z_step": {
                "type": "number",
                "advisory": true,
                "default": DEFAULT_Z_STEP,
                "min": 0.0,
                "max": 1.0,
                "description": "Noise depth advanced per frame"
            },
            "particle_color": {
                "type": "color",
                "default": Color::BLACK.to_hex(),
                "description": "Particle fill color"
            },
            "background": {
                "type": "color",
                "default": Color::WHITE.to_hex(),
                "description": "Background clear color"
            }
        })
    }
}

/// Immutable view of everything one frame's step needs.
///
/// Taken once at the start of a frame, so parameter changes made during a
/// frame can only show up on the next one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    pub width: f64,
    pub height: f64,
    pub grid_size: f64,
    pub feature_size: f64,
    pub z_offset: f64,
    pub steer_magnitude: f64,
    pub max_speed: f64,
    pub particle_size: f64,
    pub particle_color: Color,
}
