#![deny(unsafe_code)]
//! Noise-steered particle flow field engine.
//!
//! A fixed population of particles drifts across a wrapping screen. Every
//! frame each particle samples a 3D coherent noise field at its grid cell and
//! the current noise depth, turns the sample into a steering heading, blends
//! that into its velocity axis by axis, and moves. The noise depth advances a
//! little each frame, so the currents slowly evolve.
//!
//! [`ParticleField`] holds the particles and tunables; [`step`] holds the
//! motion model; [`FlowEngine`] wires both to seeded noise behind the
//! [`Engine`] trait.

pub mod field;
pub mod params;
pub mod particle;
pub mod step;

pub use field::ParticleField;
pub use params::{FlowParams, FrameParams, MAX_PARTICLE_COUNT};
pub use particle::Particle;

use flowfield_core::color::Color;
use flowfield_core::error::EngineError;
use flowfield_core::noise_field::SimplexNoise;
use flowfield_core::prng::Xorshift64;
use flowfield_core::surface::FillRect;
use flowfield_core::Engine;
use serde_json::Value;

/// Name under which this engine appears in seed files.
pub const ENGINE_NAME: &str = "flow-field";

/// A [`ParticleField`] driven by seeded OpenSimplex noise.
///
/// Holds two independently seeded generators: `steering` drives the motion
/// model, `auxiliary` can be reseeded on demand without disturbing the
/// trajectories.
pub struct FlowEngine {
    field: ParticleField,
    steering: SimplexNoise,
    auxiliary: SimplexNoise,
    background: Color,
}

impl FlowEngine {
    /// Creates an engine on a `width × height` screen.
    ///
    /// `seed` determines both noise generators and every initial position.
    /// The particle count is clamped to [`MAX_PARTICLE_COUNT`].
    /// Returns `EngineError::InvalidDimensions` if width or height is zero.
    pub fn new(
        width: usize,
        height: usize,
        seed: u64,
        params: FlowParams,
    ) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions);
        }
        let params = FlowParams {
            particle_count: params.particle_count.min(MAX_PARTICLE_COUNT),
            ..params
        };
        let mut rng = Xorshift64::new(seed);
        let auxiliary = SimplexNoise::new(rng.next_u64());
        let steering = SimplexNoise::new(rng.next_u64());
        let field = ParticleField::initialize(
            params.particle_count,
            width as f64,
            height as f64,
            params,
            &mut rng,
        );
        log::debug!(
            "flow engine seed={seed} steering={} auxiliary={}",
            steering.seed(),
            auxiliary.seed()
        );
        Ok(Self {
            field,
            steering,
            auxiliary,
            background: params.background,
        })
    }

    /// Creates an engine from a JSON params object, falling back to
    /// defaults for missing keys.
    pub fn from_json(
        width: usize,
        height: usize,
        seed: u64,
        json_params: &Value,
    ) -> Result<Self, EngineError> {
        Self::new(width, height, seed, FlowParams::from_json(json_params)?)
    }

    /// Read-only access to the particle field.
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Stages an absolute feature size for the next frame.
    pub fn set_feature_size(&mut self, value: f64) {
        self.field.set_feature_size(value);
    }

    /// Seed of the generator steering the particles.
    pub fn steering_seed(&self) -> u64 {
        self.steering.seed()
    }

    /// Seed of the auxiliary generator.
    pub fn auxiliary_seed(&self) -> u64 {
        self.auxiliary.seed()
    }
}

impl Engine for FlowEngine {
    fn advance_frame(&mut self, out: &mut Vec<FillRect>) {
        self.field.advance_frame(&self.steering, out);
    }

    fn width(&self) -> usize {
        self.field.width() as usize
    }

    fn height(&self) -> usize {
        self.field.height() as usize
    }

    fn background(&self) -> Color {
        self.background
    }

    fn params(&self) -> Value {
        self.field.params().to_json()
    }

    fn param_schema(&self) -> Value {
        FlowParams::schema()
    }

    fn adjust_feature_size(&mut self, delta: f64) {
        self.field.adjust_feature_size(delta);
    }

    fn reseed_auxiliary(&mut self, seed: u64) {
        log::debug!("auxiliary noise reseeded with {seed}");
        self.auxiliary = SimplexNoise::new(seed);
    }
}
