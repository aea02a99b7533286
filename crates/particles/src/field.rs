//! The particle collection and the frame loop over it.

use crate::params::{FlowParams, FrameParams};
use crate::particle::Particle;
use crate::step::step_with_noise;
use flowfield_core::noise_field::NoiseField;
use flowfield_core::prng::Xorshift64;
use flowfield_core::surface::FillRect;

/// Owns every particle plus the shared tunables and noise depth.
///
/// Particles are stored contiguously in render order. Each frame reads an
/// immutable [`FrameParams`] snapshot, so particles never see a parameter
/// change halfway through a frame.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    params: FlowParams,
    pending_feature_size: Option<f64>,
    z_offset: f64,
}

impl ParticleField {
    /// Places `count` particles uniformly at random in `[0, width) × [0, height)`,
    /// all at rest. A count of zero yields an empty field.
    pub fn initialize(
        count: usize,
        width: f64,
        height: f64,
        params: FlowParams,
        rng: &mut Xorshift64,
    ) -> Self {
        let particles = (0..count)
            .map(|_| {
                let x = rng.next_range(0.0, width);
                let y = rng.next_range(0.0, height);
                Particle::at_rest(x, y)
            })
            .collect();
        log::debug!("initialized {count} particles on a {width}x{height} field");
        Self::from_particles(particles, width, height, params)
    }

    /// Builds a field from explicit particle states, with `z_offset` at 0.
    pub fn from_particles(
        particles: Vec<Particle>,
        width: f64,
        height: f64,
        params: FlowParams,
    ) -> Self {
        Self {
            particles,
            width,
            height,
            params,
            pending_feature_size: None,
            z_offset: 0.0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Parameters in effect for the next frame, including any staged
    /// feature size.
    pub fn params(&self) -> FlowParams {
        FlowParams {
            feature_size: self.feature_size(),
            ..self.params
        }
    }

    /// Current noise depth. The next frame samples at this depth.
    pub fn z_offset(&self) -> f64 {
        self.z_offset
    }

    /// Feature size the next frame will use.
    pub fn feature_size(&self) -> f64 {
        self.pending_feature_size.unwrap_or(self.params.feature_size)
    }

    /// Stages a new noise spatial scale for the next frame.
    ///
    /// Not validated: zero or negative values are accepted.
    pub fn set_feature_size(&mut self, value: f64) {
        log::debug!("feature size -> {value}");
        self.pending_feature_size = Some(value);
    }

    /// Stages `feature_size + delta` for the next frame.
    pub fn adjust_feature_size(&mut self, delta: f64) {
        self.set_feature_size(self.feature_size() + delta);
    }

    /// Applies staged changes and snapshots the parameters for one frame.
    fn begin_frame(&mut self) -> FrameParams {
        if let Some(feature_size) = self.pending_feature_size.take() {
            self.params.feature_size = feature_size;
        }
        FrameParams {
            width: self.width,
            height: self.height,
            grid_size: self.params.grid_size,
            feature_size: self.params.feature_size,
            z_offset: self.z_offset,
            steer_magnitude: self.params.steer_magnitude,
            max_speed: self.params.max_speed,
            particle_size: self.params.particle_size,
            particle_color: self.params.particle_color,
        }
    }

    /// Steps every particle once against `noise` and appends one square per
    /// particle to `out`, in storage order. The noise depth then advances by
    /// `z_step`.
    pub fn advance_frame<N: NoiseField + ?Sized>(&mut self, noise: &N, out: &mut Vec<FillRect>) {
        let frame = self.begin_frame();
        out.reserve(self.particles.len());
        for p in &mut self.particles {
            let (next, rect) = step_with_noise(p, noise, &frame);
            *p = next;
            out.push(rect);
        }
        self.z_offset += self.params.z_step;
        log::trace!(
            "frame at z={} stepped {} particles",
            frame.z_offset,
            self.particles.len()
        );
    }
}
