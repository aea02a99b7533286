//! Seeded 3D coherent noise consumed by the steering model.
//!
//! The motion model only relies on the [`NoiseField`] contract: a pure,
//! deterministic `eval3(x, y, z)` returning a value in `[-1, 1]`. Any coherent
//! noise satisfying it can be substituted.

use noise::{NoiseFn, OpenSimplex};

/// A seeded source of 3D coherent noise.
///
/// Implementations must be deterministic (same seed and inputs give the same
/// output) and side-effect free, so a single instance can be read from several
/// threads within a frame.
pub trait NoiseField: Send + Sync {
    /// Sample the noise at `(x, y, z)`. Finite inputs yield a value in `[-1, 1]`.
    fn eval3(&self, x: f64, y: f64, z: f64) -> f64;
}

/// OpenSimplex noise with its output clamped to `[-1, 1]`.
#[derive(Clone)]
pub struct SimplexNoise {
    noise: OpenSimplex,
    seed: u64,
}

impl SimplexNoise {
    /// Creates a generator from a 64-bit seed.
    ///
    /// The underlying generator takes a 32-bit seed; both halves of `seed`
    /// are folded into it so that high-bit-only seeds still differ.
    pub fn new(seed: u64) -> Self {
        Self {
            noise: OpenSimplex::new(fold_seed(seed)),
            seed,
        }
    }

    /// The seed this generator was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl std::fmt::Debug for SimplexNoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimplexNoise")
            .field("seed", &self.seed)
            .finish()
    }
}

impl NoiseField for SimplexNoise {
    fn eval3(&self, x: f64, y: f64, z: f64) -> f64 {
        // Degenerate scales (feature size 0) arrive here as inf/NaN.
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return f64::NAN;
        }
        self.noise.get([x, y, z]).clamp(-1.0, 1.0)
    }
}

/// Noise that returns the same value everywhere.
///
/// Useful for pinning the steering angle in fixtures and for uniform flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantNoise(pub f64);

impl NoiseField for ConstantNoise {
    fn eval3(&self, _x: f64, _y: f64, _z: f64) -> f64 {
        self.0
    }
}

fn fold_seed(seed: u64) -> u32 {
    (seed as u32) ^ ((seed >> 32) as u32)
}
