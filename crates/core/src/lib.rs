#![deny(unsafe_code)]
//! Core types and traits for the flow field particle system.
//!
//! Provides the `Engine` trait consumed by the driving loop, the `NoiseField`
//! contract (with an OpenSimplex implementation), the `PresentSurface` draw
//! contract and its software `Raster`, the `Xorshift64` PRNG, `Seed`, and
//! parameter helpers.

pub mod color;
pub mod engine;
pub mod error;
pub mod noise_field;
pub mod params;
pub mod prng;
pub mod raster;
pub mod seed;
pub mod surface;

#[cfg(feature = "png")]
pub mod snapshot;

pub use color::Color;
pub use engine::Engine;
pub use error::EngineError;
pub use noise_field::{ConstantNoise, NoiseField, SimplexNoise};
pub use prng::Xorshift64;
pub use raster::Raster;
pub use seed::Seed;
pub use surface::{present_frame, FillRect, PresentSurface};
