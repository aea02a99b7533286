//! The per-particle motion model.
//!
//! One call to [`step_particle`] moves one particle by one frame:
//!
//! 1. map the particle's pixel position to a grid cell,
//! 2. turn the noise sample for that cell into a steering heading,
//! 3. blend the steering vector into the velocity, axis by axis,
//! 4. cap the speed, keeping the direction,
//! 5. integrate the position with the new velocity,
//! 6. wrap positions that left the screen back to the origin of that axis,
//! 7. emit a square at the new position.
//!
//! Everything here is a pure function of its inputs. Degenerate parameters
//! (zero feature size, zero grid size) produce NaN or infinite values rather
//! than errors.

use crate::params::FrameParams;
use crate::particle::Particle;
use flowfield_core::noise_field::NoiseField;
use flowfield_core::surface::FillRect;
use std::f64::consts::FRAC_PI_2;

/// Grid cell `(col, row)` containing `(x, y)`.
///
/// Each index is `floor(pos / grid_size)` clamped to the last whole cell, so
/// a position sitting exactly on the right or bottom edge lands in the last
/// column or row. A grid larger than the screen is a single cell.
pub fn grid_cell(x: f64, y: f64, frame: &FrameParams) -> (usize, usize) {
    (
        axis_cell(x, frame.width, frame.grid_size),
        axis_cell(y, frame.height, frame.grid_size),
    )
}

fn axis_cell(pos: f64, extent: f64, grid_size: f64) -> usize {
    // max() discards NaN, so `last` is always a valid clamp bound.
    let last = ((extent / grid_size).floor() - 1.0).max(0.0);
    // NaN positions saturate to cell 0 in the cast.
    (pos / grid_size).floor().clamp(0.0, last) as usize
}

/// Samples `noise` for the cell `(col, row)` at the frame's depth.
pub fn sample_noise<N: NoiseField + ?Sized>(
    noise: &N,
    col: usize,
    row: usize,
    frame: &FrameParams,
) -> f64 {
    noise.eval3(
        col as f64 / frame.feature_size,
        row as f64 / frame.feature_size,
        frame.z_offset / frame.feature_size,
    )
}

/// Maps a noise sample in `[-1, 1]` onto a heading in `[π/2, 3π/2]`.
///
/// Steering only ever points into the left half-plane; the currents this
/// produces all drift leftwards with vertical swirl.
pub fn steer_angle(sample: f64) -> f64 {
    (sample + 1.0) * FRAC_PI_2 + FRAC_PI_2
}

/// Adds steering component `acc` to velocity component `vel` on one axis.
///
/// Steering that opposes the current motion (signs differ, zero counting as
/// positive) is added in full. Steering that reinforces it is scaled by
/// `1 - vel²`, which fades out as `|vel|` nears 1 and turns negative past it.
pub fn blend_axis(vel: f64, acc: f64) -> f64 {
    let opposing = (vel >= 0.0 && acc < 0.0) || (vel < 0.0 && acc >= 0.0);
    if opposing {
        vel + acc
    } else {
        vel + acc * (1.0 - vel * vel)
    }
}

/// Moves a coordinate that left `[0, extent]` to the origin of the edge it
/// crossed: past the far edge goes to 0, below 0 goes to `extent`.
pub fn wrap_axis(pos: f64, extent: f64) -> f64 {
    if pos > extent {
        0.0
    } else if pos < 0.0 {
        extent
    } else {
        pos
    }
}

/// Advances one particle given the noise sample for its cell.
///
/// Returns the particle's new state and the square to draw for it.
pub fn step_particle(p: &Particle, sample: f64, frame: &FrameParams) -> (Particle, FillRect) {
    let steer_angle = steer_angle(sample);
    let steer_magnitude = frame.steer_magnitude;
    let acc_x = steer_magnitude * steer_angle.cos();
    let acc_y = steer_magnitude * steer_angle.sin();

    let (vel_x, vel_y) = p.velocity();
    let vel_x = blend_axis(vel_x, acc_x);
    let vel_y = blend_axis(vel_y, acc_y);

    let raw_speed = (vel_x * vel_x + vel_y * vel_y).sqrt();
    // Written as a comparison so a NaN speed stays NaN.
    let speed = if raw_speed > frame.max_speed {
        frame.max_speed
    } else {
        raw_speed
    };
    let velocity_angle = vel_y.atan2(vel_x);

    let x = wrap_axis(p.x + speed * velocity_angle.cos(), frame.width);
    let y = wrap_axis(p.y + speed * velocity_angle.sin(), frame.height);

    let next = Particle {
        x,
        y,
        speed,
        velocity_angle,
        steer_magnitude,
        steer_angle,
    };
    let rect = FillRect::square(x, y, frame.particle_size, frame.particle_color);
    (next, rect)
}

/// Looks up the particle's cell, samples `noise` there, and steps it.
pub fn step_with_noise<N: NoiseField + ?Sized>(
    p: &Particle,
    noise: &N,
    frame: &FrameParams,
) -> (Particle, FillRect) {
    let (col, row) = grid_cell(p.x, p.y, frame);
    let sample = sample_noise(noise, col, row, frame);
    step_particle(p, sample, frame)
}
