/// One simulated speck.
///
/// Velocity is stored in polar form (`speed`, `velocity_angle`). The steering
/// fields hold whatever the most recent frame computed and are overwritten
/// every step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    pub velocity_angle: f64,
    pub steer_magnitude: f64,
    pub steer_angle: f64,
}

impl Particle {
    /// A particle at rest at `(x, y)` with no steering yet applied.
    pub fn at_rest(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            speed: 0.0,
            velocity_angle: 0.0,
            steer_magnitude: 0.0,
            steer_angle: 0.0,
        }
    }

    /// Cartesian velocity `(vx, vy)`.
    pub fn velocity(&self) -> (f64, f64) {
        (
            self.speed * self.velocity_angle.cos(),
            self.speed * self.velocity_angle.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn at_rest_zeroes_motion_state() {
        let p = Particle::at_rest(3.0, 4.0);
        assert_eq!((p.x, p.y), (3.0, 4.0));
        assert_eq!(p.speed, 0.0);
        assert_eq!(p.velocity_angle, 0.0);
        assert_eq!(p.steer_magnitude, 0.0);
        assert_eq!(p.steer_angle, 0.0);
        assert_eq!(p.velocity(), (0.0, 0.0));
    }

    #[test]
    fn velocity_decomposes_polar_form() {
        let p = Particle {
            speed: 2.0,
            velocity_angle: FRAC_PI_2,
            ..Particle::at_rest(0.0, 0.0)
        };
        let (vx, vy) = p.velocity();
        assert!(vx.abs() < 1e-12);
        assert!((vy - 2.0).abs() < 1e-12);
    }
}
