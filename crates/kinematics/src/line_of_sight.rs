//! Projection of body velocities on the observer's line of sight.
//!
//! Sign convention: the reference direction points from the observer toward the
//! center of mass, so a positive signed speed means the body is receding.

use rv_core::constants::VELOCITY_EPSILON;
use rv_core::vector::{self, Vector2};

use crate::config::{ConfigError, OrbitalConfig};

/// Unit vector from the observer toward the center of mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineOfSightDirection(Vector2);

impl LineOfSightDirection {
    pub fn new(observer: Vector2, center_of_mass: Vector2) -> Result<Self, ConfigError> {
        vector::normalize(&vector::sub(&center_of_mass, &observer))
            .map(Self)
            .ok_or(ConfigError::DegenerateLineOfSight)
    }

    pub fn from_config(config: &OrbitalConfig) -> Result<Self, ConfigError> {
        Self::new(config.observer, config.center_of_mass)
    }

    #[inline]
    pub fn unit(&self) -> Vector2 {
        self.0
    }

    /// Signed speed and angle between `velocity` and this direction.
    pub fn project(&self, velocity: Vector2) -> LineOfSight {
        let signed_speed = vector::dot(&velocity, &self.0);
        // Zero velocity gives 0 / ε = 0, i.e. exactly 90°.
        let cos_phi = (signed_speed / (vector::norm(&velocity) + VELOCITY_EPSILON)).clamp(-1.0, 1.0);
        LineOfSight {
            unit_direction: self.0,
            signed_speed,
            angle_from_line_of_sight_deg: cos_phi.acos().to_degrees(),
        }
    }
}

/// Line-of-sight component of one body's velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineOfSight {
    pub unit_direction: Vector2,
    /// Positive when receding from the observer.
    pub signed_speed: f64,
    /// Angle φ in `[0, 180]` degrees between the velocity and `unit_direction`.
    pub angle_from_line_of_sight_deg: f64,
}

impl LineOfSight {
    /// `90° - φ`: the angle between the velocity and the plane of the sky.
    #[inline]
    pub fn complement_deg(&self) -> f64 {
        90.0 - self.angle_from_line_of_sight_deg
    }

    #[inline]
    pub fn is_receding(&self) -> bool {
        self.signed_speed > 0.0
    }

    /// Line-of-sight component as a vector along `unit_direction`.
    pub fn component(&self) -> Vector2 {
        vector::scale(&self.unit_direction, self.signed_speed)
    }
}

/// Project `body_velocity` on the observer → center-of-mass direction.
///
/// Coincident observer and center of mass leave no direction to project on;
/// the result then reports zero signed speed at 90°, the same fallback used for
/// a zero velocity. Use [`LineOfSightDirection::new`] to reject that case instead.
pub fn compute_line_of_sight(
    observer: Vector2,
    center_of_mass: Vector2,
    body_velocity: Vector2,
) -> LineOfSight {
    let direction = LineOfSightDirection::new(observer, center_of_mass)
        .unwrap_or(LineOfSightDirection([0.0, 0.0]));
    direction.project(body_velocity)
}
