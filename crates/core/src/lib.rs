//! Core constants, angle helpers, and shared primitives for the Radial Velocity demo workspace.

/// Default demo parameters in dimensionless teaching units.
pub mod constants {
    /// Mass of the host star.
    pub const MASS_STAR: f64 = 1.0;
    /// Mass of the orbiting planet.
    pub const MASS_PLANET: f64 = 0.1;
    /// Star-planet separation.
    pub const TOTAL_SEPARATION: f64 = 1.0;
    /// Angular speed shared by both bodies.
    pub const ANGULAR_SPEED: f64 = 1.0;
    /// Star speed magnitude `V` used by the fixed-speed variant.
    pub const STAR_SPEED: f64 = 1.0;
    /// Planet speed magnitude `v` used by the fixed-speed variant.
    pub const PLANET_SPEED: f64 = 1.5;
    /// Observer (Earth) position.
    pub const OBSERVER: [f64; 2] = [-2.0, 0.0];
    /// Center of mass position.
    pub const CENTER_OF_MASS: [f64; 2] = [0.0, 0.0];
    /// Denominator guard for cosine ratios of near-zero velocities.
    pub const VELOCITY_EPSILON: f64 = 1e-9;
    /// Degrees in one full orbit.
    pub const FULL_TURN_DEG: f64 = 360.0;
}

/// Angle unit helpers.
pub mod angle {
    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v.to_radians()
    }

    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(v: f64) -> f64 {
        v.to_degrees()
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 2]` math everywhere.
pub mod vector {
    /// Alias for a 2D vector in the orbital plane.
    pub type Vector2 = [f64; 2];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector2) -> f64 {
        v[0].hypot(v[1])
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector2, b: &Vector2) -> f64 {
        a[0] * b[0] + a[1] * b[1]
    }

    /// Vector addition.
    #[inline]
    pub fn add(a: &Vector2, b: &Vector2) -> Vector2 {
        [a[0] + b[0], a[1] + b[1]]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector2, b: &Vector2) -> Vector2 {
        [a[0] - b[0], a[1] - b[1]]
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale(v: &Vector2, s: f64) -> Vector2 {
        [v[0] * s, v[1] * s]
    }

    /// Unit vector along `v`, or `None` when `v` has zero length.
    #[inline]
    pub fn normalize(v: &Vector2) -> Option<Vector2> {
        let n = norm(v);
        if n > 0.0 && n.is_finite() {
            Some(scale(v, 1.0 / n))
        } else {
            None
        }
    }

    /// Unit vector along `v` with an additive guard on the length, so a zero
    /// vector maps to zero instead of NaN.
    #[inline]
    pub fn guarded_unit(v: &Vector2, epsilon: f64) -> Vector2 {
        scale(v, 1.0 / (norm(v) + epsilon))
    }
}
