use rv_core::angle;
use rv_core::constants::FULL_TURN_DEG;

/// Orbital phase θ. Any real value is accepted.
///
/// Held in degrees, the unit the demo's input widget works in, so a phase read
/// back for display is exactly what was passed in.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct PhaseAngle(f64);

impl PhaseAngle {
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self(deg)
    }

    #[inline]
    pub fn from_radians(rad: f64) -> Self {
        Self(angle::rad_to_deg(rad))
    }

    #[inline]
    pub fn radians(self) -> f64 {
        angle::deg_to_rad(self.0)
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// Equivalent phase in `[0, 360)` degrees.
    pub fn normalized_degrees(self) -> f64 {
        self.0.rem_euclid(FULL_TURN_DEG)
    }
}
