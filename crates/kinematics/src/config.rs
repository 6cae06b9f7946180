//! Immutable physical parameters of the demo system.

use rv_core::constants;
use rv_core::vector::{self, Vector2};
use thiserror::Error;

/// How orbital speeds are derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbitalMotion {
    /// Both bodies share one angular speed; speeds scale with orbit radius.
    Angular { angular_speed: f64 },
    /// Speed magnitudes are given directly (`V` for the star, `v` for the planet).
    FixedSpeeds { star_speed: f64, planet_speed: f64 },
}

impl Default for OrbitalMotion {
    fn default() -> Self {
        OrbitalMotion::Angular {
            angular_speed: constants::ANGULAR_SPEED,
        }
    }
}

/// Star-planet system plus observer geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalConfig {
    pub mass_star: f64,
    pub mass_planet: f64,
    pub total_separation: f64,
    pub motion: OrbitalMotion,
    pub observer: Vector2,
    pub center_of_mass: Vector2,
}

/// Validation failures for [`OrbitalConfig`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be finite and non-negative (got {value})")]
    InvalidMass { name: &'static str, value: f64 },
    #[error("total mass must be positive")]
    ZeroTotalMass,
    #[error("total separation must be finite and non-negative (got {0})")]
    InvalidSeparation(f64),
    #[error("{name} must be finite (got {value})")]
    InvalidSpeed { name: &'static str, value: f64 },
    #[error("{name} must have finite coordinates")]
    InvalidPoint { name: &'static str },
    #[error("observer and center of mass coincide; line of sight is undefined")]
    DegenerateLineOfSight,
}

impl Default for OrbitalConfig {
    fn default() -> Self {
        Self {
            mass_star: constants::MASS_STAR,
            mass_planet: constants::MASS_PLANET,
            total_separation: constants::TOTAL_SEPARATION,
            motion: OrbitalMotion::default(),
            observer: constants::OBSERVER,
            center_of_mass: constants::CENTER_OF_MASS,
        }
    }
}

impl OrbitalConfig {
    /// Build and validate a configuration.
    pub fn new(
        mass_star: f64,
        mass_planet: f64,
        total_separation: f64,
        motion: OrbitalMotion,
        observer: Vector2,
        center_of_mass: Vector2,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            mass_star,
            mass_planet,
            total_separation,
            motion,
            observer,
            center_of_mass,
        };
        config.validate()?;
        Ok(config)
    }

    /// The default system driven by fixed speed magnitudes `V = 1.0`, `v = 1.5`.
    pub fn fixed_speeds() -> Self {
        Self {
            motion: OrbitalMotion::FixedSpeeds {
                star_speed: constants::STAR_SPEED,
                planet_speed: constants::PLANET_SPEED,
            },
            ..Self::default()
        }
    }

    /// Check the invariants every kinematics routine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("mass_star", self.mass_star),
            ("mass_planet", self.mass_planet),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidMass { name, value });
            }
        }
        if self.total_mass() <= 0.0 {
            return Err(ConfigError::ZeroTotalMass);
        }
        if !self.total_separation.is_finite() || self.total_separation < 0.0 {
            return Err(ConfigError::InvalidSeparation(self.total_separation));
        }
        match self.motion {
            OrbitalMotion::Angular { angular_speed } => check_speed("angular_speed", angular_speed)?,
            OrbitalMotion::FixedSpeeds {
                star_speed,
                planet_speed,
            } => {
                check_speed("star_speed", star_speed)?;
                check_speed("planet_speed", planet_speed)?;
            }
        }
        for (name, point) in [
            ("observer", self.observer),
            ("center_of_mass", self.center_of_mass),
        ] {
            if !point.iter().all(|c| c.is_finite()) {
                return Err(ConfigError::InvalidPoint { name });
            }
        }
        if vector::normalize(&vector::sub(&self.center_of_mass, &self.observer)).is_none() {
            return Err(ConfigError::DegenerateLineOfSight);
        }
        Ok(())
    }

    #[inline]
    pub fn total_mass(&self) -> f64 {
        self.mass_star + self.mass_planet
    }

    /// Orbit radii of both bodies about the center of mass.
    pub fn radii(&self) -> OrbitRadii {
        let total = self.total_mass();
        OrbitRadii {
            star: self.mass_planet / total * self.total_separation,
            planet: self.mass_star / total * self.total_separation,
        }
    }

    /// Speed magnitudes `(star, planet)` implied by the motion model.
    pub fn speeds(&self) -> (f64, f64) {
        match self.motion {
            OrbitalMotion::Angular { angular_speed } => {
                let radii = self.radii();
                (angular_speed * radii.star, angular_speed * radii.planet)
            }
            OrbitalMotion::FixedSpeeds {
                star_speed,
                planet_speed,
            } => (star_speed, planet_speed),
        }
    }
}

fn check_speed(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidSpeed { name, value })
    }
}

/// Circular orbit radii about the center of mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitRadii {
    pub star: f64,
    pub planet: f64,
}
