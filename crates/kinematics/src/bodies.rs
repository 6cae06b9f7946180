//! Positions and tangential velocities of the star and planet.

use rv_core::vector::{self, Vector2};

use crate::config::OrbitalConfig;
use crate::line_of_sight::{LineOfSight, compute_line_of_sight};
use crate::phase::PhaseAngle;

/// Instantaneous state of one body relative to the center of mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub position: Vector2,
    pub velocity: Vector2,
}

impl BodyState {
    #[inline]
    pub fn speed(&self) -> f64 {
        vector::norm(&self.velocity)
    }

    /// Projection of this body's velocity on the observer's line of sight.
    pub fn line_of_sight(&self, config: &OrbitalConfig) -> LineOfSight {
        compute_line_of_sight(config.observer, config.center_of_mass, self.velocity)
    }
}

/// Star and planet states at one phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bodies {
    pub star: BodyState,
    pub planet: BodyState,
}

/// Evaluate both bodies at phase θ.
///
/// The planet sits at `r_p (cos θ, sin θ)` and the star diametrically opposite at
/// `-r_s (cos θ, sin θ)`. Velocities follow the counter-clockwise tangent
/// `(-sin θ, cos θ)`: the planet along it, the star against it.
pub fn compute_body_states(config: &OrbitalConfig, phase: PhaseAngle) -> Bodies {
    let radii = config.radii();
    let (star_speed, planet_speed) = config.speeds();
    let (sin, cos) = phase.radians().sin_cos();

    let radial = [cos, sin];
    let tangent = [-sin, cos];

    Bodies {
        star: BodyState {
            position: vector::scale(&radial, -radii.star),
            velocity: vector::scale(&tangent, -star_speed),
        },
        planet: BodyState {
            position: vector::scale(&radial, radii.planet),
            velocity: vector::scale(&tangent, planet_speed),
        },
    }
}

/// Sample a circular orbit of `radius` about the origin with `samples` points
/// spanning `[0, 2π]` inclusive. Negative radii trace the star's mirrored orbit.
pub fn orbit_path(radius: f64, samples: usize) -> Vec<Vector2> {
    if samples == 0 {
        return Vec::new();
    }
    if samples == 1 {
        return vec![[radius, 0.0]];
    }
    let step = std::f64::consts::TAU / (samples - 1) as f64;
    (0..samples)
        .map(|i| {
            let (sin, cos) = (step * i as f64).sin_cos();
            [radius * cos, radius * sin]
        })
        .collect()
}
