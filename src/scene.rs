//! One recomputation of the demo: phase angle in, full geometry out.

use rv_core::constants::VELOCITY_EPSILON;
use rv_core::vector::{self, Vector2};
use rv_export::snapshot::{BodySnapshot, Snapshot};
use rv_export::sweep::Record;
use rv_kinematics::{
    BodyState, Bodies, LineOfSight, OrbitRadii, OrbitalConfig, PhaseAngle, SpecialAngle,
    SpecialAngleClassifier, compute_body_states,
};
use thiserror::Error;

/// Display length of the star's velocity arrow.
pub const STAR_ARROW_LENGTH: f64 = 0.25;
/// Display length of the planet's velocity arrow (a bit longer than the star's).
pub const PLANET_ARROW_LENGTH: f64 = 0.35;
/// Display length of the larger line-of-sight arrow.
pub const LOS_ARROW_LENGTH: f64 = 0.4;
/// Floor on the line-of-sight scale denominator.
const LOS_SCALE_FLOOR: f64 = 1e-3;

/// Straight arrow between two points in the orbital plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub start: Vector2,
    pub end: Vector2,
}

impl Arrow {
    fn from_offset(start: Vector2, offset: Vector2) -> Self {
        Self {
            start,
            end: vector::add(&start, &offset),
        }
    }

    pub fn length(&self) -> f64 {
        vector::norm(&vector::sub(&self.end, &self.start))
    }
}

/// Star and planet arrows of one kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowPair {
    pub star: Arrow,
    pub planet: Arrow,
}

/// Everything the front-ends display for a single phase angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub config: OrbitalConfig,
    pub phase: PhaseAngle,
    pub radii: OrbitRadii,
    pub bodies: Bodies,
    pub star_los: LineOfSight,
    pub planet_los: LineOfSight,
}

impl Scene {
    pub fn compute(config: &OrbitalConfig, phase: PhaseAngle) -> Self {
        let bodies = compute_body_states(config, phase);
        Self {
            config: *config,
            phase,
            radii: config.radii(),
            star_los: bodies.star.line_of_sight(config),
            planet_los: bodies.planet.line_of_sight(config),
            bodies,
        }
    }

    pub fn from_degrees(config: &OrbitalConfig, theta_deg: f64) -> Self {
        Self::compute(config, PhaseAngle::from_degrees(theta_deg))
    }

    /// Velocity arrows of fixed display length: only direction is shown.
    pub fn velocity_arrows(&self) -> ArrowPair {
        let arrow = |body: &BodyState, length: f64| {
            let dir = vector::guarded_unit(&body.velocity, VELOCITY_EPSILON);
            Arrow::from_offset(body.position, vector::scale(&dir, length))
        };
        ArrowPair {
            star: arrow(&self.bodies.star, STAR_ARROW_LENGTH),
            planet: arrow(&self.bodies.planet, PLANET_ARROW_LENGTH),
        }
    }

    /// Line-of-sight arrows, parallel to the observer-COM line and scaled so the
    /// larger of the two is [`LOS_ARROW_LENGTH`] long.
    pub fn line_of_sight_arrows(&self) -> ArrowPair {
        let max_los = self
            .star_los
            .signed_speed
            .abs()
            .max(self.planet_los.signed_speed.abs())
            .max(LOS_SCALE_FLOOR);
        let scale = LOS_ARROW_LENGTH / max_los;
        let arrow = |body: &BodyState, los: &LineOfSight| {
            Arrow::from_offset(body.position, vector::scale(&los.component(), scale))
        };
        ArrowPair {
            star: arrow(&self.bodies.star, &self.star_los),
            planet: arrow(&self.bodies.planet, &self.planet_los),
        }
    }

    /// Classify both bodies' angles from the line of sight.
    pub fn special_angles(&self, classifier: &SpecialAngleClassifier) -> (SpecialAngle, SpecialAngle) {
        (
            classifier.classify(self.star_los.angle_from_line_of_sight_deg),
            classifier.classify(self.planet_los.angle_from_line_of_sight_deg),
        )
    }

    /// Row for the phase sweep CSV.
    pub fn to_record(&self, classifier: &SpecialAngleClassifier) -> Record {
        let (star_special, planet_special) = self.special_angles(classifier);
        let star = &self.bodies.star;
        let planet = &self.bodies.planet;
        Record {
            theta_deg: self.phase.degrees(),
            star_x: star.position[0],
            star_y: star.position[1],
            planet_x: planet.position[0],
            planet_y: planet.position[1],
            star_vx: star.velocity[0],
            star_vy: star.velocity[1],
            planet_vx: planet.velocity[0],
            planet_vy: planet.velocity[1],
            star_los: self.star_los.signed_speed,
            planet_los: self.planet_los.signed_speed,
            star_phi_deg: self.star_los.angle_from_line_of_sight_deg,
            planet_phi_deg: self.planet_los.angle_from_line_of_sight_deg,
            star_special_deg: star_special.reference_deg(),
            planet_special_deg: planet_special.reference_deg(),
        }
    }

    /// JSON-friendly view of the scene.
    pub fn to_snapshot(&self, classifier: &SpecialAngleClassifier) -> Snapshot {
        let (star_special, planet_special) = self.special_angles(classifier);
        Snapshot {
            theta_deg: self.phase.degrees(),
            convention: classifier.convention().symbol().to_string(),
            observer: self.config.observer,
            center_of_mass: self.config.center_of_mass,
            line_of_sight: self.star_los.unit_direction,
            star: body_snapshot(self.radii.star, &self.bodies.star, &self.star_los, &star_special),
            planet: body_snapshot(
                self.radii.planet,
                &self.bodies.planet,
                &self.planet_los,
                &planet_special,
            ),
        }
    }
}

fn body_snapshot(
    radius: f64,
    body: &BodyState,
    los: &LineOfSight,
    special: &SpecialAngle,
) -> BodySnapshot {
    BodySnapshot {
        radius,
        position: body.position,
        velocity: body.velocity,
        speed: body.speed(),
        line_of_sight_speed: los.signed_speed,
        angle_from_line_of_sight_deg: los.angle_from_line_of_sight_deg,
        special_angle_deg: special.reference_deg(),
        ratio_label: match special {
            SpecialAngle::Matched { ratio, .. } => Some(ratio.label().to_string()),
            SpecialAngle::Unmatched { .. } => None,
        },
        ratio_value: special.ratio_value(),
    }
}

/// Upper bound on the number of scenes a single sweep may produce.
pub const MAX_SWEEP_SCENES: usize = 1_000_000;

#[derive(Debug, Error, PartialEq)]
pub enum SweepError {
    #[error("sweep bounds must be finite (start {start}, end {end})")]
    NonFiniteBounds { start: f64, end: f64 },
    #[error("step must be a positive number of degrees (got {0})")]
    InvalidStep(f64),
    #[error("end {end}° is before start {start}°")]
    ReversedRange { start: f64, end: f64 },
    #[error("sweep would produce {0:e} scenes; the limit is {limit}", limit = MAX_SWEEP_SCENES)]
    TooManyScenes(f64),
}

/// Scenes for `start_deg, start_deg + step_deg, ...` up to and including `end_deg`.
///
/// Angles are computed as `start + i * step` so long sweeps do not accumulate
/// rounding drift.
pub fn sweep(
    config: &OrbitalConfig,
    start_deg: f64,
    end_deg: f64,
    step_deg: f64,
) -> Result<Vec<Scene>, SweepError> {
    if !(start_deg.is_finite() && end_deg.is_finite()) {
        return Err(SweepError::NonFiniteBounds {
            start: start_deg,
            end: end_deg,
        });
    }
    if !(step_deg.is_finite() && step_deg > 0.0) {
        return Err(SweepError::InvalidStep(step_deg));
    }
    if end_deg < start_deg {
        return Err(SweepError::ReversedRange {
            start: start_deg,
            end: end_deg,
        });
    }
    // The span can still overflow to infinity for huge finite bounds.
    let steps = ((end_deg - start_deg) / step_deg + 1e-9).floor();
    if !(steps < MAX_SWEEP_SCENES as f64) {
        return Err(SweepError::TooManyScenes(steps + 1.0));
    }
    let count = steps as usize + 1;
    Ok((0..count)
        .map(|i| Scene::from_degrees(config, start_deg + i as f64 * step_deg))
        .collect())
}
