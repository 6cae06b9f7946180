//! Orbital kinematics for the star-planet radial-velocity demo.
//!
//! Everything here is a pure function of an [`OrbitalConfig`] and a [`PhaseAngle`]:
//! body positions and tangential velocities about the center of mass, the signed
//! line-of-sight projection of each velocity, and a classifier that flags angles
//! close to the classic 30°/45°/60° teaching values.

pub mod bodies;
pub mod config;
pub mod line_of_sight;
pub mod phase;
pub mod special;

pub use bodies::{BodyState, Bodies, compute_body_states, orbit_path};
pub use config::{ConfigError, OrbitRadii, OrbitalConfig, OrbitalMotion};
pub use line_of_sight::{LineOfSight, LineOfSightDirection, compute_line_of_sight};
pub use phase::PhaseAngle;
pub use special::{
    ClassifierError, ExactRatio, SpecialAngle, SpecialAngleClassifier, TrigConvention,
    classify_special_angle,
};
