//! Scenario models and loaders for the Radial Velocity demo.
//!
//! Every field has a default matching the classroom constants, so an empty file
//! describes the canonical star + planet system.

use std::fs::File;
use std::path::Path;

use rv_core::constants;
use rv_kinematics::special::{DEFAULT_REFERENCE_ANGLES, DEFAULT_TOLERANCE_DEG};
use rv_kinematics::{
    ClassifierError, OrbitalConfig, OrbitalMotion, SpecialAngleClassifier, TrigConvention,
};
use serde::Deserialize;
use thiserror::Error;

/// Top-level scenario file.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub system: SystemConfig,
    pub display: DisplayConfig,
}

/// Physical parameters of the two-body system.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SystemConfig {
    pub mass_star: f64,
    pub mass_planet: f64,
    pub total_separation: f64,
    pub motion: MotionConfig,
    pub observer: [f64; 2],
    pub center_of_mass: [f64; 2],
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            mass_star: constants::MASS_STAR,
            mass_planet: constants::MASS_PLANET,
            total_separation: constants::TOTAL_SEPARATION,
            motion: MotionConfig::default(),
            observer: constants::OBSERVER,
            center_of_mass: constants::CENTER_OF_MASS,
        }
    }
}

/// Speed model in scenario files.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum MotionConfig {
    #[serde(rename = "angular")]
    Angular {
        #[serde(default = "default_angular_speed")]
        angular_speed: f64,
    },
    #[serde(rename = "fixed")]
    Fixed {
        #[serde(default = "default_star_speed")]
        star_speed: f64,
        #[serde(default = "default_planet_speed")]
        planet_speed: f64,
    },
}

impl Default for MotionConfig {
    fn default() -> Self {
        MotionConfig::Angular {
            angular_speed: constants::ANGULAR_SPEED,
        }
    }
}

fn default_angular_speed() -> f64 {
    constants::ANGULAR_SPEED
}

fn default_star_speed() -> f64 {
    constants::STAR_SPEED
}

fn default_planet_speed() -> f64 {
    constants::PLANET_SPEED
}

/// Ratio convention accepted in scenario files.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConventionConfig {
    #[default]
    Cosine,
    Sine,
}

impl From<ConventionConfig> for TrigConvention {
    fn from(value: ConventionConfig) -> Self {
        match value {
            ConventionConfig::Cosine => TrigConvention::Cosine,
            ConventionConfig::Sine => TrigConvention::Sine,
        }
    }
}

/// Presentation settings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub initial_angle_deg: f64,
    pub special_angles_deg: Vec<f64>,
    pub tolerance_deg: f64,
    pub convention: ConventionConfig,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            initial_angle_deg: 45.0,
            special_angles_deg: DEFAULT_REFERENCE_ANGLES.to_vec(),
            tolerance_deg: DEFAULT_TOLERANCE_DEG,
            convention: ConventionConfig::default(),
        }
    }
}

/// Errors that can occur while loading scenario files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid system: {0}")]
    Invalid(#[from] rv_kinematics::ConfigError),
    #[error("invalid display settings: {0}")]
    Display(#[from] ClassifierError),
}

impl DemoConfig {
    /// Validated kinematics configuration.
    pub fn orbital_config(&self) -> Result<OrbitalConfig, ConfigError> {
        let s = &self.system;
        let motion = match s.motion {
            MotionConfig::Angular { angular_speed } => OrbitalMotion::Angular { angular_speed },
            MotionConfig::Fixed {
                star_speed,
                planet_speed,
            } => OrbitalMotion::FixedSpeeds {
                star_speed,
                planet_speed,
            },
        };
        Ok(OrbitalConfig::new(
            s.mass_star,
            s.mass_planet,
            s.total_separation,
            motion,
            s.observer,
            s.center_of_mass,
        )?)
    }

    /// Special-angle classifier built from the display settings.
    pub fn classifier(&self) -> Result<SpecialAngleClassifier, ConfigError> {
        let d = &self.display;
        Ok(SpecialAngleClassifier::new(
            d.special_angles_deg.clone(),
            d.tolerance_deg,
            d.convention.into(),
        )?)
    }

    /// Check both sections without keeping the converted values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.orbital_config()?;
        self.classifier()?;
        Ok(())
    }
}

/// Load a scenario from a TOML (`.toml`) or YAML (anything else) file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DemoConfig, ConfigError> {
    let path = path.as_ref();
    let config: DemoConfig = if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)?
    } else {
        let reader = File::open(path)?;
        serde_yaml::from_reader(reader)?
    };
    config.validate()?;
    tracing::debug!(path = %path.display(), "loaded scenario");
    Ok(config)
}

/// Load `path` when given, otherwise fall back to the built-in defaults.
pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<DemoConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(DemoConfig::default()),
    }
}
