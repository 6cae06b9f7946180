//! Flags angles near 30°/45°/60° so they can be shown with exact ratios.

use thiserror::Error;

/// Default reference angles in degrees.
pub const DEFAULT_REFERENCE_ANGLES: [f64; 3] = [30.0, 45.0, 60.0];
/// Default match tolerance in degrees (exclusive).
pub const DEFAULT_TOLERANCE_DEG: f64 = 2.0;

/// Trigonometric ratios with a simple closed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExactRatio {
    Zero,
    Half,
    HalfSqrt2,
    HalfSqrt3,
    One,
}

impl ExactRatio {
    pub fn value(self) -> f64 {
        match self {
            ExactRatio::Zero => 0.0,
            ExactRatio::Half => 0.5,
            ExactRatio::HalfSqrt2 => std::f64::consts::FRAC_1_SQRT_2,
            ExactRatio::HalfSqrt3 => 3.0_f64.sqrt() / 2.0,
            ExactRatio::One => 1.0,
        }
    }

    /// Plain-text fraction, e.g. `√3/2`.
    pub fn label(self) -> &'static str {
        match self {
            ExactRatio::Zero => "0",
            ExactRatio::Half => "1/2",
            ExactRatio::HalfSqrt2 => "√2/2",
            ExactRatio::HalfSqrt3 => "√3/2",
            ExactRatio::One => "1",
        }
    }

    /// LaTeX fraction, e.g. `\frac{\sqrt{3}}{2}`.
    pub fn latex(self) -> &'static str {
        match self {
            ExactRatio::Zero => "0",
            ExactRatio::Half => r"\frac{1}{2}",
            ExactRatio::HalfSqrt2 => r"\frac{\sqrt{2}}{2}",
            ExactRatio::HalfSqrt3 => r"\frac{\sqrt{3}}{2}",
            ExactRatio::One => "1",
        }
    }

    fn cosine_of(deg: f64) -> Option<Self> {
        match deg {
            d if d == 0.0 => Some(ExactRatio::One),
            d if d == 30.0 => Some(ExactRatio::HalfSqrt3),
            d if d == 45.0 => Some(ExactRatio::HalfSqrt2),
            d if d == 60.0 => Some(ExactRatio::Half),
            d if d == 90.0 => Some(ExactRatio::Zero),
            _ => None,
        }
    }
}

/// Which ratio of the measured angle is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrigConvention {
    /// `cos φ`, with φ measured from the line of sight.
    #[default]
    Cosine,
    /// `sin φ`, for variants measuring from the plane of the sky.
    Sine,
}

impl TrigConvention {
    pub fn symbol(self) -> &'static str {
        match self {
            TrigConvention::Cosine => "cos",
            TrigConvention::Sine => "sin",
        }
    }

    /// Exact ratio for a reference angle, if it has one.
    pub fn exact_ratio(self, reference_deg: f64) -> Option<ExactRatio> {
        match self {
            TrigConvention::Cosine => ExactRatio::cosine_of(reference_deg),
            TrigConvention::Sine => ExactRatio::cosine_of(90.0 - reference_deg),
        }
    }

    pub fn decimal_ratio(self, angle_deg: f64) -> f64 {
        let rad = angle_deg.to_radians();
        match self {
            TrigConvention::Cosine => rad.cos(),
            TrigConvention::Sine => rad.sin(),
        }
    }
}

/// Outcome of special-angle classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpecialAngle {
    Matched {
        reference_deg: f64,
        ratio: ExactRatio,
    },
    Unmatched {
        decimal_ratio: f64,
    },
}

impl SpecialAngle {
    pub fn reference_deg(&self) -> Option<f64> {
        match self {
            SpecialAngle::Matched { reference_deg, .. } => Some(*reference_deg),
            SpecialAngle::Unmatched { .. } => None,
        }
    }

    /// The ratio as a number, exact or approximate.
    pub fn ratio_value(&self) -> f64 {
        match self {
            SpecialAngle::Matched { ratio, .. } => ratio.value(),
            SpecialAngle::Unmatched { decimal_ratio } => *decimal_ratio,
        }
    }
}

/// Classify `angle_deg` against `references`.
///
/// The nearest reference wins, earlier entries winning ties. It matches only when
/// the absolute difference is strictly below `tolerance_deg` and the reference has
/// a closed-form ratio under `convention`; otherwise the decimal ratio of the
/// input angle is returned.
pub fn classify_special_angle(
    angle_deg: f64,
    references: &[f64],
    tolerance_deg: f64,
    convention: TrigConvention,
) -> SpecialAngle {
    let mut nearest: Option<(f64, f64)> = None;
    for &reference in references {
        let diff = (angle_deg - reference).abs();
        match nearest {
            Some((_, best)) if diff >= best => {}
            _ if diff.is_nan() => {}
            _ => nearest = Some((reference, diff)),
        }
    }

    if let Some((reference_deg, diff)) = nearest {
        if diff < tolerance_deg {
            if let Some(ratio) = convention.exact_ratio(reference_deg) {
                return SpecialAngle::Matched {
                    reference_deg,
                    ratio,
                };
            }
        }
    }

    SpecialAngle::Unmatched {
        decimal_ratio: convention.decimal_ratio(angle_deg),
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ClassifierError {
    #[error("reference angle {0}° has no exact {1} ratio")]
    UnsupportedReference(f64, &'static str),
    #[error("tolerance must be finite and positive (got {0})")]
    InvalidTolerance(f64),
}

/// Reference angles, tolerance and convention bundled for repeated use.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialAngleClassifier {
    references: Vec<f64>,
    tolerance_deg: f64,
    convention: TrigConvention,
}

impl Default for SpecialAngleClassifier {
    fn default() -> Self {
        Self {
            references: DEFAULT_REFERENCE_ANGLES.to_vec(),
            tolerance_deg: DEFAULT_TOLERANCE_DEG,
            convention: TrigConvention::default(),
        }
    }
}

impl SpecialAngleClassifier {
    pub fn new(
        references: Vec<f64>,
        tolerance_deg: f64,
        convention: TrigConvention,
    ) -> Result<Self, ClassifierError> {
        if !tolerance_deg.is_finite() || tolerance_deg <= 0.0 {
            return Err(ClassifierError::InvalidTolerance(tolerance_deg));
        }
        if let Some(&bad) = references
            .iter()
            .find(|&&r| convention.exact_ratio(r).is_none())
        {
            return Err(ClassifierError::UnsupportedReference(bad, convention.symbol()));
        }
        Ok(Self {
            references,
            tolerance_deg,
            convention,
        })
    }

    pub fn with_convention(mut self, convention: TrigConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn convention(&self) -> TrigConvention {
        self.convention
    }

    pub fn references(&self) -> &[f64] {
        &self.references
    }

    pub fn tolerance_deg(&self) -> f64 {
        self.tolerance_deg
    }

    pub fn classify(&self, angle_deg: f64) -> SpecialAngle {
        classify_special_angle(angle_deg, &self.references, self.tolerance_deg, self.convention)
    }
}
