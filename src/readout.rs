//! Caption text for one body's line-of-sight result.
//!
//! Mirrors the demo's result panel: a rounded line-of-sight speed, then either
//! the exact special-angle derivation or a decimal approximation.

use rv_kinematics::{LineOfSight, SpecialAngle, SpecialAngleClassifier, TrigConvention};

/// Which body a readout describes; selects the `V` / `v` symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    Star,
    Planet,
}

impl Body {
    pub fn symbol(self) -> &'static str {
        match self {
            Body::Star => "V",
            Body::Planet => "v",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Body::Star => "Star",
            Body::Planet => "Planet",
        }
    }
}

/// Output flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    #[default]
    Plain,
    Latex,
}

/// Formatted result for one body.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    pub body: Body,
    pub signed_speed: f64,
    pub angle_deg: f64,
    pub convention: TrigConvention,
    pub special: SpecialAngle,
}

impl Readout {
    pub fn new(body: Body, los: &LineOfSight, classifier: &SpecialAngleClassifier) -> Self {
        Self {
            body,
            signed_speed: los.signed_speed,
            angle_deg: los.angle_from_line_of_sight_deg,
            convention: classifier.convention(),
            special: classifier.classify(los.angle_from_line_of_sight_deg),
        }
    }

    /// `V_los ≈ 0.1`
    pub fn speed_line(&self, notation: Notation) -> String {
        let sym = self.body.symbol();
        match notation {
            Notation::Plain => format!("{sym}_los ≈ {:.1}", self.signed_speed),
            Notation::Latex => format!(r"{sym}_{{\text{{los}}}} \approx {:.1}", self.signed_speed),
        }
    }

    /// Lines following the speed: the angle and, for special angles, the exact form.
    pub fn derivation(&self, notation: Notation) -> Vec<String> {
        let sym = self.body.symbol();
        let f = self.convention.symbol();
        match (self.special, notation) {
            (SpecialAngle::Matched { reference_deg, ratio }, Notation::Plain) => {
                let a = fmt_angle(reference_deg);
                let frac = ratio.label();
                vec![
                    format!("φ ≈ {a}°, {f} φ = {f} {a}° = {frac}"),
                    format!("{sym}_los = {sym} {f} φ"),
                    format!("{sym}_los = {sym} {f} {a}° = {sym} · {frac}"),
                ]
            }
            (SpecialAngle::Matched { reference_deg, ratio }, Notation::Latex) => {
                let a = fmt_angle(reference_deg);
                let frac = ratio.latex();
                vec![
                    format!(r"\varphi \approx {a}^\circ,\quad \{f}\varphi = \{f}{a}^\circ = {frac}"),
                    format!(r"{sym}_{{\text{{los}}}} = {sym} \{f}\varphi"),
                    format!(r"{sym}_{{\text{{los}}}} = {sym} \{f}{a}^\circ = {sym} \cdot {frac}"),
                ]
            }
            (SpecialAngle::Unmatched { decimal_ratio }, Notation::Plain) => vec![format!(
                "φ ≈ {:.1}°, {f} φ ≈ {decimal_ratio:.3}",
                self.angle_deg
            )],
            (SpecialAngle::Unmatched { decimal_ratio }, Notation::Latex) => vec![format!(
                r"\varphi \approx {:.1}^\circ,\quad \{f}\varphi \approx {decimal_ratio:.3}",
                self.angle_deg
            )],
        }
    }

    /// Title, speed and derivation as one block.
    pub fn render(&self, notation: Notation) -> String {
        let mut lines = vec![
            self.body.title().to_string(),
            format!("  {}", self.speed_line(notation)),
        ];
        lines.extend(
            self.derivation(notation)
                .into_iter()
                .map(|line| format!("  {line}")),
        );
        lines.push(String::new());
        lines.join("\n")
    }
}

fn fmt_angle(deg: f64) -> String {
    if deg.fract() == 0.0 {
        format!("{deg:.0}")
    } else {
        format!("{deg}")
    }
}
