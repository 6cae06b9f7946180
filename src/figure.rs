//! Bitmap rendering of the orbit figure.

use std::path::Path;

use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use rv_core::vector::{self, Vector2};
use rv_kinematics::orbit_path;
use thiserror::Error;

use crate::scene::{Arrow, Scene};

const BACKGROUND: RGBColor = RGBColor(255, 252, 240);
const GOLD: RGBColor = RGBColor(255, 215, 0);
const ROYAL_BLUE: RGBColor = RGBColor(65, 105, 225);
const ORANGE: RGBColor = RGBColor(255, 165, 0);
const GRAY: RGBColor = RGBColor(128, 128, 128);
const DARK_GREEN: RGBColor = RGBColor(0, 128, 0);

/// Colour key of the figure: (mark, meaning).
pub const LEGEND: [(&str, &str); 9] = [
    ("green dot", "observer (Earth)"),
    ("black dot", "center of mass"),
    ("gold dot", "star"),
    ("royal blue dot", "planet"),
    ("gray line", "observer to center of mass (line of sight)"),
    ("orange arrow", "star velocity V"),
    ("green arrow", "planet velocity v"),
    ("red arrow", "star line-of-sight velocity V_los"),
    ("blue arrow", "planet line-of-sight velocity v_los"),
];

/// [`LEGEND`] as printable lines.
pub fn legend_text() -> String {
    LEGEND
        .iter()
        .map(|(mark, meaning)| format!("- {mark}: {meaning}\n"))
        .collect()
}

#[derive(Debug, Error)]
pub enum FigureError {
    #[error("output path contains invalid UTF-8")]
    InvalidPath,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("drawing failed: {0}")]
    Drawing(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for FigureError {
    fn from(value: DrawingAreaErrorKind<E>) -> Self {
        FigureError::Drawing(value.to_string())
    }
}

/// Image settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureOptions {
    pub width: u32,
    pub height: u32,
    pub orbit_samples: usize,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            orbit_samples: 200,
        }
    }
}

/// Render `scene` to a PNG at `path`, creating parent directories.
pub fn render_png(path: &Path, scene: &Scene, options: &FigureOptions) -> Result<(), FigureError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let path_str = path.to_str().ok_or(FigureError::InvalidPath)?;
    let root = BitMapBackend::new(path_str, (options.width, options.height)).into_drawing_area();
    draw(&root, scene, options)?;
    root.present()?;
    tracing::debug!(path = %path.display(), "rendered figure");
    Ok(())
}

/// Axis bounds with equal scale on both axes, framing the observer and both orbits.
pub fn view_bounds(scene: &Scene) -> ((f64, f64), (f64, f64)) {
    let reach = scene.radii.star.max(scene.radii.planet) + 0.4;
    let points = [
        scene.config.observer,
        scene.config.center_of_mass,
        [scene.config.center_of_mass[0] - reach, scene.config.center_of_mass[1] - reach],
        [scene.config.center_of_mass[0] + reach, scene.config.center_of_mass[1] + reach],
    ];
    let (mut x0, mut x1, mut y0, mut y1) = (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY);
    for p in points {
        x0 = x0.min(p[0]);
        x1 = x1.max(p[0]);
        y0 = y0.min(p[1]);
        y1 = y1.max(p[1]);
    }
    let span = (x1 - x0).max(y1 - y0) + 0.4;
    let (cx, cy) = ((x0 + x1) * 0.5, (y0 + y1) * 0.5);
    (
        (cx - span * 0.5, cx + span * 0.5),
        (cy - span * 0.5, cy + span * 0.5),
    )
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    scene: &Scene,
    options: &FigureOptions,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&BACKGROUND)?;
    let ((x0, x1), (y0, y1)) = view_bounds(scene);
    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    let com = scene.config.center_of_mass;
    // Dotted orbits: the star's runs opposite the planet's, hence the negative radius.
    for (radius, color) in [(-scene.radii.star, GOLD), (scene.radii.planet, ROYAL_BLUE)] {
        chart.draw_series(
            orbit_path(radius, options.orbit_samples)
                .into_iter()
                .map(|p| Circle::new((p[0] + com[0], p[1] + com[1]), 1, color.filled())),
        )?;
    }

    let observer = scene.config.observer;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(observer[0], observer[1]), (com[0], com[1])],
        ShapeStyle::from(&GRAY).stroke_width(1),
    )))?;

    let star = vector::add(&scene.bodies.star.position, &com);
    let planet = vector::add(&scene.bodies.planet.position, &com);
    for (point, size, color) in [
        (observer, 10, DARK_GREEN),
        (com, 8, BLACK),
        (star, 12, GOLD),
        (planet, 9, ROYAL_BLUE),
    ] {
        chart.draw_series(std::iter::once(Circle::new(
            (point[0], point[1]),
            size / 2,
            color.filled(),
        )))?;
    }

    let velocity = scene.velocity_arrows();
    let los = scene.line_of_sight_arrows();
    for (arrow, color) in [
        (velocity.star, ORANGE),
        (velocity.planet, DARK_GREEN),
        (los.star, RED),
        (los.planet, BLUE),
    ] {
        draw_arrow(&mut chart, &offset(arrow, com), color)?;
    }
    Ok(())
}

fn offset(arrow: Arrow, by: Vector2) -> Arrow {
    Arrow {
        start: vector::add(&arrow.start, &by),
        end: vector::add(&arrow.end, &by),
    }
}

fn draw_arrow<DB: DrawingBackend>(
    chart: &mut ChartContext<DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    arrow: &Arrow,
    color: RGBColor,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let length = arrow.length();
    if length < 1e-6 {
        return Ok(());
    }
    let style = ShapeStyle::from(&color).stroke_width(2);
    let (s, e) = (arrow.start, arrow.end);
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(s[0], s[1]), (e[0], e[1])],
        style,
    )))?;

    let back = vector::scale(&vector::sub(&s, &e), 1.0 / length);
    let head = (0.3 * length).min(0.06);
    for angle in [0.45_f64, -0.45] {
        let (sin, cos) = angle.sin_cos();
        let wing = [back[0] * cos - back[1] * sin, back[0] * sin + back[1] * cos];
        let tip = vector::add(&e, &vector::scale(&wing, head));
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(e[0], e[1]), (tip[0], tip[1])],
            style,
        )))?;
    }
    Ok(())
}
