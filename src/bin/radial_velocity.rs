use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use radial_velocity::config::load_or_default;
use radial_velocity::export::{snapshot, writer_for_path};
use radial_velocity::kinematics::TrigConvention;
use radial_velocity::readout::{Body, Notation, Readout};
use radial_velocity::scene::Scene;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Star and planet line-of-sight speeds for one orbital phase"
)]
struct Cli {
    /// Orbital phase angle θ in degrees (defaults to the scenario's initial angle)
    #[arg(long, allow_hyphen_values = true)]
    angle: Option<f64>,

    /// Scenario file (TOML or YAML); built-in classroom values when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the ratio convention from the scenario
    #[arg(long, value_enum)]
    convention: Option<ConventionArg>,

    /// Emit LaTeX instead of plain text
    #[arg(long, default_value_t = false)]
    latex: bool,

    /// Write a JSON snapshot of the scene to this path (`-` for stdout)
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum ConventionArg {
    Cosine,
    Sine,
}

fn main() -> anyhow::Result<()> {
    radial_velocity::init_logging();
    let cli = Cli::parse();
    let demo = load_or_default(cli.config.as_ref())?;
    let config = demo.orbital_config()?;
    let mut classifier = demo.classifier()?;
    if let Some(convention) = cli.convention {
        classifier = classifier.with_convention(match convention {
            ConventionArg::Cosine => TrigConvention::Cosine,
            ConventionArg::Sine => TrigConvention::Sine,
        });
    }

    let theta_deg = cli.angle.unwrap_or(demo.display.initial_angle_deg);
    let scene = Scene::from_degrees(&config, theta_deg);
    tracing::info!(theta_deg, "computed scene");

    if let Some(path) = &cli.json {
        let writer = writer_for_path(path)?;
        snapshot::write_json(writer, &scene.to_snapshot(&classifier))?;
        if path == Path::new("-") {
            return Ok(());
        }
    }

    let notation = if cli.latex {
        Notation::Latex
    } else {
        Notation::Plain
    };

    println!("=== Line-of-sight speeds (θ = {theta_deg}°) ===");
    println!("(+ means receding from the observer)");
    for (body, los) in [(Body::Star, &scene.star_los), (Body::Planet, &scene.planet_los)] {
        print!("{}", Readout::new(body, los, &classifier).render(notation));
    }
    Ok(())
}
