use std::path::PathBuf;

use clap::Parser;
use radial_velocity::config::load_or_default;
use radial_velocity::figure::{FigureOptions, legend_text, render_png};
use radial_velocity::scene::Scene;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render the orbit, velocity and line-of-sight arrows for one phase to PNG"
)]
struct Cli {
    /// Orbital phase angle θ in degrees (defaults to the scenario's initial angle)
    #[arg(long, allow_hyphen_values = true)]
    angle: Option<f64>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "artifacts/orbit.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 600)]
    width: u32,
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Points sampled along each dotted orbit
    #[arg(long, default_value_t = 200)]
    samples: usize,
    /// Print the colour key after rendering
    #[arg(long, default_value_t = false)]
    legend: bool,
}

fn main() -> anyhow::Result<()> {
    radial_velocity::init_logging();
    let cli = Cli::parse();
    let demo = load_or_default(cli.config.as_ref())?;
    let config = demo.orbital_config()?;
    let theta_deg = cli.angle.unwrap_or(demo.display.initial_angle_deg);
    let scene = Scene::from_degrees(&config, theta_deg);

    let options = FigureOptions {
        width: cli.width,
        height: cli.height,
        orbit_samples: cli.samples,
    };
    render_png(&cli.output, &scene, &options)?;
    tracing::info!(output = %cli.output.display(), theta_deg, "wrote figure");
    if cli.legend {
        print!("{}", legend_text());
    }
    Ok(())
}
