use std::path::PathBuf;

use clap::Parser;
use radial_velocity::config::load_or_default;
use radial_velocity::export::{sweep, writer_for_path};
use radial_velocity::scene;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Tabulate positions, velocities and line-of-sight speeds over a range of phases"
)]
struct Cli {
    #[arg(long)]
    config: Option<PathBuf>,
    /// First phase angle in degrees
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    start: f64,
    /// Last phase angle in degrees (inclusive)
    #[arg(long, default_value_t = 360.0, allow_hyphen_values = true)]
    end: f64,
    /// Step in degrees
    #[arg(long, default_value_t = 1.0)]
    step: f64,
    /// CSV output path (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    radial_velocity::init_logging();
    let cli = Cli::parse();
    let demo = load_or_default(cli.config.as_ref())?;
    let config = demo.orbital_config()?;
    let classifier = demo.classifier()?;

    let scenes = scene::sweep(&config, cli.start, cli.end, cli.step)?;
    let writer = writer_for_path(&cli.output)?;
    let rows = sweep::write_records(writer, scenes.iter().map(|s| s.to_record(&classifier)))?;
    tracing::info!(rows, "wrote phase sweep");
    Ok(())
}
