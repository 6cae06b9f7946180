//! Export helpers for CSV phase sweeps and JSON scene snapshots.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod sweep {
    use std::io::Write;

    use serde::Serialize;

    use super::ExportError;

    /// Column order of the sweep CSV.
    pub const HEADER: [&str; 15] = [
        "theta_deg",
        "star_x",
        "star_y",
        "planet_x",
        "planet_y",
        "star_vx",
        "star_vy",
        "planet_vx",
        "planet_vy",
        "star_los",
        "planet_los",
        "star_phi_deg",
        "planet_phi_deg",
        "star_special_deg",
        "planet_special_deg",
    ];

    /// One sampled phase. Special-angle columns stay empty when unmatched.
    #[derive(Debug, Clone, Serialize, PartialEq)]
    pub struct Record {
        pub theta_deg: f64,
        pub star_x: f64,
        pub star_y: f64,
        pub planet_x: f64,
        pub planet_y: f64,
        pub star_vx: f64,
        pub star_vy: f64,
        pub planet_vx: f64,
        pub planet_vy: f64,
        pub star_los: f64,
        pub planet_los: f64,
        pub star_phi_deg: f64,
        pub planet_phi_deg: f64,
        pub star_special_deg: Option<f64>,
        pub planet_special_deg: Option<f64>,
    }

    /// Write all records with a header row. Returns the number of data rows.
    pub fn write_records<W, I>(writer: W, records: I) -> Result<usize, ExportError>
    where
        W: Write,
        I: IntoIterator<Item = Record>,
    {
        let mut out = csv::Writer::from_writer(writer);
        let mut rows = 0usize;
        for record in records {
            out.serialize(&record)?;
            rows += 1;
        }
        if rows == 0 {
            out.write_record(HEADER)?;
        }
        out.flush()?;
        tracing::debug!(rows, "wrote phase sweep");
        Ok(rows)
    }
}

pub mod snapshot {
    use std::io::Write;

    use serde::Serialize;
    use serde_json::to_writer_pretty;

    use super::ExportError;

    /// Per-body section of a snapshot.
    #[derive(Debug, Clone, Serialize, PartialEq)]
    pub struct BodySnapshot {
        pub radius: f64,
        pub position: [f64; 2],
        pub velocity: [f64; 2],
        pub speed: f64,
        pub line_of_sight_speed: f64,
        pub angle_from_line_of_sight_deg: f64,
        pub special_angle_deg: Option<f64>,
        pub ratio_label: Option<String>,
        pub ratio_value: f64,
    }

    /// Full scene at one phase angle.
    #[derive(Debug, Clone, Serialize, PartialEq)]
    pub struct Snapshot {
        pub theta_deg: f64,
        pub convention: String,
        pub observer: [f64; 2],
        pub center_of_mass: [f64; 2],
        pub line_of_sight: [f64; 2],
        pub star: BodySnapshot,
        pub planet: BodySnapshot,
    }

    /// Write the snapshot as pretty-printed JSON followed by a newline.
    pub fn write_json<W: Write>(mut writer: W, snapshot: &Snapshot) -> Result<(), ExportError> {
        to_writer_pretty(&mut writer, snapshot)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
