//! Star-planet radial-velocity teaching demo.
//!
//! The kinematics live in workspace crates so multiple front-ends (CLI, plots,
//! a future GUI) share them; this crate adds the per-angle [`scene`], caption
//! [`readout`], and bitmap [`figure`] on top.

pub mod figure;
pub mod readout;
pub mod scene;

pub use rv_config as config;
pub use rv_core as core;
pub use rv_export as export;
pub use rv_kinematics as kinematics;

/// Install the stderr log subscriber used by the binaries.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .try_init();
}
