//! Radial porosity and particle size distributions of packed beds
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod bridges;
mod config;
mod error;
mod histogram;
mod pipeline;
mod report;
mod shells;
mod slice;
mod writer;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use config::Config;

#[doc(inline)]
pub use shells::{shell_centres, shell_cylinder_volumes, shell_porosities, shell_radii, ShellType};

#[doc(inline)]
pub use slice::{vol_bead_slice, vol_bridge_slice, vol_shell_region, ShellRegion};

#[doc(inline)]
pub use bridges::{bridge_volumes, BridgeVolumes};

#[doc(inline)]
pub use histogram::{histo, Bins, Histogram};

#[doc(inline)]
pub use pipeline::run;

#[doc(inline)]
pub use report::PorosityReport;

#[doc(inline)]
pub use writer::write_outputs;
