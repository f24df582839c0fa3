//! Read and write operations for xyzr bead files
//!
//! An xyzr file is a headerless CSV with one bead per row in `x,y,z,r`
//! column order. Values are written with full precision.

// standard library
use std::path::Path;

// crate modules
use crate::bead::Bead;
use crate::error::Result;
use crate::packed_bed::PackedBed;

// external crates
use csv::{ReaderBuilder, WriterBuilder};
use log::debug;

/// Write beads to a headerless `x,y,z,r` CSV file
///
/// ```rust, no_run
/// # use pbtools_bed::{Bead, write_xyzr};
/// let beads = vec![Bead::new(0.0, 0.0, 1.0, 0.5)];
/// write_xyzr(&beads, "xyzr.csv").unwrap();
/// ```
pub fn write_xyzr<P: AsRef<Path>>(beads: &[Bead], path: P) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path.as_ref())?;

    for bead in beads {
        writer.serialize(bead)?;
    }

    writer.flush()?;
    debug!("Wrote {} beads to {:?}", beads.len(), path.as_ref());
    Ok(())
}

/// Read beads from a headerless `x,y,z,r` CSV file
///
/// Every bead is checked for a finite centre and a positive radius.
///
/// ```rust, no_run
/// # use pbtools_bed::read_xyzr;
/// let bed = read_xyzr("xyzr.csv").unwrap();
/// println!("{} beads", bed.size());
/// ```
pub fn read_xyzr<P: AsRef<Path>>(path: P) -> Result<PackedBed> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let beads = reader
        .deserialize::<Bead>()
        .map(|record| record?.validated())
        .collect::<Result<Vec<Bead>>>()?;

    debug!("Read {} beads from {:?}", beads.len(), path.as_ref());
    Ok(PackedBed::from_beads(beads))
}
