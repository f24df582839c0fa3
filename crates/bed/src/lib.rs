//! Bead and packed bed data model for sphere packings
//!
#![doc = include_str!("../readme.md")]

mod bead;
mod bounds;
mod error;
mod extract;
mod io;
mod packed_bed;
mod source;

#[doc(inline)]
pub use crate::error::{Error, Result};

#[doc(inline)]
pub use crate::bead::Bead;

#[doc(inline)]
pub use crate::bounds::Bounds;

#[doc(inline)]
pub use crate::packed_bed::{BedBounds, PackedBed};

#[doc(inline)]
pub use crate::source::{BoundingBoxSource, BoundsCsv};

#[doc(inline)]
pub use crate::extract::{extract_beads, ExtractOptions, Extraction, RadiusEstimate};

#[doc(inline)]
pub use crate::io::{read_xyzr, write_xyzr};
