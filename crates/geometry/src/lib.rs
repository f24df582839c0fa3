//! Analytic sphere and cylinder intersection geometry
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
pub mod elliptic;
mod intersection;

#[doc(inline)]
pub use intersection::{
    classify, cyl_sph_int_volume, is_precision_sensitive, IntersectionCase, UNIT_SPHERE_VOLUME,
};
