//! `pbtools` is a semi-modular toolkit for the geometry and porosity analysis
//! of packed beds
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use pbtools_geometry as geometry;

#[doc(inline)]
pub use pbtools_utils as utils;

#[cfg(feature = "bed")]
#[cfg_attr(docsrs, doc(cfg(feature = "bed")))]
#[doc(inline)]
pub use pbtools_bed as bed;

#[cfg(feature = "porosity")]
#[cfg_attr(docsrs, doc(cfg(feature = "porosity")))]
#[doc(inline)]
pub use pbtools_porosity as porosity;
