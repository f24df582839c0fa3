//! Common utility for extended `std` types
//!
#![doc = include_str!("../readme.md")]

// Alias for the format! macro
pub use std::format as f;

// Modules
mod error;
mod float_ext;
mod slice_ext;

// Flatten
pub use error::{Error, Result};
pub use float_ext::{FloatExt, OptionExt};
pub use slice_ext::{linspace, SliceExt};
