//! Result and Error types for pbtools-bed

/// Type alias for `Result<T, bed::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `pbtools-bed` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    /// Failure reading or writing CSV records
    #[error("failed CSV operation")]
    CsvError(#[from] csv::Error),

    /// Failure in a slice operation, usually undefined values
    #[error("failed slice operation: {0}")]
    UtilsError(#[from] pbtools_utils::Error),

    /// Progress bar could not be created
    #[error("failed to initialise progress bar: {0}")]
    ProgressBar(String),

    /// Bounds are not defined without any beads
    #[error("packed bed contains no beads")]
    EmptyBed,

    /// Radius must be positive and finite
    #[error("invalid bead radius {0}")]
    InvalidBeadRadius(f64),

    /// Centre coordinates must be finite
    #[error("invalid bead centre ({x}, {y}, {z})")]
    InvalidBeadCentre { x: f64, y: f64, z: f64 },

    /// Bounding box with a negative or undefined extent
    #[error("invalid bounding box {0}")]
    InvalidBounds(String),
}
