//! Result and Error types for pbtools-porosity

/// Type alias for `Result<T, porosity::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `pbtools-porosity` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("failed CSV operation")]
    CsvError(#[from] csv::Error),

    #[error("failed to read JSON configuration")]
    JsonError(#[from] serde_json::Error),

    #[error("failure in packed bed operations")]
    BedError(#[from] pbtools_bed::Error),

    #[error("failed slice operation: {0}")]
    UtilsError(#[from] pbtools_utils::Error),

    #[error("failed to build thread pool")]
    ThreadPoolBuild(#[from] rayon::ThreadPoolBuildError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("at least one radial shell is required")]
    NoShells,

    #[error("no spherical beads found in {found} objects")]
    NoBeads { found: usize },

    #[error("shell {index} has no cylinder volume")]
    DegenerateShell { index: usize },

    #[error("shell index {index} out of range for {shells} shells")]
    ShellIndexOutOfRange { index: usize, shells: usize },

    #[error("histogram requires at least one bin")]
    NoBins,

    #[error("invalid histogram edges: {0}")]
    InvalidBinEdges(pbtools_utils::Error),

    #[error("radii contain undefined values")]
    UndefinedRadii,
}
