//! Result and Error types for pbtools-utils

/// Type alias for `Result<T, utils::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `pbtools_utils`
///
/// Kept free of any dependencies so that it can be compared directly in
/// tests and doc examples.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Nothing to take a minimum, maximum, or mean of
    SliceContainsNoValues,

    /// At least one value is NaN or infinite
    SliceContainsUndefinedValues,

    /// Bin edges must be strictly increasing
    SliceNotAscending,

    /// Searched for a bin outside of the first and last edges
    ValueOutsideOfBounds {
        value: f64,
        lower_bound: f64,
        upper_bound: f64,
    },

    /// Too few values, e.g. a single bin edge
    BelowMinimumSliceLength {
        length: usize,
        minimum_required: usize,
    },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::SliceContainsNoValues => write!(f, "slice contains no values"),
            Self::SliceContainsUndefinedValues => write!(f, "slice contains NaN or infinite values"),
            Self::SliceNotAscending => write!(f, "values are not strictly increasing"),
            Self::ValueOutsideOfBounds {
                value,
                lower_bound,
                upper_bound,
            } => write!(f, "{value} is outside of [{lower_bound}, {upper_bound}]"),
            Self::BelowMinimumSliceLength {
                length,
                minimum_required,
            } => write!(f, "found {length} values, at least {minimum_required} required"),
        }
    }
}

impl std::error::Error for Error {}
