use crate::error::{Error, Result};

/// Extends functionality for slices of float arrays
pub trait SliceExt<T> {
    /// Find the minimum value in float arrays
    ///
    /// Only provides the minimum value from a collection of valid numbers. Any
    /// NAN values, infinite values, or empty slices will return an error.
    ///
    /// ```rust
    /// # use pbtools_utils::SliceExt;
    /// # use pbtools_utils::Error;
    /// // Successful cases
    /// assert_eq!([1.1, 0.5, 2.2].try_min(), Ok(0.5));
    ///
    /// // Error cases
    /// assert_eq!([1.1, f64::NAN, 2.2].try_min(), Err(Error::SliceContainsUndefinedValues));
    /// assert_eq!(Vec::<f64>::new().try_min(), Err(Error::SliceContainsNoValues));
    /// ```
    ///
    /// The float primitives do not implement `Ord` due to `NaN` being
    /// incomparable, so this uses `total_cmp` once the values are known to be
    /// finite.
    fn try_min(&self) -> Result<T>;

    /// Find the maximum value in float arrays
    ///
    /// Same rules as [try_min()](SliceExt::try_min).
    ///
    /// ```rust
    /// # use pbtools_utils::SliceExt;
    /// # use pbtools_utils::Error;
    /// assert_eq!([1.1, 0.5, 2.2].try_max(), Ok(2.2));
    /// assert_eq!([1.1, f64::INFINITY].try_max(), Err(Error::SliceContainsUndefinedValues));
    /// ```
    fn try_max(&self) -> Result<T>;

    /// Arithmetic mean of a slice of finite values
    ///
    /// ```rust
    /// # use pbtools_utils::SliceExt;
    /// assert_eq!([1.0, 2.0, 3.0].try_mean(), Ok(2.0));
    /// assert!(Vec::<f64>::new().try_mean().is_err());
    /// ```
    fn try_mean(&self) -> Result<T>;

    /// Check that bin edges are finite and strictly increasing
    ///
    /// At least two edges are needed to define a single bin.
    ///
    /// ```rust
    /// # use pbtools_utils::SliceExt;
    /// assert!([0.0, 0.5, 1.0].check_edges().is_ok());
    /// assert!([0.0, 0.5, 0.5].check_edges().is_err());
    /// assert!([0.0].check_edges().is_err());
    /// ```
    fn check_edges(&self) -> Result<()>;

    /// Find index bin containing 'value', where bins are low <= value < high
    ///
    /// A value on a bin edge returns the bin above. Values equal to the
    /// highest bound are considered part of the last bin, which matches the
    /// usual histogram convention.
    ///
    /// ```text
    ///     edges : 0.0 0.1 1.0 20.0
    ///
    ///     0.0 <= bin 0 < 0.1
    ///     0.1 <= bin 1 < 1.0
    ///     1.0 <= bin 2 <= 20.0
    /// ```
    ///
    /// ```rust
    /// # use pbtools_utils::SliceExt;
    /// let edges = vec![0.0, 0.1, 1.0, 20.0];
    ///
    /// assert_eq!(edges.find_bin_exclusive(0.0 ), Ok(0));
    /// assert_eq!(edges.find_bin_exclusive(0.5 ), Ok(1));
    /// assert_eq!(edges.find_bin_exclusive(1.0 ), Ok(2));
    /// assert_eq!(edges.find_bin_exclusive(20.0), Ok(2));
    ///
    /// // Values outside the bin bounds are an error case
    /// assert!(edges.find_bin_exclusive(-1.0).is_err());
    /// assert!(edges.find_bin_exclusive(21.0).is_err());
    /// ```
    fn find_bin_exclusive(&self, value: T) -> Result<usize>;
}

impl SliceExt<f64> for [f64] {
    fn try_min(&self) -> Result<f64> {
        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::SliceContainsUndefinedValues);
        };

        self.iter()
            .min_by(|a, b| a.total_cmp(b))
            .copied()
            .ok_or(Error::SliceContainsNoValues)
    }

    fn try_max(&self) -> Result<f64> {
        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::SliceContainsUndefinedValues);
        };

        self.iter()
            .max_by(|a, b| a.total_cmp(b))
            .copied()
            .ok_or(Error::SliceContainsNoValues)
    }

    fn try_mean(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(Error::SliceContainsNoValues);
        }

        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::SliceContainsUndefinedValues);
        };

        Ok(self.iter().sum::<f64>() / self.len() as f64)
    }

    fn check_edges(&self) -> Result<()> {
        if self.len() < 2 {
            return Err(Error::BelowMinimumSliceLength {
                length: self.len(),
                minimum_required: 2,
            });
        }

        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::SliceContainsUndefinedValues);
        }

        if self.windows(2).any(|w| w[1] <= w[0]) {
            return Err(Error::SliceNotAscending);
        }

        Ok(())
    }

    fn find_bin_exclusive(&self, value: f64) -> Result<usize> {
        // make sure there are bin edges to check against
        let n = self.len();
        let (lower_bound, upper_bound) = match (self.first(), self.last()) {
            (Some(lo), Some(hi)) if n >= 2 => (*lo, *hi),
            _ => {
                return Err(Error::BelowMinimumSliceLength {
                    length: n,
                    minimum_required: 2,
                })
            }
        };

        // is the value relevant?
        if value < lower_bound || value > upper_bound || value.is_nan() {
            return Err(Error::ValueOutsideOfBounds {
                value,
                lower_bound,
                upper_bound,
            });
        }

        // special case for being on the upper edge
        if value == upper_bound {
            return Ok(n - 2);
        }

        // first upper edge strictly above the value, always below n - 1 here
        Ok(self[1..].partition_point(|edge| *edge <= value))
    }
}

/// Evenly spaced values over `[start, stop]`, including both ends
///
/// Returns `n` values. A single value is just `start`, and zero values is an
/// empty vector.
///
/// ```rust
/// # use pbtools_utils::linspace;
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
/// ```
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values = (0..n).map(|i| start + step * i as f64).collect::<Vec<f64>>();
            // make sure the end point is exact
            values[n - 1] = stop;
            values
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bin_lookup_on_edges() {
        let edges = [1.0, 2.0, 3.0];
        assert_eq!(edges.find_bin_exclusive(1.0), Ok(0));
        assert_eq!(edges.find_bin_exclusive(1.999), Ok(0));
        assert_eq!(edges.find_bin_exclusive(2.0), Ok(1));
        assert_eq!(edges.find_bin_exclusive(3.0), Ok(1));
    }

    #[test]
    fn bin_lookup_failures() {
        assert_eq!(
            [1.0].find_bin_exclusive(1.0),
            Err(Error::BelowMinimumSliceLength {
                length: 1,
                minimum_required: 2
            })
        );
        assert!([0.0, 1.0].find_bin_exclusive(f64::NAN).is_err());
        assert_eq!(
            [0.0, 1.0].find_bin_exclusive(1.5),
            Err(Error::ValueOutsideOfBounds {
                value: 1.5,
                lower_bound: 0.0,
                upper_bound: 1.0
            })
        );
    }

    #[test]
    fn edges_must_ascend() {
        assert_eq!([1.0, 0.0].check_edges(), Err(Error::SliceNotAscending));
        assert_eq!(
            [0.0, f64::NAN].check_edges(),
            Err(Error::SliceContainsUndefinedValues)
        );
    }

    #[test]
    fn linspace_end_points() {
        let values = linspace(0.1, 0.7, 7);
        assert_eq!(values.len(), 7);
        assert_eq!(values[0], 0.1);
        assert_eq!(values[6], 0.7);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }
}
