//! Volume-weighted particle size distributions
//!
//! Polydisperse particle models, such as those in CADET, describe the
//! stationary phase as a set of particle types with a mean radius and a
//! volume fraction. These are recovered from a list of bead radii by binning
//! each radius weighted by the volume of its bead.

// crate modules
use crate::error::{Error, Result};

// pbtools modules
use pbtools_geometry::UNIT_SPHERE_VOLUME;
use pbtools_utils::{linspace, SliceExt};

// external crates
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Bin definition for [histo()]
#[derive(Debug, Clone, PartialEq)]
pub enum Bins {
    /// Number of equal width bins spanning the data
    Count(usize),
    /// Explicit, strictly increasing bin edges
    Edges(Vec<f64>),
}

/// Volume fraction of particles in each size bin
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Volume fraction of each bin, summing to one unless empty
    pub fractions: Vec<f64>,
    /// Mid-point radius of each bin
    pub radii: Vec<f64>,
    /// Bin edges, one more than the number of bins
    pub edges: Vec<f64>,
}

impl Histogram {
    /// Number of bins
    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }

    /// True if no volume fell within the bins
    pub fn is_zero(&self) -> bool {
        self.fractions.iter().all(|f| *f == 0.0)
    }
}

/// Volume fractions and mean radii for a bead size distribution
///
/// Each radius is weighted by its sphere volume. Values on an interior edge
/// go to the bin above, the last edge belongs to the last bin, and anything
/// outside the edges is ignored.
///
/// With [Bins::Count] the edges span the smallest to largest radius, widened
/// by 0.5 either side if every radius is the same. An empty list spans
/// `[0, 1]`. When no volume falls within the bins every fraction is zero.
///
/// ```rust
/// # use pbtools_porosity::{histo, Bins};
/// let radii = [1.0, 1.0, 2.0];
/// let h = histo(&radii, &Bins::Count(2)).unwrap();
///
/// assert_eq!(h.edges, vec![1.0, 1.5, 2.0]);
/// assert_eq!(h.radii, vec![1.25, 1.75]);
///
/// // two small beads against one with eight times the volume
/// assert!((h.fractions[0] - 0.2).abs() < 1e-12);
/// assert!((h.fractions[1] - 0.8).abs() < 1e-12);
/// ```
pub fn histo(radii: &[f64], bins: &Bins) -> Result<Histogram> {
    if radii.iter().any(|r| !r.is_finite()) {
        return Err(Error::UndefinedRadii);
    }

    let edges = match bins {
        Bins::Count(n) => uniform_edges(radii, *n)?,
        Bins::Edges(edges) => {
            edges.check_edges().map_err(Error::InvalidBinEdges)?;
            edges.clone()
        }
    };

    let mut weights = vec![0.0; edges.len() - 1];
    for r in radii {
        if let Ok(i) = edges.find_bin_exclusive(*r) {
            weights[i] += UNIT_SPHERE_VOLUME * r.powi(3);
        }
    }

    Ok(Histogram {
        fractions: volume_fractions(&weights, &edges),
        radii: edges.iter().tuple_windows().map(|(a, b)| (a + b) / 2.0).collect(),
        edges,
    })
}

/// Equal width edges spanning the data
fn uniform_edges(radii: &[f64], n: usize) -> Result<Vec<f64>> {
    if n == 0 {
        return Err(Error::NoBins);
    }

    let (mut lower, mut upper) = match (radii.try_min(), radii.try_max()) {
        (Ok(lower), Ok(upper)) => (lower, upper),
        _ => (0.0, 1.0),
    };

    if lower == upper {
        lower -= 0.5;
        upper += 0.5;
    }

    Ok(linspace(lower, upper, n + 1))
}

/// Density normalise the binned weights, then scale the densities to sum to one
fn volume_fractions(weights: &[f64], edges: &[f64]) -> Vec<f64> {
    let total = weights.iter().sum::<f64>();
    if total <= 0.0 {
        return vec![0.0; weights.len()];
    }

    let density = weights
        .iter()
        .zip(edges.iter().tuple_windows())
        .map(|(w, (lo, hi))| w / (total * (hi - lo)))
        .collect::<Vec<f64>>();

    let sum = density.iter().sum::<f64>();
    density.iter().map(|d| d / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_radius_is_widened() {
        let h = histo(&[2.0, 2.0], &Bins::Count(1)).unwrap();
        assert_eq!(h.edges, vec![1.5, 2.5]);
        assert_eq!(h.fractions, vec![1.0]);
        assert_eq!(h.radii, vec![2.0]);
    }

    #[test]
    fn empty_radii_give_zero_fractions() {
        let h = histo(&[], &Bins::Count(3)).unwrap();
        assert_eq!(h.len(), 3);
        assert!(h.is_zero());
        assert_eq!(h.edges.first(), Some(&0.0));
        assert_eq!(h.edges.last(), Some(&1.0));
    }

    #[test]
    fn out_of_range_values_are_ignored() {
        let h = histo(&[0.5, 1.5, 10.0], &Bins::Edges(vec![1.0, 2.0, 3.0])).unwrap();
        assert_eq!(h.fractions, vec![1.0, 0.0]);

        let h = histo(&[0.5, 10.0], &Bins::Edges(vec![1.0, 2.0])).unwrap();
        assert!(h.is_zero());
    }

    #[test]
    fn uneven_widths_are_density_normalised() {
        // volumes 1:27, bin widths 2:4
        let h = histo(&[1.0, 3.0], &Bins::Edges(vec![0.0, 2.0, 6.0])).unwrap();
        assert!((h.fractions[0] - 2.0 / 29.0).abs() < 1e-12);
        assert!((h.fractions[1] - 27.0 / 29.0).abs() < 1e-12);
        assert_eq!(h.radii, vec![1.0, 4.0]);
    }

    #[test]
    fn invalid_bins() {
        assert!(matches!(histo(&[1.0], &Bins::Count(0)), Err(Error::NoBins)));
        assert!(matches!(
            histo(&[1.0], &Bins::Edges(vec![1.0])),
            Err(Error::InvalidBinEdges(_))
        ));
        assert!(matches!(
            histo(&[f64::NAN], &Bins::Count(2)),
            Err(Error::UndefinedRadii)
        ));
    }
}
