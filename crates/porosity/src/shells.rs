//! Radial discretisation of the column into annular shells

// crate modules
use crate::error::{Error, Result};

// pbtools modules
use pbtools_utils::f;

// external crates
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// How the column radius is divided into shells
///
/// Serialised with the upper case names used by CADET style configuration,
/// i.e. `"EQUIDISTANT"` and `"EQUIVOLUME"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShellType {
    /// Shells of equal width, `r_n = R n / N`
    #[default]
    Equidistant,
    /// Shells of equal cross-sectional area, `r_n = R sqrt(n / N)`
    Equivolume,
}

impl std::fmt::Display for ShellType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Equidistant => write!(f, "EQUIDISTANT"),
            Self::Equivolume => write!(f, "EQUIVOLUME"),
        }
    }
}

/// Shell boundary radii from the axis out to the column radius
///
/// Returns `nrad + 1` increasing radii starting at zero and ending at
/// `column_radius`, so shell `i` lies between elements `i` and `i + 1`.
///
/// ```rust
/// # use pbtools_porosity::{shell_radii, ShellType};
/// let r = shell_radii(2.0, 4, ShellType::Equidistant).unwrap();
/// assert_eq!(r, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
///
/// let r = shell_radii(2.0, 4, ShellType::Equivolume).unwrap();
/// assert_eq!(r[1], 1.0);
/// assert_eq!(r[4], 2.0);
/// ```
pub fn shell_radii(column_radius: f64, nrad: usize, shell_type: ShellType) -> Result<Vec<f64>> {
    if nrad == 0 {
        return Err(Error::NoShells);
    }

    if !(column_radius.is_finite() && column_radius > 0.0) {
        return Err(Error::InvalidConfig(f!(
            "column radius must be positive, found {column_radius}"
        )));
    }

    let n = nrad as f64;
    let radii = (0..=nrad)
        .map(|i| {
            let fraction = i as f64 / n;
            match shell_type {
                ShellType::Equidistant => column_radius * fraction,
                ShellType::Equivolume => column_radius * fraction.sqrt(),
            }
        })
        .collect();

    Ok(radii)
}

/// Mid-point radius of every shell
///
/// ```rust
/// # use pbtools_porosity::shell_centres;
/// assert_eq!(shell_centres(&[0.0, 1.0, 3.0]), vec![0.5, 2.0]);
/// ```
pub fn shell_centres(radii: &[f64]) -> Vec<f64> {
    radii
        .iter()
        .tuple_windows()
        .map(|(inner, outer)| (inner + outer) / 2.0)
        .collect()
}

/// Cylinder volume of every shell for a given height, `pi h (r_o^2 - r_i^2)`
pub fn shell_cylinder_volumes(radii: &[f64], height: f64) -> Vec<f64> {
    radii
        .iter()
        .tuple_windows()
        .map(|(inner, outer)| std::f64::consts::PI * height * (outer * outer - inner * inner))
        .collect()
}

/// Porosity of every shell, `1 - V_beads / V_cylinder`
///
/// A shell with zero or undefined cylinder volume has no porosity and is
/// treated as fatal.
///
/// ```rust
/// # use pbtools_porosity::shell_porosities;
/// # use std::f64::consts::PI;
/// let p = shell_porosities(&[PI / 2.0], &[0.0, 1.0], 1.0).unwrap();
/// assert!((p[0] - 0.5).abs() < 1e-12);
///
/// assert!(shell_porosities(&[0.0], &[0.0, 1.0], 0.0).is_err());
/// ```
pub fn shell_porosities(volumes: &[f64], radii: &[f64], height: f64) -> Result<Vec<f64>> {
    shell_cylinder_volumes(radii, height)
        .into_iter()
        .zip(volumes)
        .enumerate()
        .map(|(index, (cylinder, beads))| {
            if cylinder.is_finite() && cylinder > 0.0 {
                Ok(1.0 - beads / cylinder)
            } else {
                Err(Error::DegenerateShell { index })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equivolume_shells_have_equal_area() {
        let r = shell_radii(3.0, 5, ShellType::Equivolume).unwrap();
        let areas = shell_cylinder_volumes(&r, 1.0);
        for a in &areas {
            assert!((a - areas[0]).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_shells_is_an_error() {
        assert!(matches!(
            shell_radii(1.0, 0, ShellType::Equidistant),
            Err(Error::NoShells)
        ));
    }

    #[test]
    fn bad_radius_is_an_error() {
        assert!(shell_radii(0.0, 2, ShellType::Equidistant).is_err());
        assert!(shell_radii(f64::NAN, 2, ShellType::Equidistant).is_err());
    }

    #[test]
    fn degenerate_shell_index_is_reported() {
        let result = shell_porosities(&[0.0, 0.0], &[0.0, 1.0, 1.0], 1.0);
        assert!(matches!(result, Err(Error::DegenerateShell { index: 1 })));
    }

    #[test]
    fn shell_type_names() {
        let t: ShellType = serde_json::from_str("\"EQUIVOLUME\"").unwrap();
        assert_eq!(t, ShellType::Equivolume);
        assert_eq!(serde_json::to_string(&ShellType::Equidistant).unwrap(), "\"EQUIDISTANT\"");
    }
}
