//! Bead volumes cut by cylindrical shells and bridges

// standard library
use std::f64::consts::PI;

// crate modules
use crate::error::{Error, Result};

// pbtools modules
use pbtools_bed::Bead;
use pbtools_geometry::{cyl_sph_int_volume, is_precision_sensitive, UNIT_SPHERE_VOLUME};

// external crates
use log::{trace, warn};

/// Bead content of a single radial shell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShellRegion {
    /// Total bead volume inside the shell
    pub volume: f64,
    /// Equivalent sphere radius of every bead slice with a positive volume
    pub radii: Vec<f64>,
}

/// Volume of a bead between two coaxial cylinders on the z-axis
///
/// This is the difference of the intersection volumes with the outer and
/// inner cylinders. Rounding can leave a tiny negative value for beads that
/// barely touch the shell.
///
/// ```rust
/// # use pbtools_bed::Bead;
/// # use pbtools_porosity::vol_bead_slice;
/// let bead = Bead::new(0.0, 0.0, 0.0, 1.0);
/// let v = vol_bead_slice(&bead, 0.0, 5.0);
/// assert!((v - bead.volume()).abs() < 1e-12);
/// ```
pub fn vol_bead_slice(bead: &Bead, r_inner: f64, r_outer: f64) -> f64 {
    let eta = bead.pos() / bead.r;
    let r3 = bead.r.powi(3);

    let rho_outer = r_outer / bead.r;
    let rho_inner = r_inner / bead.r;

    for rho in [rho_inner, rho_outer] {
        if is_precision_sensitive(rho, eta) {
            warn!("Bead centre on shell boundary, rho = eta = {rho}: {bead}");
        }
    }

    let outer = cyl_sph_int_volume(rho_outer, eta) * r3;
    let inner = cyl_sph_int_volume(rho_inner, eta) * r3;
    outer - inner
}

/// Approximate volume of a bead taken up by the end of a bridge
///
/// The bridge is a cylinder of radius `bridge_radius` along the line between
/// two bead centres. It is treated as if it were centred on the bead, so the
/// overlap is half of a coaxial intersection, less the part of the bridge
/// cylinder pushed into the bead by `offset_ratio * r`.
///
/// This is a rough model and has not been validated against a meshed bridge.
pub fn vol_bridge_slice(bead: &Bead, bridge_radius: f64, offset_ratio: f64) -> f64 {
    let rho = bridge_radius / bead.r;
    let vol = cyl_sph_int_volume(rho, 0.0) * bead.r.powi(3);
    vol / 2.0 - PI * bridge_radius * bridge_radius * offset_ratio * bead.r
}

/// Bead volume and slice radii for shell `index`
///
/// The shell lies between `r_shells[index]` and `r_shells[index + 1]`. Every
/// bead contributes to the total volume, but only slices with a positive
/// volume are converted to an equivalent radius `(3 V / 4 pi)^(1/3)`.
///
/// ```rust
/// # use pbtools_bed::Bead;
/// # use pbtools_porosity::vol_shell_region;
/// let beads = [Bead::new(0.0, 0.0, 0.0, 1.0)];
/// let r_shells = [0.0, 1.0, 2.0];
///
/// let region = vol_shell_region(&beads, &r_shells, 0).unwrap();
/// assert!((region.radii[0] - 1.0).abs() < 1e-12);
///
/// assert!(vol_shell_region(&beads, &r_shells, 2).is_err());
/// ```
pub fn vol_shell_region(beads: &[Bead], r_shells: &[f64], index: usize) -> Result<ShellRegion> {
    let shells = r_shells.len().saturating_sub(1);
    if index >= shells {
        return Err(Error::ShellIndexOutOfRange { index, shells });
    }

    let (r_inner, r_outer) = (r_shells[index], r_shells[index + 1]);
    let mut region = ShellRegion::default();

    for bead in beads {
        let vol = vol_bead_slice(bead, r_inner, r_outer);
        region.volume += vol;
        if vol > 0.0 {
            region.radii.push((vol / UNIT_SPHERE_VOLUME).cbrt());
        }
    }

    trace!(
        "Shell {index} [{r_inner}, {r_outer}]: volume {}, {} slices",
        region.volume,
        region.radii.len()
    );

    Ok(region)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bead_on_axis_fills_first_shell() {
        let bead = Bead::new(0.0, 0.0, 3.0, 1.0);
        assert!((vol_bead_slice(&bead, 0.0, 1.0) - bead.volume()).abs() < 1e-12);
        assert_eq!(vol_bead_slice(&bead, 1.0, 2.0), 0.0);
    }

    #[test]
    fn slices_scale_with_radius() {
        let small = Bead::new(0.3, 0.4, 0.0, 1.0);
        let large = Bead::new(0.6, 0.8, 0.0, 2.0);
        let a = vol_bead_slice(&small, 0.2, 0.7);
        let b = vol_bead_slice(&large, 0.4, 1.4);
        assert!((b - 8.0 * a).abs() < 1e-10);
    }

    #[test]
    fn bridge_without_radius_is_empty() {
        let bead = Bead::new(1.0, 1.0, 1.0, 0.5);
        assert_eq!(vol_bridge_slice(&bead, 0.0, 0.3), 0.0);
    }

    #[test]
    fn bridge_slice_is_half_a_coaxial_cut() {
        let bead = Bead::new(0.0, 0.0, 0.0, 2.0);
        let v = vol_bridge_slice(&bead, 1.0, 0.0);
        let expected = UNIT_SPHERE_VOLUME * (1.0 - 0.75_f64.powf(1.5)) * 8.0 / 2.0;
        assert!((v - expected).abs() < 1e-12);
    }

    #[test]
    fn empty_shell_list() {
        let beads = [Bead::new(0.0, 0.0, 0.0, 1.0)];
        assert!(matches!(
            vol_shell_region(&beads, &[], 0),
            Err(Error::ShellIndexOutOfRange { index: 0, shells: 0 })
        ));
    }
}
