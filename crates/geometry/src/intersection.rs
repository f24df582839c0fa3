//! Volume of intersection between a unit sphere and an infinite cylinder

// standard library
use std::f64::consts::PI;

// crate modules
use crate::elliptic::{ellipe, ellipe_inc, ellipf, ellipk};

/// Volume of the unit sphere, `4/3 pi`
pub const UNIT_SPHERE_VOLUME: f64 = 4.0 / 3.0 * PI;

/// Which closed form applies to a given `(rho, eta)` pair
///
/// Both values are normalised by the sphere radius. `rho` is the cylinder
/// radius and `eta` the distance of the sphere centre from the cylinder axis.
///
/// ```rust
/// # use pbtools_geometry::{classify, IntersectionCase};
/// assert_eq!(classify(0.0, 0.5), IntersectionCase::ZeroRadius);
/// assert_eq!(classify(3.0, 1.0), IntersectionCase::SphereInside);
/// assert_eq!(classify(1.0, 3.0), IntersectionCase::SphereOutside);
/// assert_eq!(classify(0.5, 0.0), IntersectionCase::Coaxial);
/// assert_eq!(classify(0.8, 0.6), IntersectionCase::AxisOutsideSlice);
/// assert_eq!(classify(0.2, 0.3), IntersectionCase::AxisInsideSlice);
/// assert_eq!(classify(0.25, 0.75), IntersectionCase::Tangent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntersectionCase {
    /// Zero radius cylinder, no volume
    ZeroRadius,
    /// Sphere entirely within the cylinder, `eta - rho <= -1`
    SphereInside,
    /// Sphere entirely outside the cylinder, `eta - rho >= 1`
    SphereOutside,
    /// Sphere centred on the cylinder axis with `rho <= 1`
    Coaxial,
    /// General case with `rho + eta > 1`
    AxisOutsideSlice,
    /// General case with `rho + eta < 1`
    AxisInsideSlice,
    /// Boundary between the two general cases, `rho + eta == 1`
    Tangent,
    /// Fits none of the above, only possible for non-finite input
    Undefined,
}

impl IntersectionCase {
    /// True for the cases evaluated through elliptic integrals
    pub fn is_elliptic(&self) -> bool {
        matches!(
            self,
            Self::AxisOutsideSlice | Self::AxisInsideSlice | Self::Tangent
        )
    }
}

/// Decide which closed form applies to `(rho, eta)`
///
/// Checks are made in order of precedence, so a zero radius cylinder always
/// wins over the fully inside/outside tests.
pub fn classify(rho: f64, eta: f64) -> IntersectionCase {
    let offset = eta - rho;
    let reach = rho + eta;

    if rho == 0.0 {
        IntersectionCase::ZeroRadius
    } else if offset <= -1.0 {
        IntersectionCase::SphereInside
    } else if offset >= 1.0 {
        IntersectionCase::SphereOutside
    } else if eta == 0.0 && (0.0..=1.0).contains(&rho) {
        IntersectionCase::Coaxial
    } else if reach > 1.0 {
        IntersectionCase::AxisOutsideSlice
    } else if reach < 1.0 {
        IntersectionCase::AxisInsideSlice
    } else if reach == 1.0 {
        IntersectionCase::Tangent
    } else {
        IntersectionCase::Undefined
    }
}

/// True where the elliptic forms lose precision
///
/// The formulae are numerically delicate when the sphere centre sits exactly
/// on the cylinder wall, i.e. `eta == rho`. Results are still returned for
/// these inputs but callers may want to flag them.
///
/// ```rust
/// # use pbtools_geometry::is_precision_sensitive;
/// assert!(is_precision_sensitive(0.4, 0.4));
/// assert!(!is_precision_sensitive(0.4, 0.0));
/// ```
pub fn is_precision_sensitive(rho: f64, eta: f64) -> bool {
    eta == rho && classify(rho, eta).is_elliptic()
}

/// Volume of intersection between a unit sphere and an infinite cylinder
///
/// The cylinder has radius `rho` and is parallel to the z-axis, the sphere
/// centre is a horizontal distance `eta` from the cylinder axis. Both are
/// normalised by the sphere radius, so multiply the result by `r^3` for a
/// physical volume.
///
/// ```rust
/// # use pbtools_geometry::{cyl_sph_int_volume, UNIT_SPHERE_VOLUME};
/// // Degenerate and trivial cases
/// assert_eq!(cyl_sph_int_volume(0.0, 0.3), 0.0);
/// assert_eq!(cyl_sph_int_volume(2.0, 0.5), UNIT_SPHERE_VOLUME);
/// assert_eq!(cyl_sph_int_volume(0.5, 2.0), 0.0);
///
/// // A very wide cylinder through the sphere centre takes about half of it
/// let v = cyl_sph_int_volume(1000.0, 1000.0);
/// assert!((v - UNIT_SPHERE_VOLUME / 2.0).abs() < 1e-3);
/// ```
///
/// Inputs are expected to satisfy `rho >= 0` and `eta >= 0`. Anything that
/// fits none of the closed forms returns zero, and trips an assertion in debug
/// builds.
pub fn cyl_sph_int_volume(rho: f64, eta: f64) -> f64 {
    match classify(rho, eta) {
        IntersectionCase::ZeroRadius => 0.0,
        IntersectionCase::SphereInside => UNIT_SPHERE_VOLUME,
        IntersectionCase::SphereOutside => 0.0,
        IntersectionCase::Coaxial => {
            UNIT_SPHERE_VOLUME - UNIT_SPHERE_VOLUME * (1.0 - rho * rho).powf(1.5)
        }
        IntersectionCase::AxisOutsideSlice => axis_outside_slice(rho, eta),
        IntersectionCase::AxisInsideSlice => axis_inside_slice(rho, eta),
        IntersectionCase::Tangent => tangent(rho, eta),
        IntersectionCase::Undefined => {
            debug_assert!(false, "no intersection formula for rho={rho}, eta={eta}");
            0.0
        }
    }
}

/// Heuman's lambda function written out in terms of K, E, F, and E(phi)
fn heuman_lambda(nu: f64, m: f64, k: f64, e: f64) -> f64 {
    let f = ellipf(nu, 1.0 - m);
    let ep = ellipe_inc(nu, 1.0 - m);
    2.0 / PI * (e * f + k * ep - k * f)
}

/// `rho + eta > 1`
fn axis_outside_slice(rho: f64, eta: f64) -> f64 {
    let offset = eta - rho;
    let nu = offset.asin();
    let m = (1.0 - offset * offset) / (4.0 * rho * eta);

    let k = ellipk(m);
    let e = ellipe(m);
    let l0 = heuman_lambda(nu, m, k, e);
    let root = (rho * eta).sqrt();

    2.0 / 3.0 * PI * (1.0 - l0)
        - 8.0 / 9.0 * root * (6.0 * rho * rho + 2.0 * rho * eta - 3.0) * (1.0 - m) * k
        + 8.0 / 9.0 * root * (7.0 * rho * rho + eta * eta - 4.0) * e
}

/// `rho + eta < 1`
fn axis_inside_slice(rho: f64, eta: f64) -> f64 {
    let offset = eta - rho;
    let reach = eta + rho;
    let nu = (offset / reach).asin();
    let m = 4.0 * rho * eta / (1.0 - offset * offset);

    let k = ellipk(m);
    let e = ellipe(m);
    let l0 = heuman_lambda(nu, m, k, e);
    let root = (1.0 - offset * offset).sqrt();

    2.0 / 3.0 * PI * (1.0 - l0)
        - 4.0 * root / (9.0 * reach)
            * (2.0 * rho - 4.0 * eta + reach * offset * offset)
            * (1.0 - m)
            * k
        + 4.0 / 9.0 * root * (7.0 * rho * rho + eta * eta - 4.0) * e
}

/// `rho + eta == 1`, the limit m -> 1 of either general case
///
/// Here `K(m)` diverges but `(1 - m) K(m)` vanishes, `E(1) = 1`, and the
/// incomplete integrals at zero parameter reduce to the amplitude, leaving
/// `L0 = 2 nu / pi`.
fn tangent(rho: f64, eta: f64) -> f64 {
    let nu = (eta - rho).asin();
    let root = (rho * eta).sqrt();

    2.0 / 3.0 * PI * (1.0 - 2.0 * nu / PI) + 8.0 / 9.0 * root * (7.0 * rho * rho + eta * eta - 4.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // reference values from mpmath elliptic integrals
    #[test]
    fn general_cases_match_reference() {
        let cases = [
            (0.5, 0.3, 1.383_065_649_150_095_2),
            (0.5, 0.7, 0.875_050_156_704_256_6),
            (1.2, 0.5, 3.770_763_756_431_978),
            (0.3, 0.2, 0.540_566_115_000_731_3),
            (1.0, 1.0, 1.692_870_664_002_504_2),
            (0.5, 1.2, 0.149_322_383_867_527_94),
        ];

        for (rho, eta, expected) in cases {
            let v = cyl_sph_int_volume(rho, eta);
            assert!((v - expected).abs() < 1e-12, "V({rho}, {eta}) = {v}");
        }
    }

    #[test]
    fn tangent_is_continuous() {
        for (rho, eta) in [(0.5, 0.5), (0.3, 0.7), (0.7, 0.3)] {
            let at = cyl_sph_int_volume(rho, eta);
            let above = cyl_sph_int_volume(rho + 1e-9, eta);
            let below = cyl_sph_int_volume(rho - 1e-9, eta);
            assert!((at - above).abs() < 1e-7);
            assert!((at - below).abs() < 1e-7);
        }
    }

    #[test]
    fn coaxial_closed_form() {
        // spherical cap removed: 4/3 pi (1 - (1 - rho^2)^1.5)
        assert_eq!(cyl_sph_int_volume(1.0, 0.0), UNIT_SPHERE_VOLUME);
        let v = cyl_sph_int_volume(0.6, 0.0);
        assert!((v - UNIT_SPHERE_VOLUME * (1.0 - 0.8_f64.powi(3))).abs() < 1e-14);
    }

    #[test]
    fn undefined_for_nan() {
        assert_eq!(classify(f64::NAN, 0.5), IntersectionCase::Undefined);
        assert!(!IntersectionCase::Undefined.is_elliptic());
    }
}
