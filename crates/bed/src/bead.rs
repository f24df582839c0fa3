//! Individual spherical particles

// standard library
use std::f64::consts::PI;

// crate modules
use crate::error::{Error, Result};

// external crates
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// A single spherical bead
///
/// Beads are created once per spherical component found in a packing and are
/// not expected to change afterwards. The only supported mutation is the
/// uniform horizontal shift applied by
/// [move_bed_to_center()](crate::PackedBed::move_bed_to_center).
///
/// Field order matches the `x,y,z,r` columns of an xyzr file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bead {
    /// Centre x coordinate
    pub x: f64,
    /// Centre y coordinate
    pub y: f64,
    /// Centre z coordinate
    pub z: f64,
    /// Radius
    pub r: f64,
}

impl Bead {
    /// New bead from centre coordinates and radius, unchecked
    pub fn new(x: f64, y: f64, z: f64, r: f64) -> Self {
        Self { x, y, z, r }
    }

    /// New bead, ensuring a finite centre and a positive finite radius
    ///
    /// ```rust
    /// # use pbtools_bed::Bead;
    /// assert!(Bead::try_new(0.0, 0.0, 0.0, 1.0).is_ok());
    /// assert!(Bead::try_new(0.0, 0.0, 0.0, 0.0).is_err());
    /// assert!(Bead::try_new(f64::NAN, 0.0, 0.0, 1.0).is_err());
    /// ```
    pub fn try_new(x: f64, y: f64, z: f64, r: f64) -> Result<Self> {
        Self::new(x, y, z, r).validated()
    }

    /// Return the bead if it is physically meaningful
    pub(crate) fn validated(self) -> Result<Self> {
        if !(self.r.is_finite() && self.r > 0.0) {
            return Err(Error::InvalidBeadRadius(self.r));
        }

        if !(self.x.is_finite() && self.y.is_finite() && self.z.is_finite()) {
            return Err(Error::InvalidBeadCentre {
                x: self.x,
                y: self.y,
                z: self.z,
            });
        }

        Ok(self)
    }

    /// Radial distance of the centre from the z-axis
    ///
    /// ```rust
    /// # use pbtools_bed::Bead;
    /// assert_eq!(Bead::new(3.0, 4.0, 10.0, 1.0).pos(), 5.0);
    /// ```
    pub fn pos(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Sphere volume, `4/3 pi r^3`
    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * PI * self.r.powi(3)
    }

    /// Bead centre as a point
    pub fn centre(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    /// Euclidean distance between bead centres
    ///
    /// ```rust
    /// # use pbtools_bed::Bead;
    /// let a = Bead::new(0.0, 0.0, 0.0, 1.0);
    /// let b = Bead::new(1.0, 2.0, 2.0, 1.0);
    /// assert_eq!(a.distance(&b), 3.0);
    /// ```
    pub fn distance(&self, other: &Bead) -> f64 {
        nalgebra::distance(&self.centre(), &other.centre())
    }

    /// Plain `(x, y, z, r)` tuple
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.z, self.r)
    }
}

impl std::fmt::Display for Bead {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Bead(x: {}, y: {}, z: {}, r: {})",
            self.x, self.y, self.z, self.r
        )
    }
}
