//! Collections of beads and their derived bounds

// standard library
use std::f64::consts::PI;
use std::path::Path;

// crate modules
use crate::bead::Bead;
use crate::error::{Error, Result};
use crate::io::write_xyzr;

// pbtools modules
use pbtools_utils::{f, SliceExt};

// external crates
use log::trace;

/// A packed bed of spherical beads
///
/// Insertion order has no meaning, it is usually just the order in which the
/// beads were discovered.
///
/// Bounding statistics are derived from the beads and cached. Adding a bead
/// clears the cache, and [update_bounds()](PackedBed::update_bounds) has to
/// be called again before [bounds()](PackedBed::bounds) is available.
#[derive(Debug, Clone, Default)]
pub struct PackedBed {
    beads: Vec<Bead>,
    bounds: Option<BedBounds>,
}

/// Bounding statistics of a [PackedBed]
///
/// Extents include the bead radii, i.e. every bead contributes its centre
/// plus and minus `r` in each direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BedBounds {
    /// Smallest bead radius
    pub rmin: f64,
    /// Largest bead radius
    pub rmax: f64,
    /// Average bead radius
    pub ravg: f64,

    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    pub zmin: f64,
    pub zmax: f64,

    pub dx: f64,
    pub dy: f64,
    pub dz: f64,

    /// Container radius, half the average of the x and y extents
    pub radius: f64,
    /// Bed height, same as `dz`
    pub height: f64,
    /// Volume of the container cylinder `pi R^2 h`
    pub cylinder_volume: f64,
}

impl PackedBed {
    /// Empty bed
    pub fn new() -> Self {
        Default::default()
    }

    /// Bed containing the beads provided, bounds not yet computed
    pub fn from_beads(beads: Vec<Bead>) -> Self {
        Self {
            beads,
            bounds: None,
        }
    }

    /// Add a bead, invalidating any computed bounds
    pub fn add(&mut self, bead: Bead) {
        self.beads.push(bead);
        self.bounds = None;
    }

    /// Number of beads
    pub fn size(&self) -> usize {
        self.beads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beads.is_empty()
    }

    pub fn beads(&self) -> &[Bead] {
        &self.beads
    }

    /// List of all bead radii
    pub fn radii(&self) -> Vec<f64> {
        self.beads.iter().map(|b| b.r).collect()
    }

    /// Sum of all bead volumes
    pub fn volume(&self) -> f64 {
        self.beads.iter().map(|b| b.volume()).sum()
    }

    /// Every bead as an `(x, y, z, r)` tuple
    pub fn as_tuples(&self) -> Vec<(f64, f64, f64, f64)> {
        self.beads.iter().map(|b| b.as_tuple()).collect()
    }

    /// Bounds from the last call to [update_bounds()](PackedBed::update_bounds)
    pub fn bounds(&self) -> Option<&BedBounds> {
        self.bounds.as_ref()
    }

    /// Recalculate the bounding statistics for the bed
    ///
    /// ```rust
    /// # use pbtools_bed::{Bead, PackedBed};
    /// let mut bed = PackedBed::new();
    /// assert!(bed.update_bounds().is_err());
    ///
    /// bed.add(Bead::new(0.0, 0.0, 1.0, 1.0));
    /// bed.add(Bead::new(0.0, 0.0, 4.0, 2.0));
    ///
    /// let bounds = bed.update_bounds().unwrap();
    /// assert_eq!(bounds.ravg, 1.5);
    /// assert_eq!(bounds.height, 6.0);
    /// assert_eq!(bounds.radius, 2.0);
    /// ```
    pub fn update_bounds(&mut self) -> Result<&BedBounds> {
        let bounds = BedBounds::from_beads(&self.beads)?;
        trace!("Updated bounds: {bounds:?}");
        Ok(&*self.bounds.insert(bounds))
    }

    /// Translate the horizontal centre of the bed to the z-axis
    ///
    /// Bead x and y coordinates are shifted uniformly so that the x and y
    /// extents are centred on zero, then the bounds are recomputed. Calling
    /// this again on a centred bed changes nothing beyond rounding.
    pub fn move_bed_to_center(&mut self) -> Result<()> {
        let bounds = *self.update_bounds()?;
        let offset_x = -(bounds.xmax + bounds.xmin) / 2.0;
        let offset_y = -(bounds.ymax + bounds.ymin) / 2.0;

        for bead in self.beads.iter_mut() {
            bead.x += offset_x;
            bead.y += offset_y;
        }

        self.update_bounds()?;
        Ok(())
    }

    /// Write bead positions and radii to an xyzr CSV file
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_xyzr(&self.beads, path)
    }
}

impl BedBounds {
    fn from_beads(beads: &[Bead]) -> Result<Self> {
        if beads.is_empty() {
            return Err(Error::EmptyBed);
        }

        let radii = beads.iter().map(|b| b.r).collect::<Vec<f64>>();
        let lower = |c: fn(&Bead) -> f64| beads.iter().map(|b| c(b) - b.r).collect::<Vec<f64>>();
        let upper = |c: fn(&Bead) -> f64| beads.iter().map(|b| c(b) + b.r).collect::<Vec<f64>>();

        let xmin = lower(|b| b.x).try_min()?;
        let xmax = upper(|b| b.x).try_max()?;
        let ymin = lower(|b| b.y).try_min()?;
        let ymax = upper(|b| b.y).try_max()?;
        let zmin = lower(|b| b.z).try_min()?;
        let zmax = upper(|b| b.z).try_max()?;

        let (dx, dy, dz) = (xmax - xmin, ymax - ymin, zmax - zmin);
        let radius = (dx / 2.0 + dy / 2.0) / 2.0;

        Ok(Self {
            rmin: radii.try_min()?,
            rmax: radii.try_max()?,
            ravg: radii.try_mean()?,
            xmin,
            xmax,
            ymin,
            ymax,
            zmin,
            zmax,
            dx,
            dy,
            dz,
            radius,
            height: dz,
            cylinder_volume: PI * radius * radius * dz,
        })
    }
}

impl std::fmt::Display for BedBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "BedBounds {\n".to_string();
        s += &f!("    radii: {} to {} (avg {})\n", self.rmin, self.rmax, self.ravg);
        s += &f!("    x: {} to {}\n", self.xmin, self.xmax);
        s += &f!("    y: {} to {}\n", self.ymin, self.ymax);
        s += &f!("    z: {} to {}\n", self.zmin, self.zmax);
        s += &f!("    R: {}, h: {}\n", self.radius, self.height);
        s += &f!("    cylinder volume: {}\n}}", self.cylinder_volume);
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_bead_bed() -> PackedBed {
        PackedBed::from_beads(vec![
            Bead::new(1.0, 2.0, 0.5, 0.5),
            Bead::new(2.0, 3.5, 1.5, 1.0),
        ])
    }

    #[test]
    fn bounds_include_radii() {
        let mut bed = two_bead_bed();
        let b = *bed.update_bounds().unwrap();
        assert_eq!((b.xmin, b.xmax), (0.5, 3.0));
        assert_eq!((b.ymin, b.ymax), (1.5, 4.5));
        assert_eq!((b.zmin, b.zmax), (0.0, 2.5));
        assert_eq!((b.rmin, b.rmax), (0.5, 1.0));
        assert_eq!(b.radius, (2.5 / 2.0 + 3.0 / 2.0) / 2.0);
        assert_eq!(b.cylinder_volume, PI * b.radius * b.radius * 2.5);
    }

    #[test]
    fn adding_clears_bounds() {
        let mut bed = two_bead_bed();
        bed.update_bounds().unwrap();
        assert!(bed.bounds().is_some());
        bed.add(Bead::new(0.0, 0.0, 0.0, 1.0));
        assert!(bed.bounds().is_none());
    }

    #[test]
    fn centring_is_idempotent() {
        let mut bed = two_bead_bed();
        bed.move_bed_to_center().unwrap();
        let once = *bed.bounds().unwrap();

        bed.move_bed_to_center().unwrap();
        let twice = *bed.bounds().unwrap();

        assert!((once.xmin + once.xmax).abs() < 1e-12);
        assert!((once.ymin + once.ymax).abs() < 1e-12);
        for (a, b) in [
            (once.xmin, twice.xmin),
            (once.xmax, twice.xmax),
            (once.ymin, twice.ymin),
            (once.ymax, twice.ymax),
            (once.zmin, twice.zmin),
            (once.zmax, twice.zmax),
        ] {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn centring_keeps_heights_and_radii() {
        let mut bed = two_bead_bed();
        let before = bed.as_tuples();
        bed.move_bed_to_center().unwrap();
        for (a, b) in before.iter().zip(bed.as_tuples()) {
            assert_eq!(a.2, b.2);
            assert_eq!(a.3, b.3);
        }
    }

    #[test]
    fn undefined_values_are_an_error() {
        let mut bed = PackedBed::from_beads(vec![Bead::new(f64::NAN, 0.0, 0.0, 1.0)]);
        assert!(matches!(
            bed.update_bounds(),
            Err(Error::UtilsError(pbtools_utils::Error::SliceContainsUndefinedValues))
        ));
    }
}
