//! Axis-aligned bounding boxes

// crate modules
use crate::error::{Error, Result};

// pbtools modules
use pbtools_utils::{f, FloatExt};

// external crates
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
///
/// Field names match the column headers expected in a bounds CSV file, and
/// the order matches the usual `(xmin, xmax, ymin, ymax, zmin, zmax)` tuple
/// reported by mesh tools.
///
/// ```rust
/// # use pbtools_bed::Bounds;
/// let b = Bounds::new(0.0, 2.0, 1.0, 3.0, -1.0, 1.0);
/// assert_eq!(b.dx(), 2.0);
/// assert_eq!(b.centre(), [1.0, 2.0, 0.0]);
/// assert!(b.is_cubic(0.1, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    pub zmin: f64,
    pub zmax: f64,
}

impl Bounds {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64, zmin: f64, zmax: f64) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
            zmin,
            zmax,
        }
    }

    /// From the six values in `(xmin, xmax, ymin, ymax, zmin, zmax)` order
    pub fn from_array(b: [f64; 6]) -> Self {
        Self::new(b[0], b[1], b[2], b[3], b[4], b[5])
    }

    /// Return the box if every extent is finite and non-negative
    pub fn validated(self) -> Result<Self> {
        let extents = [self.dx(), self.dy(), self.dz()];
        if extents.iter().all(|e| e.is_finite() && *e >= 0.0) {
            Ok(self)
        } else {
            Err(Error::InvalidBounds(f!("{self}")))
        }
    }

    pub fn dx(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn dy(&self) -> f64 {
        self.ymax - self.ymin
    }

    pub fn dz(&self) -> f64 {
        self.zmax - self.zmin
    }

    /// Centre of the box as `[x, y, z]`
    pub fn centre(&self) -> [f64; 3] {
        [
            (self.xmin + self.xmax) / 2.0,
            (self.ymin + self.ymax) / 2.0,
            (self.zmin + self.zmax) / 2.0,
        ]
    }

    /// Largest of the three extents
    pub fn max_extent(&self) -> f64 {
        self.dx().max(self.dy()).max(self.dz())
    }

    /// Average of the three extents
    pub fn mean_extent(&self) -> f64 {
        (self.dx() + self.dy() + self.dz()) / 3.0
    }

    /// Whether the y and z extents are both close to the x extent
    ///
    /// Closeness is `|d - dx| <= atol + rtol * |dx|`. A meshed sphere never
    /// has a perfectly cubic box, so some relative tolerance is needed.
    pub fn is_cubic(&self, rtol: f64, atol: f64) -> bool {
        let dx = self.dx();
        self.dy().is_close(dx, rtol, atol) && self.dz().is_close(dx, rtol, atol)
    }

    /// Smallest box containing both
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            self.xmin.min(other.xmin),
            self.xmax.max(other.xmax),
            self.ymin.min(other.ymin),
            self.ymax.max(other.ymax),
            self.zmin.min(other.zmin),
            self.zmax.max(other.zmax),
        )
    }

    /// Smallest box containing every box in the list, `None` if empty
    ///
    /// ```rust
    /// # use pbtools_bed::Bounds;
    /// let boxes = [
    ///     Bounds::new(0.0, 1.0, 0.0, 1.0, 0.0, 1.0),
    ///     Bounds::new(2.0, 3.0, -1.0, 0.5, 0.5, 4.0),
    /// ];
    /// let total = Bounds::enclosing(&boxes).unwrap();
    /// assert_eq!(total, Bounds::new(0.0, 3.0, -1.0, 1.0, 0.0, 4.0));
    /// assert!(Bounds::enclosing(&[]).is_none());
    /// ```
    pub fn enclosing(boxes: &[Bounds]) -> Option<Bounds> {
        let (first, rest) = boxes.split_first()?;
        Some(rest.iter().fold(*first, |acc, b| acc.union(b)))
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}] x [{}, {}]",
            self.xmin, self.xmax, self.ymin, self.ymax, self.zmin, self.zmax
        )
    }
}
