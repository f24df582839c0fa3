//! Recover spherical beads from object bounding boxes

// crate modules
use crate::bead::Bead;
use crate::bounds::Bounds;
use crate::error::{Error, Result};
use crate::packed_bed::PackedBed;
use crate::source::BoundingBoxSource;

// external crates
use kdam::{Bar, BarBuilder, BarExt};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// How a bead radius is estimated from its bounding box
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusEstimate {
    /// Half of the largest extent
    #[default]
    MaxExtent,
    /// Half of the average extent, less sensitive to a single bulging facet
    MeanExtent,
}

impl RadiusEstimate {
    /// Radius for the bounding box
    ///
    /// ```rust
    /// # use pbtools_bed::{Bounds, RadiusEstimate};
    /// let b = Bounds::new(0.0, 2.0, 0.0, 2.0, 0.0, 2.6);
    /// assert_eq!(RadiusEstimate::MaxExtent.radius(&b), 1.3);
    /// assert!((RadiusEstimate::MeanExtent.radius(&b) - 1.1).abs() < 1e-12);
    /// ```
    pub fn radius(&self, bounds: &Bounds) -> f64 {
        match self {
            Self::MaxExtent => bounds.max_extent() / 2.0,
            Self::MeanExtent => bounds.mean_extent() / 2.0,
        }
    }
}

/// Options for [extract_beads()]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractOptions {
    /// Relative tolerance on the y and z extents compared to x
    pub rtol: f64,
    /// Absolute tolerance on the y and z extents compared to x
    pub atol: f64,
    /// Radius estimate for accepted objects
    pub radius_estimate: RadiusEstimate,
    /// Do not print the progress bar
    pub disable_progress: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            rtol: 0.1,
            atol: 0.0,
            radius_estimate: RadiusEstimate::default(),
            disable_progress: false,
        }
    }
}

/// Result of [extract_beads()]
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Bed of every accepted bead, bounds not yet computed
    pub bed: PackedBed,
    /// Total number of objects provided by the source
    pub found: usize,
    /// Indices of objects that were not close enough to spheres
    pub rejected: Vec<usize>,
    /// Bounds enclosing every object, accepted or not
    pub global: Option<Bounds>,
    /// Bounds of the container, if the source knows of one
    pub container: Option<Bounds>,
}

impl Extraction {
    /// Number of accepted beads
    pub fn accepted(&self) -> usize {
        self.bed.size()
    }

    /// True if any object failed the sphere check
    pub fn has_rejections(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// Build a packed bed from every roughly cubic bounding box
///
/// An object is accepted when both the y and z extents are close to the x
/// extent, i.e. `|d - dx| <= atol + rtol * |dx|`. The bead centre is the box
/// centre and the radius follows the [RadiusEstimate] in `options`.
///
/// Objects that fail the check, or have no extent at all, are not an error.
/// They are typically the interstitial volume or container walls from the
/// same mesh, and their indices are returned for the caller to inspect.
///
/// ```rust
/// # use pbtools_bed::{extract_beads, Bounds, ExtractOptions};
/// let boxes = vec![
///     Bounds::new(-1.0, 1.0, -1.0, 1.0, 0.0, 2.0),
///     Bounds::new(-5.0, 5.0, -5.0, 5.0, 0.0, 20.0),
/// ];
///
/// let options = ExtractOptions {
///     disable_progress: true,
///     ..Default::default()
/// };
///
/// let extraction = extract_beads(&boxes, &options).unwrap();
/// assert_eq!(extraction.accepted(), 1);
/// assert_eq!(extraction.rejected, vec![1]);
/// ```
pub fn extract_beads<S>(source: &S, options: &ExtractOptions) -> Result<Extraction>
where
    S: BoundingBoxSource + ?Sized,
{
    let objects = source.object_bounds()?;
    let global = source.global_bounds(&objects)?;
    let container = source.container_bounds()?;

    let mut progress_bar = init_progress_bar(objects.len(), options.disable_progress)?;
    let mut bed = PackedBed::new();
    let mut rejected = Vec::new();

    for (i, bounds) in objects.iter().enumerate() {
        progress_bar.update(1)?;

        let bounds = bounds.validated()?;
        if !bounds.is_cubic(options.rtol, options.atol) || bounds.max_extent() == 0.0 {
            debug!("Rejected object {i}, not spherical: {bounds}");
            rejected.push(i);
            continue;
        }

        let [x, y, z] = bounds.centre();
        let r = options.radius_estimate.radius(&bounds);
        bed.add(Bead::try_new(x, y, z, r)?);
    }

    if !options.disable_progress {
        eprintln!();
    }

    info!("Found {} objects", objects.len());
    info!("Accepted {} as beads", bed.size());

    if !objects.is_empty() && rejected.len() * 2 > objects.len() {
        warn!(
            "Rejected {} of {} objects, check the sphere tolerances",
            rejected.len(),
            objects.len()
        );
    }

    Ok(Extraction {
        bed,
        found: objects.len(),
        rejected,
        global,
        container,
    })
}

/// Initialise the progress bar, if wanted
fn init_progress_bar(total: usize, disable: bool) -> Result<Bar> {
    BarBuilder::default()
        .total(total)
        .desc("Extracting beads")
        .disable(disable)
        .bar_format("{desc}: {count}/{total} [{rate:.2} obj/s]  ")
        .build()
        .map_err(Error::ProgressBar)
}
