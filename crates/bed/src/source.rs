//! Providers of object bounding boxes

// standard library
use std::path::{Path, PathBuf};

// crate modules
use crate::bounds::Bounds;
use crate::error::Result;

// external crates
use csv::ReaderBuilder;

/// Anything able to report bounding boxes for the objects in a packing
///
/// Usually backed by a mesh tool that has segmented a packed-bed geometry
/// into connected components. Each component is reported as an axis-aligned
/// box, in no particular order.
///
/// The global bounds default to the box enclosing the objects already read
/// with [BoundingBoxSource::object_bounds], so a source is only parsed once
/// per extraction. A source may
/// also know about a separate container mesh, e.g. the interstitial volume
/// of a full column, which defines the column length.
pub trait BoundingBoxSource {
    /// Bounding box of every connected component
    fn object_bounds(&self) -> Result<Vec<Bounds>>;

    /// Bounding box of the full geometry, given the boxes of its objects
    fn global_bounds(&self, objects: &[Bounds]) -> Result<Option<Bounds>> {
        Ok(Bounds::enclosing(objects))
    }

    /// Bounding box of the container mesh, if one is known
    fn container_bounds(&self) -> Result<Option<Bounds>> {
        Ok(None)
    }
}

impl BoundingBoxSource for [Bounds] {
    fn object_bounds(&self) -> Result<Vec<Bounds>> {
        Ok(self.to_vec())
    }
}

impl BoundingBoxSource for Vec<Bounds> {
    fn object_bounds(&self) -> Result<Vec<Bounds>> {
        Ok(self.clone())
    }
}

/// Bounding boxes stored in CSV files
///
/// The object file must have a header row naming the columns `xmin`, `xmax`,
/// `ymin`, `ymax`, `zmin`, and `zmax`, in any order. An optional second file
/// of the same format describes the container, and every row in it is merged
/// into a single box.
///
/// ```rust, no_run
/// # use pbtools_bed::{BoundsCsv, BoundingBoxSource};
/// let source = BoundsCsv::new("objects.csv").with_container("column.csv");
/// let boxes = source.object_bounds().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct BoundsCsv {
    path: PathBuf,
    container: Option<PathBuf>,
}

impl BoundsCsv {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            container: None,
        }
    }

    /// Also use a container bounds file
    pub fn with_container<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.container = Some(path.as_ref().to_path_buf());
        self
    }
}

impl BoundingBoxSource for BoundsCsv {
    fn object_bounds(&self) -> Result<Vec<Bounds>> {
        read_bounds_csv(&self.path)
    }

    fn container_bounds(&self) -> Result<Option<Bounds>> {
        match &self.container {
            Some(path) => Ok(Bounds::enclosing(&read_bounds_csv(path)?)),
            None => Ok(None),
        }
    }
}

/// Read every row of a bounds file, checking the extents as we go
fn read_bounds_csv(path: &Path) -> Result<Vec<Bounds>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    reader
        .deserialize::<Bounds>()
        .map(|record| record?.validated())
        .collect()
}
