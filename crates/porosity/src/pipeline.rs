//! Full porosity analysis of a packed bed

// standard library
use std::f64::consts::PI;

// crate modules
use crate::bridges::bridge_volumes;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::histogram::{histo, Bins, Histogram};
use crate::report::PorosityReport;
use crate::shells::{shell_centres, shell_porosities, shell_radii};
use crate::slice::{vol_shell_region, ShellRegion};

// pbtools modules
use pbtools_bed::{extract_beads, BoundingBoxSource, Extraction};

// external crates
use log::{debug, info, warn};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

/// Run the full analysis on every object in a bounding box source
///
/// Steps are:
/// 1. Recover beads from the roughly cubic bounding boxes
/// 2. Split the column into radial shells
/// 3. Sum the bead volume in every shell, in parallel
/// 4. Compute shell porosities for the bed height and column length
/// 5. Estimate the bridge volumes between touching beads
/// 6. Bin the bead sizes for the whole bed and every shell
///
/// Nothing is written to disk, see [write_outputs()](crate::write_outputs).
///
/// ```rust
/// # use pbtools_bed::Bounds;
/// # use pbtools_porosity::{run, Config};
/// let boxes = vec![Bounds::new(-1.0, 1.0, -1.0, 1.0, 0.0, 2.0)];
///
/// let mut config = Config::new(2.0);
/// config.nrad = 2;
/// config.disable_progress = true;
///
/// let report = run(&boxes, &config).unwrap();
/// assert_eq!(report.accepted, 1);
/// assert_eq!(report.shell_radii, vec![0.0, 1.0, 2.0]);
/// ```
pub fn run<S>(source: &S, config: &Config) -> Result<PorosityReport>
where
    S: BoundingBoxSource + ?Sized,
{
    config.validate()?;
    let column_radius = config.column_radius()?;

    let extraction = extract_beads(source, &config.extract_options())?;
    if extraction.bed.is_empty() {
        return Err(Error::NoBeads {
            found: extraction.found,
        });
    }

    let column_length = column_length(&extraction, config);
    let (found, rejected) = (extraction.found, extraction.rejected.len());
    let mut bed = extraction.bed;
    let bounds = *bed.update_bounds()?;
    debug!("{bounds}");

    let shell_radii = shell_radii(column_radius, config.nrad, config.shelltype)?;
    debug!("Shell radii: {shell_radii:?}");

    let pool = ThreadPoolBuilder::new()
        .num_threads(config.threads.unwrap_or(0))
        .build()?;
    debug!("Using {} threads", pool.current_num_threads());

    let beads = bed.beads();
    let regions = pool.install(|| {
        (0..config.nrad)
            .into_par_iter()
            .map(|i| vol_shell_region(beads, &shell_radii, i))
            .collect::<Result<Vec<ShellRegion>>>()
    })?;

    let shell_volumes = regions.iter().map(|r| r.volume).collect::<Vec<f64>>();
    let bed_porosities = shell_porosities(&shell_volumes, &shell_radii, bounds.height)?;
    let column_porosities = column_length
        .map(|length| shell_porosities(&shell_volumes, &shell_radii, length))
        .transpose()?;

    let bridges = pool.install(|| {
        bridge_volumes(
            beads,
            config.bridge_tolerance,
            config.relative_bridge_radius,
            config.bridge_offset_ratio,
        )
    });

    let bead_volume = bed.volume();
    let column_volume = PI * column_radius * column_radius * bounds.height;
    let bed_porosity = 1.0 - bead_volume / column_volume;
    let bridged_porosity = 1.0 - (bead_volume + bridges.added) / column_volume;
    info!("Bed porosity: {bed_porosity}");
    info!("Bed porosity with bridges: {bridged_porosity}");

    let histogram = histo(&bed.radii(), &Bins::Count(config.npartype))?;
    let shell_histograms = if config.per_shell_histograms {
        shell_histograms(&regions, &histogram)?
    } else {
        Vec::new()
    };

    Ok(PorosityReport {
        found,
        accepted: bed.size(),
        rejected,
        bounds,
        column_radius,
        column_length,
        shell_type: config.shelltype,
        shell_centres: shell_centres(&shell_radii),
        shell_radii,
        shell_volumes,
        bed_porosities,
        column_porosities,
        bead_volume,
        bed_porosity,
        bridged_porosity,
        bridges,
        histogram,
        shell_histograms,
        bed,
    })
}

/// Decide on a column length, if there is one
///
/// An explicit length always wins. Otherwise a container from the source is
/// used, and failing that the global bounds whenever some objects were not
/// spheres, on the assumption that they are the interstitial mesh.
fn column_length(extraction: &Extraction, config: &Config) -> Option<f64> {
    if let Some(length) = config.column_length {
        return Some(length);
    }

    let bounds = match (extraction.container, extraction.has_rejections()) {
        (Some(container), _) => container,
        (None, true) => extraction.global?,
        (None, false) => return None,
    };

    let length = bounds.dz();
    if length <= 0.0 {
        warn!(
            "Column length of {length} from the mesh bounds is not positive, \
             skipping column porosities"
        );
        return None;
    }

    info!("Assuming an interstitial mesh is provided, column length = {length}");
    Some(length)
}

/// Size distribution of the bead slices in every shell, using the bed bins
fn shell_histograms(regions: &[ShellRegion], bed: &Histogram) -> Result<Vec<Histogram>> {
    let bins = Bins::Edges(bed.edges.clone());
    regions.iter().map(|r| histo(&r.radii, &bins)).collect()
}
