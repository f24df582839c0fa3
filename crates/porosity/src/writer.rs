//! Write the results of a porosity analysis to CSV files

// standard library
use std::fs;
use std::path::{Path, PathBuf};

// crate modules
use crate::error::Result;
use crate::report::PorosityReport;

// pbtools modules
use pbtools_utils::f;

// external crates
use csv::WriterBuilder;
use itertools::izip;
use log::info;

/// Write every output of a report into a directory
///
/// Files are headerless CSV, matching the inputs expected by the rest of the
/// toolchain:
///
/// | File                          | Rows                                |
/// | ----------------------------- | ----------------------------------- |
/// | `xyzr.csv`                    | `x,y,z,r` per bead                  |
/// | `<prefix>_bedpor_rad.csv`     | `shell_centre,porosity`             |
/// | `<prefix>_colpor_rad.csv`     | `shell_centre,porosity`, if known   |
/// | `<prefix>_volfrac.csv`        | `bin_radius,fraction`               |
/// | `<prefix>_shell_volfrac.csv`  | `shell,bin_radius,fraction`, if any |
///
/// The directory is created if needed. Returns the paths written.
pub fn write_outputs<P: AsRef<Path>>(
    report: &PorosityReport,
    output_dir: P,
    prefix: &str,
) -> Result<Vec<PathBuf>> {
    let dir = output_dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    let path_for = |suffix: &str| dir.join(f!("{prefix}_{suffix}"));

    let path = dir.join("xyzr.csv");
    report.bed.write(&path)?;
    written.push(path);

    let path = path_for("bedpor_rad.csv");
    write_pairs(&path, &report.shell_centres, &report.bed_porosities)?;
    written.push(path);

    if let Some(porosities) = &report.column_porosities {
        let path = path_for("colpor_rad.csv");
        write_pairs(&path, &report.shell_centres, porosities)?;
        written.push(path);
    }

    let path = path_for("volfrac.csv");
    write_pairs(&path, &report.histogram.radii, &report.histogram.fractions)?;
    written.push(path);

    if !report.shell_histograms.is_empty() {
        let path = path_for("shell_volfrac.csv");
        write_shell_fractions(&path, report)?;
        written.push(path);
    }

    for path in &written {
        info!("Saved to {}", path.display());
    }

    Ok(written)
}

/// Two columns of equal length as `x,y` rows
fn write_pairs(path: &Path, x: &[f64], y: &[f64]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    for row in x.iter().zip(y) {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Every shell histogram as `shell,bin_radius,fraction` rows
fn write_shell_fractions(path: &Path, report: &PorosityReport) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    for (shell, histogram) in report.shell_histograms.iter().enumerate() {
        for (radius, fraction) in izip!(&histogram.radii, &histogram.fractions) {
            writer.serialize((shell, radius, fraction))?;
        }
    }
    writer.flush()?;
    Ok(())
}
