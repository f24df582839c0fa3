//! Run configuration for the porosity analysis

// standard library
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

// crate modules
use crate::error::{Error, Result};
use crate::shells::ShellType;

// pbtools modules
use pbtools_bed::{ExtractOptions, RadiusEstimate};
use pbtools_utils::f;

// external crates
use log::debug;
use serde::{Deserialize, Serialize};

/// Everything needed to run the porosity analysis
///
/// Every field has a default, so a JSON file only needs the values that
/// differ. The column radius has no sensible default and must be given.
///
/// ```rust
/// # use pbtools_porosity::{Config, ShellType};
/// let config: Config = serde_json::from_str(r#"{
///     "nrad": 5,
///     "shelltype": "EQUIVOLUME",
///     "column_radius": 2.5e-3
/// }"#).unwrap();
///
/// assert_eq!(config.nrad, 5);
/// assert_eq!(config.npartype, 1);
/// assert_eq!(config.shelltype, ShellType::Equivolume);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of radial shells
    pub nrad: usize,
    /// Number of particle size bins
    pub npartype: usize,
    /// Shell discretisation
    pub shelltype: ShellType,

    /// Radius of the column, required
    pub column_radius: Option<f64>,
    /// Length of the full column, if different to the bed height
    pub column_length: Option<f64>,

    /// Extra gap below which touching beads are bridged
    pub bridge_tolerance: f64,
    /// Bridge radius relative to the smaller bead
    pub relative_bridge_radius: f64,
    /// Depth of the bridge ends into each bead, relative to its radius
    pub bridge_offset_ratio: f64,

    /// Relative tolerance for accepting a bounding box as a sphere
    pub sphere_rtol: f64,
    /// Absolute tolerance for accepting a bounding box as a sphere
    pub sphere_atol: f64,
    /// Bead radius estimate from the bounding box
    pub radius_estimate: RadiusEstimate,

    /// Also compute the size distribution within every shell
    pub per_shell_histograms: bool,
    /// Worker threads, rayon decides if not set
    pub threads: Option<usize>,
    /// Do not print progress bars
    pub disable_progress: bool,

    /// Prefix for every output file except `xyzr.csv`
    pub output_prefix: String,
    /// Directory for all output files
    pub output_dir: PathBuf,
    /// Object bounding boxes CSV file
    pub input: Option<PathBuf>,
    /// Container bounding boxes CSV file
    pub container: Option<PathBuf>,
    /// Logging verbosity, 2 is info level
    pub verbosity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nrad: 1,
            npartype: 1,
            shelltype: ShellType::default(),
            column_radius: None,
            column_length: None,
            bridge_tolerance: 0.0,
            relative_bridge_radius: 0.0,
            bridge_offset_ratio: 0.0,
            sphere_rtol: 0.1,
            sphere_atol: 0.0,
            radius_estimate: RadiusEstimate::default(),
            per_shell_histograms: true,
            threads: None,
            disable_progress: false,
            output_prefix: "output".to_string(),
            output_dir: PathBuf::from("."),
            input: None,
            container: None,
            verbosity: 2,
        }
    }
}

impl Config {
    /// Default configuration for a column of the given radius
    pub fn new(column_radius: f64) -> Self {
        Self {
            column_radius: Some(column_radius),
            ..Default::default()
        }
    }

    /// Read a configuration from a JSON file
    ///
    /// The result is not validated, see [validate()](Config::validate).
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let config: Config = serde_json::from_reader(reader)?;
        debug!("Read configuration from {:?}", path.as_ref());
        Ok(config)
    }

    /// Check that the values make sense before doing any work
    ///
    /// ```rust
    /// # use pbtools_porosity::Config;
    /// assert!(Config::new(1.0).validate().is_ok());
    /// assert!(Config::new(-1.0).validate().is_err());
    /// assert!(Config::default().validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.nrad == 0 {
            return Err(Error::NoShells);
        }

        if self.npartype == 0 {
            return Err(Error::NoBins);
        }

        self.column_radius()?;

        if let Some(length) = self.column_length {
            if !(length.is_finite() && length > 0.0) {
                return Err(Error::InvalidConfig(f!(
                    "column length must be positive, found {length}"
                )));
            }
        }

        let non_negative = [
            ("bridge_tolerance", self.bridge_tolerance),
            ("relative_bridge_radius", self.relative_bridge_radius),
            ("bridge_offset_ratio", self.bridge_offset_ratio),
            ("sphere_rtol", self.sphere_rtol),
            ("sphere_atol", self.sphere_atol),
        ];

        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::InvalidConfig(f!(
                    "{name} must be non-negative, found {value}"
                )));
            }
        }

        Ok(())
    }

    /// The column radius, if given and positive
    pub fn column_radius(&self) -> Result<f64> {
        match self.column_radius {
            Some(r) if r.is_finite() && r > 0.0 => Ok(r),
            Some(r) => Err(Error::InvalidConfig(f!(
                "column radius must be positive, found {r}"
            ))),
            None => Err(Error::InvalidConfig("column radius is required".to_string())),
        }
    }

    /// Bead extraction settings
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            rtol: self.sphere_rtol,
            atol: self.sphere_atol,
            radius_estimate: self.radius_estimate,
            disable_progress: self.disable_progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty_json() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.sphere_rtol, 0.1);
        assert_eq!(config.output_prefix, "output");
        assert!(config.per_shell_histograms);
    }

    #[test]
    fn radius_estimate_names() {
        let config: Config =
            serde_json::from_str(r#"{"radius_estimate": "mean_extent"}"#).unwrap();
        assert_eq!(config.radius_estimate, RadiusEstimate::MeanExtent);
    }

    #[test]
    fn invalid_values() {
        let mut config = Config::new(1.0);
        config.nrad = 0;
        assert!(matches!(config.validate(), Err(Error::NoShells)));

        let mut config = Config::new(1.0);
        config.npartype = 0;
        assert!(matches!(config.validate(), Err(Error::NoBins)));

        let mut config = Config::new(1.0);
        config.column_length = Some(0.0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = Config::new(1.0);
        config.bridge_tolerance = -1.0;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }
}
