//! Results of a porosity analysis

// crate modules
use crate::bridges::BridgeVolumes;
use crate::histogram::Histogram;
use crate::shells::ShellType;

// pbtools modules
use pbtools_bed::{BedBounds, PackedBed};
use pbtools_utils::{f, FloatExt, OptionExt};

/// Everything produced by [run()](crate::run)
///
/// The [Display](std::fmt::Display) implementation gives a console summary,
/// including the flattened volume fractions and mean radii needed for a
/// polydisperse particle model.
#[derive(Debug, Clone)]
pub struct PorosityReport {
    /// Objects provided by the source
    pub found: usize,
    /// Objects accepted as beads
    pub accepted: usize,
    /// Objects that were not spheres
    pub rejected: usize,

    /// The bed of accepted beads
    pub bed: PackedBed,
    /// Bounding statistics of the bed
    pub bounds: BedBounds,

    pub column_radius: f64,
    /// Full column length, if known
    pub column_length: Option<f64>,

    pub shell_type: ShellType,
    /// Shell boundaries, one more than the number of shells
    pub shell_radii: Vec<f64>,
    /// Mid-point radius of every shell
    pub shell_centres: Vec<f64>,
    /// Bead volume in every shell
    pub shell_volumes: Vec<f64>,
    /// Shell porosities over the bed height
    pub bed_porosities: Vec<f64>,
    /// Shell porosities over the column length
    pub column_porosities: Option<Vec<f64>>,

    /// Total volume of every bead
    pub bead_volume: f64,
    /// Average porosity over the bed cylinder
    pub bed_porosity: f64,
    /// Average porosity including the volume added by bridges
    pub bridged_porosity: f64,
    pub bridges: BridgeVolumes,

    /// Size distribution of the whole bed
    pub histogram: Histogram,
    /// Size distribution in every shell, empty if not requested
    pub shell_histograms: Vec<Histogram>,
}

impl PorosityReport {
    /// Number of radial shells
    pub fn nrad(&self) -> usize {
        self.shell_volumes.len()
    }

    /// Shell volume fractions flattened shell by shell
    pub fn shell_volume_fractions(&self) -> Vec<f64> {
        self.shell_histograms
            .iter()
            .flat_map(|h| h.fractions.iter().copied())
            .collect()
    }
}

fn list(values: &[f64]) -> String {
    let items = values.iter().map(|v| v.sci(5, 2)).collect::<Vec<String>>();
    f!("[{}]", items.join(", "))
}

impl std::fmt::Display for PorosityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let rule = "-".repeat(60);
        let mut s = f!("{rule}\n > Packed bed porosity\n{rule}\n");

        s += &f!("objects      : {} found\n", self.found);
        s += &f!("beads        : {} accepted\n", self.accepted);
        s += &f!("rejected     : {}\n", self.rejected);
        s += &f!(
            "bead radii   : {} - {} (avg {})\n",
            self.bounds.rmin.sci(5, 2),
            self.bounds.rmax.sci(5, 2),
            self.bounds.ravg.sci(5, 2)
        );
        s += &f!("column R     : {}\n", self.column_radius.sci(5, 2));
        s += &f!("bed height   : {}\n", self.bounds.height.sci(5, 2));
        s += &f!("column length: {}\n", self.column_length.display_sci(5));
        s += &f!("bead volume  : {}\n", self.bead_volume.sci(5, 2));
        s += &f!("bridges      : {}\n", self.bridges.count);
        s += &f!(
            "bridge volume: {} added, {} removed\n",
            self.bridges.added.sci(5, 2),
            self.bridges.removed.sci(5, 2)
        );
        s += &f!("bed porosity : {}\n", self.bed_porosity.sci(5, 2));
        s += &f!("with bridges : {}\n", self.bridged_porosity.sci(5, 2));

        s += &f!("\n--- Full Bed Histogram ---\n");
        s += &f!("vol_frac:\n{}\n", list(&self.histogram.fractions));
        s += &f!("mean_radii:\n{}\n", list(&self.histogram.radii));

        s += &f!("\n--- Radial Shells ({}, {}) ---\n", self.shell_type, self.nrad());
        s += &f!("shell_radii:\n{}\n", list(&self.shell_radii));
        s += &f!("col_porosity_bed:\n{}\n", list(&self.bed_porosities));
        if let Some(porosities) = &self.column_porosities {
            s += &f!("col_porosity:\n{}\n", list(porosities));
        }

        if !self.shell_histograms.is_empty() {
            s += &f!("\n--- Particle Distribution per Shell ---\n");
            s += &f!("par_type_volfrac:\n{}\n", list(&self.shell_volume_fractions()));
            s += &f!("par_radius:\n{}\n", list(&self.histogram.radii));
        }

        s += &rule;
        write!(f, "{}", s)
    }
}
