//! Volume corrections for bridges between neighbouring beads
//!
//! Meshing tools often join beads that touch, or nearly touch, with a short
//! cylindrical bridge so that the interstitial volume has no infinitely thin
//! gaps. The bridge adds solid volume outside the beads and removes a little
//! from each bead it connects.

// standard library
use std::f64::consts::PI;
use std::ops::Add;

// crate modules
use crate::slice::vol_bridge_slice;

// pbtools modules
use pbtools_bed::Bead;

// external crates
use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Totals over every bridged pair of beads
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BridgeVolumes {
    /// Number of bridged pairs
    pub count: usize,
    /// Bridge volume outside of the beads
    pub added: f64,
    /// Bead volume taken up by bridge ends
    pub removed: f64,
}

impl Add for BridgeVolumes {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            count: self.count + other.count,
            added: self.added + other.added,
            removed: self.removed + other.removed,
        }
    }
}

/// Find the total volume of the bridges between beads
///
/// Every unordered pair closer than `r1 + r2 + bridge_tolerance` is bridged
/// with a cylinder of radius `relative_bridge_radius * min(r1, r2)`. The ends
/// are pushed into each bead by `bridge_offset_ratio` of its radius.
///
/// Pairs are checked in parallel on the current rayon pool, so the order of
/// the floating point sums is not fixed.
///
/// ```rust
/// # use pbtools_bed::Bead;
/// # use pbtools_porosity::bridge_volumes;
/// let beads = [
///     Bead::new(0.0, 0.0, 0.0, 1.0),
///     Bead::new(2.1, 0.0, 0.0, 1.0),
///     Bead::new(9.0, 0.0, 0.0, 1.0),
/// ];
///
/// assert_eq!(bridge_volumes(&beads, 0.0, 0.2, 0.0).count, 0);
/// assert_eq!(bridge_volumes(&beads, 0.2, 0.2, 0.0).count, 1);
/// ```
pub fn bridge_volumes(
    beads: &[Bead],
    bridge_tolerance: f64,
    relative_bridge_radius: f64,
    bridge_offset_ratio: f64,
) -> BridgeVolumes {
    let bridges = (0..beads.len())
        .into_par_iter()
        .map(|i| {
            let first = &beads[i];
            beads[i + 1..]
                .iter()
                .filter_map(|second| {
                    let distance = first.distance(second);
                    (distance < first.r + second.r + bridge_tolerance).then(|| {
                        bridge_between(
                            first,
                            second,
                            distance,
                            relative_bridge_radius,
                            bridge_offset_ratio,
                        )
                    })
                })
                .fold(BridgeVolumes::default(), Add::add)
        })
        .reduce(BridgeVolumes::default, Add::add);

    info!("Number of bridges: {}", bridges.count);
    debug!(
        "Bridge volume added {}, removed {}",
        bridges.added, bridges.removed
    );
    bridges
}

/// Contribution of a single bridged pair
fn bridge_between(
    first: &Bead,
    second: &Bead,
    distance: f64,
    relative_bridge_radius: f64,
    offset_ratio: f64,
) -> BridgeVolumes {
    let bridge_radius = relative_bridge_radius * first.r.min(second.r);
    let end_1 = vol_bridge_slice(first, bridge_radius, offset_ratio);
    let end_2 = vol_bridge_slice(second, bridge_radius, offset_ratio);
    let length = distance - offset_ratio * first.r - offset_ratio * second.r;

    BridgeVolumes {
        count: 1,
        added: PI * bridge_radius * bridge_radius * length - end_1 - end_2,
        removed: end_1 + end_2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pair_volumes() {
        let beads = [Bead::new(0.0, 0.0, 0.0, 1.0), Bead::new(0.0, 0.0, 2.0, 1.0)];
        let bridges = bridge_volumes(&beads, 0.1, 0.5, 0.0);

        let end = vol_bridge_slice(&beads[0], 0.5, 0.0);
        assert_eq!(bridges.count, 1);
        assert!((bridges.removed - 2.0 * end).abs() < 1e-12);
        assert!((bridges.added - (PI * 0.25 * 2.0 - 2.0 * end)).abs() < 1e-12);
    }

    #[test]
    fn every_pair_is_counted_once() {
        // a tight cluster where every bead touches every other
        let beads = [
            Bead::new(0.0, 0.0, 0.0, 1.0),
            Bead::new(1.0, 0.0, 0.0, 1.0),
            Bead::new(0.0, 1.0, 0.0, 1.0),
            Bead::new(0.0, 0.0, 1.0, 1.0),
        ];
        assert_eq!(bridge_volumes(&beads, 0.0, 0.1, 0.0).count, 6);
    }

    #[test]
    fn no_beads_no_bridges() {
        assert_eq!(bridge_volumes(&[], 1.0, 0.1, 0.1), BridgeVolumes::default());
    }
}
