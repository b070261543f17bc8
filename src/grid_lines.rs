// Box grid generator: full meridians and parallels over the whole globe
use crate::sampling::{linspace, marks, repeat, tile};
use crate::triplet::PointTriplet;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Line counts and per-line resolution for the box grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLinesConfig {
    pub ew_divisions: usize,    // Meridians drawn = ew_divisions + 1
    pub ns_divisions: usize,    // Parallels drawn = ns_divisions + 1
    pub points_per_line: usize, // Samples along each line
}

impl Default for GridLinesConfig {
    fn default() -> Self {
        Self {
            ew_divisions: 18,
            ns_divisions: 9,
            points_per_line: 1000,
        }
    }
}

impl GridLinesConfig {
    /// Number of points the grid will contain
    pub fn point_count(&self) -> usize {
        (self.ew_divisions + 1 + self.ns_divisions + 1) * self.points_per_line
    }
}

/// Trace every meridian mark pole to pole, then every parallel mark around
/// the globe. Vertical lines come first in the output; consumers slice by
/// offset.
pub fn generate(config: &GridLinesConfig) -> PointTriplet {
    let n = config.points_per_line;

    let ns_marks = marks(-90.0, 180.0, config.ns_divisions);
    let ew_marks = marks(-180.0, 360.0, config.ew_divisions);

    let lons_slice = linspace(-180.0, 180.0, n);
    let lats_slice = linspace(-90.0, 90.0, n);

    // Vertical lines: fixed longitude, latitude sweeps
    let mut lats = tile(&lats_slice, ew_marks.len());
    let mut lons = repeat(&ew_marks, n);

    // Horizontal lines: fixed latitude, longitude sweeps
    lats.extend(repeat(&ns_marks, n));
    lons.extend(tile(&lons_slice, ns_marks.len()));

    let triplet = PointTriplet::with_unit_values(lats, lons);
    info!(
        "Generated box grid: {} meridians x {} parallels, {} points",
        ew_marks.len(),
        ns_marks.len(),
        triplet.len()
    );
    triplet
}
