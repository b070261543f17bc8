// Dense lat/lon mesh generator
use crate::sampling::{linspace, repeat, tile};
use crate::triplet::PointTriplet;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Sample counts along each axis of the mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DenseMeshConfig {
    pub ew_divisions: usize, // Longitude samples
    pub ns_divisions: usize, // Latitude samples
}

impl Default for DenseMeshConfig {
    fn default() -> Self {
        // Quarter-degree equivalent
        Self {
            ew_divisions: 360 * 4,
            ns_divisions: 180 * 4,
        }
    }
}

impl DenseMeshConfig {
    pub fn point_count(&self) -> usize {
        self.ew_divisions * self.ns_divisions
    }
}

/// Full cross product of latitudes and longitudes, latitude-major.
pub fn generate(config: &DenseMeshConfig) -> PointTriplet {
    let lons_slice = linspace(-180.0, 180.0, config.ew_divisions);
    let lats_slice = linspace(-90.0, 90.0, config.ns_divisions);

    let lats = repeat(&lats_slice, config.ew_divisions);
    let lons = tile(&lons_slice, config.ns_divisions);

    let triplet = PointTriplet::with_unit_values(lats, lons);
    info!(
        "Generated dense mesh: {} x {}, {} points",
        config.ew_divisions,
        config.ns_divisions,
        triplet.len()
    );
    triplet
}
