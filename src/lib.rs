// Synthetic lat/lon/data triplets for exercising gridding pipelines
pub mod dense_mesh;
pub mod error;
pub mod grid_lines;
pub mod reader;
pub mod sampling;
pub mod triplet;

pub use dense_mesh::DenseMeshConfig;
pub use error::{GenError, Result};
pub use grid_lines::GridLinesConfig;
pub use reader::read_triplet;
pub use triplet::{PointTriplet, SamplePoint, DATA_FILE, LATS_FILE, LONS_FILE};

/// Install the fmt subscriber used by the generator binaries.
/// `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
