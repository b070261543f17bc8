// Dense quarter-degree mesh of the whole earth, written to ./lats, ./lons and ./data_file
use hv_grids::{dense_mesh, DenseMeshConfig, GenError};

fn main() -> Result<(), GenError> {
    hv_grids::init_logging();

    dense_mesh::generate(&DenseMeshConfig::default()).write()
}
