// Box grids of the whole earth, written to ./lats, ./lons and ./data_file
use hv_grids::{grid_lines, GenError, GridLinesConfig};

fn main() -> Result<(), GenError> {
    hv_grids::init_logging();

    grid_lines::generate(&GridLinesConfig::default()).write()
}
