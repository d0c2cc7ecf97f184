mod grids;
pub(crate) use grids::{negative_grid, ramp_grid, sample_depth_grid, subunit_grid};
