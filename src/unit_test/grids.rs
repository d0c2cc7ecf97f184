use ndarray::{array, Array2};
use rstest::fixture;

/// 2x2 grid holding 0, 1, 2, 3 in row-major order.
#[fixture]
pub fn ramp_grid() -> Array2<f32> {
    array![[0.0, 1.0], [2.0, 3.0]]
}

/// Observed range [-3, 2].
#[fixture]
pub fn negative_grid() -> Array2<f32> {
    array![[-3.0, -1.0, 0.0], [0.5, 1.0, 2.0]]
}

/// Observed range [0.25, 2].
#[fixture]
pub fn subunit_grid() -> Array2<f32> {
    array![[0.25, 0.5], [1.0, 2.0]]
}

/// Synthetic 48x64 depth map in meters: a slanted floor with a box in front.
#[fixture]
pub fn sample_depth_grid() -> Array2<f32> {
    Array2::from_shape_fn((48, 64), |(row, col)| {
        if (16..32).contains(&row) && (20..44).contains(&col) {
            1.2
        } else {
            1.5 + 3.0 * (47 - row) as f32 / 47.0 + 0.01 * col as f32
        }
    })
}
