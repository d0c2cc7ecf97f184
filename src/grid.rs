use ndarray::{Array2, ArrayView2};

use crate::error::DepthVizError;

/// Views a row-major measurement buffer as a `height x width` grid.
///
/// Element `(i, j)` of the view is `data[i * width + j]`.
pub fn measurement_view(
    data: &[f32],
    height: usize,
    width: usize,
) -> Result<ArrayView2<'_, f32>, DepthVizError> {
    let expected = height.checked_mul(width).ok_or_else(|| {
        DepthVizError::invalid_parameter(format!("Grid size {height}x{width} overflows"))
    })?;
    if data.len() != expected {
        return Err(DepthVizError::invalid_parameter(format!(
            "Expected {expected} measurements for a {height}x{width} grid, got {}",
            data.len()
        )));
    }

    ArrayView2::from_shape((height, width), data)
        .map_err(|err| DepthVizError::invalid_parameter(err.to_string()))
}

/// Converts raw 16-bit depth readings into measurements.
///
/// # Arguments
///
/// * `depth_image` - Raw sensor depth, in sensor units.
/// * `depth_scale` - Multiplier from sensor units to measurement units,
///   e.g. `0.001` for millimeters to meters.
pub fn depth_to_measurements(depth_image: &ArrayView2<u16>, depth_scale: f32) -> Array2<f32> {
    depth_image.mapv(|v| v as f32 * depth_scale)
}
