use std::path::Path;

use ndarray::Array2;
use nshare::ToNdarray2;

use crate::{encoding::EncodedImage, error::DepthVizError, grid::depth_to_measurements};

/// Reads a single channel depth image as raw 16-bit readings.
///
/// 8-bit images are widened the way `image` does it, so prefer 16-bit PNGs.
pub fn read_depth_image<P: AsRef<Path>>(path: P) -> Result<Array2<u16>, DepthVizError> {
    let path = path.as_ref();
    let image = image::open(path)?;
    log::debug!(
        "Read depth image {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image.into_luma16().into_ndarray2())
}

/// Reads a depth image and scales it into a measurement grid.
pub fn read_measurements<P: AsRef<Path>>(
    path: P,
    depth_scale: f32,
) -> Result<Array2<f32>, DepthVizError> {
    let depth_image = read_depth_image(path)?;
    Ok(depth_to_measurements(&depth_image.view(), depth_scale))
}

/// Writes an encoded image, creating the parent directory if needed.
pub fn write_encoded_image<P: AsRef<Path>>(
    image: &EncodedImage,
    path: P,
) -> Result<(), DepthVizError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    image.save(path)?;
    log::info!(
        "Wrote {} image {}x{} to {}",
        image.encoding().name(),
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}
