use std::path::Path;

use image::{ImageBuffer, Luma, RgbImage};
use ndarray::ArrayView2;
use serde_derive::{Deserialize, Serialize};

use crate::{
    colormap::{AutoRange, ColorMapper, DisplayRange},
    error::DepthVizError,
};

/// Single channel 16-bit image.
pub type Gray16Image = ImageBuffer<Luma<u16>, Vec<u16>>;

/// Pixel format of an encoded depth image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ImageEncoding {
    /// Rainbow colormap, 3 channels of 8 bits.
    #[default]
    Rgb8,
    /// Linear rescale onto a single 16-bit channel.
    Mono16,
}

impl ImageEncoding {
    pub fn name(&self) -> &'static str {
        match self {
            ImageEncoding::Rgb8 => "rgb8",
            ImageEncoding::Mono16 => "mono16",
        }
    }
}

/// Image produced by a [`DepthImageEncoder`].
#[derive(Debug, Clone, PartialEq)]
pub enum EncodedImage {
    Rgb8(RgbImage),
    Mono16(Gray16Image),
}

impl EncodedImage {
    pub fn encoding(&self) -> ImageEncoding {
        match self {
            EncodedImage::Rgb8(_) => ImageEncoding::Rgb8,
            EncodedImage::Mono16(_) => ImageEncoding::Mono16,
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            EncodedImage::Rgb8(image) => image.width(),
            EncodedImage::Mono16(image) => image.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            EncodedImage::Rgb8(image) => image.height(),
            EncodedImage::Mono16(image) => image.height(),
        }
    }

    /// Saves the image, the format is deduced from the path extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), DepthVizError> {
        match self {
            EncodedImage::Rgb8(image) => image.save(path)?,
            EncodedImage::Mono16(image) => image.save(path)?,
        }
        Ok(())
    }
}

/// Quantizes a grid into a 16-bit image.
///
/// The display bounds `[min, max]` are stretched onto `[0, 65535]`:
/// `out = round(v * s - min * s)` with `s = 65535 / (max - min)`, saturated
/// to the `u16` range. Under [`DisplayRange::Auto`] the bounds are the
/// observed extremes of the grid. A degenerate range yields a black image.
pub fn quantize_mono16(grid: &ArrayView2<f32>, range: &DisplayRange) -> Gray16Image {
    let (min, max) = match *range {
        DisplayRange::Fixed { min, max } => (min, max),
        DisplayRange::Auto => {
            let auto_range = AutoRange::from_values(grid.iter().copied());
            (auto_range.min_val, auto_range.max_val)
        }
    };

    let (height, width) = grid.dim();
    if !(max > min) {
        if !grid.is_empty() {
            log::warn!("Degenerate mono16 range [{}, {}], writing zeros", min, max);
        }
        return Gray16Image::new(width as u32, height as u32);
    }

    let scale = u16::MAX as f64 / (max as f64 - min as f64);
    let offset = -(min as f64) * scale;
    Gray16Image::from_fn(width as u32, height as u32, |x, y| {
        let value = grid[(y as usize, x as usize)] as f64 * scale + offset;
        // NaN saturates to 0 on the cast.
        Luma([num::clamp(value.round(), 0.0, u16::MAX as f64) as u16])
    })
}

/// Encodes measurement grids with one range policy and one output encoding.
#[derive(Debug, Clone, Default)]
pub struct DepthImageEncoder {
    mapper: ColorMapper,
    encoding: ImageEncoding,
}

impl DepthImageEncoder {
    pub fn new(range: DisplayRange, encoding: ImageEncoding) -> Self {
        Self {
            mapper: ColorMapper::new(range),
            encoding,
        }
    }

    pub fn from_mapper(mapper: ColorMapper, encoding: ImageEncoding) -> Self {
        Self { mapper, encoding }
    }

    pub fn encoding(&self) -> ImageEncoding {
        self.encoding
    }

    pub fn range(&self) -> DisplayRange {
        self.mapper.range()
    }

    pub fn encode(&self, grid: &ArrayView2<f32>) -> EncodedImage {
        match self.encoding {
            ImageEncoding::Rgb8 => EncodedImage::Rgb8(self.mapper.colorize(grid)),
            ImageEncoding::Mono16 => {
                EncodedImage::Mono16(quantize_mono16(grid, &self.mapper.range()))
            }
        }
    }

    /// Encodes a row-major measurement buffer, see [`ColorMapper::colorize_measurements`].
    pub fn encode_measurements(
        &self,
        data: &[f32],
        height: usize,
        width: usize,
    ) -> Result<EncodedImage, DepthVizError> {
        let grid = crate::grid::measurement_view(data, height, width)?;
        Ok(self.encode(&grid))
    }
}
