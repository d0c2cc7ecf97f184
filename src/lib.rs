//! Rainbow colormap and 16-bit encoding of depth measurement grids.
//!
//! ```
//! use depthviz::colormap::{ColorMapper, DisplayRange};
//! use ndarray::array;
//!
//! let grid = array![[0.0f32, 1.0], [2.0, 3.0]];
//! let image = ColorMapper::new(DisplayRange::fixed(0.0, 3.0)).colorize(&grid.view());
//! assert_eq!(image.get_pixel(0, 0).0, [0, 0, 255]);
//! assert_eq!(image.get_pixel(1, 1).0, [255, 0, 0]);
//! ```
pub mod colormap;
pub mod config;
pub mod encoding;
pub mod error;
pub mod grid;
pub mod io;

#[cfg(test)]
mod unit_test;

pub use colormap::{ColorMapper, DisplayRange};
pub use config::ColorMapConfig;
pub use encoding::{DepthImageEncoder, EncodedImage, ImageEncoding};
pub use error::DepthVizError;
