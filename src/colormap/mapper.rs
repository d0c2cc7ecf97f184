use std::sync::Arc;

use image::RgbImage;
use ndarray::ArrayView2;
use rayon::prelude::*;

use super::{rainbow::RainbowTable, range::DisplayRange};
use crate::{error::DepthVizError, grid::measurement_view};

/// Turns measurement grids into rainbow colored images.
///
/// The mapper only holds a shared reference to the lookup table and the
/// range policy, so it can be cloned or shared across threads freely.
#[derive(Debug, Clone)]
pub struct ColorMapper {
    table: Arc<RainbowTable>,
    range: DisplayRange,
}

impl Default for ColorMapper {
    /// Auto-ranging mapper on the shared table.
    fn default() -> Self {
        Self::new(DisplayRange::Auto)
    }
}

impl ColorMapper {
    /// Creates a mapper using the process-wide rainbow table.
    pub fn new(range: DisplayRange) -> Self {
        Self::with_table(RainbowTable::shared(), range)
    }

    pub fn with_table(table: Arc<RainbowTable>, range: DisplayRange) -> Self {
        Self { table, range }
    }

    pub fn range(&self) -> DisplayRange {
        self.range
    }

    pub fn table(&self) -> &RainbowTable {
        &self.table
    }

    /// Colors a grid. The output has the same height and width as the input,
    /// pixel `(x, y)` coming from `grid[(y, x)]`.
    pub fn colorize(&self, grid: &ArrayView2<f32>) -> RgbImage {
        let transform = self.range.resolve(grid);
        let (height, width) = grid.dim();

        RgbImage::from_fn(width as u32, height as u32, |x, y| {
            let value = grid[(y as usize, x as usize)];
            self.table
                .map(transform.apply(value), transform.min, transform.max)
        })
    }

    /// Colors a row-major measurement buffer addressed as `data[i * width + j]`.
    ///
    /// # Arguments
    ///
    /// * `data` - The measurements, exactly `height * width` values.
    /// * `height` - Number of rows.
    /// * `width` - Number of columns.
    ///
    /// # Returns
    ///
    /// The colored image, or `InvalidParameter` if the buffer size doesn't match.
    pub fn colorize_measurements(
        &self,
        data: &[f32],
        height: usize,
        width: usize,
    ) -> Result<RgbImage, DepthVizError> {
        let grid = measurement_view(data, height, width)?;
        Ok(self.colorize(&grid))
    }

    /// Colors several independent grids in parallel.
    pub fn colorize_batch(&self, grids: &[ArrayView2<f32>]) -> Vec<RgbImage> {
        grids.par_iter().map(|grid| self.colorize(grid)).collect()
    }
}
