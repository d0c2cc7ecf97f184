use ndarray::ArrayView2;
use serde_derive::{Deserialize, Serialize};

/// How the display bounds of an image are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DisplayRange {
    /// Caller-supplied bounds, applied as is.
    Fixed { min: f32, max: f32 },
    /// Bounds taken from the observed min and max of each grid.
    #[default]
    Auto,
}

impl DisplayRange {
    pub fn fixed(min: f32, max: f32) -> Self {
        DisplayRange::Fixed { min, max }
    }

    /// Resolves the policy against a grid into the transform used for every pixel.
    pub fn resolve(&self, grid: &ArrayView2<f32>) -> ValueTransform {
        let transform = match *self {
            DisplayRange::Fixed { min, max } => ValueTransform::identity(min.into(), max.into()),
            DisplayRange::Auto => {
                let auto_range = AutoRange::from_values(grid.iter().copied());
                log::debug!(
                    "Auto range: min {} max {} factor {} shift {}",
                    auto_range.min_val,
                    auto_range.max_val,
                    auto_range.factor,
                    auto_range.shift
                );
                auto_range.transform()
            }
        };

        if transform.is_degenerate() && !grid.is_empty() {
            log::warn!(
                "Degenerate display range [{}, {}] for a {}x{} grid, every pixel falls back to gray",
                transform.min,
                transform.max,
                grid.nrows(),
                grid.ncols()
            );
        }
        transform
    }
}

/// Per-image transform: samples are `factor * value + shift` and are
/// displayed between `min` and `max`.
///
/// Kept in `f64`: a sub-unit minimum can push `factor * value` past `f32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueTransform {
    pub factor: f64,
    pub shift: f64,
    pub min: f64,
    pub max: f64,
}

impl ValueTransform {
    /// Displays raw values between `min` and `max`.
    pub fn identity(min: f64, max: f64) -> Self {
        Self {
            factor: 1.0,
            shift: 0.0,
            min,
            max,
        }
    }

    pub fn apply(&self, value: f32) -> f64 {
        self.factor * value as f64 + self.shift
    }

    /// True if no value can be placed on the scale with these bounds.
    pub fn is_degenerate(&self) -> bool {
        !(self.max > self.min)
    }
}

/// Observed extremes of a grid and the scale/shift correction derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoRange {
    pub min_val: f32,
    pub max_val: f32,
    /// `1/min_val` when the minimum is strictly between 0 and 1, otherwise 1.
    pub factor: f64,
    /// `-min_val` when the minimum is negative, otherwise 0.
    pub shift: f64,
}

impl AutoRange {
    /// Scans the values once. NaNs never update the extremes; an empty input
    /// leaves `min_val > max_val`.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f32>,
    {
        let (min_val, max_val) = values.into_iter().fold(
            (f32::INFINITY, f32::NEG_INFINITY),
            |(mi, ma), v| {
                (
                    if v < mi { v } else { mi },
                    if v > ma { v } else { ma },
                )
            },
        );

        let factor = if min_val > 0.0 && min_val < 1.0 {
            1.0 / min_val as f64
        } else {
            1.0
        };
        let shift = if min_val < 0.0 { -(min_val as f64) } else { 0.0 };

        Self {
            min_val,
            max_val,
            factor,
            shift,
        }
    }

    /// Display bounds after applying the correction.
    pub fn bounds(&self) -> (f64, f64) {
        (
            self.factor * self.min_val as f64 + self.shift,
            self.factor * self.max_val as f64 + self.shift,
        )
    }

    pub fn transform(&self) -> ValueTransform {
        let (min, max) = self.bounds();
        ValueTransform {
            factor: self.factor,
            shift: self.shift,
            min,
            max,
        }
    }
}
