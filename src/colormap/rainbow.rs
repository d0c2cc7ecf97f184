use std::sync::{Arc, OnceLock};

use image::Rgb;

/// Number of entries in the rainbow lookup table.
pub const RAINBOW_TABLE_SIZE: usize = 0x10000;

/// Largest valid index in the rainbow table.
pub const RAINBOW_MAX_INDEX: usize = RAINBOW_TABLE_SIZE - 1;

/// Color returned whenever a value can't be placed on the scale.
pub const SENTINEL_GRAY: Rgb<u8> = Rgb([0x80, 0x80, 0x80]);

static SHARED_TABLE: OnceLock<Arc<RainbowTable>> = OnceLock::new();

/// Precomputed blue -> cyan -> green -> yellow -> red lookup table.
///
/// The table is immutable after construction, so a single instance can be
/// shared between any number of threads. Use [`RainbowTable::shared`] to get
/// the process-wide instance instead of building a new one.
#[derive(Debug, Clone)]
pub struct RainbowTable {
    colors: Vec<Rgb<u8>>,
}

impl RainbowTable {
    /// Builds the full 65536-entry table.
    pub fn new() -> Self {
        let colors = (0..RAINBOW_TABLE_SIZE)
            .map(|i| {
                let d = (4.0 * (i as f64 / RAINBOW_TABLE_SIZE as f64)) as f32;
                rainbow_color(d)
            })
            .collect();
        Self { colors }
    }

    /// Returns the process-wide table, building it on first use.
    pub fn shared() -> Arc<RainbowTable> {
        SHARED_TABLE
            .get_or_init(|| {
                log::debug!("Building rainbow table with {} entries", RAINBOW_TABLE_SIZE);
                Arc::new(RainbowTable::new())
            })
            .clone()
    }

    /// Number of colors, always [`RAINBOW_TABLE_SIZE`].
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True if the table holds no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the color at `index`, or `None` if it is past the end.
    pub fn get(&self, index: usize) -> Option<Rgb<u8>> {
        self.colors.get(index).copied()
    }

    /// Maps `value` into the `[min, max]` display range and returns its color.
    ///
    /// Values outside the range are clamped. A degenerate range or a value
    /// that can't be indexed returns [`SENTINEL_GRAY`].
    pub fn map<T: Into<f64>>(&self, value: T, min: T, max: T) -> Rgb<u8> {
        color_index(value, min, max)
            .and_then(|k| self.get(k))
            .unwrap_or(SENTINEL_GRAY)
    }
}

impl Default for RainbowTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Piecewise-linear rainbow for `d` in `[0, 4)`.
fn rainbow_color(d: f32) -> Rgb<u8> {
    const FULL: f32 = 255.0;
    if (0.0..1.0).contains(&d) {
        Rgb([0, (d * FULL) as u8, 0xFF])
    } else if d < 2.0 {
        let d = d - 1.0;
        Rgb([0, 0xFF, ((1.0 - d) * FULL) as u8])
    } else if d < 3.0 {
        let d = d - 2.0;
        Rgb([(d * FULL) as u8, 0xFF, 0])
    } else if d < 4.0 {
        let d = d - 3.0;
        Rgb([0xFF, ((1.0 - d) * FULL) as u8, 0])
    } else {
        Rgb([0xFF, 0, 0])
    }
}

/// Computes the table index of `value` within `[min, max]`.
///
/// Returns `None` when `max <= min`, when any input is NaN, or when the
/// index falls outside `[0, 65535]`. The last check can't trigger for
/// finite inputs after clamping; it stays as a guard against rounding.
///
/// The position is computed in `f64` so `max - min` can't overflow for any
/// pair of finite `f32` bounds.
pub fn color_index<T: Into<f64>>(value: T, min: T, max: T) -> Option<usize> {
    let (value, min, max): (f64, f64, f64) = (value.into(), min.into(), max.into());
    if !(max > min) {
        return None;
    }

    let value = num::clamp(value, min, max);
    let k = ((value - min) / (max - min) * RAINBOW_MAX_INDEX as f64).floor();
    if !(0.0..=RAINBOW_MAX_INDEX as f64).contains(&k) {
        return None;
    }

    Some(k as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn should_build_full_table() {
        let table = RainbowTable::new();
        assert_eq!(table.len(), RAINBOW_TABLE_SIZE);
        assert_eq!(table.get(RAINBOW_TABLE_SIZE), None);
    }

    #[rstest]
    #[case(0, Rgb([0, 0, 255]))]
    #[case(0x4000, Rgb([0, 255, 255]))]
    #[case(0x8000, Rgb([0, 255, 0]))]
    #[case(0xC000, Rgb([255, 255, 0]))]
    #[case(RAINBOW_MAX_INDEX, Rgb([255, 0, 0]))]
    fn should_follow_rainbow_breakpoints(#[case] index: usize, #[case] expected: Rgb<u8>) {
        let table = RainbowTable::new();
        assert_eq!(table.get(index).unwrap(), expected);
    }

    #[test]
    fn should_increase_green_in_first_quarter() {
        let table = RainbowTable::new();
        let mut previous_green = 0;
        for step in 0..100 {
            let d = step as f64 / 100.0;
            let index = (d * (RAINBOW_TABLE_SIZE / 4) as f64).round() as usize;
            let color = table.get(index).unwrap();
            assert_eq!(color[0], 0);
            assert_eq!(color[2], 255);
            assert!(color[1] >= previous_green);
            previous_green = color[1];
        }
    }

    #[test]
    fn should_keep_index_monotonic_and_bounded() {
        let (min, max) = (-2.5, 7.0);
        let mut previous = 0;
        for step in 0..=1000 {
            let value = min + (max - min) * step as f32 / 1000.0;
            let k = color_index(value, min, max).unwrap();
            assert!(k <= RAINBOW_MAX_INDEX);
            assert!(k >= previous);
            previous = k;
        }
        assert_eq!(previous, RAINBOW_MAX_INDEX);
    }

    #[test]
    fn should_spread_widest_finite_range() {
        let (min, max) = (-3.0e38f32, 3.0e38f32);
        assert_eq!(color_index(min, min, max), Some(0));
        assert_eq!(color_index(0.0, min, max), Some(RAINBOW_MAX_INDEX / 2));
        assert_eq!(color_index(max, min, max), Some(RAINBOW_MAX_INDEX));
        assert_eq!(color_index(f32::MAX, f32::MIN, f32::MAX), Some(RAINBOW_MAX_INDEX));

        let mut previous = 0;
        for step in 0..=100 {
            let value = ((step as f64 - 50.0) / 50.0 * 3.0e38) as f32;
            let k = color_index(value, min, max).unwrap();
            assert!(k >= previous);
            previous = k;
        }
    }

    #[test]
    fn should_clamp_out_of_range_values() {
        let table = RainbowTable::new();
        let (min, max) = (1.0, 4.0);
        assert_eq!(table.map(min - 10.0, min, max), table.map(min, min, max));
        assert_eq!(table.map(max + 10.0, min, max), table.map(max, min, max));
    }

    #[rstest]
    #[case(3.0, 5.0, 5.0)]
    #[case(-100.0, 5.0, 5.0)]
    #[case(1.0, 5.0, 2.0)]
    #[case(f32::NAN, 0.0, 1.0)]
    #[case(1.0, f32::NAN, 2.0)]
    #[case(f32::INFINITY, 0.0, f32::INFINITY)]
    fn should_fall_back_to_gray(#[case] value: f32, #[case] min: f32, #[case] max: f32) {
        let table = RainbowTable::new();
        assert_eq!(table.map(value, min, max), SENTINEL_GRAY);
    }

    #[test]
    fn should_share_one_table() {
        let a = RainbowTable::shared();
        let b = RainbowTable::shared();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
