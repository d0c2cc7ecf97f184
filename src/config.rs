use std::path::Path;

use serde_derive::{Deserialize, Serialize};

use crate::{
    colormap::DisplayRange,
    encoding::{DepthImageEncoder, ImageEncoding},
    error::DepthVizError,
};

fn default_depth_scale() -> f32 {
    1.0
}

/// Settings for turning depth grids into images.
///
/// Every field is optional in JSON:
///
/// ```json
/// { "range": { "mode": "fixed", "min": 0.5, "max": 4.0 },
///   "encoding": "rgb8",
///   "depth_scale": 0.001 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorMapConfig {
    #[serde(default)]
    pub range: DisplayRange,
    #[serde(default)]
    pub encoding: ImageEncoding,
    /// Multiplier applied to raw 16-bit depth readings.
    #[serde(default = "default_depth_scale")]
    pub depth_scale: f32,
}

impl Default for ColorMapConfig {
    fn default() -> Self {
        Self {
            range: DisplayRange::Auto,
            encoding: ImageEncoding::Rgb8,
            depth_scale: default_depth_scale(),
        }
    }
}

impl ColorMapConfig {
    pub fn from_json_str(json: &str) -> Result<Self, DepthVizError> {
        let config: ColorMapConfig = serde_json::from_str(json)?;
        config.validate()
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, DepthVizError> {
        let path = path.as_ref();
        let buffer = std::io::BufReader::new(std::fs::File::open(path)?);
        let config: ColorMapConfig = serde_json::from_reader(buffer)?;
        log::debug!("Loaded config from {}: {:?}", path.display(), config);
        config.validate()
    }

    pub fn range(&'_ mut self, value: DisplayRange) -> &'_ mut ColorMapConfig {
        self.range = value;
        self
    }

    pub fn encoding(&'_ mut self, value: ImageEncoding) -> &'_ mut ColorMapConfig {
        self.encoding = value;
        self
    }

    pub fn depth_scale(&'_ mut self, value: f32) -> &'_ mut ColorMapConfig {
        self.depth_scale = value;
        self
    }

    /// Checks the settings that can't produce a sensible image.
    ///
    /// A fixed range with `min == max` is accepted: it renders gray, like
    /// any other degenerate range.
    pub fn validate(self) -> Result<Self, DepthVizError> {
        if !(self.depth_scale.is_finite() && self.depth_scale > 0.0) {
            return Err(DepthVizError::invalid_parameter(format!(
                "depth_scale must be positive and finite, got {}",
                self.depth_scale
            )));
        }
        if let DisplayRange::Fixed { min, max } = self.range {
            if !(min.is_finite() && max.is_finite()) || min > max {
                return Err(DepthVizError::invalid_parameter(format!(
                    "Invalid fixed range [{min}, {max}]"
                )));
            }
        }
        Ok(self)
    }

    pub fn build(&self) -> DepthImageEncoder {
        DepthImageEncoder::new(self.range, self.encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn should_default_every_field() {
        let config = ColorMapConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ColorMapConfig::default());
    }

    #[test]
    fn should_parse_full_config() {
        let config = ColorMapConfig::from_json_str(
            r#"{"range": {"mode": "fixed", "min": 0.5, "max": 4.0},
                "encoding": "mono16",
                "depth_scale": 0.001}"#,
        )
        .unwrap();
        assert_eq!(config.range, DisplayRange::fixed(0.5, 4.0));
        assert_eq!(config.encoding, ImageEncoding::Mono16);
        assert_eq!(config.depth_scale, 0.001);

        let encoder = config.build();
        assert_eq!(encoder.encoding(), ImageEncoding::Mono16);
        assert_eq!(encoder.range(), DisplayRange::fixed(0.5, 4.0));
    }

    #[rstest]
    #[case(r#"{"depth_scale": 0.0}"#)]
    #[case(r#"{"depth_scale": -1.0}"#)]
    #[case(r#"{"range": {"mode": "fixed", "min": 3.0, "max": 1.0}}"#)]
    fn should_reject_invalid_values(#[case] json: &str) {
        assert!(matches!(
            ColorMapConfig::from_json_str(json),
            Err(DepthVizError::InvalidParameter(_))
        ));
    }

    #[test]
    fn should_report_malformed_json() {
        assert!(matches!(
            ColorMapConfig::from_json_str(r#"{"encoding": "bgr8"}"#),
            Err(DepthVizError::Config(_))
        ));
    }

    #[test]
    fn should_chain_setters() {
        let mut config = ColorMapConfig::default();
        config
            .range(DisplayRange::fixed(1.0, 2.0))
            .encoding(ImageEncoding::Mono16)
            .depth_scale(0.5);
        assert!(config.validate().is_ok());
        assert_eq!(config.depth_scale, 0.5);
    }
}
