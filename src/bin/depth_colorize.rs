use clap::Parser;
use depthviz::{
    io::{read_measurements, write_encoded_image},
    ColorMapConfig, DepthVizError, DisplayRange, ImageEncoding,
};
use env_logger::{Builder, Env};
use log::info;

#[derive(Parser)]
#[command(name = "depth_colorize")]
#[command(about = "Renders a 16-bit depth image with a rainbow colormap")]
struct CommandLine {
    /// Input depth image (16-bit single channel PNG)
    input: String,
    /// Output image path
    output: String,
    /// JSON settings file, command line flags override it
    #[arg(short, long)]
    config: Option<String>,
    /// Lower display bound, requires --max
    #[arg(long, requires = "max", allow_hyphen_values = true)]
    min: Option<f32>,
    /// Upper display bound, requires --min
    #[arg(long, requires = "min", allow_hyphen_values = true)]
    max: Option<f32>,
    /// Write a linear 16-bit image instead of the rainbow one
    #[arg(long)]
    mono16: bool,
    /// Multiplier from raw readings to measurement units
    #[arg(short, long)]
    depth_scale: Option<f32>,
}

impl CommandLine {
    fn into_config(self) -> Result<(ColorMapConfig, String, String), DepthVizError> {
        let mut config = match &self.config {
            Some(path) => ColorMapConfig::from_json_file(path)?,
            None => ColorMapConfig::default(),
        };

        if let (Some(min), Some(max)) = (self.min, self.max) {
            config.range(DisplayRange::fixed(min, max));
        }
        if self.mono16 {
            config.encoding(ImageEncoding::Mono16);
        }
        if let Some(depth_scale) = self.depth_scale {
            config.depth_scale(depth_scale);
        }

        Ok((config.validate()?, self.input, self.output))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let (config, input, output) = CommandLine::parse().into_config()?;
    info!("Using {:?}", config);

    let grid = read_measurements(&input, config.depth_scale)?;
    let image = config.build().encode(&grid.view());
    write_encoded_image(&image, &output)?;

    Ok(())
}
