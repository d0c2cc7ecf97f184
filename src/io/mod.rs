mod depth_png;
pub use depth_png::{read_depth_image, read_measurements, write_encoded_image};
