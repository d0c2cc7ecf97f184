mod rainbow;
pub use rainbow::{
    color_index, RainbowTable, RAINBOW_MAX_INDEX, RAINBOW_TABLE_SIZE, SENTINEL_GRAY,
};

mod range;
pub use range::{AutoRange, DisplayRange, ValueTransform};

mod mapper;
pub use mapper::ColorMapper;
