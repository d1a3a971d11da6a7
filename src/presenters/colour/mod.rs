pub mod colour_scheme;
pub mod rgb_image;

pub use colour_scheme::{ColourScheme, UnsupportedColourScheme};
pub use rgb_image::RgbImage;
