use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::core::data::iteration_grid::IterationGrid;
use crate::presenters::colour::rgb_image::RgbImage;

const RAMP_LOW: [f64; 3] = [0.0, 0.0, 255.0];
const RAMP_HIGH: [f64; 3] = [255.0, 165.0, 0.0];

const EVEN_COLOUR: [u8; 3] = [255, 255, 255];
const ODD_COLOUR: [u8; 3] = [0, 0, 0];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported colour scheme: {name}")]
pub struct UnsupportedColourScheme {
    pub name: String,
}

/// Maps iteration counts to display colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourScheme {
    /// Log-scaled blend from blue to orange. Produces visible banding.
    #[default]
    Ramp,
    /// White for even counts, black for odd.
    Binary,
}

impl ColourScheme {
    pub const ALL: &'static [Self] = &[Self::Ramp, Self::Binary];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ramp => "ramp",
            Self::Binary => "binary",
        }
    }

    #[must_use]
    pub fn colour(self, count: u32, max_iter: u32) -> [u8; 3] {
        match self {
            Self::Ramp => ramp(count, max_iter),
            Self::Binary if count % 2 == 0 => EVEN_COLOUR,
            Self::Binary => ODD_COLOUR,
        }
    }

    #[must_use]
    pub fn colourize(self, grid: &IterationGrid, max_iter: u32) -> RgbImage {
        let data = grid
            .as_slice()
            .iter()
            .flat_map(|&count| self.colour(count, max_iter))
            .collect();

        RgbImage::from_rgb(grid.width(), grid.height(), data)
    }
}

fn ramp(count: u32, max_iter: u32) -> [u8; 3] {
    let t = (f64::from(count) + 1.0).ln() / (f64::from(max_iter) + 1.0).ln();
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };

    // channels truncate towards zero
    let channel = |i: usize| ((1.0 - t) * RAMP_LOW[i] + t * RAMP_HIGH[i]) as u8;
    [channel(0), channel(1), channel(2)]
}

impl FromStr for ColourScheme {
    type Err = UnsupportedColourScheme;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|scheme| scheme.name() == name)
            .ok_or_else(|| UnsupportedColourScheme {
                name: name.to_owned(),
            })
    }
}

impl fmt::Display for ColourScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
