use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::presenters::colour::rgb_image::RgbImage;

/// Writes images as binary PPM files.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn present(&self, image: &RgbImage, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = BufWriter::new(File::create(filepath)?);
        self.encode(image, &mut file)?;
        file.flush()?;

        debug!(
            "wrote {}x{} image to {}",
            image.width(),
            image.height(),
            filepath.display()
        );

        Ok(())
    }

    pub fn encode(&self, image: &RgbImage, out: &mut impl Write) -> std::io::Result<()> {
        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(out, "P6")?;
        writeln!(out, "{} {}", image.width(), image.height())?;
        writeln!(out, "255")?;
        out.write_all(image.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::iteration_grid::IterationGrid;
    use crate::presenters::colour::colour_scheme::ColourScheme;

    #[test]
    fn test_encode_writes_header_then_pixels() {
        let grid = IterationGrid::from_data(2, 1, vec![0, 1]).unwrap();
        let image = ColourScheme::Binary.colourize(&grid, 10);
        let mut out = Vec::new();

        PpmFilePresenter::new().encode(&image, &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[255, 255, 255, 0, 0, 0]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_present_creates_missing_directories() {
        let dir = std::env::temp_dir().join(format!("mandelbrot_ppm_{}", std::process::id()));
        let path = dir.join("nested").join("frame.ppm");
        let grid = IterationGrid::zeroed(3, 2);
        let image = ColourScheme::Ramp.colourize(&grid, 10);

        PpmFilePresenter::new().present(&image, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert!(written.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(written.len(), "P6\n3 2\n255\n".len() + 18);

        std::fs::remove_dir_all(dir).unwrap();
    }
}
