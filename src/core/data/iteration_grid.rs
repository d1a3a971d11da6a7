use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IterationGridError {
    #[error("grid of {width}x{height} needs {expected} cells, got {actual}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Row-major grid of per-pixel iteration counts, shape `(height, width)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationGrid {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl IterationGrid {
    #[must_use]
    pub fn zeroed(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        }
    }

    pub fn from_data(width: u32, height: u32, data: Vec<u32>) -> Result<Self, IterationGridError> {
        let expected = width as usize * height as usize;

        if data.len() != expected {
            return Err(IterationGridError::SizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u32]> {
        if y >= self.height {
            return None;
        }

        let start = y as usize * self.width as usize;
        Some(&self.data[start..start + self.width as usize])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.data.chunks_exact(self.width.max(1) as usize)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<u32> {
        self.data
    }
}
