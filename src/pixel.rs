use crate::error::{Result, StegoError};

/// Number of colour channels carried by every pixel
pub const CHANNELS: usize = 3;

/// One 8-bit sample per channel
pub type Pixel = [u8; CHANNELS];

/// Owned row-major grid of pixels with fixed dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    rows: usize,
    cols: usize,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Wrap row-major pixel data.
    /// `pixels.len()` must equal `rows * cols`.
    pub fn new(rows: usize, cols: usize, pixels: Vec<Pixel>) -> Self {
        assert_eq!(
            pixels.len(),
            rows * cols,
            "pixel buffer of {} does not match {}x{} grid",
            pixels.len(),
            rows,
            cols
        );
        Self { rows, cols, pixels }
    }

    /// Grid with every pixel set to the same value
    pub fn filled(rows: usize, cols: usize, pixel: Pixel) -> Self {
        Self::new(rows, cols, vec![pixel; rows * cols])
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total pixel count
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Pixel> {
        if row < self.rows && col < self.cols {
            self.pixels.get(self.linear_index(row, col))
        } else {
            None
        }
    }

    pub fn pixel(&self, index: usize) -> Pixel {
        self.pixels[index]
    }

    pub fn pixel_mut(&mut self, index: usize) -> &mut Pixel {
        &mut self.pixels[index]
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }

    /// Row-major linear index of a coordinate
    pub fn linear_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// (row, col) of a row-major linear index
    pub fn coordinate(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
}

/// Linear indices, in row-major order, where the two grids hold different pixels.
/// Both grids must share the same dimensions.
pub fn diff_indices(original: &PixelGrid, altered: &PixelGrid) -> Result<Vec<usize>> {
    if original.dimensions() != altered.dimensions() {
        return Err(StegoError::DimensionMismatch {
            original: original.dimensions(),
            altered: altered.dimensions(),
        });
    }

    Ok(original
        .pixels()
        .iter()
        .zip(altered.pixels())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, _)| i)
        .collect())
}
