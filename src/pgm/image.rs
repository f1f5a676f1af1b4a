//! Decoded grayscale image.

use super::error::PgmError;

/// A decoded grayscale raster.
///
/// Samples are stored row-major, one `u16` per pixel, each within
/// `0..=max_value`. The only way to build one is [`DecodedImage::new`], which
/// checks those invariants, so every value handed to the rasterizer is
/// consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    max_value: u16,
    pixels: Vec<u16>,
}

impl DecodedImage {
    /// Build an image, validating dimensions, max value and sample count.
    pub fn new(width: u32, height: u32, max_value: u16, pixels: Vec<u16>) -> Result<Self, PgmError> {
        let expected = sample_count(width, height)?;
        if max_value == 0 {
            return Err(PgmError::MalformedHeader("max value must be positive".into()));
        }
        if pixels.len() < expected {
            return Err(PgmError::TruncatedData {
                expected,
                actual: pixels.len(),
            });
        }
        if pixels.len() > expected {
            return Err(PgmError::MalformedData(format!(
                "expected {} samples, got {}",
                expected,
                pixels.len()
            )));
        }
        if let Some((index, &value)) = pixels.iter().enumerate().find(|&(_, &v)| v > max_value) {
            return Err(PgmError::SampleOutOfRange {
                index,
                value: value as u32,
                max: max_value,
            });
        }

        Ok(Self {
            width,
            height,
            max_value,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Largest representable sample (white).
    pub fn max_value(&self) -> u16 {
        self.max_value
    }

    /// Row-major samples, `width * height` long.
    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }
}

/// Number of samples for the given dimensions, rejecting zero and overflow.
pub(crate) fn sample_count(width: u32, height: u32) -> Result<usize, PgmError> {
    if width == 0 || height == 0 {
        return Err(PgmError::MalformedHeader(format!(
            "dimensions must be positive, got {}x{}",
            width, height
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| PgmError::MalformedHeader(format!("dimensions {}x{} overflow", width, height)))
}
