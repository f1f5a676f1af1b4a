//! ASCII rasterizer for decoded grayscale images.
//!
//! The pipeline has three steps:
//!
//! 1. **Dimensions** - fit the image to a column budget, halving rows for
//!    tall terminal cells
//! 2. **Downsampling** - nearest-neighbor pick of one source pixel per cell
//! 3. **Character mapping** - normalized intensity to a [`CharacterRamp`] index
//!
//! [`rasterize`] runs all three and returns an [`AsciiGrid`].
//!
//! # Character Sets
//!
//! Presets are available via [`CharSet`]:
//! - `Classic` - 10-level dense-to-sparse ramp (the default)
//! - `Standard` - 10-level sparse-to-dense ramp
//! - `Blocks` - Unicode block characters
//! - `Minimal` - 4-level clean look

mod charset;
mod dimensions;
mod downsample;
mod grid;
mod mapping;

pub use charset::{
    CharSet, CharacterRamp, BLOCKS_CHARSET, CLASSIC_CHARSET, MINIMAL_CHARSET, STANDARD_CHARSET,
};
pub use dimensions::{calculate_dimensions, DEFAULT_CHAR_ASPECT_RATIO};
pub use downsample::downsample_nearest;
pub use grid::AsciiGrid;
pub use mapping::{map_to_chars, ramp_index, BLANK};

use crate::pgm::DecodedImage;

/// Default column budget, a classic 80-column terminal.
pub const DEFAULT_MAX_WIDTH: u32 = 80;

/// Errors from rasterization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RasterError {
    #[error("maximum output width must be at least 1")]
    InvalidWidth,
    #[error("character ramp must not be empty")]
    EmptyRamp,
}

/// Rasterization settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterOptions {
    /// Column budget for the output grid
    pub max_width: u32,
    /// Map black to the last ramp character instead of the first
    pub invert: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            invert: false,
        }
    }
}

impl RasterOptions {
    pub fn with_max_width(max_width: u32) -> Self {
        Self {
            max_width,
            ..Self::default()
        }
    }
}

/// Convert a decoded image to a character grid.
///
/// Deterministic: the same image, ramp and options always give the same grid.
pub fn rasterize(
    image: &DecodedImage,
    ramp: &CharacterRamp,
    options: RasterOptions,
) -> Result<AsciiGrid, RasterError> {
    if options.max_width == 0 {
        return Err(RasterError::InvalidWidth);
    }

    let (char_width, char_height) =
        calculate_dimensions(image.width(), image.height(), options.max_width);
    log::debug!(
        "Rasterizing {}x{} image to {}x{} grid ({} levels)",
        image.width(),
        image.height(),
        char_width,
        char_height,
        ramp.len()
    );

    let samples = downsample_nearest(
        image.pixels(),
        image.width(),
        image.height(),
        char_width,
        char_height,
    );
    let cells = map_to_chars(&samples, image.max_value(), ramp, options.invert);

    Ok(AsciiGrid::from_cells(
        char_width as usize,
        char_height as usize,
        cells,
    ))
}
