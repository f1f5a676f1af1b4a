//! Single-call conversion from PGM input to a character grid.

use std::path::Path;

use crate::ascii::{rasterize, AsciiGrid, CharacterRamp, RasterOptions};
use crate::error::Result;
use crate::pgm;

/// Decode PGM bytes and rasterize them.
pub fn convert_bytes(data: &[u8], ramp: &CharacterRamp, options: RasterOptions) -> Result<AsciiGrid> {
    let image = pgm::decode(data)?;
    Ok(rasterize(&image, ramp, options)?)
}

/// Read a PGM file and rasterize it.
///
/// The file is read and closed before rasterization starts.
pub fn convert_file(path: &Path, ramp: &CharacterRamp, options: RasterOptions) -> Result<AsciiGrid> {
    let image = pgm::decode_file(path)?;
    log::info!(
        "Loaded {} ({}x{}, max value {})",
        path.display(),
        image.width(),
        image.height(),
        image.max_value()
    );

    let grid = rasterize(&image, ramp, options)?;
    log::info!("Converted to {}x{} characters", grid.width(), grid.height());
    Ok(grid)
}
