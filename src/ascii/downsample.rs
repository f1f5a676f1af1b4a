//! Nearest-neighbor downsampling of a grayscale raster onto a character grid.

/// Sample a row-major grayscale raster onto a `char_width` x `char_height` grid.
///
/// Each grid cell takes the single source pixel found by scaling its
/// coordinates with independent horizontal and vertical factors
/// (`img_width / char_width`, `img_height / char_height`) and truncating
/// toward zero. No averaging is done.
///
/// # Returns
/// One entry per grid cell, row-major. An entry is `None` when the computed
/// flat index falls outside `pixels`, which only happens for inconsistent
/// inputs.
pub fn downsample_nearest(
    pixels: &[u16],
    img_width: u32,
    img_height: u32,
    char_width: u32,
    char_height: u32,
) -> Vec<Option<u16>> {
    // Handle edge cases
    if char_width == 0 || char_height == 0 {
        return Vec::new();
    }

    let x_step = img_width as f64 / char_width as f64;
    let y_step = img_height as f64 / char_height as f64;

    let mut result = Vec::with_capacity(char_width as usize * char_height as usize);

    for cy in 0..char_height {
        let src_y = (cy as f64 * y_step) as usize;
        for cx in 0..char_width {
            let src_x = (cx as f64 * x_step) as usize;
            let idx = src_y * img_width as usize + src_x;
            result.push(pixels.get(idx).copied());
        }
    }

    result
}
