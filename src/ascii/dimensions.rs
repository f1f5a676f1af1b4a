//! Output grid size calculation for terminal display.

/// Default terminal character aspect ratio.
/// Terminal characters are typically ~2x taller than wide, so the grid gets
/// half as many rows as the image has (scaled) pixel rows.
pub const DEFAULT_CHAR_ASPECT_RATIO: f64 = 2.0;

/// Calculate the character grid size for an image.
///
/// Images wider than `max_width` are scaled down to exactly `max_width`
/// columns, keeping the aspect ratio. Narrower images keep one column per
/// pixel. Either way the row count is halved to compensate for tall
/// character cells, truncating toward zero.
///
/// Both results are clamped to at least 1, so a 1x1 image (or a very wide,
/// short one) still yields a non-empty grid.
///
/// # Example
/// ```
/// use pgm_ascii::ascii::calculate_dimensions;
///
/// assert_eq!(calculate_dimensions(200, 100, 80), (80, 20));
/// assert_eq!(calculate_dimensions(40, 30, 80), (40, 15));
/// ```
pub fn calculate_dimensions(img_width: u32, img_height: u32, max_width: u32) -> (u32, u32) {
    calculate_dimensions_with_aspect(img_width, img_height, max_width, DEFAULT_CHAR_ASPECT_RATIO)
}

/// Grid size for a character aspect ratio of cell height / cell width.
fn calculate_dimensions_with_aspect(
    img_width: u32,
    img_height: u32,
    max_width: u32,
    char_aspect: f64,
) -> (u32, u32) {
    let max_width = max_width.max(1);
    let char_aspect = if char_aspect > 0.0 {
        char_aspect
    } else {
        DEFAULT_CHAR_ASPECT_RATIO
    };

    let (width, height) = if img_width > max_width {
        let aspect = img_height as f64 / img_width as f64;
        let height = (max_width as f64 * aspect / char_aspect) as u32;
        (max_width, height)
    } else {
        (img_width, (img_height as f64 / char_aspect) as u32)
    };

    (width.max(1), height.max(1))
}
