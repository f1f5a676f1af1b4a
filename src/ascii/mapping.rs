//! Sample to character mapping.

use super::charset::CharacterRamp;

/// Character emitted for cells that have no source sample.
pub const BLANK: char = ' ';

/// Ramp index for a sample.
///
/// The sample is normalized to `value / max_value`, scaled by `levels - 1`,
/// floored and clamped to the last level. With `invert` the index is mirrored.
#[inline]
pub fn ramp_index(value: u16, max_value: u16, levels: usize, invert: bool) -> usize {
    if levels == 0 || max_value == 0 {
        return 0;
    }
    let last = levels - 1;
    let intensity = value as f64 / max_value as f64;
    let idx = ((intensity * last as f64) as usize).min(last);
    if invert {
        last - idx
    } else {
        idx
    }
}

/// Map downsampled samples to ramp characters.
///
/// # Arguments
/// * `samples` - One optional sample per grid cell; `None` becomes [`BLANK`]
/// * `max_value` - Sample value that maps to the last ramp character
/// * `ramp` - Characters ordered from sample 0 to `max_value`
/// * `invert` - If true, map 0 to the last character instead
pub fn map_to_chars(
    samples: &[Option<u16>],
    max_value: u16,
    ramp: &CharacterRamp,
    invert: bool,
) -> Vec<char> {
    samples
        .iter()
        .map(|sample| match sample {
            Some(v) => ramp.at(ramp_index(*v, max_value, ramp.len(), invert)),
            None => BLANK,
        })
        .collect()
}
