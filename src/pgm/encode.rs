//! PGM encoding.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::error::PgmError;
use super::header::PgmFormat;
use super::image::DecodedImage;

/// Samples per line in the plain variant, keeping lines under 70 columns.
const PLAIN_SAMPLES_PER_LINE: usize = 12;

/// Encode an image as `P2` or `P5`.
///
/// The raw variant stores one byte per sample and so cannot hold images whose
/// max value is above 255.
pub fn encode(image: &DecodedImage, format: PgmFormat) -> Result<Vec<u8>, PgmError> {
    let mut out = Vec::new();
    write_image(image, format, &mut out)?;
    Ok(out)
}

/// Encode an image and write it to `path`.
pub fn encode_to_file(image: &DecodedImage, format: PgmFormat, path: &Path) -> Result<(), PgmError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_image(image, format, &mut writer)?;
    writer.flush()?;
    log::info!(
        "Wrote {} PGM {}x{} to {}",
        format.name(),
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

fn write_image<W: Write>(image: &DecodedImage, format: PgmFormat, w: &mut W) -> Result<(), PgmError> {
    if format == PgmFormat::Raw && image.max_value() > u8::MAX as u16 {
        return Err(PgmError::UnsupportedFormat(format!(
            "raw samples wider than 8 bits (max value {})",
            image.max_value()
        )));
    }

    write!(
        w,
        "{}\n{} {}\n{}\n",
        format.magic(),
        image.width(),
        image.height(),
        image.max_value()
    )?;

    match format {
        PgmFormat::Plain => {
            for line in image.pixels().chunks(PLAIN_SAMPLES_PER_LINE) {
                let text: Vec<String> = line.iter().map(|v| v.to_string()).collect();
                writeln!(w, "{}", text.join(" "))?;
            }
        }
        PgmFormat::Raw => {
            // Checked above: every sample fits in a byte.
            let bytes: Vec<u8> = image.pixels().iter().map(|&v| v as u8).collect();
            w.write_all(&bytes)?;
        }
    }

    Ok(())
}
