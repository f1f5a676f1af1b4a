//! PGM decoding for the plain (`P2`) and raw (`P5`) variants.

use std::path::Path;

use super::error::PgmError;
use super::header::{parse_header, PgmFormat, PgmHeader, Tokens};
use super::image::DecodedImage;

/// Decode a complete PGM file held in memory.
///
/// Samples are read in row-major order. Input with fewer than
/// `width * height` samples fails with [`PgmError::TruncatedData`]; samples
/// past that count are ignored.
///
/// A raw raster starts after the single whitespace byte that ends the max
/// value, or after `\r\n` when the header uses CRLF line endings, or after the
/// end of a comment placed directly behind the max value.
pub fn decode(data: &[u8]) -> Result<DecodedImage, PgmError> {
    let mut tokens = Tokens::new(data);
    let header = parse_header(&mut tokens)?;

    let pixels = match header.format {
        PgmFormat::Plain => decode_plain_samples(&mut tokens, &header)?,
        PgmFormat::Raw => decode_raw_samples(tokens.raster(), &header)?,
    };

    log::debug!(
        "Decoded {} PGM: {}x{} (max value {})",
        header.format.name(),
        header.width,
        header.height,
        header.max_value
    );

    DecodedImage::new(header.width, header.height, header.max_value, pixels)
}

/// Read and decode a PGM file from disk.
///
/// A missing path is reported as [`PgmError::FileNotFound`] rather than a
/// generic I/O error.
pub fn decode_file(path: &Path) -> Result<DecodedImage, PgmError> {
    let data = read_file(path)?;
    decode(&data)
}

/// Read a whole file, mapping a missing path to [`PgmError::FileNotFound`].
pub fn read_file(path: &Path) -> Result<Vec<u8>, PgmError> {
    let data = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => PgmError::FileNotFound(path.to_path_buf()),
        _ => PgmError::Io(e),
    })?;
    log::debug!("Read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

fn decode_plain_samples(tokens: &mut Tokens<'_>, header: &PgmHeader) -> Result<Vec<u16>, PgmError> {
    let expected = header.sample_count();
    // Every sample but the last takes at least two bytes.
    let mut pixels = Vec::with_capacity(expected.min(tokens.remaining() / 2 + 1));

    while pixels.len() < expected {
        let Some(token) = tokens.next_token() else {
            return Err(PgmError::TruncatedData {
                expected,
                actual: pixels.len(),
            });
        };
        let value = std::str::from_utf8(token)
            .ok()
            .and_then(|t| t.parse::<u32>().ok())
            .ok_or_else(|| {
                PgmError::MalformedData(format!(
                    "sample {} is not an integer: '{}'",
                    pixels.len(),
                    String::from_utf8_lossy(token)
                ))
            })?;
        if value > header.max_value as u32 {
            return Err(PgmError::SampleOutOfRange {
                index: pixels.len(),
                value,
                max: header.max_value,
            });
        }
        pixels.push(value as u16);
    }

    if tokens.next_token().is_some() {
        log::debug!("Ignoring trailing data after {} samples", expected);
    }

    Ok(pixels)
}

fn decode_raw_samples(raster: &[u8], header: &PgmHeader) -> Result<Vec<u16>, PgmError> {
    let expected = header.sample_count();
    if raster.len() < expected {
        return Err(PgmError::TruncatedData {
            expected,
            actual: raster.len(),
        });
    }
    if raster.len() > expected {
        log::debug!(
            "Ignoring {} trailing bytes after raster",
            raster.len() - expected
        );
    }

    raster[..expected]
        .iter()
        .enumerate()
        .map(|(index, &b)| {
            if b as u16 > header.max_value {
                Err(PgmError::SampleOutOfRange {
                    index,
                    value: b as u32,
                    max: header.max_value,
                })
            } else {
                Ok(b as u16)
            }
        })
        .collect()
}
