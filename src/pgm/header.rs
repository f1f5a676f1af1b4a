//! PGM header parsing.
//!
//! A header is four whitespace-separated tokens: magic, width, height and max
//! value. A `#` starts a comment that runs to the end of the line and may
//! appear anywhere before the raster.

use super::error::PgmError;
use super::image::sample_count;

/// Magic number of the plain (ASCII) variant.
pub const PLAIN_MAGIC: &str = "P2";
/// Magic number of the raw (binary) variant.
pub const RAW_MAGIC: &str = "P5";

/// Sample encoding of a PGM file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PgmFormat {
    /// `P2`: decimal samples separated by whitespace
    Plain,
    /// `P5`: one byte per sample
    #[default]
    Raw,
}

impl PgmFormat {
    pub fn magic(&self) -> &'static str {
        match self {
            PgmFormat::Plain => PLAIN_MAGIC,
            PgmFormat::Raw => RAW_MAGIC,
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            PgmFormat::Plain => "plain",
            PgmFormat::Raw => "raw",
        }
    }

    fn from_magic(magic: &str) -> Option<Self> {
        match magic {
            PLAIN_MAGIC => Some(PgmFormat::Plain),
            RAW_MAGIC => Some(PgmFormat::Raw),
            _ => None,
        }
    }
}

/// Parsed PGM header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PgmHeader {
    pub format: PgmFormat,
    pub width: u32,
    pub height: u32,
    pub max_value: u16,
}

impl PgmHeader {
    /// Number of samples the raster must contain.
    pub fn sample_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Byte cursor that yields whitespace-separated tokens and skips comments.
pub(crate) struct Tokens<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while self.pos < self.data.len() && self.data[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos < self.data.len() && self.data[self.pos] == b'#' {
                while self.pos < self.data.len()
                    && self.data[self.pos] != b'\n'
                    && self.data[self.pos] != b'\r'
                {
                    self.pos += 1;
                }
            } else {
                break;
            }
        }
    }

    /// Next token, or `None` at end of input.
    pub(crate) fn next_token(&mut self) -> Option<&'a [u8]> {
        self.skip_whitespace_and_comments();
        let start = self.pos;
        while self.pos < self.data.len()
            && !self.data[self.pos].is_ascii_whitespace()
            && self.data[self.pos] != b'#'
        {
            self.pos += 1;
        }
        if start == self.pos {
            None
        } else {
            Some(&self.data[start..self.pos])
        }
    }

    /// Bytes not yet consumed.
    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Bytes after the separator that terminates the last token.
    ///
    /// The separator is one whitespace byte, a `\r\n` pair, or a comment
    /// through its closing `\n`.
    pub(crate) fn raster(&self) -> &'a [u8] {
        let data: &'a [u8] = self.data;
        let rest = &data[self.pos..];
        match rest {
            [b'#', ..] => match rest.iter().position(|&b| b == b'\n') {
                Some(end) => &rest[end + 1..],
                None => &[],
            },
            [b'\r', b'\n', tail @ ..] => tail,
            [b, tail @ ..] if b.is_ascii_whitespace() => tail,
            _ => rest,
        }
    }
}

/// Parse the header at the start of `data`.
pub fn read_header(data: &[u8]) -> Result<PgmHeader, PgmError> {
    let mut tokens = Tokens::new(data);
    parse_header(&mut tokens)
}

pub(crate) fn parse_header(tokens: &mut Tokens<'_>) -> Result<PgmHeader, PgmError> {
    let magic = tokens
        .next_token()
        .ok_or_else(|| PgmError::MalformedHeader("missing magic number".into()))?;
    let magic = String::from_utf8_lossy(magic);
    let format = PgmFormat::from_magic(&magic)
        .ok_or_else(|| PgmError::UnsupportedFormat(magic.into_owned()))?;

    let width = parse_positive(tokens.next_token(), "width")?;
    let height = parse_positive(tokens.next_token(), "height")?;
    let max_value = parse_positive(tokens.next_token(), "max value")?;

    sample_count(width, height)?;
    let max_value = u16::try_from(max_value).map_err(|_| {
        PgmError::MalformedHeader(format!("max value {} exceeds 65535", max_value))
    })?;
    if format == PgmFormat::Raw && max_value > u8::MAX as u16 {
        return Err(PgmError::UnsupportedFormat(format!(
            "raw samples wider than 8 bits (max value {})",
            max_value
        )));
    }

    Ok(PgmHeader {
        format,
        width,
        height,
        max_value,
    })
}

fn parse_positive(token: Option<&[u8]>, field: &str) -> Result<u32, PgmError> {
    let token = token.ok_or_else(|| PgmError::MalformedHeader(format!("missing {}", field)))?;
    let text = std::str::from_utf8(token)
        .map_err(|_| PgmError::MalformedHeader(format!("{} is not ASCII", field)))?;
    match text.parse::<u32>() {
        Ok(0) => Err(PgmError::MalformedHeader(format!("{} must be positive", field))),
        Ok(v) => Ok(v),
        Err(_) => Err(PgmError::MalformedHeader(format!(
            "invalid {} '{}'",
            field, text
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_header_plain() {
        let header = read_header(b"P2\n3 2\n15\n0 1 2 3 4 5\n").unwrap();
        assert_eq!(header.format, PgmFormat::Plain);
        assert_eq!(header.width, 3);
        assert_eq!(header.height, 2);
        assert_eq!(header.max_value, 15);
        assert_eq!(header.sample_count(), 6);
    }

    #[test]
    fn test_read_header_skips_comments() {
        let header = read_header(b"P5\n# made by hand\n# twice\n4 4\n255\n").unwrap();
        assert_eq!(header.format, PgmFormat::Raw);
        assert_eq!((header.width, header.height), (4, 4));
    }

    #[test]
    fn test_read_header_comment_between_fields() {
        let header = read_header(b"P2 4 # width above\n 2 7\n").unwrap();
        assert_eq!((header.width, header.height, header.max_value), (4, 2, 7));
    }

    #[test]
    fn test_unknown_magic() {
        let err = read_header(b"P9\n1 1\n255\n").unwrap_err();
        assert!(matches!(err, PgmError::UnsupportedFormat(ref m) if m == "P9"));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(read_header(b""), Err(PgmError::MalformedHeader(_))));
    }

    #[test]
    fn test_non_numeric_width() {
        let err = read_header(b"P2\nabc 2\n255\n").unwrap_err();
        assert!(matches!(err, PgmError::MalformedHeader(_)));
    }

    #[test]
    fn test_negative_height() {
        let err = read_header(b"P2\n2 -2\n255\n").unwrap_err();
        assert!(matches!(err, PgmError::MalformedHeader(_)));
    }

    #[test]
    fn test_zero_max_value() {
        let err = read_header(b"P2\n2 2\n0\n").unwrap_err();
        assert!(matches!(err, PgmError::MalformedHeader(_)));
    }

    #[test]
    fn test_missing_max_value() {
        let err = read_header(b"P2\n2 2\n").unwrap_err();
        assert!(matches!(err, PgmError::MalformedHeader(_)));
    }

    #[test]
    fn test_raw_sixteen_bit_rejected() {
        let err = read_header(b"P5\n2 2\n65535\n").unwrap_err();
        assert!(matches!(err, PgmError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_plain_sixteen_bit_accepted() {
        let header = read_header(b"P2\n1 1\n65535\n").unwrap();
        assert_eq!(header.max_value, 65535);
    }

    #[test]
    fn test_raster_starts_after_single_whitespace() {
        let data = b"P5\n2 1\n255\n\x0a\x20";
        let mut tokens = Tokens::new(data);
        parse_header(&mut tokens).unwrap();
        // The byte after the max value terminator is a sample even if it is whitespace.
        assert_eq!(tokens.raster(), &[0x0a, 0x20]);
    }

    #[test]
    fn test_raster_after_crlf() {
        let data = b"P5\r\n2 1\r\n255\r\n\x0a\x07";
        let mut tokens = Tokens::new(data);
        parse_header(&mut tokens).unwrap();
        assert_eq!(tokens.raster(), &[0x0a, 0x07]);
    }

    #[test]
    fn test_raster_after_trailing_comment() {
        let data = b"P5\n2 1\n255# exported\r\n\x01\x02";
        let mut tokens = Tokens::new(data);
        parse_header(&mut tokens).unwrap();
        assert_eq!(tokens.raster(), &[0x01, 0x02]);

        let mut tokens = Tokens::new(b"P5\n1 1\n255# no newline");
        parse_header(&mut tokens).unwrap();
        assert!(tokens.raster().is_empty());
    }
}
