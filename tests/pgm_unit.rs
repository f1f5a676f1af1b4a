//! Unit tests for the PGM reader and writer.
//!
//! These tests verify:
//! - Plain (P2) decoding reproduces header fields and samples exactly
//! - Plain and raw (P5) encodings of one image decode to equal values
//! - Malformed and truncated input fail with the matching error kind

use pgm_ascii::pgm::{self, DecodedImage, PgmError, PgmFormat};

/// Build a plain PGM by hand, one row per line.
fn plain_pgm(width: u32, height: u32, max_value: u16, pixels: &[u16]) -> Vec<u8> {
    let mut out = format!("P2\n# synthetic\n{} {}\n{}\n", width, height, max_value);
    for row in pixels.chunks(width as usize) {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out.into_bytes()
}

/// Build a raw PGM by hand.
fn raw_pgm(width: u32, height: u32, max_value: u16, pixels: &[u16]) -> Vec<u8> {
    let mut out = format!("P5\n{} {}\n{}\n", width, height, max_value).into_bytes();
    out.extend(pixels.iter().map(|&v| v as u8));
    out
}

fn gradient(width: u32, height: u32) -> Vec<u16> {
    (0..width * height).map(|i| (i * 7 % 256) as u16).collect()
}

// ==================== Decoding Tests ====================

#[test]
fn test_plain_decode_reproduces_fields() {
    let pixels = gradient(7, 5);
    let image = pgm::decode(&plain_pgm(7, 5, 255, &pixels)).unwrap();
    assert_eq!(image.width(), 7);
    assert_eq!(image.height(), 5);
    assert_eq!(image.max_value(), 255);
    assert_eq!(image.pixels(), pixels.as_slice());
}

#[test]
fn test_plain_decode_small_max_value() {
    let pixels = vec![0, 1, 2, 3, 3, 2, 1, 0];
    let image = pgm::decode(&plain_pgm(4, 2, 3, &pixels)).unwrap();
    assert_eq!(image.max_value(), 3);
    assert_eq!(image.pixels(), pixels.as_slice());
}

#[test]
fn test_plain_and_raw_decode_equal() {
    let pixels = gradient(13, 9);
    let plain = pgm::decode(&plain_pgm(13, 9, 255, &pixels)).unwrap();
    let raw = pgm::decode(&raw_pgm(13, 9, 255, &pixels)).unwrap();
    assert_eq!(plain, raw);
}

#[test]
fn test_raw_whitespace_valued_first_sample() {
    // 0x20 and 0x0a as samples must not be mistaken for header separators
    let pixels = vec![0x20, 0x0a, 0x09, 0x0d];
    let image = pgm::decode(&raw_pgm(2, 2, 255, &pixels)).unwrap();
    assert_eq!(image.pixels(), pixels.as_slice());
}

#[test]
fn test_decode_file_both_variants() {
    let dir = tempfile::tempdir().unwrap();
    let pixels = gradient(6, 4);
    let plain_path = dir.path().join("plain.pgm");
    let raw_path = dir.path().join("raw.pgm");
    std::fs::write(&plain_path, plain_pgm(6, 4, 255, &pixels)).unwrap();
    std::fs::write(&raw_path, raw_pgm(6, 4, 255, &pixels)).unwrap();

    assert_eq!(
        pgm::decode_file(&plain_path).unwrap(),
        pgm::decode_file(&raw_path).unwrap()
    );
}

// ==================== Error Tests ====================

#[test]
fn test_unknown_magic_is_unsupported_format() {
    let err = pgm::decode(b"P9\n2 2\n255\n0 0 0 0\n").unwrap_err();
    assert!(matches!(err, PgmError::UnsupportedFormat(ref magic) if magic == "P9"));
}

#[test]
fn test_color_ppm_is_unsupported_format() {
    let err = pgm::decode(b"P6\n1 1\n255\n\x00\x00\x00").unwrap_err();
    assert!(matches!(err, PgmError::UnsupportedFormat(_)));
}

#[test]
fn test_truncated_plain_ten_by_ten() {
    let pixels = vec![128; 99];
    let data = format!(
        "P2\n10 10\n255\n{}\n",
        pixels
            .iter()
            .map(|v: &u16| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );
    for _ in 0..3 {
        let err = pgm::decode(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            PgmError::TruncatedData {
                expected: 100,
                actual: 99
            }
        ));
    }
}

#[test]
fn test_truncated_raw_ten_by_ten() {
    let data = raw_pgm(10, 10, 255, &[7; 40]);
    let err = pgm::decode(&data).unwrap_err();
    assert!(matches!(
        err,
        PgmError::TruncatedData {
            expected: 100,
            actual: 40
        }
    ));
}

#[test]
fn test_huge_plain_header_with_tiny_body_is_truncated() {
    let err = pgm::decode(b"P2\n4000000000 4000000000\n255\n0 1 2\n").unwrap_err();
    assert!(matches!(err, PgmError::TruncatedData { actual: 3, .. }));
}

#[test]
fn test_huge_raw_header_with_tiny_body_is_truncated() {
    let mut data = b"P5\n4000000000 4000000000\n255\n".to_vec();
    data.extend_from_slice(&[0, 1, 2]);
    let err = pgm::decode(&data).unwrap_err();
    assert!(matches!(err, PgmError::TruncatedData { actual: 3, .. }));
}

#[test]
fn test_raw_crlf_header() {
    let mut data = b"P5\r\n2 1\r\n255\r\n".to_vec();
    data.extend_from_slice(&[7, 9]);
    assert_eq!(pgm::decode(&data).unwrap().pixels(), &[7, 9]);
}

#[test]
fn test_raw_comment_after_max_value() {
    let mut data = b"P5\n2 1\n255#c\n".to_vec();
    data.extend_from_slice(&[7, 9]);
    assert_eq!(pgm::decode(&data).unwrap().pixels(), &[7, 9]);
}

#[test]
fn test_zero_max_value_is_malformed_header() {
    let err = pgm::decode(b"P2\n1 1\n0\n0\n").unwrap_err();
    assert!(matches!(err, PgmError::MalformedHeader(_)));
}

#[test]
fn test_missing_dimensions_is_malformed_header() {
    let err = pgm::decode(b"P2\n# nothing else").unwrap_err();
    assert!(matches!(err, PgmError::MalformedHeader(_)));
}

#[test]
fn test_missing_file_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.pgm");
    let err = pgm::decode_file(&path).unwrap_err();
    assert!(matches!(err, PgmError::FileNotFound(ref p) if p == &path));
    assert!(err.to_string().contains("missing.pgm"));
}

// ==================== Encoding Tests ====================

#[test]
fn test_encode_then_decode_both_formats() {
    let image = DecodedImage::new(5, 3, 200, gradient(5, 3).iter().map(|v| v % 201).collect())
        .unwrap();
    for format in [PgmFormat::Plain, PgmFormat::Raw] {
        let bytes = pgm::encode(&image, format).unwrap();
        assert!(bytes.starts_with(format.magic().as_bytes()));
        assert_eq!(pgm::decode(&bytes).unwrap(), image);
    }
}

#[test]
fn test_encode_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pgm");
    let image = DecodedImage::new(2, 2, 255, vec![1, 2, 3, 4]).unwrap();
    pgm::encode_to_file(&image, PgmFormat::Plain, &path).unwrap();

    let header = pgm::read_header(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(header.format, PgmFormat::Plain);
    assert_eq!(pgm::decode_file(&path).unwrap(), image);
}
