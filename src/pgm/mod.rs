//! PGM (portable graymap) reading and writing.
//!
//! Two variants are supported:
//! - `P2` (plain): header and samples as whitespace-separated decimal text
//! - `P5` (raw): text header followed by one byte per sample
//!
//! Both decode to the same [`DecodedImage`], so the variant an image was
//! stored in never affects rendering.

mod decode;
mod encode;
mod error;
mod header;
mod image;

pub use decode::{decode, decode_file, read_file};
pub use encode::{encode, encode_to_file};
pub use error::PgmError;
pub use header::{read_header, PgmFormat, PgmHeader, PLAIN_MAGIC, RAW_MAGIC};
pub use image::DecodedImage;
