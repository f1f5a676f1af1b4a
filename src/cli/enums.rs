//! CLI enum types for character set and PGM format options.

use clap::ValueEnum;

use crate::ascii;
use crate::pgm::PgmFormat;

/// ASCII character set for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterSet {
    #[default]
    Classic,
    Standard,
    Blocks,
    Minimal,
}

impl From<CharacterSet> for ascii::CharSet {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Classic => ascii::CharSet::Classic,
            CharacterSet::Standard => ascii::CharSet::Standard,
            CharacterSet::Blocks => ascii::CharSet::Blocks,
            CharacterSet::Minimal => ascii::CharSet::Minimal,
        }
    }
}

/// PGM sample encoding for `reencode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// P2, decimal text samples
    Plain,
    /// P5, one byte per sample
    #[default]
    Raw,
}

impl From<Format> for PgmFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Plain => PgmFormat::Plain,
            Format::Raw => PgmFormat::Raw,
        }
    }
}
