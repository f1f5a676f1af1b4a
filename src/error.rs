//! Crate-level error type.

use crate::ascii::RasterError;
use crate::config::ConfigError;
use crate::pgm::PgmError;

/// Any failure from decoding, rasterizing, configuration or output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Pgm(#[from] PgmError),

    #[error(transparent)]
    Raster(#[from] RasterError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no input file given (pass INPUT or set paths.input in the config file)")]
    MissingInput,

    #[error("failed to write output: {0}")]
    Render(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
