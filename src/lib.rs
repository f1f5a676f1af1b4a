//! pgm-ascii library crate.
//!
//! Decodes grayscale PGM images (`P2` and `P5`) and rasterizes them into
//! character grids sized for a terminal.
//!
//! ```
//! use pgm_ascii::ascii::{rasterize, CharacterRamp, RasterOptions};
//! use pgm_ascii::pgm;
//!
//! let image = pgm::decode(b"P2\n2 2\n255\n0 255\n255 0\n").unwrap();
//! let grid = rasterize(&image, &CharacterRamp::default(), RasterOptions::default()).unwrap();
//! assert_eq!(grid.to_string(), "@ ");
//! ```

pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod pgm;
pub mod pipeline;
pub mod renderer;

pub use error::{Error, Result};
