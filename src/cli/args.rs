//! CLI argument parsing with clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{CharacterSet, Format};

/// Parse and validate the column budget (at least 1)
pub fn parse_max_width(s: &str) -> Result<u32, String> {
    let width: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid width", s))?;
    if width == 0 {
        return Err("Width must be at least 1 column".to_string());
    }
    Ok(width)
}

/// Render grayscale PGM images as ASCII art
#[derive(Parser, Debug)]
#[command(name = "pgm-ascii")]
#[command(version, about = "Render grayscale PGM images as ASCII art", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Print an image to the terminal at 80 columns
    pgm-ascii render face.pgm

    # Write a 120-column rendering with block characters to a file
    pgm-ascii render face.pgm -o face.txt -w 120 --charset blocks

    # Show header details
    pgm-ascii info face.pgm")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a PGM image to ASCII art
    Render(RenderArgs),
    /// Print PGM header details and the resulting grid size
    Info {
        /// PGM file to inspect
        input: PathBuf,
        /// Column budget used for the grid size estimate
        #[arg(short = 'w', long, value_parser = parse_max_width)]
        max_width: Option<u32>,
    },
    /// Re-save a PGM image as plain (P2) or raw (P5)
    Reencode {
        /// Source PGM file
        input: PathBuf,
        /// Destination PGM file
        output: PathBuf,
        /// Sample encoding of the output
        #[arg(long, short, default_value = "raw")]
        format: Format,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// PGM file to render (default: paths.input from the config file)
    pub input: Option<PathBuf>,

    /// Write the art to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum output width in columns (default: 80)
    #[arg(short = 'w', long, value_parser = parse_max_width)]
    pub max_width: Option<u32>,

    /// Built-in character set
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Custom ramp, darkest sample first (e.g. "@%#*+=-:. ")
    #[arg(long, conflicts_with = "charset")]
    pub ramp: Option<String>,

    /// Map black to the last ramp character
    #[arg(long)]
    pub invert: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
