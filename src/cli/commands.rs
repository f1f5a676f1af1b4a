//! Subcommand handlers for render, info, reencode and config actions.

use std::path::{Path, PathBuf};

use super::args::{Args, Command, ConfigAction, RenderArgs};
use crate::ascii::{self, calculate_dimensions, CharacterRamp, RasterOptions};
use crate::config::{default_path as get_config_path, Config};
use crate::error::{Error, Result};
use crate::pgm::{self, PgmFormat};
use crate::{pipeline, renderer};

/// Effective render settings after merging CLI flags over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub ramp: CharacterRamp,
    pub options: RasterOptions,
}

/// Merge render flags with the config file. Flags win.
pub fn resolve_render_settings(args: &RenderArgs, config: &Config) -> Result<RenderSettings> {
    let input = args
        .input
        .clone()
        .or_else(|| config.paths.input.clone())
        .ok_or(Error::MissingInput)?;
    let output = args.output.clone().or_else(|| config.paths.output.clone());

    let ramp = if let Some(ramp) = &args.ramp {
        ramp.parse::<CharacterRamp>()?
    } else if let Some(charset) = args.charset {
        ascii::CharSet::from(charset).ramp()
    } else {
        config.render.ramp()?
    };

    let options = RasterOptions {
        max_width: args.max_width.unwrap_or(config.render.max_width),
        invert: args.invert || config.render.invert,
    };

    Ok(RenderSettings {
        input,
        output,
        ramp,
        options,
    })
}

/// Dispatch a parsed command line.
pub fn run(args: Args, config: &Config) -> Result<()> {
    match args.command {
        Command::Render(render_args) => render(&render_args, config),
        Command::Info { input, max_width } => {
            info(&input, max_width.unwrap_or(config.render.max_width))
        }
        Command::Reencode {
            input,
            output,
            format,
        } => reencode(&input, &output, format.into()),
        Command::Config { action } => handle_config_action(action, args.config.as_deref(), config),
    }
}

/// Render a PGM file to stdout or the configured output file.
pub fn render(args: &RenderArgs, config: &Config) -> Result<()> {
    let settings = resolve_render_settings(args, config)?;
    let grid = pipeline::convert_file(&settings.input, &settings.ramp, settings.options)?;

    match &settings.output {
        Some(path) => {
            renderer::write_grid_to_file(&grid, path).map_err(Error::Render)?;
            println!(
                "Wrote {}x{} characters to {}",
                grid.width(),
                grid.height(),
                path.display()
            );
        }
        None => {
            let stdout = std::io::stdout();
            renderer::write_grid(&grid, &mut stdout.lock()).map_err(Error::Render)?;
        }
    }
    Ok(())
}

/// Print header details for a PGM file.
///
/// The raster is decoded as well, so a truncated or out-of-range file fails
/// here the same way `render` would.
pub fn info(input: &Path, max_width: u32) -> Result<()> {
    let data = pgm::read_file(input)?;
    let header = pgm::read_header(&data)?;
    pgm::decode(&data)?;
    let (cols, rows) = calculate_dimensions(header.width, header.height, max_width);

    println!("File: {}", input.display());
    println!(
        "  Format: {} ({})",
        header.format.magic(),
        header.format.name()
    );
    println!("  Size: {}x{}", header.width, header.height);
    println!("  Max value: {}", header.max_value);
    println!("  Grid at {} columns: {}x{}", max_width, cols, rows);
    Ok(())
}

/// Decode a PGM file and write it back in `format`.
pub fn reencode(input: &Path, output: &Path, format: PgmFormat) -> Result<()> {
    let image = pgm::decode_file(input)?;
    pgm::encode_to_file(&image, format, output)?;
    println!(
        "Wrote {} as {} ({})",
        output.display(),
        format.magic(),
        format.name()
    );
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, path: Option<&Path>, config: &Config) -> Result<()> {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(get_config_path);
    match action {
        ConfigAction::Show => {
            println!("Current configuration:");
            println!();
            print!("{}", config.to_toml()?);
            println!();
            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            Config::default().write_new(&config_path)?;
            println!("Created config file: {}", config_path.display());
        }
    }
    Ok(())
}
