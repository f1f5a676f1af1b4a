//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{parse_max_width, Args, Command, ConfigAction, RenderArgs};
pub use commands::{
    handle_config_action, info, reencode, render, resolve_render_settings, run, RenderSettings,
};
pub use enums::{CharacterSet, Format};
