use anyhow::Context;
use clap::Parser;
use env_logger::Env;

use pgm_ascii::cli::{self, Args};
use pgm_ascii::config::Config;

/// Map `-v` occurrences to a default log filter; `RUST_LOG` still wins.
fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(log_filter(args.verbose)))
        .format_timestamp(None)
        .init();

    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    cli::run(args, &config)?;
    Ok(())
}
