//! Command-line argument definitions for the Armillary CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the model and config inputs, the output
//! directory, the configuration file and logging verbosity.

use std::str::FromStr;

use clap::Parser;
use log::LevelFilter;

/// Command-line arguments for the Armillary artifact generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the class-model XML file
    #[arg(help = "Path to the class-model XML file")]
    pub model: String,

    /// Path to the base flat config (JSON)
    #[arg(long, default_value = "input/config.json")]
    pub base: String,

    /// Path to the patched flat config (JSON)
    #[arg(long, default_value = "input/patched_config.json")]
    pub patched: String,

    /// Output directory, overriding the configured one
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// The logger filter named by `--log-level`, case-insensitive.
    ///
    /// Returns `None` for an unknown level name.
    pub fn log_filter(&self) -> Option<LevelFilter> {
        LevelFilter::from_str(&self.log_level).ok()
    }
}
