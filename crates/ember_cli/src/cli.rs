//! Command line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "ember", version, about = "Tiled CPU path tracer")]
pub struct Args {
    /// JSON settings file; command line flags override its values.
    #[arg(long, value_name = "file")]
    pub settings: Option<PathBuf>,

    /// Write the final image to the given filename.
    #[arg(short, long, value_name = "filename", default_value = "ember.png")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of tiles along each image axis
    #[arg(short = 'd', long)]
    pub tile_divider: Option<u32>,

    /// Samples per pixel
    #[arg(short, long)]
    pub samples: Option<u32>,

    /// Maximum ray bounce depth
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Apply gamma 2.0 before writing 8-bit output
    #[arg(long)]
    pub gamma: bool,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Logging level; RUST_LOG is used when omitted
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides() {
        let args = Args::parse_from([
            "ember", "--width", "64", "-d", "3", "-s", "8", "--gamma", "--log-level", "debug",
        ]);

        assert_eq!(args.width, Some(64));
        assert_eq!(args.height, None);
        assert_eq!(args.tile_divider, Some(3));
        assert_eq!(args.samples, Some(8));
        assert!(args.gamma);
        assert_eq!(args.output, PathBuf::from("ember.png"));
        assert_eq!(LevelFilter::from(args.log_level.unwrap()), LevelFilter::Debug);
    }
}
