//! Settings file loading and command line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ember_renderer::{PathTracerConfig, RenderSettings};
use serde::Deserialize;

use crate::cli::Args;

/// Everything a render run needs besides the scene.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub render: RenderSettings,
    pub path_tracer: PathTracerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 640,
            height: 360,
            render: RenderSettings::default(),
            path_tracer: PathTracerConfig::default(),
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Invalid settings JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let config = Self::from_json(&text)?;
        log::debug!("Loaded settings from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Settings file (if any) with command line flags applied on top.
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut config = match &args.settings {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply(args);
        Ok(config)
    }

    fn apply(&mut self, args: &Args) {
        if let Some(width) = args.width {
            self.width = width;
        }
        if let Some(height) = args.height {
            self.height = height;
        }
        if let Some(divider) = args.tile_divider {
            self.render.tile_divider = divider;
        }
        if let Some(samples) = args.samples {
            self.path_tracer.samples_per_pixel = samples;
        }
        if let Some(depth) = args.max_depth {
            self.path_tracer.max_depth = depth;
        }
        if let Some(seed) = args.seed {
            self.path_tracer.seed = seed;
        }
        if args.gamma {
            self.render.gamma_correct = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(
            r#"{
                "width": 320,
                "render": { "tile_divider": 5 },
                "path_tracer": { "samples_per_pixel": 2, "background": [0.1, 0.2, 0.3] }
            }"#,
        )
        .unwrap();

        assert_eq!(config.width, 320);
        assert_eq!(config.height, Config::default().height);
        assert_eq!(config.render.tile_divider, 5);
        assert_eq!(config.path_tracer.samples_per_pixel, 2);
        assert_eq!(config.path_tracer.max_depth, PathTracerConfig::default().max_depth);
        assert_eq!(config.path_tracer.background.z, 0.3);
    }

    #[test]
    fn test_flags_override_file_values() {
        let mut config = Config::from_json(r#"{ "width": 320, "render": { "tile_divider": 5 } }"#)
            .unwrap();
        let args = Args::parse_from(["ember", "--width", "100", "--seed", "9", "--gamma"]);
        config.apply(&args);

        assert_eq!(config.width, 100);
        assert_eq!(config.render.tile_divider, 5);
        assert_eq!(config.path_tracer.seed, 9);
        assert!(config.render.gamma_correct);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Config::from_json("{ width: }").is_err());
    }
}
