mod cli;
mod config;
mod demo;
mod progress;

use anyhow::{Context, Result};
use clap::Parser;
use ember_renderer::{PathTracer, Renderer};

use crate::cli::Args;
use crate::config::Config;
use crate::progress::ProgressReporter;

fn init_logger(args: &Args) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = args.log_level {
        builder.filter_level(level.into());
    }
    builder.format_target(false).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(&args);

    let config = Config::from_args(&args)?;
    log::info!(
        "Ember: {}x{} @ {} spp, depth {}, tile divider {}",
        config.width,
        config.height,
        config.path_tracer.samples_per_pixel,
        config.path_tracer.max_depth,
        config.render.tile_divider
    );

    let scene = demo::build_scene(config.width, config.height);
    let mut renderer = Renderer::new(PathTracer::new(config.path_tracer.clone()));
    let mut progress = ProgressReporter::new(args.quiet);

    let image = renderer
        .render(&scene, &config.render, &mut progress)
        .context("Render failed")?;

    image
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("Rendered in {:.2?}, saved to {}", image.elapsed, args.output.display());
    Ok(())
}
