use ember_renderer::{RenderObserver, RenderedImage, Tile};
use indicatif::{ProgressBar, ProgressStyle};

/// Drives a terminal progress bar from render notifications.
pub struct ProgressReporter {
    pb: ProgressBar,
}

impl ProgressReporter {
    pub fn new(hidden: bool) -> Self {
        let pb = if hidden {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(0)
        };
        let template = "{spinner:.bold.green} Rendering: [{wide_bar:.cyan}] {pos}/{len} tiles ({elapsed_precise}|{eta_precise})";
        if let Ok(style) = ProgressStyle::with_template(template) {
            pb.set_style(style.progress_chars("█▇▆▅▄▃▂▁  "));
        }
        Self { pb }
    }
}

impl RenderObserver for ProgressReporter {
    fn on_start(&mut self, _width: u32, _height: u32, tile_count: usize) {
        self.pb.set_length(tile_count as u64);
        self.pb.tick();
    }

    fn on_progress(&mut self, _tile: &Tile) {
        self.pb.inc(1);
    }

    fn on_finish(&mut self, image: &RenderedImage) {
        self.pb.finish_and_clear();
        log::info!("Sampled {}x{} pixels in {:.2?}", image.width, image.height, image.elapsed);
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        // Failed renders never reach on_finish
        if !self.pb.is_finished() {
            self.pb.abandon();
        }
    }
}
