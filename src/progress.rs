//! Progress bar for the package scan
//!
//! One bar over all manifest files, labelled with the package being
//! resolved. Drawn on stderr; `--quiet` turns it off.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TEMPLATE: &str = "{spinner:.cyan} {prefix} {wide_msg} [{bar:30.cyan/blue}] {pos}/{len}";

/// Scan progress over a known number of manifests
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Start a bar over `manifests` files, or a no-op reporter when disabled
    pub fn start(enabled: bool, manifests: u64) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new(manifests);
        if let Ok(style) = ProgressStyle::default_bar().template(TEMPLATE) {
            bar.set_style(style.progress_chars("█▓░"));
        }
        bar.set_prefix("Checking");
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    /// Label the bar with the package now being resolved
    pub fn package(&self, name: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(name.to_string());
        }
    }

    /// One manifest done, whatever its outcome
    pub fn advance(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    #[cfg(test)]
    fn position(&self) -> Option<u64> {
        self.bar.as_ref().map(|bar| bar.position())
    }
}
