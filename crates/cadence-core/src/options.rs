// File: crates/cadence-core/src/options.rs
// Summary: Chart configuration (surface size, padding, bar threshold, frame cadence, theme).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::theme::Theme;
use crate::types::{BUFFER, HEIGHT, MINIMUM_DISPLAY_THRESHOLD, REFRESH_SPEED_MS, WIDTH};

/// Serializable so hosts can keep chart setup next to their data files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub width: i32,
    pub height: i32,
    /// Padding between the surface edge and the plot area.
    pub buffer: i32,
    /// Fraction (0..1) under which bars are drawn as a 2px sliver.
    pub minimum_display_threshold: f64,
    pub refresh_speed_ms: u64,
    /// Turn off for pixel-exact output across platforms (font variance).
    pub draw_labels: bool,
    #[serde(skip)]
    pub theme: Theme,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            buffer: BUFFER,
            minimum_display_threshold: MINIMUM_DISPLAY_THRESHOLD,
            refresh_speed_ms: REFRESH_SPEED_MS,
            draw_labels: true,
            theme: Theme::light(),
        }
    }
}

impl ChartOptions {
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn refresh_speed(&self) -> Duration {
        Duration::from_millis(self.refresh_speed_ms)
    }
}
