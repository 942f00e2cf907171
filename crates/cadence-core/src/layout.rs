// File: crates/cadence-core/src/layout.rs
// Summary: Derives the pixel layout (section width, vertical unit, grid steps, legend slots) from raw values.

use crate::options::ChartOptions;
use crate::series::Series;
use crate::types::MAX_SECTIONS;

/// Largest value across every series, hidden or not. The fold starts at 0.
pub fn max_value(series: &[Series]) -> f64 {
    series.iter().map(Series::max_value).fold(0.0, f64::max)
}

/// Scalar layout constants shared by the grid, legend and series renderers.
///
/// Only recomputed when the maximum value (or the series count) changes, so an
/// animated update keeps drawing against the same cached grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Real maximum value, used for exact change detection.
    pub max_value: f64,
    /// Pixels between adjacent value positions.
    pub section_width: f64,
    /// Pixels per one data unit.
    pub vertical_unit: f64,
    /// Step between horizontal axis annotations.
    pub vertical_increment: f64,
    /// Number of horizontal grid sections (lines are `0..=section_count`).
    pub section_count: u32,
    pub section_height: f64,
    /// Horizontal space allotted to each legend entry.
    pub label_space: f64,
    pub width: f64,
    pub height: f64,
    pub buffer: f64,
}

impl Layout {
    /// `point_count` must be at least 2 and `series` non-empty; the chart
    /// validates both before resolving.
    pub fn resolve(series: &[Series], point_count: usize, opts: &ChartOptions) -> Self {
        let max = max_value(series);
        let width = opts.width as f64;
        let height = opts.height as f64;
        let buffer = opts.buffer as f64;

        // All-zero data has no vertical scale; lay it out as if the top were 1.
        let scale_max = if max > 0.0 { max } else { 1.0 };

        let gaps = point_count.max(2) - 1;
        let plot_height = height - buffer * 2.0;
        let section_count = scale_max.min(MAX_SECTIONS).ceil();

        Self {
            max_value: max,
            section_width: ((width - buffer * 2.0) / gaps as f64).floor(),
            vertical_unit: (plot_height / scale_max.ceil()).floor(),
            vertical_increment: (scale_max / 10.0).min(1.0).ceil(),
            section_count: section_count as u32,
            section_height: (plot_height / section_count).floor(),
            label_space: ((width - buffer) / series.len().max(1) as f64).floor(),
            width,
            height,
            buffer,
        }
    }

    /// Y of the value-0 baseline.
    pub fn baseline_y(&self) -> f32 {
        (self.height - self.buffer) as f32
    }

    /// X of point `index`, including the half-pixel offset used for crisp 1px strokes.
    pub fn point_x(&self, index: usize) -> f32 {
        (self.buffer + self.section_width * index as f64 + 0.5) as f32
    }

    pub fn value_y(&self, value: f64) -> f32 {
        (self.height - value * self.vertical_unit - self.buffer) as f32
    }
}
