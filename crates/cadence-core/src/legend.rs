// File: crates/cadence-core/src/legend.rs
// Summary: Single-row legend (label + color swatch per series) drawn on the cached layer; each entry toggles visibility.

use skia_safe as skia;

use crate::geometry::{PointF, RectF};
use crate::hit_test::{ClickRegion, RegionAction};
use crate::layout::Layout;
use crate::series::{Series, SeriesId};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{FONT_SIZE, LEGEND_SWATCH_GAP};

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub series_id: SeriesId,
    pub text: String,
    /// Left end of the label baseline.
    pub origin: PointF,
    pub swatch: RectF,
    pub swatch_color: skia::Color,
    pub region: ClickRegion,
}

/// Lay out one entry per series in draw order, in slots `label_space` apart.
pub fn project_legend(series: &[Series], layout: &Layout, theme: &Theme, shaper: &TextShaper) -> Vec<LegendEntry> {
    let mut ordered: Vec<&Series> = series.iter().collect();
    ordered.sort_by_key(|s| s.order);

    let buffer = layout.buffer as f32;
    let y = buffer - buffer / 5.0;
    let square = (buffer / 3.0).floor();

    ordered
        .into_iter()
        .enumerate()
        .map(|(i, s)| {
            let x = (layout.label_space * i as f64 + layout.buffer) as f32;
            let text = format!("{}:", s.label);
            let metrics = shaper.measure(&text, FONT_SIZE);
            let swatch_left = x + metrics.width + LEGEND_SWATCH_GAP;
            let swatch_color = match (s.visible, s.color) {
                (true, Some(c)) => c,
                (true, None) => theme.grid,
                (false, _) => theme.hidden_swatch,
            };
            LegendEntry {
                series_id: s.id,
                text,
                origin: PointF::new(x, y),
                swatch: RectF::from_ltrb(swatch_left, y - square, swatch_left + square, y),
                swatch_color,
                region: ClickRegion {
                    rect: RectF::from_ltrb(x, y - metrics.height, swatch_left + square, y),
                    series_id: s.id,
                    priority: s.order,
                    action: RegionAction::ToggleVisibility,
                },
            }
        })
        .collect()
}

pub fn draw_legend(canvas: &skia::Canvas, entries: &[LegendEntry], theme: &Theme, shaper: &TextShaper, draw_labels: bool) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    for entry in entries {
        if draw_labels {
            shaper.draw_left(canvas, &entry.text, entry.origin.x, entry.origin.y, FONT_SIZE, theme.legend_label);
        }
        fill.set_color(entry.swatch_color);
        let r = entry.swatch;
        canvas.draw_rect(skia::Rect::from_ltrb(r.nw.x, r.nw.y, r.se.x, r.se.y), &fill);
    }
}
