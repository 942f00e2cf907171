// File: crates/cadence-core/src/grid.rs
// Summary: Grid layout (one vertical line per point, capped horizontal sections) and its drawing onto the cached layer.

use skia_safe as skia;

use crate::geometry::PointF;
use crate::layout::Layout;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::FONT_SIZE;

/// Text shown under a gridline whose label is missing.
pub const MISSING_LABEL: &str = "N/A";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub from: PointF,
    pub to: PointF,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridLabel {
    pub text: String,
    /// Axis labels: center x and baseline. Value annotations: left x and baseline.
    pub anchor: PointF,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridGeometry {
    pub vertical: Vec<GridLine>,
    pub horizontal: Vec<GridLine>,
    pub axis_labels: Vec<GridLabel>,
    pub value_labels: Vec<GridLabel>,
}

pub fn project_grid(layout: &Layout, point_count: usize, labels: Option<&[String]>) -> GridGeometry {
    let mut geo = GridGeometry::default();
    let top = layout.buffer as f32;
    let bottom = layout.baseline_y();
    let labels = labels.filter(|l| !l.is_empty());

    for i in 0..point_count {
        let x = layout.point_x(i);
        geo.vertical.push(GridLine { from: PointF::new(x, top), to: PointF::new(x, bottom) });
        if let Some(labels) = labels {
            let text = labels.get(i).map(String::as_str).unwrap_or(MISSING_LABEL);
            geo.axis_labels.push(GridLabel {
                text: text.to_string(),
                anchor: PointF::new(x, (layout.height - layout.buffer / 3.0) as f32),
            });
        }
    }

    let left = layout.buffer as f32;
    let right = (layout.width - layout.buffer) as f32;
    for i in 0..=layout.section_count {
        let y = (layout.height - layout.section_height * i as f64 - layout.buffer + 0.5) as f32;
        geo.horizontal.push(GridLine { from: PointF::new(left, y), to: PointF::new(right, y) });
        let value = (i as f64 * layout.vertical_increment).floor();
        geo.value_labels.push(GridLabel {
            text: format!("{value}"),
            anchor: PointF::new((layout.buffer / 4.0) as f32, y),
        });
    }
    geo
}

pub fn draw_grid(canvas: &skia::Canvas, geo: &GridGeometry, theme: &Theme, shaper: &TextShaper, draw_labels: bool) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);

    for line in geo.vertical.iter().chain(geo.horizontal.iter()) {
        canvas.draw_line(line.from, line.to, &paint);
    }

    if !draw_labels {
        return;
    }
    for label in &geo.axis_labels {
        let width = shaper.measure(&label.text, FONT_SIZE).width;
        let x = label.anchor.x - (width / 2.0).floor();
        shaper.draw_left(canvas, &label.text, x, label.anchor.y, FONT_SIZE, theme.axis_label);
    }
    for label in &geo.value_labels {
        shaper.draw_left(canvas, &label.text, label.anchor.x, label.anchor.y, FONT_SIZE, theme.axis_label);
    }
}
