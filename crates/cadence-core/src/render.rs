// File: crates/cadence-core/src/render.rs
// Summary: Projects line, stepped and bar series to pixel geometry plus click regions, then paints them on the live layer.

use skia_safe as skia;

use crate::error::ChartResult;
use crate::geometry::{PointF, RectF};
use crate::hit_test::{ClickRegion, RegionAction};
use crate::layout::Layout;
use crate::series::{Series, SeriesKind};
use crate::types::{CLICK_PADDING, MIN_BAR_HEIGHT};

/// One vertical bar, drawn as a stroke of the series' bar thickness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarSpan {
    pub x: f32,
    pub top: f32,
    pub bottom: f32,
}

impl BarSpan {
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SeriesGeometry {
    Line {
        points: Vec<PointF>,
    },
    Stepped {
        /// Polyline including the horizontal and vertical step segments.
        path: Vec<PointF>,
        /// One marker per data point.
        vertices: Vec<PointF>,
        marker_radius: f32,
    },
    Bars {
        bars: Vec<BarSpan>,
        thickness: f32,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedSeries {
    pub color: skia::Color,
    pub stroke_width: f32,
    pub geometry: SeriesGeometry,
    /// Empty unless the series has a click callback.
    pub regions: Vec<ClickRegion>,
}

/// Project `series` drawn with `values` (its own values, or an interpolated
/// frame of them). Fails when the series has no color.
pub fn project_series(series: &Series, values: &[f64], layout: &Layout, minimum_display_threshold: f64) -> ChartResult<ProjectedSeries> {
    let color = series.require_color()?;
    let clickable = series.on_click.is_some();
    let mut regions = Vec::new();

    let line_width = series.line_width.unwrap_or(1.0);
    let (geometry, stroke_width) = match series.kind {
        SeriesKind::Line => {
            let points: Vec<PointF> = values
                .iter()
                .enumerate()
                .map(|(i, &v)| {
                    let p = PointF::new(line_x(layout, i), layout.value_y(v));
                    if clickable {
                        regions.push(point_region(series, i, v, p));
                    }
                    p
                })
                .collect();
            (SeriesGeometry::Line { points }, line_width)
        }
        SeriesKind::Stepped => {
            let mut path = Vec::with_capacity(values.len() * 2);
            let mut vertices = Vec::with_capacity(values.len());
            for (i, &v) in values.iter().enumerate() {
                let p = PointF::new(line_x(layout, i), layout.value_y(v));
                if i == 0 {
                    path.push(p);
                } else {
                    let prev = values[i - 1];
                    path.push(PointF::new(p.x, layout.value_y(prev)));
                    if prev != v {
                        path.push(p);
                    }
                }
                vertices.push(p);
                if clickable {
                    regions.push(point_region(series, i, v, p));
                }
            }
            let marker_radius = line_width / 2.0;
            (SeriesGeometry::Stepped { path, vertices, marker_radius }, line_width)
        }
        SeriesKind::Bar => {
            let thickness = series.line_width.unwrap_or((layout.vertical_unit * 0.3).floor() as f32);
            let bottom = layout.baseline_y();
            let bars: Vec<BarSpan> = values
                .iter()
                .enumerate()
                .map(|(i, &v)| {
                    let x = layout.point_x(i);
                    // Near-zero bars would vanish; draw a sliver instead.
                    let top = if v < minimum_display_threshold { bottom - MIN_BAR_HEIGHT } else { layout.value_y(v) };
                    if clickable {
                        let half = thickness / 2.0;
                        regions.push(ClickRegion {
                            rect: RectF::from_ltrb(x - half, top.min(bottom), x + half, top.max(bottom)),
                            series_id: series.id,
                            priority: series.order,
                            action: RegionAction::Point { index: i, value: v },
                        });
                    }
                    BarSpan { x, top, bottom }
                })
                .collect();
            (SeriesGeometry::Bars { bars, thickness }, thickness)
        }
    };

    Ok(ProjectedSeries { color, stroke_width, geometry, regions })
}

fn point_region(series: &Series, index: usize, value: f64, at: PointF) -> ClickRegion {
    ClickRegion {
        rect: RectF::around(at, CLICK_PADDING),
        series_id: series.id,
        priority: series.order,
        action: RegionAction::Point { index, value },
    }
}

/// The first line/stepped point sits exactly on the buffer edge.
fn line_x(layout: &Layout, index: usize) -> f32 {
    if index == 0 { layout.buffer as f32 } else { layout.point_x(index) }
}

/// Paint with a fresh `Paint`, so stroke settings never carry over to the next series.
pub fn paint_series(canvas: &skia::Canvas, projected: &ProjectedSeries) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_color(projected.color);
    stroke.set_stroke_width(projected.stroke_width);

    match &projected.geometry {
        SeriesGeometry::Line { points } => {
            stroke.set_stroke_join(skia::paint::Join::Round);
            canvas.draw_path(&polyline(points), &stroke);
        }
        SeriesGeometry::Stepped { path, vertices, marker_radius } => {
            stroke.set_stroke_join(skia::paint::Join::Miter);
            canvas.draw_path(&polyline(path), &stroke);

            let mut fill = skia::Paint::default();
            fill.set_anti_alias(true);
            fill.set_style(skia::paint::Style::Fill);
            fill.set_color(projected.color);
            for v in vertices {
                canvas.draw_circle(*v, *marker_radius, &fill);
                canvas.draw_circle(*v, *marker_radius, &stroke);
            }
        }
        SeriesGeometry::Bars { bars, .. } => {
            for bar in bars {
                canvas.draw_line((bar.x, bar.bottom), (bar.x, bar.top), &stroke);
            }
        }
    }
}

fn polyline(points: &[PointF]) -> skia::Path {
    let mut builder = skia::PathBuilder::new();
    if let Some((first, rest)) = points.split_first() {
        builder.move_to(*first);
        for p in rest {
            builder.line_to(*p);
        }
    }
    builder.detach()
}
