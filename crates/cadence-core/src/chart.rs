// File: crates/cadence-core/src/chart.rs
// Summary: Chart engine: cached grid layer + live data layer on Skia raster surfaces,
//          click dispatch, and relayout-or-animate handling of data updates.

use std::time::Duration;

use skia_safe as skia;
use tracing::{debug, trace, warn};

use crate::error::{ChartError, ChartResult};
use crate::grid::{draw_grid, project_grid};
use crate::hit_test::{self, ClickOutcome, ClickRegion, RegionAction};
use crate::layout::{max_value, Layout};
use crate::legend::{draw_legend, project_legend, LegendEntry};
use crate::options::ChartOptions;
use crate::render::{paint_series, project_series};
use crate::series::{IdAllocator, PointClick, Series, SeriesId};
use crate::state::{adopt_incoming, assign_ids, validate, ChartState};
use crate::text::TextShaper;
use crate::transition::{FrameStatus, FrameTicket, Transition, UpdateOutcome, FRAME_COUNT};

pub struct Chart {
    options: ChartOptions,
    state: ChartState,
    layout: Layout,
    point_count: usize,
    ids: IdAllocator,
    /// What the host shows.
    live: skia::Surface,
    /// Grid and legend; redrawn only on relayout, stamped onto `live` every frame.
    grid_layer: skia::Surface,
    grid_stamp: Option<skia::Image>,
    legend: Vec<LegendEntry>,
    shaper: TextShaper,
    regions: Vec<ClickRegion>,
    transition: Option<Transition>,
    /// Values drawn by the latest frame, per series.
    on_screen: Vec<(SeriesId, Vec<f64>)>,
}

impl Chart {
    /// Validate `series`, create both surfaces and draw the first frame.
    /// Nothing is drawn when validation fails.
    pub fn new(series: Vec<Series>, labels: Option<Vec<String>>, options: ChartOptions) -> ChartResult<Self> {
        let point_count = validate(&series, None)?;
        let mut ids = IdAllocator::new();
        let series = assign_ids(series, &mut ids)?;

        let live = raster_surface(options.width, options.height)?;
        let grid_layer = raster_surface(options.width, options.height)?;
        let layout = Layout::resolve(&series, point_count, &options);
        debug!(series = series.len(), point_count, max_value = layout.max_value, "chart created");

        let mut chart = Self {
            options,
            state: ChartState { series, labels, generation: 0 },
            layout,
            point_count,
            ids,
            live,
            grid_layer,
            grid_stamp: None,
            legend: Vec::new(),
            shaper: TextShaper::new(),
            regions: Vec::new(),
            transition: None,
            on_screen: Vec::new(),
        };
        chart.redraw()?;
        Ok(chart)
    }

    // ---- accessors ------------------------------------------------------------

    pub fn options(&self) -> &ChartOptions { &self.options }
    pub fn layout(&self) -> &Layout { &self.layout }
    pub fn state(&self) -> &ChartState { &self.state }
    pub fn series(&self) -> &[Series] { &self.state.series }
    pub fn point_count(&self) -> usize { self.point_count }
    pub fn legend_entries(&self) -> &[LegendEntry] { &self.legend }
    /// Regions registered by the latest full render, legend entries first.
    pub fn click_regions(&self) -> &[ClickRegion] { &self.regions }
    /// Generation of the newest update, committed or still animating.
    pub fn generation(&self) -> u64 {
        self.transition.as_ref().map_or(self.state.generation, |t| t.generation)
    }
    pub fn is_animating(&self) -> bool { self.transition.is_some() }
    pub fn refresh_speed(&self) -> Duration { self.options.refresh_speed() }
    pub fn last_frame_values(&self) -> &[(SeriesId, Vec<f64>)] { &self.on_screen }

    // ---- drawing --------------------------------------------------------------

    /// Full redraw: grid and legend onto the cached layer, stamp, then series.
    pub fn redraw(&mut self) -> ChartResult<()> {
        self.regions.clear();
        self.render_cached_layer();
        self.paint_committed()
    }

    fn render_cached_layer(&mut self) {
        let grid = project_grid(&self.layout, self.point_count, self.state.labels.as_deref());
        self.legend = project_legend(&self.state.series, &self.layout, &self.options.theme, &self.shaper);

        let canvas = self.grid_layer.canvas();
        canvas.clear(skia::Color::TRANSPARENT);
        draw_grid(canvas, &grid, &self.options.theme, &self.shaper, self.options.draw_labels);
        draw_legend(canvas, &self.legend, &self.options.theme, &self.shaper, self.options.draw_labels);
        self.grid_stamp = Some(self.grid_layer.image_snapshot());
    }

    /// Stamp the cached layer and draw the committed values, registering click regions.
    fn paint_committed(&mut self) -> ChartResult<()> {
        self.regions.clear();
        let values: Vec<&[f64]> = self.state.series.iter().map(|s| s.values.as_slice()).collect();
        let data_regions = paint_live(
            &mut self.live,
            self.grid_stamp.as_ref(),
            &self.options,
            &self.layout,
            &self.state.series,
            &values,
        )?;
        self.regions = self.legend.iter().map(|e| e.region).chain(data_regions).collect();
        self.on_screen = self.state.series.iter().map(|s| (s.id, s.values.clone())).collect();
        Ok(())
    }

    // ---- updates --------------------------------------------------------------

    /// Replace the chart data. A changed maximum value (or series count)
    /// relayouts and redraws at once; otherwise the values animate toward the
    /// new ones over the scheduled frames, driven by [`Chart::advance`].
    /// Invalid input leaves the chart untouched.
    pub fn update(&mut self, incoming: Vec<Series>) -> ChartResult<UpdateOutcome> {
        validate(&incoming, Some(self.point_count))?;
        let mut ids = self.ids.clone();
        let series = adopt_incoming(incoming, &self.state.series, &mut ids)?;
        self.ids = ids;

        let generation = self.generation() + 1;
        let next = ChartState { series, labels: self.state.labels.clone(), generation };
        let new_max = max_value(&next.series);

        if let Some(old) = &self.transition {
            debug!(superseded = old.generation, generation, "update arrived during animation");
        }

        if new_max != self.layout.max_value || next.series.len() != self.state.series.len() {
            debug!(generation, old_max = self.layout.max_value, new_max, "relayout");
            self.transition = None;
            self.layout = Layout::resolve(&next.series, self.point_count, &self.options);
            self.state = next;
            self.redraw()?;
            return Ok(UpdateOutcome::Relayout);
        }

        let from = next
            .series
            .iter()
            .map(|s| self.on_screen_values(s.id).unwrap_or_else(|| s.values.clone()))
            .collect();
        debug!(generation, frames = FRAME_COUNT, "animating update");
        self.transition = Some(Transition::new(next, from));
        Ok(UpdateOutcome::Animate { generation, frames: FRAME_COUNT })
    }

    /// Replace the axis labels; the grid is redrawn.
    pub fn update_labels(&mut self, labels: Option<Vec<String>>) -> ChartResult<()> {
        if let Some(t) = self.transition.as_mut() {
            t.target.labels = labels.clone();
        }
        self.state.labels = labels;
        self.redraw()
    }

    /// Recreate both surfaces at a new size and redraw. A running animation
    /// is committed first, so its update is never lost.
    pub fn resize(&mut self, width: i32, height: i32) -> ChartResult<()> {
        let live = raster_surface(width, height)?;
        let grid_layer = raster_surface(width, height)?;
        if let Some(pending) = self.transition.take() {
            debug!(generation = pending.generation, "animation committed by resize");
            self.state = pending.target;
        }
        self.options.width = width;
        self.options.height = height;
        self.live = live;
        self.grid_layer = grid_layer;
        self.layout = Layout::resolve(&self.state.series, self.point_count, &self.options);
        debug!(width, height, "resized");
        self.redraw()
    }

    fn on_screen_values(&self, id: SeriesId) -> Option<Vec<f64>> {
        self.on_screen.iter().find(|(sid, _)| *sid == id).map(|(_, v)| v.clone())
    }

    // ---- animation ------------------------------------------------------------

    /// Next frame the host should run after waiting [`Chart::refresh_speed`].
    pub fn pending_frame(&self) -> Option<FrameTicket> {
        self.transition.as_ref().map(Transition::ticket)
    }

    /// Draw the frame `ticket` stands for. Tickets of a superseded update (or
    /// already drawn steps) are rejected without touching the surface.
    pub fn advance(&mut self, ticket: FrameTicket) -> ChartResult<FrameStatus> {
        let Some(transition) = self.transition.as_mut().filter(|t| t.accepts(ticket)) else {
            warn!(generation = ticket.generation, step = ticket.step, "dropping stale animation frame");
            return Ok(FrameStatus::Stale);
        };

        if transition.is_commit_step() {
            if let Some(done) = self.transition.take() {
                self.commit(done.target)?;
            }
            return Ok(FrameStatus::Completed);
        }

        let step = transition.next_step;
        let values = transition.frame_values();
        transition.next_step += 1;
        let remaining = transition.remaining();

        let series = &transition.target.series;
        let refs: Vec<&[f64]> = values.iter().map(Vec::as_slice).collect();
        // Intermediate regions are thrown away; clicks keep hitting the last committed frame.
        let _ = paint_live(&mut self.live, self.grid_stamp.as_ref(), &self.options, &self.layout, series, &refs)?;
        self.on_screen = series.iter().map(|s| s.id).zip(values).collect();

        trace!(generation = ticket.generation, step, remaining, "animation frame");
        Ok(FrameStatus::Rendered { step, remaining })
    }

    /// Run every pending frame back to back, without waiting.
    pub fn finish_animation(&mut self) -> ChartResult<()> {
        while let Some(ticket) = self.pending_frame() {
            self.advance(ticket)?;
        }
        Ok(())
    }

    fn commit(&mut self, target: ChartState) -> ChartResult<()> {
        debug!(generation = target.generation, "animation committed");
        self.state = target;
        // The layout is unchanged; only refresh the cached layer when the legend differs.
        let legend = project_legend(&self.state.series, &self.layout, &self.options.theme, &self.shaper);
        if legend != self.legend {
            self.render_cached_layer();
        }
        self.paint_committed()
    }

    // ---- interaction ----------------------------------------------------------

    /// Flip a series' visibility and redraw. Returns the new visibility.
    pub fn toggle_visibility(&mut self, id: SeriesId) -> ChartResult<bool> {
        let series = self.state.find_mut(id).ok_or(ChartError::UnknownSeries(id))?;
        series.visible = !series.visible;
        let visible = series.visible;
        if let Some(pending) = self.transition.as_mut().and_then(|t| t.target.find_mut(id)) {
            pending.visible = visible;
        }
        debug!(%id, visible, "toggled series visibility");
        self.redraw()?;
        Ok(visible)
    }

    /// Route a click at surface coordinates to the highest-priority region under it.
    pub fn handle_click(&mut self, x: f32, y: f32) -> ChartResult<ClickOutcome> {
        let Some(region) = hit_test::resolve(&self.regions, x, y).copied() else {
            trace!(x, y, "click missed every region");
            return Ok(ClickOutcome::Ignored);
        };
        trace!(x, y, series = %region.series_id, priority = region.priority, "click hit");

        match region.action {
            RegionAction::ToggleVisibility => {
                let visible = self.toggle_visibility(region.series_id)?;
                Ok(ClickOutcome::Toggled { series_id: region.series_id, visible })
            }
            RegionAction::Point { index, value } => {
                let click = PointClick { series_id: region.series_id, index, value };
                let handler = self.state.find(region.series_id).and_then(|s| s.on_click.clone());
                if let Some(handler) = handler {
                    handler.call(&click);
                }
                Ok(ClickOutcome::PointClicked(click))
            }
        }
    }

    // ---- export ---------------------------------------------------------------

    /// Copy the live surface out as tightly packed RGBA8: (pixels, width, height, stride).
    pub fn read_rgba8(&mut self) -> ChartResult<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (self.options.width, self.options.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !self.live.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Encode("rgba8"));
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    pub fn encode_png(&mut self) -> ChartResult<Vec<u8>> {
        let image = self.live.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode("png"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the live surface as PNG at `path`, creating parent directories.
    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> ChartResult<()> {
        let bytes = self.encode_png()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn raster_surface(width: i32, height: i32) -> ChartResult<skia::Surface> {
    if width <= 0 || height <= 0 {
        return Err(ChartError::InvalidSurface { width, height });
    }
    skia::surfaces::raster_n32_premul((width, height)).ok_or(ChartError::InvalidSurface { width, height })
}

/// Clear the live surface, stamp the cached layer and draw the visible series
/// in draw order with `values` (aligned with `series`).
fn paint_live(
    live: &mut skia::Surface,
    stamp: Option<&skia::Image>,
    opts: &ChartOptions,
    layout: &Layout,
    series: &[Series],
    values: &[&[f64]],
) -> ChartResult<Vec<ClickRegion>> {
    let canvas = live.canvas();
    canvas.clear(opts.theme.background);
    if let Some(image) = stamp {
        canvas.draw_image(image, (0.0, 0.0), None);
    }

    let mut order: Vec<usize> = (0..series.len()).filter(|&i| series[i].visible).collect();
    order.sort_by_key(|&i| series[i].order);

    let mut regions = Vec::new();
    for i in order {
        let projected = project_series(&series[i], values[i], layout, opts.minimum_display_threshold)?;
        paint_series(canvas, &projected);
        regions.extend(projected.regions);
    }
    Ok(regions)
}
