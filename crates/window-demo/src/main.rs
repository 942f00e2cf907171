// File: crates/window-demo/src/main.rs
// Summary: Windowed host for cadence-core: RGBA blit via winit + softbuffer, click routing,
//          and animation frames scheduled with ControlFlow::WaitUntil.
// Keys: S doubles every value (relayout), any other key rotates the data (animated update).

use anyhow::{Context, Result};
use cadence_core::{Chart, ChartOptions, Series, SeriesSpec, UpdateOutcome};
use std::num::NonZeroU32;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};
use winit::event::{ElementState, Event, MouseButton, StartCause, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    let _ = cadence_core::init_default_tracing();

    // Arg: optional JSON list of series specs
    let series = match std::env::args().nth(1) {
        Some(raw) => load_specs(Path::new(&raw)).with_context(|| format!("failed to load '{raw}'"))?,
        None => sample_series()?,
    };
    let points = series.first().map_or(0, |s| s.values.len());
    let labels: Vec<String> = (1..=points).map(|i| format!("W{i}")).collect();

    // Window + softbuffer setup
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Cadence Chart - Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(800.0, 420.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow::anyhow!("softbuffer context: {e:?}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow::anyhow!("softbuffer surface: {e:?}"))?;

    let size = window.inner_size();
    let mut chart = Chart::new(series, Some(labels), options_for(size.width, size.height)).context("building chart")?;
    let mut cursor: Option<(f64, f64)> = None;

    event_loop.run(move |event, _, cf| match event {
        Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
            // Next animation frame is due
            match chart.pending_frame() {
                Some(ticket) => {
                    if let Err(e) = chart.advance(ticket) {
                        warn!(error = %e, "animation frame failed");
                    }
                    window.request_redraw();
                    *cf = schedule(&chart);
                }
                None => *cf = ControlFlow::Wait,
            }
        }
        Event::WindowEvent { event, window_id: _ } => match event {
            WindowEvent::CloseRequested => {
                *cf = ControlFlow::Exit;
            }
            WindowEvent::Resized(new_size) => {
                let (w, h) = (new_size.width.max(1) as i32, new_size.height.max(1) as i32);
                if let Err(e) = chart.resize(w, h) {
                    warn!(error = %e, "resize failed");
                }
                *cf = ControlFlow::Wait;
                window.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => {
                cursor = Some((position.x, position.y));
            }
            WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                if let Some((x, y)) = cursor {
                    match chart.handle_click(x as f32, y as f32) {
                        Ok(outcome) if outcome.is_handled() => {
                            info!(?outcome, "click handled");
                            window.request_redraw();
                        }
                        Ok(_) => {}
                        Err(e) => warn!(error = %e, "click failed"),
                    }
                }
            }
            WindowEvent::KeyboardInput { input, .. } if input.state == ElementState::Pressed => {
                let next = if input.virtual_keycode == Some(VirtualKeyCode::S) { scaled(&chart, 2.0) } else { rotated(&chart) };
                match chart.update(next) {
                    Ok(UpdateOutcome::Relayout) => debug!("relayout"),
                    Ok(UpdateOutcome::Animate { generation, frames }) => debug!(generation, frames, "animating"),
                    Err(e) => warn!(error = %e, "update rejected"),
                }
                *cf = schedule(&chart);
                window.request_redraw();
            }
            _ => {}
        },
        Event::RedrawRequested(_) => {
            if let Err(e) = present(&mut chart, &mut surface) {
                warn!(error = %e, "present failed");
            }
        }
        _ => {}
    });
}

fn options_for(width: u32, height: u32) -> ChartOptions {
    ChartOptions::default().with_size(width.max(1) as i32, height.max(1) as i32)
}

/// Wait for the next animation frame, or for input when nothing is animating.
fn schedule(chart: &Chart) -> ControlFlow {
    if chart.pending_frame().is_some() {
        ControlFlow::WaitUntil(Instant::now() + chart.refresh_speed())
    } else {
        ControlFlow::Wait
    }
}

/// Copy the live surface into the window (softbuffer expects 0RGB u32 pixels).
fn present(chart: &mut Chart, surface: &mut softbuffer::Surface) -> Result<()> {
    let (rgba, w, h, _) = chart.read_rgba8()?;
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else { return Ok(()) };
    surface.resize(nw, nh).map_err(|e| anyhow::anyhow!("resize: {e:?}"))?;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("buffer: {e:?}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e:?}"))?;
    Ok(())
}

/// Same maximum, shifted positions: animates.
fn rotated(chart: &Chart) -> Vec<Series> {
    chart
        .series()
        .iter()
        .map(|s| {
            let mut s = s.clone();
            s.values.rotate_right(1);
            s
        })
        .collect()
}

/// New maximum: relayouts.
fn scaled(chart: &Chart, factor: f64) -> Vec<Series> {
    chart
        .series()
        .iter()
        .map(|s| {
            let mut s = s.clone();
            s.values.iter_mut().for_each(|v| *v *= factor);
            s
        })
        .collect()
}

fn load_specs(path: &Path) -> Result<Vec<Series>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("opening {}", path.display()))?;
    let specs: Vec<SeriesSpec> = serde_json::from_str(&text).context("parsing series list")?;
    specs.into_iter().map(|s| s.into_series().map_err(Into::into)).collect()
}

fn sample_series() -> Result<Vec<Series>> {
    let specs = vec![
        SeriesSpec {
            label: "Orders".into(),
            kind: "bar".into(),
            color: Some("#e07b00".into()),
            values: vec![4.0, 6.0, 2.0, 0.05, 7.0, 9.0, 5.0, 3.0],
            ..SeriesSpec::default()
        },
        SeriesSpec {
            label: "Visits".into(),
            kind: "line".into(),
            color: Some("#3366cc".into()),
            order: 1,
            line_width: Some(2.0),
            values: vec![2.5, 3.1, 4.0, 5.2, 6.8, 5.5, 3.9, 4.4],
            ..SeriesSpec::default()
        },
        SeriesSpec {
            label: "Quota".into(),
            kind: "stepped".into(),
            color: Some("teal".into()),
            order: 2,
            line_width: Some(3.0),
            values: vec![3.0, 3.0, 4.0, 4.0, 5.0, 5.0, 6.0, 6.0],
            ..SeriesSpec::default()
        },
    ];
    let mut series = specs.into_iter().map(SeriesSpec::into_series).collect::<Result<Vec<_>, _>>()?;
    // Clicking a Visits point logs it; legend entries toggle visibility.
    series[1] = series[1].clone().on_click(|click| info!(index = click.index, value = click.value, "visits point clicked"));
    Ok(series)
}
