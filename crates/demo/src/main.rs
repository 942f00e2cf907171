// File: crates/demo/src/main.rs
// Summary: Demo loads series from CSV or JSON, renders the chart, an animated update and a legend toggle to PNGs.

use anyhow::{Context, Result};
use cadence_core::theme::{self, parse_color};
use cadence_core::{Chart, ChartOptions, FrameStatus, Series, SeriesKind, SeriesSpec, UpdateOutcome};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Colors handed to CSV columns, in column order.
const PALETTE: [&str; 6] = ["#e07b00", "#3366cc", "teal", "purple", "#d62728", "green"];

/// Every Nth intermediate animation frame is written to disk.
const FRAME_STRIDE: usize = 5;

/// JSON input: options, optional theme name, axis labels and declarative series.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ChartFile {
    options: ChartOptions,
    theme: Option<String>,
    labels: Option<Vec<String>>,
    series: Vec<SeriesSpec>,
}

struct Dataset {
    options: ChartOptions,
    labels: Option<Vec<String>>,
    series: Vec<Series>,
}

fn main() -> Result<()> {
    let _ = cadence_core::init_default_tracing();

    // Accept path from CLI or fall back to the bundled sample
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("data/weekly.csv"));
    println!("Using input file: {}", path.display());

    let is_json = path.extension().is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let data = if is_json { load_json(&path) } else { load_csv(&path) }
        .with_context(|| format!("failed to load '{}'", path.display()))?;
    info!(
        series = data.series.len(),
        points = data.series.first().map_or(0, |s| s.values.len()),
        "loaded dataset"
    );

    // 1) Initial full redraw
    let mut chart = Chart::new(data.series.clone(), data.labels, data.options).context("building chart")?;
    write(&mut chart, &path, "initial")?;

    // 2) Rotate every series by one point: the maximum stays put, so the update animates.
    let rotated = data
        .series
        .iter()
        .map(|s| {
            let mut s = s.clone();
            s.values.rotate_left(1);
            s
        })
        .collect();
    match chart.update(rotated)? {
        UpdateOutcome::Relayout => write(&mut chart, &path, "relayout")?,
        UpdateOutcome::Animate { generation, frames } => {
            println!(
                "Animating generation {generation} over {frames} frames ({} ms apart in a live host)",
                chart.refresh_speed().as_millis()
            );
            while let Some(ticket) = chart.pending_frame() {
                match chart.advance(ticket)? {
                    FrameStatus::Rendered { step, .. } if step % FRAME_STRIDE == 0 => {
                        write(&mut chart, &path, &format!("frame_{step:02}"))?;
                    }
                    FrameStatus::Completed => write(&mut chart, &path, "final")?,
                    _ => {}
                }
            }
        }
    }

    // 3) Click the first legend entry the way a window host would
    let first_entry = chart.legend_entries().first().map(|e| e.region.rect);
    if let Some(rect) = first_entry {
        let outcome = chart.handle_click((rect.nw.x + rect.se.x) / 2.0, (rect.nw.y + rect.se.y) / 2.0)?;
        debug!(?outcome, "legend click");
        write(&mut chart, &path, "toggled")?;
    }

    Ok(())
}

fn write(chart: &mut Chart, input: &Path, suffix: &str) -> Result<()> {
    let out = out_name_with(input, suffix);
    chart.write_png(&out).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Produce output file name like target/out/cadence_<stem>_<suffix>.png
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("cadence_{stem}_{suffix}.png"))
}

fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).with_context(|| format!("opening {}", path.display()))?;
    let file: ChartFile = serde_json::from_str(&text).context("parsing chart file")?;

    let mut options = file.options;
    if let Some(name) = file.theme.as_deref() {
        options.theme = theme::find(name);
    }
    let series = file
        .series
        .into_iter()
        .map(|spec| {
            let label = spec.label.clone();
            spec.into_series().with_context(|| format!("series `{label}`"))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Dataset { options, labels: file.labels, series })
}

/// First column holds the axis labels; every other column is a series whose
/// header reads `Label` or `Label:kind` (kind defaults to line).
fn load_csv(path: &Path) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    debug!(?headers, "csv headers");
    if headers.len() < 2 {
        anyhow::bail!("expected a label column followed by at least one series column");
    }

    let mut series = Vec::with_capacity(headers.len() - 1);
    for (i, header) in headers.iter().skip(1).enumerate() {
        let (label, kind) = match header.split_once(':') {
            Some((label, kind)) => (label.trim(), kind.parse::<SeriesKind>()?),
            None => (header.trim(), SeriesKind::Line),
        };
        let color = parse_color(PALETTE[i % PALETTE.len()])?;
        series.push(Series::new(label, kind, Vec::new()).with_color(color).with_order(i as i32));
    }

    let mut labels = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        labels.push(rec.get(0).map(format_label).unwrap_or_default());
        for (col, s) in series.iter_mut().enumerate() {
            let cell = rec.get(col + 1).unwrap_or("").trim();
            let value = cell
                .parse::<f64>()
                .with_context(|| format!("row {} column `{}`: `{cell}` is not a number", row + 1, s.label))?;
            s.values.push(value);
        }
    }

    Ok(Dataset { options: ChartOptions::default(), labels: Some(labels), series })
}

/// Shorten ISO dates and epoch seconds to a weekday/day label; other text passes through.
fn format_label(raw: &str) -> String {
    let s = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.format("%a %d").to_string();
    }
    if let Some(ts) = s.parse::<i64>().ok().and_then(|n| chrono::DateTime::from_timestamp(n, 0)) {
        return ts.format("%b %d").to_string();
    }
    s.to_string()
}
