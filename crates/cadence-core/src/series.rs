// File: crates/cadence-core/src/series.rs
// Summary: Series model (line, stepped, bar), stable ids and per-point click callbacks.
// Notes:
// - `SeriesId(0)` means "not assigned yet"; the chart hands out ids when it adopts series.
// - Values are plain `f64`; every series in a chart shares the same length.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use skia_safe as skia;

use crate::error::{ChartError, ChartResult};
use crate::theme::parse_color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(pub u64);

impl SeriesId {
    pub const UNASSIGNED: SeriesId = SeriesId(0);

    pub const fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id source owned by a chart for its whole lifetime.
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails once every id up to `u64::MAX` has been handed out or reserved.
    pub fn next_id(&mut self) -> ChartResult<SeriesId> {
        let next = self.last.checked_add(1).ok_or(ChartError::IdsExhausted)?;
        self.last = next;
        Ok(SeriesId(next))
    }

    /// Make sure ids chosen by the caller are never handed out again.
    pub fn reserve(&mut self, id: SeriesId) {
        self.last = self.last.max(id.0);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    Line,
    Stepped,
    Bar,
}

impl SeriesKind {
    pub const fn name(self) -> &'static str {
        match self {
            SeriesKind::Line => "line",
            SeriesKind::Stepped => "stepped",
            SeriesKind::Bar => "bar",
        }
    }
}

impl FromStr for SeriesKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" => Ok(SeriesKind::Line),
            "stepped" => Ok(SeriesKind::Stepped),
            "bar" => Ok(SeriesKind::Bar),
            _ => Err(ChartError::InvalidKind(s.to_string())),
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload delivered to a series click callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointClick {
    pub series_id: SeriesId,
    pub index: usize,
    pub value: f64,
}

/// Shared per-point click callback.
#[derive(Clone)]
pub struct ClickHandler(Rc<dyn Fn(&PointClick)>);

impl ClickHandler {
    pub fn new(f: impl Fn(&PointClick) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, click: &PointClick) {
        (self.0)(click)
    }
}

impl fmt::Debug for ClickHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClickHandler(..)")
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub id: SeriesId,
    pub label: String,
    /// Draw-order rank: paint order, legend slot and click priority.
    pub order: i32,
    pub kind: SeriesKind,
    pub color: Option<skia::Color>,
    pub line_width: Option<f32>,
    pub visible: bool,
    pub values: Vec<f64>,
    pub on_click: Option<ClickHandler>,
}

impl Series {
    pub fn new(label: impl Into<String>, kind: SeriesKind, values: Vec<f64>) -> Self {
        Self {
            id: SeriesId::UNASSIGNED,
            label: label.into(),
            order: 0,
            kind,
            color: None,
            line_width: None,
            visible: true,
            values,
            on_click: None,
        }
    }

    pub fn line(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self::new(label, SeriesKind::Line, values)
    }

    pub fn stepped(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self::new(label, SeriesKind::Stepped, values)
    }

    pub fn bar(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self::new(label, SeriesKind::Bar, values)
    }

    pub fn with_id(mut self, id: SeriesId) -> Self {
        self.id = id;
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn on_click(mut self, f: impl Fn(&PointClick) + 'static) -> Self {
        self.on_click = Some(ClickHandler::new(f));
        self
    }

    /// Largest value of this series; empty series report 0.
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// Color required for drawing; missing colors are a render error naming the series.
    pub fn require_color(&self) -> ChartResult<skia::Color> {
        self.color.ok_or_else(|| ChartError::MissingColor(self.label.clone()))
    }
}

/// Declarative series description, e.g. loaded from JSON.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesSpec {
    pub id: Option<u64>,
    pub label: String,
    pub order: i32,
    #[serde(rename = "type")]
    pub kind: String,
    pub color: Option<String>,
    pub line_width: Option<f32>,
    pub hidden: bool,
    pub values: Vec<f64>,
}

impl SeriesSpec {
    pub fn into_series(self) -> ChartResult<Series> {
        let kind: SeriesKind = self.kind.parse()?;
        let mut series = Series::new(self.label, kind, self.values).with_order(self.order);
        if let Some(id) = self.id {
            series.id = SeriesId(id);
        }
        if let Some(text) = self.color.as_deref() {
            series.color = Some(parse_color(text)?);
        }
        series.line_width = self.line_width;
        series.visible = !self.hidden;
        Ok(series)
    }
}
