// File: crates/cadence-core/src/lib.rs
// Summary: Core library entry point; exports the chart engine and its building blocks.

pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod legend;
pub mod options;
pub mod render;
pub mod series;
pub mod state;
pub mod telemetry;
pub mod text;
pub mod theme;
pub mod transition;
pub mod types;

pub use chart::Chart;
pub use error::{ChartError, ChartResult, ErrorKind};
pub use hit_test::{ClickOutcome, ClickRegion, RegionAction};
pub use layout::Layout;
pub use options::ChartOptions;
pub use series::{PointClick, Series, SeriesId, SeriesKind, SeriesSpec};
pub use state::ChartState;
pub use telemetry::init_default_tracing;
pub use text::TextShaper;
pub use theme::Theme;
pub use transition::{FrameStatus, FrameTicket, UpdateOutcome};
