// File: crates/cadence-core/src/types.rs
// Summary: Shared constants (sizes, paddings, thresholds, easing table).

/// Default surface width in pixels.
pub const WIDTH: i32 = 600;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 300;
/// Default padding around the plot area, in pixels.
pub const BUFFER: i32 = 40;
/// Bars below this value are drawn as a sliver instead.
pub const MINIMUM_DISPLAY_THRESHOLD: f64 = 0.1;
/// Delay between animation frames, in milliseconds.
pub const REFRESH_SPEED_MS: u64 = 25;

/// Height of a clamped bar, in pixels.
pub const MIN_BAR_HEIGHT: f32 = 2.0;
/// Half-size of the square click region around line and stepped points.
pub const CLICK_PADDING: f32 = 9.0;
/// Gap between a legend label and its swatch.
pub const LEGEND_SWATCH_GAP: f32 = 7.0;
/// Font size for axis and legend text.
pub const FONT_SIZE: f32 = 12.0;
/// Most horizontal grid sections ever drawn.
pub const MAX_SECTIONS: f64 = 10.0;

/// Ease-out schedule, in percent of the distance covered at each frame.
pub const TRANSITION_SCHEDULE: [u8; 30] = [
    1, 10, 19, 23, 27, 35, 43, 49, 54, 59, 64, 69, 74, 78, 80, 82, 84, 86, 89, 90, 91, 92, 93, 94,
    95, 96, 97, 98, 99, 100,
];
