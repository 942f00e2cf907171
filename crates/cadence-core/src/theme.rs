// File: crates/cadence-core/src/theme.rs
// Summary: Light/Dark theming for grid, legend and background colors, plus color parsing.

use skia_safe as skia;

use crate::error::{ChartError, ChartResult};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_label: skia::Color,
    pub legend_label: skia::Color,
    /// Legend swatch color for hidden series.
    pub hidden_swatch: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 155, 155, 155),
            axis_label: skia::Color::from_argb(255, 155, 155, 155),
            legend_label: skia::Color::from_argb(255, 0, 0, 0),
            hidden_swatch: skia::Color::from_argb(255, 155, 155, 155),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 70, 70, 78),
            axis_label: skia::Color::from_argb(255, 150, 150, 160),
            legend_label: skia::Color::from_argb(255, 235, 235, 245),
            hidden_swatch: skia::Color::from_argb(255, 90, 90, 96),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x88, 0x88, 0x88),
            axis_label: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            legend_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            hidden_swatch: skia::Color::from_argb(255, 0x44, 0x44, 0x44),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

/// Parse `#rgb`, `#rrggbb`, `rgb(r, g, b)` or a basic named color.
pub fn parse_color(text: &str) -> ChartResult<skia::Color> {
    let s = text.trim().to_ascii_lowercase();
    let invalid = || ChartError::InvalidColor(text.to_string());

    if let Some(hex) = s.strip_prefix('#') {
        // `from_str_radix` would also take a leading sign.
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let digits = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => hex.to_string(),
            _ => return Err(invalid()),
        };
        let v = u32::from_str_radix(&digits, 16).map_err(|_| invalid())?;
        return Ok(skia::Color::from_argb(255, (v >> 16) as u8, (v >> 8) as u8, v as u8));
    }

    if let Some(body) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
        let parts = body
            .split(',')
            .map(|p| p.trim())
            .map(|p| {
                if p.is_empty() || !p.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                p.parse::<u8>().map_err(|_| invalid())
            })
            .collect::<ChartResult<Vec<u8>>>()?;
        return match parts.as_slice() {
            [r, g, b] => Ok(skia::Color::from_argb(255, *r, *g, *b)),
            _ => Err(invalid()),
        };
    }

    let (r, g, b) = match s.as_str() {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "gray" | "grey" => (128, 128, 128),
        "teal" => (0, 128, 128),
        _ => return Err(invalid()),
    };
    Ok(skia::Color::from_argb(255, r, g, b))
}
