// File: crates/cadence-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<PointF> for skia_safe::Point {
    fn from(p: PointF) -> Self {
        skia_safe::Point::new(p.x, p.y)
    }
}

/// Axis-aligned rectangle given by its north-west and south-east corners.
/// Contract: `nw.x <= se.x` and `nw.y <= se.y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub nw: PointF,
    pub se: PointF,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { nw: PointF::new(left, top), se: PointF::new(right, bottom) }
    }
    /// Square of half-size `pad` centered on `center`.
    pub fn around(center: PointF, pad: f32) -> Self {
        Self::from_ltrb(center.x - pad, center.y - pad, center.x + pad, center.y + pad)
    }
    pub fn width(&self) -> f32 { self.se.x - self.nw.x }
    pub fn height(&self) -> f32 { self.se.y - self.nw.y }

    /// Inclusive on every edge.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.nw.x && x <= self.se.x && y >= self.nw.y && y <= self.se.y
    }
}
