// File: crates/cadence-core/tests/rgba.rs
// Purpose: Validate RGBA readback buffer shape and a few pixels.

use cadence_core::{Chart, ChartOptions, Series};
use skia_safe::Color;

#[test]
fn read_rgba8_buffer() {
    let opts = ChartOptions { draw_labels: false, ..ChartOptions::default() }.with_size(320, 200);
    let mut chart = Chart::new(
        vec![Series::bar("B", vec![4.0, 2.0, 0.0, 3.0]).with_color(Color::from_rgb(200, 0, 0)).with_line_width(8.0)],
        None,
        opts,
    )
    .expect("chart");

    let (px, w, h, stride) = chart.read_rgba8().expect("rgba readback");
    assert_eq!((w, h), (320, 200));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, w as usize * 4);

    // Top-left corner is plain opaque background.
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);

    // Middle of the first bar (x = buffer + 0.5, value 4 reaches the top of the plot).
    let layout = *chart.layout();
    let x = layout.point_x(0) as usize;
    let y = ((layout.baseline_y() + layout.value_y(4.0)) / 2.0) as usize;
    let i = y * stride + x * 4;
    assert_eq!(&px[i..i + 4], &[200, 0, 0, 255]);
}
