// File: crates/cadence-core/tests/interaction.rs
// Purpose: Legend toggling, point click dispatch and visibility carried across updates.

use std::cell::RefCell;
use std::rc::Rc;

use cadence_core::hit_test::RegionAction;
use cadence_core::{Chart, ChartOptions, ClickOutcome, ErrorKind, PointClick, Series, SeriesId};
use skia_safe::Color;

fn opts() -> ChartOptions {
    ChartOptions { draw_labels: false, ..ChartOptions::default() }
}

fn center(chart: &Chart, id: SeriesId, legend: bool) -> (f32, f32) {
    let region = chart
        .click_regions()
        .iter()
        .find(|r| r.series_id == id && (r.action == RegionAction::ToggleVisibility) == legend)
        .expect("region");
    ((region.rect.nw.x + region.rect.se.x) / 2.0, (region.rect.nw.y + region.rect.se.y) / 2.0)
}

fn recorder() -> (Rc<RefCell<Vec<PointClick>>>, impl Fn(&PointClick) + 'static) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    (log, move |click: &PointClick| sink.borrow_mut().push(*click))
}

fn clickable_chart() -> (Chart, Rc<RefCell<Vec<PointClick>>>) {
    let (log, on_click) = recorder();
    let chart = Chart::new(
        vec![
            Series::line("A", vec![0.0, 5.0]).with_color(Color::RED).on_click(on_click),
            Series::bar("B", vec![10.0, 0.0]).with_color(Color::BLUE).with_order(1).on_click(|_| {}),
        ],
        Some(vec!["Mon".into(), "Tue".into()]),
        opts(),
    )
    .expect("chart");
    (chart, log)
}

#[test]
fn regions_are_legend_first_then_data() {
    let (chart, _) = clickable_chart();
    let regions = chart.click_regions();
    assert_eq!(regions.len(), 6);
    assert!(regions[..2].iter().all(|r| r.action == RegionAction::ToggleVisibility));
    assert!(regions[2..].iter().all(|r| matches!(r.action, RegionAction::Point { .. })));
}

#[test]
fn legend_click_toggles_and_second_click_restores() {
    let (mut chart, _) = clickable_chart();
    let a = chart.series()[0].id;
    let before = chart.click_regions().to_vec();
    let (x, y) = center(&chart, a, true);

    let outcome = chart.handle_click(x, y).unwrap();
    assert_eq!(outcome, ClickOutcome::Toggled { series_id: a, visible: false });
    assert!(outcome.is_handled());
    assert!(!chart.series()[0].visible);
    // Hidden series keep their legend entry but lose their point regions.
    assert_eq!(chart.click_regions().len(), 4);
    assert!(chart.click_regions().iter().filter(|r| r.series_id == a).all(|r| r.action == RegionAction::ToggleVisibility));

    let outcome = chart.handle_click(x, y).unwrap();
    assert_eq!(outcome, ClickOutcome::Toggled { series_id: a, visible: true });
    assert_eq!(chart.click_regions(), before.as_slice());
}

#[test]
fn point_click_runs_the_callback() {
    let (mut chart, log) = clickable_chart();
    let a = chart.series()[0].id;
    let y = chart.layout().value_y(5.0);
    let x = chart.layout().point_x(1);

    let outcome = chart.handle_click(x, y).unwrap();
    let expected = PointClick { series_id: a, index: 1, value: 5.0 };
    assert_eq!(outcome, ClickOutcome::PointClicked(expected));
    assert_eq!(log.borrow().as_slice(), &[expected]);
}

#[test]
fn click_on_empty_space_is_ignored() {
    let (mut chart, log) = clickable_chart();
    let outcome = chart.handle_click(5.0, 295.0).unwrap();
    assert_eq!(outcome, ClickOutcome::Ignored);
    assert!(!outcome.is_handled());
    assert!(log.borrow().is_empty());
}

#[test]
fn overlapping_points_resolve_to_higher_order() {
    let (low_log, low) = recorder();
    let (high_log, high) = recorder();
    let mut chart = Chart::new(
        vec![
            Series::line("Low", vec![5.0, 5.0]).with_color(Color::RED).with_order(0).on_click(low),
            Series::line("High", vec![5.0, 5.0]).with_color(Color::BLUE).with_order(3).on_click(high),
        ],
        None,
        opts(),
    )
    .unwrap();
    let (x, y) = (chart.layout().point_x(1), chart.layout().value_y(5.0));

    let outcome = chart.handle_click(x, y).unwrap();
    let ClickOutcome::PointClicked(click) = outcome else { panic!("expected point click") };
    assert_eq!(click.series_id, chart.series()[1].id);
    assert_eq!(high_log.borrow().len(), 1);
    assert!(low_log.borrow().is_empty());
}

#[test]
fn hidden_series_stay_hidden_across_updates() {
    let (mut chart, _) = clickable_chart();
    let a = chart.series()[0].id;
    chart.toggle_visibility(a).unwrap();

    chart
        .update(vec![
            Series::line("A", vec![3.0, 5.0]).with_color(Color::RED),
            Series::bar("B", vec![10.0, 0.0]).with_color(Color::BLUE).with_order(1),
        ])
        .unwrap();
    chart.finish_animation().unwrap();

    assert_eq!(chart.series()[0].id, a);
    assert!(!chart.series()[0].visible);
    assert!(chart.series()[1].visible);
}

#[test]
fn toggle_during_animation_reaches_the_committed_state() {
    let (mut chart, _) = clickable_chart();
    let b = chart.series()[1].id;
    chart
        .update(vec![
            Series::line("A", vec![3.0, 5.0]).with_color(Color::RED),
            Series::bar("B", vec![10.0, 1.0]).with_color(Color::BLUE).with_order(1),
        ])
        .unwrap();
    let t = chart.pending_frame().unwrap();
    chart.advance(t).unwrap();

    assert!(!chart.toggle_visibility(b).unwrap());
    chart.finish_animation().unwrap();
    assert!(!chart.series()[1].visible);
    assert!(chart.legend_entries().iter().any(|e| e.series_id == b && e.swatch_color == chart.options().theme.hidden_swatch));
}

#[test]
fn explicit_ids_are_kept_and_new_ones_never_collide() {
    let mut chart = Chart::new(
        vec![
            Series::line("A", vec![1.0, 2.0]).with_color(Color::RED).with_id(SeriesId(10)),
            Series::line("B", vec![2.0, 1.0]).with_color(Color::BLUE),
        ],
        None,
        opts(),
    )
    .unwrap();
    assert_eq!(chart.series()[0].id, SeriesId(10));
    assert_eq!(chart.series()[1].id, SeriesId(11));

    chart
        .update(vec![
            Series::line("A", vec![1.0, 2.0]).with_color(Color::RED),
            Series::line("B", vec![2.0, 1.0]).with_color(Color::BLUE),
            Series::line("C", vec![0.5, 0.5]).with_color(Color::GREEN),
        ])
        .unwrap();
    let ids: Vec<SeriesId> = chart.series().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![SeriesId(10), SeriesId(11), SeriesId(12)]);
}

#[test]
fn toggling_an_unknown_series_fails() {
    let (mut chart, _) = clickable_chart();
    let err = chart.toggle_visibility(SeriesId(999)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn labels_can_be_replaced() {
    let (mut chart, _) = clickable_chart();
    chart.update_labels(Some(vec!["Wed".into()])).unwrap();
    assert_eq!(chart.state().labels.as_deref(), Some(&["Wed".to_string()][..]));
    chart.update_labels(None).unwrap();
    assert!(chart.state().labels.is_none());
}
