// File: crates/cadence-core/src/state.rs
// Summary: Versioned chart state snapshot, input validation and stable id assignment.

use std::collections::HashSet;

use crate::error::{ChartError, ChartResult};
use crate::series::{IdAllocator, Series, SeriesId};

/// The series a chart draws, plus axis labels. Updates replace the snapshot
/// instead of editing it; `generation` says which update produced it.
#[derive(Clone, Debug)]
pub struct ChartState {
    pub series: Vec<Series>,
    pub labels: Option<Vec<String>>,
    pub generation: u64,
}

impl ChartState {
    pub fn find(&self, id: SeriesId) -> Option<&Series> {
        self.series.iter().find(|s| s.id == id)
    }

    pub fn find_mut(&mut self, id: SeriesId) -> Option<&mut Series> {
        self.series.iter_mut().find(|s| s.id == id)
    }
}

/// Check a series collection and return its shared point count. With
/// `expected` set, the count must also match the chart's established length.
pub(crate) fn validate(series: &[Series], expected: Option<usize>) -> ChartResult<usize> {
    let first = series.first().ok_or(ChartError::NoSeries)?;
    let len = expected.unwrap_or(first.values.len());
    if let Some(bad) = series.iter().find(|s| s.values.len() != len) {
        return Err(ChartError::LengthMismatch { label: bad.label.clone(), expected: len, found: bad.values.len() });
    }
    if len < 2 {
        return Err(ChartError::TooFewPoints(len));
    }
    Ok(len)
}

fn ensure_unique(series: &[Series]) -> ChartResult<()> {
    let mut seen = HashSet::new();
    for s in series.iter().filter(|s| s.id.is_assigned()) {
        if !seen.insert(s.id) {
            return Err(ChartError::DuplicateSeriesId(s.id));
        }
    }
    Ok(())
}

/// Give every series without an id a fresh one.
pub(crate) fn assign_ids(mut series: Vec<Series>, ids: &mut IdAllocator) -> ChartResult<Vec<Series>> {
    ensure_unique(&series)?;
    for s in series.iter().filter(|s| s.id.is_assigned()) {
        ids.reserve(s.id);
    }
    for s in series.iter_mut().filter(|s| !s.id.is_assigned()) {
        s.id = ids.next_id()?;
    }
    Ok(series)
}

/// Map incoming series onto the current ones: a series without an id takes
/// the id of the current series at the same position, and a series hidden
/// through the legend stays hidden.
pub(crate) fn adopt_incoming(mut incoming: Vec<Series>, current: &[Series], ids: &mut IdAllocator) -> ChartResult<Vec<Series>> {
    for (i, s) in incoming.iter_mut().enumerate() {
        if !s.id.is_assigned() {
            if let Some(existing) = current.get(i) {
                s.id = existing.id;
            }
        }
    }
    let mut incoming = assign_ids(incoming, ids)?;
    for s in incoming.iter_mut() {
        if let Some(existing) = current.iter().find(|c| c.id == s.id) {
            s.visible = s.visible && existing.visible;
        }
    }
    Ok(incoming)
}
