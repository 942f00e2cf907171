// File: crates/cadence-core/src/transition.rs
// Summary: Frame-by-frame interpolation between two snapshots along the fixed ease-out schedule.

use crate::state::ChartState;
use crate::types::TRANSITION_SCHEDULE;

/// How an update was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The maximum value (or series count) changed: new layout, full redraw.
    Relayout,
    /// Same layout; `frames` frames are pending for `generation`.
    Animate { generation: u64, frames: usize },
}

/// Identifies one scheduled frame. Tickets from a superseded update are stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameTicket {
    pub generation: u64,
    pub step: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// Ticket no longer matches the running animation; nothing was drawn.
    Stale,
    /// An intermediate frame was drawn.
    Rendered { step: usize, remaining: usize },
    /// Final values committed and drawn with click regions.
    Completed,
}

/// Intermediate frames plus the final commit frame.
pub const FRAME_COUNT: usize = TRANSITION_SCHEDULE.len() + 1;

/// Value `percent`% of the way from `old` to `new`. 100% is exactly `new`.
pub fn interpolate(old: f64, new: f64, percent: u8) -> f64 {
    if percent >= 100 {
        return new;
    }
    let covered = (new - old).abs() * (percent as f64 / 100.0);
    if old > new { old - covered } else { old + covered }
}

pub fn interpolate_values(old: &[f64], new: &[f64], percent: u8) -> Vec<f64> {
    old.iter().zip(new).map(|(&o, &n)| interpolate(o, n, percent)).collect()
}

#[derive(Clone, Debug)]
pub(crate) struct Transition {
    pub generation: u64,
    /// Starting values, aligned with `target.series`.
    pub from: Vec<Vec<f64>>,
    pub target: ChartState,
    pub next_step: usize,
}

impl Transition {
    pub fn new(target: ChartState, from: Vec<Vec<f64>>) -> Self {
        Self { generation: target.generation, from, target, next_step: 0 }
    }

    pub fn ticket(&self) -> FrameTicket {
        FrameTicket { generation: self.generation, step: self.next_step }
    }

    pub fn accepts(&self, ticket: FrameTicket) -> bool {
        ticket == self.ticket()
    }

    pub fn is_commit_step(&self) -> bool {
        self.next_step >= TRANSITION_SCHEDULE.len()
    }

    pub fn remaining(&self) -> usize {
        FRAME_COUNT.saturating_sub(self.next_step)
    }

    /// Values for the current step, aligned with `target.series`.
    pub fn frame_values(&self) -> Vec<Vec<f64>> {
        let percent = TRANSITION_SCHEDULE[self.next_step.min(TRANSITION_SCHEDULE.len() - 1)];
        self.from
            .iter()
            .zip(&self.target.series)
            .map(|(old, s)| interpolate_values(old, &s.values, percent))
            .collect()
    }
}
