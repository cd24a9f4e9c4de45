//! Deterministic entrance timing driven by injected timestamps
//!
//! The clock never reads wall time. Callers pass `now` in milliseconds on a
//! monotonic scale of their choosing, which keeps every query reproducible.

use crate::config::Config;
use crate::io::configuration::{CENTER_DURATION_SHARE, OTHER_DURATION_SHARE};
use crate::layout::node::Node;
use crate::math::easing::{ease_out_cubic, unit_ratio};

/// Lifecycle of the entrance animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockState {
    /// Not started; frames contain nothing
    Idle,
    /// Counting from `start_ms`
    Running {
        /// Timestamp the current pass began at
        start_ms: f64,
    },
    /// Frozen after `elapsed_ms` of the current pass
    Stopped {
        /// Elapsed time at the moment of stopping
        elapsed_ms: f64,
    },
}

/// Raw and eased entrance progress of one tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Linear progress in `[0, 1]`
    pub raw: f64,
    /// Cubic ease-out of `raw`
    pub eased: f64,
}

impl Progress {
    /// Progress for a linear fraction
    pub fn from_raw(raw: f64) -> Self {
        Self {
            raw,
            eased: ease_out_cubic(raw),
        }
    }

    /// Whether the entrance has completed
    pub fn is_complete(&self) -> bool {
        self.raw >= 1.0
    }
}

/// Start timestamp plus timing parameters shared by every tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClock {
    state: ClockState,
    animation_duration_ms: f64,
    other_start_delay_ms: f64,
    passes: u32,
}

impl AnimationClock {
    /// Idle clock timed by `config`
    pub const fn new(config: &Config) -> Self {
        Self {
            state: ClockState::Idle,
            animation_duration_ms: config.animation_duration_ms,
            other_start_delay_ms: config.other_start_delay_ms,
            passes: 0,
        }
    }

    /// Current lifecycle state
    pub const fn state(&self) -> ClockState {
        self.state
    }

    /// Number of passes started since creation
    pub const fn passes(&self) -> u32 {
        self.passes
    }

    /// Begin a pass at `now_ms`
    pub fn start(&mut self, now_ms: f64) {
        self.state = ClockState::Running { start_ms: now_ms };
        self.passes = self.passes.saturating_add(1);
    }

    /// Begin a new pass at `now_ms`, whatever the current state
    pub fn restart(&mut self, now_ms: f64) {
        self.start(now_ms);
    }

    /// Freeze elapsed time at `now_ms`; an idle clock stays idle
    pub fn stop(&mut self, now_ms: f64) {
        if let ClockState::Running { start_ms } = self.state {
            self.state = ClockState::Stopped {
                elapsed_ms: (now_ms - start_ms).max(0.0),
            };
        }
    }

    /// Milliseconds into the current pass, `None` while idle
    ///
    /// Timestamps before the start clamp to zero.
    pub fn elapsed(&self, now_ms: f64) -> Option<f64> {
        match self.state {
            ClockState::Idle => None,
            ClockState::Running { start_ms } => Some((now_ms - start_ms).max(0.0)),
            ClockState::Stopped { elapsed_ms } => Some(elapsed_ms),
        }
    }

    /// Length of `node`'s entrance movement
    pub fn node_duration(&self, node: &Node) -> f64 {
        if node.is_center {
            self.animation_duration_ms * CENTER_DURATION_SHARE
        } else {
            ((self.animation_duration_ms - self.other_start_delay_ms) * OTHER_DURATION_SHARE)
                .max(0.0)
        }
    }

    /// Progress of `node` after `elapsed_ms` of the pass
    pub fn progress_at(&self, node: &Node, elapsed_ms: f64) -> Progress {
        let raw = unit_ratio(elapsed_ms - node.entrance_delay_ms, self.node_duration(node));
        Progress::from_raw(raw)
    }

    /// Progress of `node` at `now_ms`, `None` while idle
    pub fn node_progress(&self, node: &Node, now_ms: f64) -> Option<Progress> {
        self.elapsed(now_ms)
            .map(|elapsed| self.progress_at(node, elapsed))
    }

    /// Elapsed time after which every node in `nodes` has finished moving
    pub fn settle_time(&self, nodes: &[Node]) -> f64 {
        nodes
            .iter()
            .map(|node| node.entrance_delay_ms.max(0.0) + self.node_duration(node))
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
