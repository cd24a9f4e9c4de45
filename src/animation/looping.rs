//! Pass-based loop control for recording a fixed number of entrance passes

use crate::io::configuration::LOOP_BUFFER_MS;

/// What the driver should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    /// Keep stepping the current pass
    Continue,
    /// Restart the clock without regenerating positions
    Restart,
    /// All passes are done
    Stop,
}

/// Decides when a recorded animation restarts and when it ends
///
/// A pass lasts the entrance duration plus a short hold. After each pass the
/// schedule restarts the clock until `loops` passes have played.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopSchedule {
    pass_ms: f64,
    loops: u32,
    completed: u32,
}

impl LoopSchedule {
    /// Schedule `loops` passes of an `animation_duration_ms` entrance
    ///
    /// Zero loops is treated as one.
    pub fn new(animation_duration_ms: f64, loops: u32) -> Self {
        Self {
            pass_ms: animation_duration_ms.max(0.0) + LOOP_BUFFER_MS,
            loops: loops.max(1),
            completed: 0,
        }
    }

    /// Length of one pass including the hold
    pub const fn pass_duration(&self) -> f64 {
        self.pass_ms
    }

    /// Number of passes the schedule plays
    pub const fn loops(&self) -> u32 {
        self.loops
    }

    /// Passes finished so far
    pub const fn completed(&self) -> u32 {
        self.completed
    }

    /// Whether the last pass has finished
    pub const fn is_finished(&self) -> bool {
        self.completed >= self.loops
    }

    /// Length of the whole recording
    pub fn total_duration(&self) -> f64 {
        self.pass_ms * f64::from(self.loops)
    }

    /// Advance with `elapsed_ms` into the current pass
    pub fn tick(&mut self, elapsed_ms: f64) -> LoopAction {
        if self.is_finished() {
            return LoopAction::Stop;
        }
        if elapsed_ms < self.pass_ms {
            return LoopAction::Continue;
        }
        self.completed += 1;
        if self.is_finished() {
            LoopAction::Stop
        } else {
            LoopAction::Restart
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/looping.rs"]
mod tests;
