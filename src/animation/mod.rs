//! Staggered, eased entrance animation

/// Injected-time clock and per-tile progress
pub mod clock;
/// Draw records and back-to-front ordering
pub mod frame;
/// Restart and stop decisions for multi-pass recordings
pub mod looping;

pub use clock::{AnimationClock, ClockState, Progress};
pub use frame::{ConnectorDraw, FrameState, FrameStyle, NodeDraw, draw_order};
pub use looping::{LoopAction, LoopSchedule};
