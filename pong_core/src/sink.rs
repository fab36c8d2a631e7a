//! Output surfaces the match loop pushes to after every tick.
//!
//! Both are purely presentational; nothing flows back into the simulation.

use crate::difficulty::Difficulty;
use crate::fsm::MatchState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallShape {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// Paddle rectangle, `(x, y)` being its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleShape {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Dashed vertical line splitting the court
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideLine {
    pub x: f32,
    pub y_start: f32,
    pub y_end: f32,
    pub dash: f32,
    pub gap: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderFrame {
    pub width: f32,
    pub height: f32,
    pub ball: BallShape,
    pub player: PaddleShape,
    pub opponent: PaddleShape,
    pub guide: GuideLine,
}

/// Scoreboard values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Readout {
    pub player_score: u32,
    pub opponent_score: u32,
    pub accuracy_percent: u8,
    pub state: MatchState,
}

/// Anything that can paint a frame
pub trait RenderSink {
    fn render(&mut self, frame: &RenderFrame);
}

/// Anything that can show scores and AI accuracy
pub trait ReadoutSink {
    fn readout(&mut self, readout: &Readout);

    fn difficulty_changed(&mut self, _difficulty: Difficulty) {}
}

/// Sink that discards everything, for headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render(&mut self, _frame: &RenderFrame) {}
}

impl ReadoutSink for NullSink {
    fn readout(&mut self, _readout: &Readout) {}
}
