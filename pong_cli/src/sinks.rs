use pong_core::{Difficulty, Readout, ReadoutSink, RenderFrame, RenderSink};

/// Writes every frame to the log at trace level
#[derive(Debug, Default)]
pub struct LogRender;

impl RenderSink for LogRender {
    fn render(&mut self, frame: &RenderFrame) {
        log::trace!(
            "ball ({:.1}, {:.1}) player y={:.1} opponent y={:.1}",
            frame.ball.x,
            frame.ball.y,
            frame.player.y,
            frame.opponent.y
        );
    }
}

/// Logs the scoreboard every `every` readouts, and immediately whenever
/// the score or match state changes.
#[derive(Debug)]
pub struct LogReadout {
    every: u64,
    seen: u64,
    last: Option<Readout>,
}

impl LogReadout {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            seen: 0,
            last: None,
        }
    }

    fn should_log(&self, readout: &Readout) -> bool {
        let changed = match &self.last {
            Some(last) => {
                last.player_score != readout.player_score
                    || last.opponent_score != readout.opponent_score
                    || last.state != readout.state
            }
            None => true,
        };
        changed || self.seen % self.every == 0
    }
}

impl ReadoutSink for LogReadout {
    fn readout(&mut self, readout: &Readout) {
        self.seen += 1;
        if self.should_log(readout) {
            log::info!(
                "Player {} - {} AI | accuracy {}% | {}",
                readout.player_score,
                readout.opponent_score,
                readout.accuracy_percent,
                readout.state
            );
        }
        self.last = Some(*readout);
    }

    fn difficulty_changed(&mut self, difficulty: Difficulty) {
        log::info!("AI difficulty: {difficulty}");
    }
}
