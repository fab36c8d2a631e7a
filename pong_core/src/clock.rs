use crate::error::{PongError, Result};
use crate::params::Params;

/// Fixed-rate tick scheduler for hosts.
///
/// Converts elapsed wall time into a whole number of simulation ticks so
/// ball speed no longer depends on the display's refresh rate. Large gaps
/// are clamped and the per-frame tick count is capped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickClock {
    fixed_dt: f32,
    accumulator: f32,
}

impl TickClock {
    pub fn new(hz: f32) -> Result<Self> {
        if !hz.is_finite() || hz <= 0.0 {
            return Err(PongError::InvalidTickRate { hz });
        }
        Ok(Self {
            fixed_dt: 1.0 / hz,
            accumulator: 0.0,
        })
    }

    pub fn fixed_dt(&self) -> f32 {
        self.fixed_dt
    }

    /// Feed elapsed seconds and return how many ticks to run now
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        let elapsed = if elapsed.is_finite() {
            elapsed.clamp(0.0, Params::MAX_DT)
        } else {
            0.0
        };
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.fixed_dt && ticks < Params::MAX_SUBSTEPS {
            self.accumulator -= self.fixed_dt;
            ticks += 1;
        }

        // Drop any backlog the cap left behind
        if self.accumulator >= self.fixed_dt {
            self.accumulator = self.accumulator.rem_euclid(self.fixed_dt);
        }

        ticks
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self {
            fixed_dt: Params::FIXED_DT,
            accumulator: 0.0,
        }
    }
}
