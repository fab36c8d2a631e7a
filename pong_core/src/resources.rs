use crate::components::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,   // Left (human) score
    pub opponent: u32, // Right (AI) score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(crate::params::Params::DEFAULT_SEED)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub player_paddle_hit: bool,
    pub opponent_paddle_hit: bool,
    pub player_scored: bool,
    pub opponent_scored: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn paddle_hit(&mut self, side: Side) {
        match side {
            Side::Player => self.player_paddle_hit = true,
            Side::Opponent => self.opponent_paddle_hit = true,
        }
    }

    pub fn scored(&mut self, side: Side) {
        match side {
            Side::Player => self.player_scored = true,
            Side::Opponent => self.opponent_scored = true,
        }
    }

    pub fn any_score(&self) -> bool {
        self.player_scored || self.opponent_scored
    }
}

/// Latest pointer sample, overwritten by every new sample.
///
/// Samples arrive between ticks; the loop reads the most recent one at the
/// top of the next tick. There is no queue, so intermediate samples are
/// simply lost.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorInput {
    latest: Option<f32>,
}

impl CursorInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a sample. Non-finite samples are dropped.
    pub fn submit(&mut self, cursor_y: f32) -> bool {
        if !cursor_y.is_finite() {
            return false;
        }
        self.latest = Some(cursor_y);
        true
    }

    pub fn latest(&self) -> Option<f32> {
        self.latest
    }

    pub fn clear(&mut self) {
        self.latest = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Player);
        score.increment(Side::Opponent);
        score.increment(Side::Opponent);
        assert_eq!(score.player, 1);
        assert_eq!(score.opponent, 2);
        assert_eq!(score.get(Side::Opponent), 2);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.ball_hit_wall = true;
        events.paddle_hit(Side::Player);
        events.scored(Side::Opponent);
        assert!(events.any_score());

        events.clear();

        assert_eq!(events, Events::default());
        assert!(!events.any_score());
    }

    #[test]
    fn test_cursor_keeps_only_latest_sample() {
        let mut cursor = CursorInput::new();
        assert_eq!(cursor.latest(), None);

        cursor.submit(10.0);
        cursor.submit(250.0);
        assert_eq!(cursor.latest(), Some(250.0));
    }

    #[test]
    fn test_cursor_drops_non_finite_samples() {
        let mut cursor = CursorInput::new();
        cursor.submit(42.0);
        assert!(!cursor.submit(f32::NAN));
        assert!(!cursor.submit(f32::INFINITY));
        assert_eq!(cursor.latest(), Some(42.0));
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        use rand::Rng;
        let mut a = GameRng::new(99);
        let mut b = GameRng::new(99);
        let xs: Vec<f32> = (0..5).map(|_| a.0.gen()).collect();
        let ys: Vec<f32> = (0..5).map(|_| b.0.gen()).collect();
        assert_eq!(xs, ys);
    }
}
