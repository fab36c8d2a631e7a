//! The match loop: one session object owning every entity and resource.
//!
//! Hosts drive it by calling [`MatchSession::tick`] from whatever callback
//! they schedule (display refresh, a [`TickClock`](crate::TickClock), a test
//! loop). Pointer samples and lifecycle commands may arrive between ticks.

use hecs::World;

use crate::accuracy::PredictionLog;
use crate::arena::Arena;
use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::difficulty::Difficulty;
use crate::error::Result;
use crate::fsm::{MatchCommand, MatchFsm, MatchState, TransitionResult};
use crate::params::Params;
use crate::resources::{CursorInput, Events, GameRng, Score};
use crate::sink::{
    BallShape, GuideLine, PaddleShape, Readout, ReadoutSink, RenderFrame, RenderSink,
};
use crate::{create_ball, create_paddle, step};

pub struct MatchSession {
    world: World,
    arena: Arena,
    opening_ball: Ball,
    difficulty: Difficulty,
    fsm: MatchFsm,
    score: Score,
    events: Events,
    predictions: PredictionLog,
    cursor: CursorInput,
    rng: GameRng,
    tick: u64,
    render: Box<dyn RenderSink>,
    readout: Box<dyn ReadoutSink>,
}

impl MatchSession {
    pub fn new(
        config: &Config,
        render: Box<dyn RenderSink>,
        readout: Box<dyn ReadoutSink>,
    ) -> Result<Self> {
        let arena = config.arena()?;
        let opening_ball = config.opening_ball(&arena)?;
        let difficulty = config.difficulty;

        let mut world = World::new();
        create_ball(&mut world, opening_ball);
        create_paddle(&mut world, Paddle::centered(Side::Player, &arena));
        create_paddle(&mut world, Paddle::centered(Side::Opponent, &arena));

        log::info!(
            "Session created: arena {}x{}, difficulty {difficulty}, seed {}",
            arena.width(),
            arena.height(),
            config.seed
        );

        Ok(Self {
            world,
            arena,
            opening_ball,
            difficulty,
            fsm: MatchFsm::new(),
            score: Score::new(),
            events: Events::new(),
            predictions: PredictionLog::new(),
            cursor: CursorInput::new(),
            rng: GameRng::new(config.seed),
            tick: 0,
            render,
            readout,
        })
    }

    /// Record a pointer sample; only the latest one before a tick is used
    pub fn submit_cursor(&mut self, cursor_y: f32) {
        if !self.cursor.submit(cursor_y) {
            log::debug!("Dropped non-finite cursor sample {cursor_y}");
        }
    }

    pub fn start(&mut self) -> TransitionResult {
        self.command(MatchCommand::Start)
    }

    /// Start, pause or resume, like a single start/pause button
    pub fn toggle(&mut self) -> TransitionResult {
        self.command(MatchCommand::Toggle)
    }

    /// Return to `Idle` with scores, prediction history and entities
    /// reinitialized
    pub fn reset(&mut self) -> TransitionResult {
        let result = self.command(MatchCommand::Reset);

        self.score = Score::new();
        self.events.clear();
        self.predictions.clear();
        self.cursor.clear();
        self.tick = 0;

        // Respawn entities
        self.world.clear();
        let mut ball = self.opening_ball;
        ball.reset(&self.arena, &mut self.rng);
        create_ball(&mut self.world, ball);
        create_paddle(&mut self.world, Paddle::centered(Side::Player, &self.arena));
        create_paddle(
            &mut self.world,
            Paddle::centered(Side::Opponent, &self.arena),
        );

        self.publish();
        result
    }

    /// Switch difficulty by label. Unknown labels are rejected and leave the
    /// session untouched; a valid change resets the match.
    pub fn set_difficulty(&mut self, label: &str) -> Result<()> {
        let difficulty = label.parse::<Difficulty>().map_err(|err| {
            log::debug!("Rejected difficulty change: {err}");
            err
        })?;
        self.set_difficulty_profile(difficulty);
        Ok(())
    }

    pub fn set_difficulty_profile(&mut self, difficulty: Difficulty) {
        log::info!("Difficulty set to {difficulty}");
        self.difficulty = difficulty;
        self.readout.difficulty_changed(difficulty);
        self.reset();
    }

    /// Advance one tick. Does nothing unless the match is running, so a
    /// callback scheduled before a pause or reset is harmless.
    pub fn tick(&mut self) -> Option<Events> {
        if !self.fsm.is_running() {
            log::trace!("Tick skipped in state {}", self.fsm.state());
            return None;
        }

        self.tick += 1;
        step(
            &mut self.world,
            &self.arena,
            self.difficulty,
            &self.cursor,
            &mut self.score,
            &mut self.events,
            &mut self.predictions,
            &mut self.rng,
        );

        self.publish();
        Some(self.events)
    }

    pub fn state(&self) -> MatchState {
        self.fsm.state()
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn predictions(&self) -> &PredictionLog {
        &self.predictions
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Running accuracy in `[0, 100]`
    pub fn accuracy(&self) -> f32 {
        self.predictions.accuracy(self.arena.height())
    }

    pub fn ball(&self) -> Ball {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap_or(self.opening_ball)
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
            .unwrap_or_else(|| Paddle::centered(side, &self.arena))
    }

    pub fn frame(&self) -> RenderFrame {
        let ball = self.ball();
        let paddle_shape = |side: Side| PaddleShape {
            x: self.arena.paddle_x(side),
            y: self.paddle(side).y,
            width: self.arena.paddle_width(),
            height: self.arena.paddle_height(),
        };

        RenderFrame {
            width: self.arena.width(),
            height: self.arena.height(),
            ball: BallShape {
                x: ball.pos.x,
                y: ball.pos.y,
                radius: ball.radius,
            },
            player: paddle_shape(Side::Player),
            opponent: paddle_shape(Side::Opponent),
            guide: GuideLine {
                x: self.arena.width() / 2.0,
                y_start: 0.0,
                y_end: self.arena.height(),
                dash: Params::GUIDE_DASH,
                gap: Params::GUIDE_GAP,
            },
        }
    }

    pub fn readout(&self) -> Readout {
        Readout {
            player_score: self.score.get(Side::Player),
            opponent_score: self.score.get(Side::Opponent),
            accuracy_percent: self.predictions.accuracy_percent(self.arena.height()),
            state: self.fsm.state(),
        }
    }

    fn command(&mut self, command: MatchCommand) -> TransitionResult {
        let result = self.fsm.transition(command);
        if result.changed() {
            log::info!(
                "Match {} -> {} ({:?})",
                result.from_state(),
                result.to_state(),
                command
            );
        } else if !result.success() {
            log::debug!("Ignored {:?} while {}", command, result.from_state());
        }
        result
    }

    fn publish(&mut self) {
        let frame = self.frame();
        let readout = self.readout();
        self.render.render(&frame);
        self.readout.readout(&readout);
    }
}
