//! Headless host for a Pong match against the predicting AI.
//!
//! Drives a `MatchSession` with a scripted pointer and logs the
//! scoreboard through `env_logger`.

mod player;
mod sinks;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use pong_core::{Config, Difficulty, MatchSession, Params, TickClock};

use player::ScriptedPlayer;
use sinks::{LogReadout, LogRender};

#[derive(Parser, Debug)]
#[command(name = "pong")]
#[command(about = "Play a headless Pong match against the predicting AI", long_about = None)]
struct Cli {
    /// JSON config file (missing fields use the defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// AI difficulty: easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Seed for ball serves and prediction noise
    #[arg(long)]
    seed: Option<u64>,

    /// Number of simulation ticks to run
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Simulation rate in ticks per second
    #[arg(long, default_value_t = Params::TICK_HZ)]
    tick_hz: f32,

    /// Host frame rate driving the tick clock
    #[arg(long, default_value_t = 60.0)]
    frame_hz: f32,

    /// Scripted pointer speed in pixels per frame
    #[arg(long, default_value_t = 6.0)]
    player_speed: f32,

    /// Log the scoreboard every N ticks
    #[arg(long, default_value_t = 60)]
    readout_every: u64,

    /// Sleep between frames to run in real time
    #[arg(long)]
    realtime: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: Config = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_ref())?;
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(difficulty) = cli.difficulty {
        config.difficulty = difficulty;
    }
    config.validate().context("Invalid match configuration")?;

    let mut session = MatchSession::new(
        &config,
        Box::new(LogRender),
        Box::new(LogReadout::new(cli.readout_every)),
    )?;

    anyhow::ensure!(
        cli.frame_hz.is_finite() && cli.frame_hz > 0.0,
        "frame rate must be positive, got {}",
        cli.frame_hz
    );
    let frame_dt = 1.0 / cli.frame_hz;
    let mut clock = TickClock::new(cli.tick_hz).context("Invalid tick rate")?;
    let mut player = ScriptedPlayer::new(cli.player_speed, session.arena());

    log::info!(
        "Starting match: difficulty={} seed={} ticks={}",
        session.difficulty(),
        config.seed,
        cli.ticks
    );
    session.start();

    while session.tick_count() < cli.ticks {
        let cursor = player.follow(&session.ball());
        session.submit_cursor(cursor);

        for _ in 0..clock.advance(frame_dt) {
            if session.tick_count() >= cli.ticks {
                break;
            }
            session.tick();
        }

        if cli.realtime {
            std::thread::sleep(Duration::from_secs_f32(frame_dt));
        }
    }

    let score = session.score();
    println!(
        "Final score: Player {} - {} AI",
        score.player, score.opponent
    );
    println!(
        "AI prediction accuracy: {}% over {} predictions ({})",
        session.predictions().accuracy_percent(session.arena().height()),
        session.predictions().len(),
        session.difficulty()
    );

    Ok(())
}
