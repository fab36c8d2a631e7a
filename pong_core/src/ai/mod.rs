//! Opponent AI: forecast where the ball arrives, then steer toward it.

pub mod controller;
pub mod predictor;

pub use controller::*;
pub use predictor::*;
