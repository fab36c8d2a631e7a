//! Match State Machine
//!
//! Tracks whether the match loop is allowed to advance.

use std::fmt;

/// Match states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchState {
    #[default]
    Idle,
    Running,
    Paused,
}

impl MatchState {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchState::Idle => "idle",
            MatchState::Running => "running",
            MatchState::Paused => "paused",
        }
    }
}

impl fmt::Display for MatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle commands that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchCommand {
    Start,
    Toggle,
    Reset,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    success: bool,
    from_state: MatchState,
    to_state: MatchState,
    command: MatchCommand,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> MatchState {
        self.from_state
    }

    pub fn to_state(&self) -> MatchState {
        self.to_state
    }

    pub fn command(&self) -> MatchCommand {
        self.command
    }

    /// Whether the state actually changed
    pub fn changed(&self) -> bool {
        self.from_state != self.to_state
    }
}

/// Match Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct MatchFsm {
    state: MatchState,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            state: MatchState::Idle,
        }
    }

    /// Get current state
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, command: MatchCommand) -> bool {
        self.get_next_state(command).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, command: MatchCommand) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(command) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                command,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                command,
            }
        }
    }

    /// Get next state for a given command (if valid)
    fn get_next_state(&self, command: MatchCommand) -> Option<MatchState> {
        match (self.state, command) {
            // Reset is valid from anywhere
            (_, MatchCommand::Reset) => Some(MatchState::Idle),

            (MatchState::Idle | MatchState::Paused, MatchCommand::Start) => {
                Some(MatchState::Running)
            }

            // Single start/pause control
            (MatchState::Idle, MatchCommand::Toggle) => Some(MatchState::Running),
            (MatchState::Running, MatchCommand::Toggle) => Some(MatchState::Paused),
            (MatchState::Paused, MatchCommand::Toggle) => Some(MatchState::Running),

            // Invalid transition (start while already running)
            _ => None,
        }
    }

    /// Check if the loop may advance
    pub fn is_running(&self) -> bool {
        self.state == MatchState::Running
    }
}
