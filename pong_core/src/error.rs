use thiserror::Error;

/// Broad classification of a [`PongError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidConfiguration,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PongError {
    #[error("Unknown difficulty: {label:?} (expected easy, medium or hard)")]
    UnknownDifficulty { label: String },

    #[error("Invalid arena: {reason}")]
    InvalidArena { reason: String },

    #[error("Invalid ball: {reason}")]
    InvalidBall { reason: String },

    #[error("Invalid tick rate: {hz} Hz")]
    InvalidTickRate { hz: f32 },
}

impl PongError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PongError::UnknownDifficulty { .. }
            | PongError::InvalidArena { .. }
            | PongError::InvalidBall { .. }
            | PongError::InvalidTickRate { .. } => ErrorKind::InvalidConfiguration,
        }
    }

    pub(crate) fn arena(reason: impl Into<String>) -> Self {
        PongError::InvalidArena {
            reason: reason.into(),
        }
    }

    pub(crate) fn ball(reason: impl Into<String>) -> Self {
        PongError::InvalidBall {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PongError>;
