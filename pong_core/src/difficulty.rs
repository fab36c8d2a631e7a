use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::PongError;

/// AI difficulty preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Tuning values behind a difficulty preset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Prediction noise span as a fraction of arena height
    pub uncertainty: f32,
    /// Maximum opponent paddle travel per tick
    pub paddle_speed_cap: f32,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                uncertainty: 0.30,
                paddle_speed_cap: 3.0,
            },
            Difficulty::Medium => DifficultyProfile {
                uncertainty: 0.15,
                paddle_speed_cap: 5.0,
            },
            Difficulty::Hard => DifficultyProfile {
                uncertainty: 0.05,
                paddle_speed_cap: 7.0,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = PongError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(PongError::UnknownDifficulty {
                label: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
