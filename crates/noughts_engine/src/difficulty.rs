//! Difficulty levels and their search-depth caps.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Opponent strength, mapped to a maximum minimax search depth.
///
/// Lower caps truncate the lookahead rather than prune it, trading
/// optimality for artificial near-sightedness at the easier settings.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Depth cap 1: sees only its own move and the immediate reply.
    Easy,
    /// Depth cap 3.
    #[default]
    Medium,
    /// Depth cap 5: strong enough to never lose a 3x3 game.
    Hard,
}

impl Difficulty {
    /// Maximum ply depth the search explores at this level.
    pub fn depth_cap(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 3,
            Self::Hard => 5,
        }
    }

    /// Maps a numeric menu level to a difficulty.
    ///
    /// 1 is Easy, 2 Medium, 3 Hard; anything else falls back to Easy
    /// rather than erroring.
    #[instrument]
    pub fn from_level(level: u8) -> Self {
        match level {
            2 => Self::Medium,
            3 => Self::Hard,
            _ => Self::Easy,
        }
    }

    /// Cycles to the next level, wrapping Hard back to Easy.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }
}
