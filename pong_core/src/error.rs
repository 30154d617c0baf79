use thiserror::Error;

use crate::Side;

/// A configuration that would break a simulation invariant.
///
/// Rejected once at construction so that no tick ever has to handle it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a positive number, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("paddle height {paddle} does not fit in arena height {arena}")]
    PaddleTooTall { paddle: f32, arena: f32 },

    #[error("ball diameter {diameter} does not fit in arena height {arena}")]
    BallTooLarge { diameter: f32, arena: f32 },

    #[error("arena width {width} leaves no room between the paddles")]
    ArenaTooNarrow { width: f32 },

    #[error("max ball speed {max} is below starting speed {start}")]
    SpeedRange { start: f32, max: f32 },

    #[error("ball speed increase must be zero or positive, got {0}")]
    NegativeSpeedIncrease(f32),

    #[error("winning score must be at least 1")]
    ZeroWinScore,

    #[error("tick period must be non-zero")]
    ZeroTickPeriod,
}

/// A staged score that no sequence of ticks could have produced.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    #[error("{side:?} score cannot go down from {current} to {requested}")]
    Decreasing {
        side: Side,
        current: u8,
        requested: u8,
    },

    #[error("{side:?} score {requested} would end the match (winning score {win_score})")]
    ReachesWin {
        side: Side,
        requested: u8,
        win_score: u8,
    },
}
