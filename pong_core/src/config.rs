use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Arena, ConfigError, Params, Side};

/// How the ball is launched at match start and after every point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServeStrategy {
    /// Exact diagonals, each axis sign drawn independently
    Quadrant,
    /// Angle in ±45°, sent towards the trailing player (either side when tied)
    #[default]
    ScoreBiased,
}

/// Who decides a paddle's intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Controller {
    Human,
    #[default]
    Ai,
}

/// Game configuration, fixed once a match is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_wall_margin: f32,
    pub ball_radius: f32,
    pub ball_speed_start: f32,
    pub ball_speed_increase: f32,
    pub ball_speed_max: f32,
    pub win_score: u8,
    pub tick_period_ms: u64,
    pub serve: ServeStrategy,
    pub left: Controller,
    pub right: Controller,
    /// Keep running after a match resets instead of waiting for `Match::restart`
    pub auto_restart: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_wall_margin: Params::PADDLE_WALL_MARGIN,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_start: Params::BALL_SPEED_START,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_speed_max: Params::BALL_SPEED_MAX,
            win_score: Params::WIN_SCORE,
            tick_period_ms: Params::TICK_PERIOD_MS,
            serve: ServeStrategy::default(),
            left: Controller::default(),
            right: Controller::default(),
            auto_restart: false,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject any setting that would let a paddle or the ball escape its bounds
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("arena_width", self.arena_width)?;
        positive("arena_height", self.arena_height)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("paddle_speed", self.paddle_speed)?;
        positive("ball_radius", self.ball_radius)?;
        positive("ball_speed_start", self.ball_speed_start)?;
        positive("ball_speed_max", self.ball_speed_max)?;

        if !(self.paddle_wall_margin.is_finite() && self.paddle_wall_margin >= 0.0) {
            return Err(ConfigError::NonPositive {
                field: "paddle_wall_margin",
                value: self.paddle_wall_margin,
            });
        }
        if self.paddle_height > self.arena_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                arena: self.arena_height,
            });
        }
        if self.ball_radius * 2.0 >= self.arena_height {
            return Err(ConfigError::BallTooLarge {
                diameter: self.ball_radius * 2.0,
                arena: self.arena_height,
            });
        }
        if self.paddle_x(Side::Left) + self.paddle_width >= self.paddle_x(Side::Right) {
            return Err(ConfigError::ArenaTooNarrow {
                width: self.arena_width,
            });
        }
        if self.ball_speed_max < self.ball_speed_start {
            return Err(ConfigError::SpeedRange {
                start: self.ball_speed_start,
                max: self.ball_speed_max,
            });
        }
        if !(self.ball_speed_increase.is_finite() && self.ball_speed_increase >= 0.0) {
            return Err(ConfigError::NegativeSpeedIncrease(self.ball_speed_increase));
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        Ok(())
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_wall_margin,
            Side::Right => self.arena_width - self.paddle_width - self.paddle_wall_margin,
        }
    }

    /// Top edge of a paddle sitting in the middle of its wall
    pub fn paddle_start_y(&self) -> f32 {
        self.arena().centered_paddle_y(self.paddle_height)
    }

    /// Clamp a paddle's top edge to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.arena_height - self.paddle_height)
    }

    pub fn controller(&self, side: Side) -> Controller {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 5.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 785.0, "Right paddle X position");
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-10.0), 0.0);
        assert_eq!(
            config.clamp_paddle_y(1000.0),
            config.arena_height - config.paddle_height
        );
        assert_eq!(config.clamp_paddle_y(120.0), 120.0);
    }

    #[test]
    fn test_paddle_start_y_is_centered() {
        let config = Config::new();
        assert_eq!(config.paddle_start_y(), (500.0 - 75.0) / 2.0);
    }

    #[test]
    fn test_rejects_paddle_taller_than_arena() {
        let config = Config {
            paddle_height: 600.0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::PaddleTooTall {
                paddle: 600.0,
                arena: 500.0
            })
        );
    }

    #[test]
    fn test_rejects_non_positive_and_nan_values() {
        let zero_speed = Config {
            ball_speed_start: 0.0,
            ..Config::new()
        };
        assert!(matches!(
            zero_speed.validate(),
            Err(ConfigError::NonPositive {
                field: "ball_speed_start",
                ..
            })
        ));

        let nan_width = Config {
            arena_width: f32::NAN,
            ..Config::new()
        };
        assert!(matches!(
            nan_width.validate(),
            Err(ConfigError::NonPositive {
                field: "arena_width",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_inverted_speed_range() {
        let config = Config {
            ball_speed_start: 5.0,
            ball_speed_max: 2.0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SpeedRange {
                start: 5.0,
                max: 2.0
            })
        );
    }

    #[test]
    fn test_rejects_narrow_arena_and_big_ball() {
        let narrow = Config {
            arena_width: 20.0,
            ..Config::new()
        };
        assert!(matches!(
            narrow.validate(),
            Err(ConfigError::ArenaTooNarrow { .. })
        ));

        let big_ball = Config {
            ball_radius: 250.0,
            ..Config::new()
        };
        assert!(matches!(
            big_ball.validate(),
            Err(ConfigError::BallTooLarge { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_win_score_and_tick_period() {
        let no_win = Config {
            win_score: 0,
            ..Config::new()
        };
        assert_eq!(no_win.validate(), Err(ConfigError::ZeroWinScore));

        let no_period = Config {
            tick_period_ms: 0,
            ..Config::new()
        };
        assert_eq!(no_period.validate(), Err(ConfigError::ZeroTickPeriod));
    }

    #[test]
    fn test_rejects_negative_speed_increase() {
        let config = Config {
            ball_speed_increase: -0.5,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeSpeedIncrease(-0.5))
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "win_score": 3, "serve": "quadrant", "left": "human" }"#)
                .unwrap();
        assert_eq!(config.win_score, 3);
        assert_eq!(config.serve, ServeStrategy::Quadrant);
        assert_eq!(config.controller(Side::Left), Controller::Human);
        assert_eq!(config.controller(Side::Right), Controller::Ai);
        assert_eq!(config.arena_width, Params::ARENA_WIDTH);
    }
}
