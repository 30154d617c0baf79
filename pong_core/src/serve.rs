//! Serve strategies: where the ball goes at match start and after a point.

use std::f32::consts::{FRAC_1_SQRT_2, PI};

use glam::Vec2;
use log::debug;
use rand::Rng;

use crate::{Ball, Config, GameRng, Params, Score, ServeStrategy, Side};

/// Pick a unit launch direction for the next round
pub fn serve_direction(strategy: ServeStrategy, score: &Score, rng: &mut GameRng) -> Vec2 {
    match strategy {
        ServeStrategy::Quadrant => {
            let x = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
            let y = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
            Vec2::new(x, y) * FRAC_1_SQRT_2
        }
        ServeStrategy::ScoreBiased => {
            let spread = Params::SERVE_HALF_ANGLE;
            let mut angle: f32 = rng.0.gen_range(-spread..=spread);
            let towards_left = match score.leader() {
                None => rng.0.gen_bool(0.5),
                // Towards whoever is behind
                Some(leader) => leader.opponent() == Side::Left,
            };
            if towards_left {
                angle += PI;
            }
            Vec2::new(angle.cos(), angle.sin())
        }
    }
}

/// Build a fresh ball at the arena center, moving at the starting speed
pub fn serve_ball(config: &Config, score: &Score, rng: &mut GameRng) -> Ball {
    let dir = serve_direction(config.serve, score, rng);
    let pos = config.arena().center();
    debug!(
        "Serve: {:?} at score {}-{}, direction ({:.3}, {:.3})",
        config.serve, score.left, score.right, dir.x, dir.y
    );
    Ball::new(pos, dir, config.ball_speed_start)
}
