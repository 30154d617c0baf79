use crate::{Ball, Config, Events, Paddle, Params, Side};
use glam::Vec2;
use hecs::World;
use log::trace;

/// Bounce the ball off the top and bottom walls
pub fn check_walls(world: &mut World, config: &Config, events: &mut Events) {
    let radius = config.ball_radius;
    let floor = config.arena_height - radius;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y <= radius {
            ball.pos.y = radius;
            ball.dir.y = -ball.dir.y;
            events.ball_hit_wall = true;
            trace!("Ball hit top wall at x={:.1}", ball.pos.x);
        }
        if ball.pos.y >= floor {
            ball.pos.y = floor;
            ball.dir.y = -ball.dir.y;
            events.ball_hit_wall = true;
            trace!("Ball hit bottom wall at x={:.1}", ball.pos.x);
        }
    }
}

/// Check ball collisions with both paddles, left first
pub fn check_paddles(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding a borrow on the world
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side == Side::Right);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if bounce_off_paddle(ball, paddle, config) {
                events.ball_hit_paddle = true;
                trace!(
                    "Ball hit {:?} paddle, speed now {:.2}",
                    paddle.side,
                    ball.speed
                );
            }
        }
    }
}

/// Angle off horizontal for a strike at height `ball_y`.
///
/// Zero at the paddle center, approaching ±`MAX_BOUNCE_ANGLE` at the tips
/// (positive is downwards).
pub fn bounce_angle(ball_y: f32, paddle: &Paddle) -> f32 {
    let half_height = paddle.height / 2.0;
    let offset = ((ball_y - paddle.center_y()) / half_height).clamp(-1.0, 1.0);
    offset * Params::MAX_BOUNCE_ANGLE
}

/// Resolve a single ball/paddle contact. Returns true on a hit.
///
/// The ball must have reached the paddle face and be strictly between the
/// paddle's top and bottom edges; a ball exactly level with an edge misses.
/// On a hit the ball is snapped back onto the face, sent away from the paddle
/// at `bounce_angle` and sped up.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config) -> bool {
    let radius = config.ball_radius;
    let face = paddle.face_x();

    let reached = match paddle.side {
        Side::Left => ball.pos.x <= face + radius,
        Side::Right => ball.pos.x >= face - radius,
    };
    let level = ball.pos.y > paddle.y && ball.pos.y < paddle.y + paddle.height;
    if !(reached && level) {
        return false;
    }

    let (sin, cos) = bounce_angle(ball.pos.y, paddle).sin_cos();
    match paddle.side {
        Side::Left => {
            ball.pos.x = face + radius;
            ball.dir = Vec2::new(cos.abs(), sin);
        }
        Side::Right => {
            ball.pos.x = face - radius;
            ball.dir = Vec2::new(-cos.abs(), sin);
        }
    }
    ball.ramp_speed(config.ball_speed_increase, config.ball_speed_max);
    true
}
