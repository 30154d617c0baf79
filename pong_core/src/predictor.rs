//! Reactive trajectory predictor used to drive AI paddles.
//!
//! The predictor draws a straight line through the ball's previous and
//! current positions and extends it to the paddle's face. Wall bounces are not
//! modelled, so a steep shot can still beat it.
//!
//! On the tick of a wall or paddle bounce the previous position still lies on
//! the incoming path, so the line points the wrong way for that one tick. The
//! next tick corrects it.

use glam::Vec2;

use crate::{Ball, Paddle, PaddleIntent, Params, Side};

/// Y where the line through `prev` and `cur` crosses `x = target_x`.
///
/// Returns `None` when the horizontal displacement is too small to give a
/// meaningful slope (purely vertical motion, or a freshly served ball).
pub fn extrapolate_y(prev: Vec2, cur: Vec2, target_x: f32) -> Option<f32> {
    let dx = cur.x - prev.x;
    if dx.abs() <= Params::PREDICTOR_MIN_DX {
        return None;
    }
    let slope = (cur.y - prev.y) / dx;
    Some(cur.y + slope * (target_x - cur.x))
}

/// True when the ball's horizontal travel is towards `side`'s wall
pub fn approaching(ball: &Ball, side: Side) -> bool {
    match side {
        Side::Left => ball.dir.x < 0.0,
        Side::Right => ball.dir.x > 0.0,
    }
}

/// Choose the next intent for an AI paddle.
///
/// A receding ball yields `Stop`. Otherwise the paddle chases the predicted
/// crossing point, with a dead zone of one `step` around its center so it
/// does not jitter once lined up. If the slope is degenerate it aims at the
/// ball's current height instead.
pub fn decide_intent(paddle: &Paddle, ball: &Ball, step: f32) -> PaddleIntent {
    if !approaching(ball, paddle.side) {
        return PaddleIntent::Stop;
    }

    let target =
        extrapolate_y(ball.prev_pos, ball.pos, paddle.face_x()).unwrap_or(ball.pos.y);
    let center = paddle.center_y();

    if target > center + step {
        PaddleIntent::Down
    } else if target < center - step {
        PaddleIntent::Up
    } else {
        PaddleIntent::Stop
    }
}
