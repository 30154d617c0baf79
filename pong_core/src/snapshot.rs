use serde::Serialize;

use crate::Aabb;

/// Read-only view of a match after a tick, for drawing collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub left_paddle: Aabb,
    pub right_paddle: Aabb,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub score_left: u8,
    pub score_right: u8,
    pub running: bool,
}
