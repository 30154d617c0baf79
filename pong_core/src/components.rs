use glam::Vec2;

use crate::Aabb;

/// Which wall a paddle defends. Left is player one, right is player two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component - a player's paddle, `y` is the top edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            side,
            x,
            y,
            width,
            height,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// X coordinate of the face the ball bounces off
    pub fn face_x(&self) -> f32 {
        match self.side {
            Side::Left => self.x + self.width,
            Side::Right => self.x,
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.width, self.y + self.height),
        )
    }

    /// Move one step according to `intent`.
    ///
    /// A step is refused when the paddle already touches the wall it is
    /// heading for, and a partial step is clamped to land exactly on it.
    pub fn advance(&mut self, intent: PaddleIntent, speed: f32, arena_height: f32) {
        let floor = arena_height - self.height;
        match intent {
            PaddleIntent::Up if self.y > 0.0 => self.y = (self.y - speed).max(0.0),
            PaddleIntent::Down if self.y < floor => self.y = (self.y + speed).min(floor),
            _ => {}
        }
    }
}

/// Movement intent for a paddle, sampled once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddleIntent {
    Up,
    Down,
    #[default]
    Stop,
}

/// Marker for paddles whose intent is chosen by the trajectory predictor
#[derive(Debug, Clone, Copy, Default)]
pub struct AiControlled;

/// Ball component - the pong ball.
///
/// Velocity is kept as a unit direction times a scalar speed so the speed
/// ramp never has to renormalize. `prev_pos` is where the ball was before the
/// last `advance`, which is what the predictor draws its line through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub prev_pos: Vec2,
    pub dir: Vec2,
    pub speed: f32,
}

impl Ball {
    /// Create a ball at rest history-wise (`prev_pos == pos`).
    ///
    /// A zero `dir` is replaced with +X so the direction is always unit length.
    pub fn new(pos: Vec2, dir: Vec2, speed: f32) -> Self {
        Self {
            pos,
            prev_pos: pos,
            dir: dir.try_normalize().unwrap_or(Vec2::X),
            speed,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        self.dir * self.speed
    }

    /// One tick of straight-line motion, no sub-stepping
    pub fn advance(&mut self) {
        self.prev_pos = self.pos;
        self.pos += self.velocity();
    }

    /// Add `increase` to the speed without passing `max`
    pub fn ramp_speed(&mut self, increase: f32, max: f32) {
        self.speed = (self.speed + increase).min(max);
    }
}
