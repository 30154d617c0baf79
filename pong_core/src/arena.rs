use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box, y grows downwards
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Nearest point inside the box
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }
}

/// The fixed playing field `[0, width] × [0, height]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(Vec2::ZERO, Vec2::new(self.width, self.height))
    }

    /// Region the ball's center may occupy: full width, but kept one radius
    /// clear of the top and bottom walls
    pub fn ball_bounds(&self, radius: f32) -> Aabb {
        let bounds = self.bounds();
        let inset = Vec2::new(0.0, radius);
        Aabb::new(bounds.min + inset, bounds.max - inset)
    }

    /// Where the ball is served from
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Top edge of a vertically centered paddle
    pub fn centered_paddle_y(&self, paddle_height: f32) -> f32 {
        (self.height - paddle_height) / 2.0
    }
}
