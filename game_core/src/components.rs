use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::map::Aabb;

/// Axis a paddle slides along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Component of `v` along this axis
    pub fn component(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    /// `v` with its component along this axis replaced
    pub fn with_component(self, v: Vec2, value: f32) -> Vec2 {
        match self {
            Axis::Horizontal => Vec2::new(value, v.y),
            Axis::Vertical => Vec2::new(v.x, value),
        }
    }

    pub fn other(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Paddle - a player's bat, centered on `pos`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2, // (width, height)
    pub axis: Axis, // movement axis
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2, axis: Axis) -> Self {
        Self { pos, size, axis }
    }

    /// Half of the paddle's length along its movement axis
    pub fn half_extent(&self) -> f32 {
        self.axis.component(self.size) / 2.0
    }

    pub fn axis_position(&self) -> f32 {
        self.axis.component(self.pos)
    }

    pub fn set_axis_position(&mut self, value: f32) {
        self.pos = self.axis.with_component(self.pos, value);
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.pos, self.size)
    }
}

/// Ball - the pong ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Bounding box of the ball's circle
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.radius * 2.0))
    }

    /// Re-serve from `center` with a fresh velocity.
    ///
    /// Mutates in place; the ball keeps its identity across points.
    pub fn reset(&mut self, center: Vec2, vel: Vec2) {
        self.pos = center;
        self.vel = vel;
    }
}
