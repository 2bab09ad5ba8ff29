//! Field, ball, paddle and wall primitives

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::input::PointerState;
use crate::tuning::Tuning;

/// The rectangular play area, origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT)
    }
}

/// The ball
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

    /// Ball placed near the field center with the starting velocity
    pub fn centered(field: &Field, tuning: &Tuning) -> Self {
        let r = tuning.ball_radius;
        Self {
            pos: Vec2::new(field.width / 2.0 - r, field.height / 2.0 - r),
            vel: tuning.ball_start_velocity,
            radius: r,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    /// Advance by one tick of velocity. No bounds checking.
    #[inline]
    pub fn step(&mut self) {
        self.pos += self.vel;
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Paddle centered along the bottom of the field
    pub fn for_field(field: &Field, tuning: &Tuning) -> Self {
        let width = field.width / PADDLE_WIDTH_DIVISOR;
        let height = tuning.paddle_height;
        Self {
            pos: Vec2::new(
                field.width / 2.0 - width / 2.0,
                field.height - height - PADDLE_BOTTOM_GAP,
            ),
            width,
            height,
        }
    }

    /// Center the paddle under the pointer; stays put until a pointer is seen.
    /// Not clamped to the walls.
    pub fn track(&mut self, pointer: &PointerState) {
        if let Some(p) = pointer.position() {
            self.pos.x = p.x - self.width / 2.0;
        }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }
}

/// Which edge of the field a wall guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallSide {
    Left,
    Right,
    Top,
}

/// A static wall. The bottom of the field has none.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub side: WallSide,
}

impl Wall {
    pub fn new(x: f32, y: f32, width: f32, height: f32, side: WallSide) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width,
            height,
            side,
        }
    }

    /// The three walls bounding a field, in collision order: left, right, top
    pub fn boundary(field: &Field, thickness: f32) -> [Wall; 3] {
        let side_height = field.height - SIDE_WALL_GAP;
        [
            Wall::new(0.0, 0.0, thickness, side_height, WallSide::Left),
            Wall::new(field.width - thickness, 0.0, thickness, side_height, WallSide::Right),
            Wall::new(0.0, 0.0, field.width, thickness, WallSide::Top),
        ]
    }

    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn bottom_edge(&self) -> f32 {
        self.pos.y + self.height
    }
}
