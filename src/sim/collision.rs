//! Collision detection and rebound
//!
//! Walls reflect the ball along a single axis. The paddle redirects it by
//! where it struck: dead center sends it straight up, the edges angle it away.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use super::entities::{Ball, Paddle, Wall, WallSide};
use crate::tuning::BounceLimit;

impl Paddle {
    /// Rebound the ball if its bounding box reaches the paddle's top edge.
    ///
    /// Returns true on a hit.
    pub fn collide(&self, ball: &mut Ball, limit: BounceLimit) -> bool {
        // Too high
        if ball.bottom() < self.pos.y {
            return false;
        }
        // Already past the top edge
        if ball.top() > self.pos.y {
            return false;
        }
        // Too far left
        if ball.right() < self.pos.x {
            return false;
        }
        // Too far right
        if ball.left() > self.pos.x + self.width {
            return false;
        }

        self.rebound(ball, limit);
        true
    }

    /// Send the ball back up, angled by the contact offset, keeping its speed
    pub fn rebound(&self, ball: &mut Ball, limit: BounceLimit) {
        let angle = self.bounce_angle(ball.pos.x, limit);
        let speed = ball.speed();

        ball.vel = Vec2::new(speed * -angle.cos(), speed * -angle.sin());
        // Lift out of the paddle so the next tick doesn't hit again
        ball.pos.y = self.pos.y - ball.radius - 1.0;
    }

    /// Outgoing angle for a ball centered at `ball_x`; π/2 is straight up.
    pub fn bounce_angle(&self, ball_x: f32, limit: BounceLimit) -> f32 {
        let relative = ball_x - self.center_x();
        let normalized = relative / self.half_width();
        FRAC_PI_2 + limit.apply(normalized)
    }
}

impl Wall {
    /// Rebound the ball if it reaches this wall's inner face.
    ///
    /// Returns true on a hit.
    pub fn collide(&self, ball: &mut Ball) -> bool {
        let touching = match self.side {
            WallSide::Left => ball.left() <= self.right_edge(),
            WallSide::Right => ball.right() >= self.pos.x,
            WallSide::Top => ball.top() <= self.bottom_edge(),
        };
        if touching {
            self.rebound(ball);
        }
        touching
    }

    /// Reflect the ball along the wall's axis and place it just clear of the wall
    pub fn rebound(&self, ball: &mut Ball) {
        match self.side {
            WallSide::Left => {
                ball.vel.x = -ball.vel.x;
                ball.pos.x = self.right_edge() + ball.radius;
            }
            WallSide::Right => {
                ball.vel.x = -ball.vel.x;
                ball.pos.x = self.pos.x - ball.radius;
            }
            WallSide::Top => {
                ball.vel.y = -ball.vel.y;
                ball.pos.y = self.bottom_edge() + ball.radius;
            }
        }
    }
}
