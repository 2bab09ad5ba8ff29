//! Game state
//!
//! Everything the frame loop mutates between frames lives here.

use serde::{Deserialize, Serialize};

use super::entities::{Ball, Field, Paddle, Wall};
use crate::tuning::Tuning;

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub field: Field,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Left, right, top - also the collision order
    pub walls: [Wall; 3],
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Times the ball has left through the bottom
    pub misses: u32,
    /// Ball is below the field and has already been reported
    pub(crate) ball_out: bool,
}

impl GameState {
    pub fn new(field: Field, tuning: &Tuning) -> Self {
        Self {
            field,
            ball: Ball::centered(&field, tuning),
            paddle: Paddle::for_field(&field, tuning),
            walls: Wall::boundary(&field, tuning.wall_thickness),
            time_ticks: 0,
            misses: 0,
            ball_out: false,
        }
    }

    /// Put the ball back in the middle with its starting velocity
    pub fn respawn_ball(&mut self, tuning: &Tuning) {
        self.ball = Ball::centered(&self.field, tuning);
        self.ball_out = false;
    }

    /// Ball has fully crossed the open bottom edge
    pub fn ball_below_field(&self) -> bool {
        self.ball.top() > self.field.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_respawn_recenters_ball() {
        let tuning = Tuning::default();
        let mut state = GameState::new(Field::new(640.0, 480.0), &tuning);
        state.ball.pos = Vec2::new(50.0, 900.0);
        state.ball.vel = Vec2::new(-3.0, 2.0);
        state.ball_out = true;
        assert!(state.ball_below_field());

        state.respawn_ball(&tuning);
        assert_eq!(state.ball.pos, Vec2::new(315.0, 235.0));
        assert_eq!(state.ball.vel, tuning.ball_start_velocity);
        assert!(!state.ball_below_field());
        assert!(!state.ball_out);
    }
}
