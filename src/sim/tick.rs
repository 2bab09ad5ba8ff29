//! Per-tick simulation update
//!
//! Order within a tick: paddle follows the pointer, ball moves, paddle
//! collision, wall collisions (left, right, top), then the bottom-exit check.

use super::entities::WallSide;
use super::state::GameState;
use crate::input::PointerState;
use crate::tuning::{MissPolicy, Tuning};

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub paddle_hit: bool,
    pub wall_hits: Vec<WallSide>,
    /// Ball crossed the open bottom this tick
    pub missed: bool,
}

impl TickReport {
    pub fn is_quiet(&self) -> bool {
        !self.paddle_hit && self.wall_hits.is_empty() && !self.missed
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, pointer: &PointerState, tuning: &Tuning) -> TickReport {
    let mut report = TickReport::default();
    state.time_ticks += 1;

    // Movement
    state.paddle.track(pointer);
    state.ball.step();

    // Collisions
    if state.paddle.collide(&mut state.ball, tuning.bounce_limit) {
        log::debug!("Paddle hit at tick {}, vel {:?}", state.time_ticks, state.ball.vel);
        report.paddle_hit = true;
    }
    for wall in &state.walls {
        if wall.collide(&mut state.ball) {
            log::debug!("{:?} wall hit at tick {}", wall.side, state.time_ticks);
            report.wall_hits.push(wall.side);
        }
    }

    // Open bottom
    if state.ball_below_field() && !state.ball_out {
        state.misses += 1;
        report.missed = true;
        log::info!("Ball missed ({} total)", state.misses);

        match tuning.miss_policy {
            MissPolicy::OpenField => state.ball_out = true,
            MissPolicy::Respawn => state.respawn_ball(tuning),
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Ball, Field};
    use glam::Vec2;

    fn new_state(tuning: &Tuning) -> GameState {
        GameState::new(Field::new(640.0, 480.0), tuning)
    }

    #[test]
    fn test_free_flight_tick() {
        let tuning = Tuning::default();
        let mut state = new_state(&tuning);
        state.ball = Ball::new(Vec2::new(100.0, 100.0), Vec2::new(0.0, 4.0), 5.0);

        let report = tick(&mut state, &PointerState::new(), &tuning);
        assert!(report.is_quiet());
        assert_eq!(state.ball.pos, Vec2::new(100.0, 104.0));
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_paddle_moves_before_collision() {
        let tuning = Tuning::default();
        let mut state = new_state(&tuning);
        // Ball about to reach the paddle's top edge, far from the paddle's start
        state.ball = Ball::new(Vec2::new(100.0, 464.0), Vec2::new(0.0, 4.0), 5.0);

        let mut pointer = PointerState::new();
        pointer.set(Vec2::new(100.0, 400.0));

        let report = tick(&mut state, &pointer, &tuning);
        assert!(report.paddle_hit);
        assert_eq!(state.paddle.pos.x, 60.0);
        assert!(state.ball.vel.y < 0.0);
        assert_eq!(state.ball.pos.y, 470.0 - 5.0 - 1.0);
    }

    #[test]
    fn test_corner_hits_two_walls_in_order() {
        let tuning = Tuning::default();
        let mut state = new_state(&tuning);
        state.ball = Ball::new(Vec2::new(15.0, 15.0), Vec2::new(-4.0, -4.0), 5.0);

        let report = tick(&mut state, &PointerState::new(), &tuning);
        assert_eq!(report.wall_hits, vec![WallSide::Left, WallSide::Top]);
        assert_eq!(state.ball.vel, Vec2::new(4.0, 4.0));
        assert_eq!(state.ball.pos, Vec2::new(13.0, 13.0));
    }

    #[test]
    fn test_open_field_reports_miss_once() {
        let tuning = Tuning::default();
        let mut state = new_state(&tuning);
        state.ball = Ball::new(Vec2::new(600.0, 483.0), Vec2::new(0.0, 4.0), 5.0);
        // Keep the paddle out of the way
        state.paddle.pos.x = 100.0;

        let report = tick(&mut state, &PointerState::new(), &tuning);
        assert!(report.missed);
        assert_eq!(state.misses, 1);

        for _ in 0..10 {
            let report = tick(&mut state, &PointerState::new(), &tuning);
            assert!(!report.missed);
        }
        assert_eq!(state.misses, 1);
        assert_eq!(state.ball.pos.y, 487.0 + 40.0);
    }

    #[test]
    fn test_respawn_policy_recenters_ball() {
        let tuning = Tuning {
            miss_policy: MissPolicy::Respawn,
            ..Default::default()
        };
        let mut state = new_state(&tuning);
        state.ball = Ball::new(Vec2::new(600.0, 483.0), Vec2::new(1.0, 4.0), 5.0);
        state.paddle.pos.x = 100.0;

        let report = tick(&mut state, &PointerState::new(), &tuning);
        assert!(report.missed);
        assert_eq!(state.misses, 1);
        assert_eq!(state.ball.pos, Vec2::new(315.0, 235.0));
        assert_eq!(state.ball.vel, Vec2::new(0.0, 4.0));
    }

    #[test]
    fn test_determinism() {
        let tuning = Tuning::default();
        let mut state1 = new_state(&tuning);
        let mut state2 = new_state(&tuning);

        let mut pointer = PointerState::new();
        for i in 0..500 {
            pointer.set(Vec2::new((i * 7 % 640) as f32, 300.0));
            tick(&mut state1, &pointer, &tuning);
            tick(&mut state2, &pointer, &tuning);
        }

        assert_eq!(state1.ball, state2.ball);
        assert_eq!(state1.paddle, state2.paddle);
        assert_eq!(state1.misses, state2.misses);
    }
}
