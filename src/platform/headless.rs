//! Headless host
//!
//! Runs the frame loop against a recording surface with a pointer that chases
//! the ball. Used by the native binary to exercise the simulation without a
//! browser.

use crate::game::FrameLoop;
use crate::input::ClientRect;
use crate::renderer::RecordingSurface;
use crate::sim::{Field, WallSide};
use crate::tuning::Tuning;

/// Display frame interval the headless host pretends to run at
const FRAME_MS: f64 = 1000.0 / 60.0;

/// Totals over a headless run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub ticks: u64,
    pub paddle_hits: u32,
    pub left_hits: u32,
    pub right_hits: u32,
    pub top_hits: u32,
    pub misses: u32,
}

/// Pointer behavior for a headless run
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Autopilot {
    /// Never move the pointer
    Idle,
    /// Put the pointer over the ball, offset by this many field units
    Chase { offset: f32 },
}

pub fn run_headless(field: Field, tuning: Tuning, frames: u64, autopilot: Autopilot) -> RunSummary {
    let mut game = FrameLoop::new(field, tuning);
    let mut surface = RecordingSurface::new();
    let mut summary = RunSummary::default();
    // Viewport rect equal to the field, so client coordinates are field coordinates
    let rect = ClientRect::new(0.0, 0.0, field.width, field.height);

    for frame in 0..frames {
        if let Autopilot::Chase { offset } = autopilot {
            let ball = game.state().ball.pos;
            game.pointer_moved(ball.x + offset, ball.y, &rect);
        }

        surface.clear();
        let report = game.frame(frame as f64 * FRAME_MS, &mut surface);

        summary.ticks += report.ticks as u64;
        summary.paddle_hits += report.paddle_hits;
        summary.misses += report.misses;
        for side in report.wall_hits {
            match side {
                WallSide::Left => summary.left_hits += 1,
                WallSide::Right => summary.right_hits += 1,
                WallSide::Top => summary.top_hits += 1,
            }
        }
    }
    summary.frames = game.frames();

    log::info!("Headless run finished: {:?}", summary);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::MissPolicy;

    #[test]
    fn test_idle_paddle_returns_first_drop() {
        let summary = run_headless(Field::new(640.0, 480.0), Tuning::default(), 120, Autopilot::Idle);
        assert_eq!(summary.frames, 120);
        assert_eq!(summary.ticks, 120);
        // Ball starts at x = 315, over the unmoved paddle (280..360)
        assert_eq!(summary.paddle_hits, 1);
        assert_eq!(summary.misses, 0);
    }

    #[test]
    fn test_idle_paddle_eventually_misses() {
        // Ball drifts left after the first return and the paddle never follows
        let summary = run_headless(Field::new(640.0, 480.0), Tuning::default(), 2000, Autopilot::Idle);
        assert_eq!(summary.misses, 1);
    }

    #[test]
    fn test_chasing_pointer_keeps_ball_in_play() {
        let tuning = Tuning {
            miss_policy: MissPolicy::Respawn,
            ..Default::default()
        };
        let summary = run_headless(
            Field::new(640.0, 480.0),
            tuning,
            2000,
            Autopilot::Chase { offset: 12.0 },
        );
        assert_eq!(summary.misses, 0);
        assert!(summary.paddle_hits > 5);
        assert!(summary.top_hits > 5);
    }
}
