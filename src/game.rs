//! The frame loop
//!
//! One call per display refresh: draw background and walls, run the tick(s)
//! the clock allows, draw paddle and ball. There is a single running state and
//! no exit; the host keeps calling `frame` for the life of the page.

use crate::input::{ClientRect, PointerState};
use crate::renderer::{Surface, draw_dynamic, draw_static};
use crate::sim::{Field, FrameClock, GameState, TickReport, WallSide, tick};
use crate::tuning::Tuning;

/// Summary of one rendered frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub ticks: u32,
    pub paddle_hits: u32,
    pub wall_hits: Vec<WallSide>,
    pub misses: u32,
}

impl FrameReport {
    fn absorb(&mut self, tick: TickReport) {
        self.ticks += 1;
        if tick.paddle_hit {
            self.paddle_hits += 1;
        }
        self.wall_hits.extend(tick.wall_hits);
        if tick.missed {
            self.misses += 1;
        }
    }
}

/// Owns the game state, the pointer state and the pacing clock
pub struct FrameLoop {
    state: GameState,
    pointer: PointerState,
    tuning: Tuning,
    clock: FrameClock,
    frames: u64,
}

impl FrameLoop {
    pub fn new(field: Field, tuning: Tuning) -> Self {
        log::info!(
            "Field {}x{}, bounce limit {:?}, miss policy {:?}, pacing {:?}",
            field.width,
            field.height,
            tuning.bounce_limit,
            tuning.miss_policy,
            tuning.pacing
        );
        Self {
            state: GameState::new(field, &tuning),
            pointer: PointerState::new(),
            clock: FrameClock::new(tuning.pacing),
            tuning,
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn pointer_mut(&mut self) -> &mut PointerState {
        &mut self.pointer
    }

    /// Feed a pointer-move event in viewport coordinates
    pub fn pointer_moved(&mut self, client_x: f32, client_y: f32, rect: &ClientRect) {
        let field = self.state.field;
        if !self.pointer.track(client_x, client_y, rect, &field) {
            log::debug!("Ignoring pointer move over an empty rect");
        }
    }

    /// Run one display frame
    pub fn frame<S: Surface + ?Sized>(&mut self, time_ms: f64, surface: &mut S) -> FrameReport {
        self.frames += 1;
        let mut report = FrameReport::default();

        draw_static(&self.state, surface);

        for _ in 0..self.clock.advance(time_ms) {
            report.absorb(tick(&mut self.state, &self.pointer, &self.tuning));
        }

        draw_dynamic(&self.state, surface);

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{Color, DrawCommand, RecordingSurface};
    use crate::tuning::Pacing;
    use glam::Vec2;

    #[test]
    fn test_frame_order_static_tick_dynamic() {
        let mut game = FrameLoop::new(Field::new(640.0, 480.0), Tuning::default());
        let mut surface = RecordingSurface::new();

        let report = game.frame(16.0, &mut surface);
        assert_eq!(report.ticks, 1);

        // Background first, ball last and already moved
        assert_eq!(surface.commands[0], DrawCommand::Fill(Color::Black));
        assert_eq!(
            surface.commands.last(),
            Some(&DrawCommand::Circle { x: 315.0, y: 239.0, r: 5.0 })
        );
    }

    #[test]
    fn test_pointer_drives_paddle_next_frame() {
        let mut game = FrameLoop::new(Field::new(640.0, 480.0), Tuning::default());
        let mut surface = RecordingSurface::new();

        // Canvas shown at double size
        let rect = ClientRect::new(0.0, 0.0, 1280.0, 960.0);
        game.pointer_moved(400.0, 100.0, &rect);
        assert_eq!(game.pointer().position(), Some(Vec2::new(200.0, 50.0)));

        game.frame(0.0, &mut surface);
        assert_eq!(game.state().paddle.pos.x, 160.0);
    }

    #[test]
    fn test_fixed_pacing_runs_by_elapsed_time() {
        let tuning = Tuning {
            pacing: Pacing::Fixed { hz: 60.0 },
            ..Default::default()
        };
        let mut game = FrameLoop::new(Field::new(640.0, 480.0), tuning);
        let mut surface = RecordingSurface::new();

        assert_eq!(game.frame(0.0, &mut surface).ticks, 1);
        // 30 Hz display: two ticks per frame
        let report = game.frame(1000.0 / 30.0 + 0.01, &mut surface);
        assert_eq!(report.ticks, 2);
        assert_eq!(game.state().time_ticks, 3);
        assert_eq!(game.frames(), 2);
    }
}
