//! Drawing
//!
//! The game only ever fills rectangles and circles in black or white, so the
//! surface contract is three calls. `canvas` backs it with a browser Canvas 2D
//! context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::sim::GameState;

/// Fill colors used by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn as_css(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
        }
    }
}

/// A 2D drawing target in field coordinates
pub trait Surface {
    fn set_fill(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_circle(&mut self, x: f32, y: f32, r: f32);
}

/// Background and walls
pub fn draw_static<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    surface.set_fill(Color::Black);
    surface.fill_rect(0.0, 0.0, state.field.width, state.field.height);

    surface.set_fill(Color::White);
    for wall in &state.walls {
        surface.fill_rect(wall.pos.x, wall.pos.y, wall.width, wall.height);
    }
}

/// Paddle and ball
pub fn draw_dynamic<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let paddle = &state.paddle;
    surface.set_fill(Color::White);
    surface.fill_rect(paddle.pos.x, paddle.pos.y, paddle.width, paddle.height);

    let ball = &state.ball;
    surface.fill_circle(ball.pos.x, ball.pos.y, ball.radius);
}

/// A surface that records what was drawn. Used headless and in tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Fill(Color),
    Rect { x: f32, y: f32, w: f32, h: f32 },
    Circle { x: f32, y: f32, r: f32 },
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn set_fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Rect { x, y, w, h });
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32) {
        self.commands.push(DrawCommand::Circle { x, y, r });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::sim::Field;

    #[test]
    fn test_static_draws_background_then_walls() {
        let state = GameState::new(Field::new(640.0, 480.0), &Tuning::default());
        let mut surface = RecordingSurface::new();
        draw_static(&state, &mut surface);

        assert_eq!(
            surface.commands,
            vec![
                DrawCommand::Fill(Color::Black),
                DrawCommand::Rect { x: 0.0, y: 0.0, w: 640.0, h: 480.0 },
                DrawCommand::Fill(Color::White),
                DrawCommand::Rect { x: 0.0, y: 0.0, w: 8.0, h: 478.0 },
                DrawCommand::Rect { x: 632.0, y: 0.0, w: 8.0, h: 478.0 },
                DrawCommand::Rect { x: 0.0, y: 0.0, w: 640.0, h: 8.0 },
            ]
        );
    }

    #[test]
    fn test_dynamic_draws_paddle_then_ball() {
        let state = GameState::new(Field::new(640.0, 480.0), &Tuning::default());
        let mut surface = RecordingSurface::new();
        draw_dynamic(&state, &mut surface);

        assert_eq!(
            surface.commands,
            vec![
                DrawCommand::Fill(Color::White),
                DrawCommand::Rect { x: 280.0, y: 470.0, w: 80.0, h: 8.0 },
                DrawCommand::Circle { x: 315.0, y: 235.0, r: 5.0 },
            ]
        );
    }

    #[test]
    fn test_css_names() {
        assert_eq!(Color::Black.as_css(), "black");
        assert_eq!(Color::White.as_css(), "white");
    }
}
