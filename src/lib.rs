//! Wall Pong - a ball bouncing between three walls and a mouse-driven paddle
//!
//! Core modules:
//! - `sim`: Simulation (entities, collisions, per-tick update, frame pacing)
//! - `input`: Pointer tracking in field coordinates
//! - `renderer`: Drawing-surface abstraction and frame drawing
//! - `game`: The frame loop tying simulation, input and drawing together
//! - `tuning`: Data-driven game configuration
//! - `platform`: Browser host (canvas, events, scheduling)

pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::{FrameLoop, FrameReport};
pub use input::{ClientRect, PointerState};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Thickness of the left, right and top walls
    pub const WALL_THICKNESS: f32 = 8.0;
    /// Side walls stop this far above the bottom of the field
    pub const SIDE_WALL_GAP: f32 = 2.0;

    /// Paddle height
    pub const PADDLE_HEIGHT: f32 = 8.0;
    /// Gap between the paddle and the bottom of the field
    pub const PADDLE_BOTTOM_GAP: f32 = 2.0;
    /// Paddle width is the field width divided by this
    pub const PADDLE_WIDTH_DIVISOR: f32 = 8.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 5.0;
    pub const BALL_START_DX: f32 = 0.0;
    pub const BALL_START_DY: f32 = 4.0;

    /// Largest deflection from vertical after a paddle hit (radians)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::PI / 12.0;

    /// Timer interval used when the host has no animation-frame callback
    pub const FALLBACK_FRAME_MS: f64 = 1000.0 / 60.0;

    /// Field size used when the host does not supply one
    pub const DEFAULT_FIELD_WIDTH: f32 = 640.0;
    pub const DEFAULT_FIELD_HEIGHT: f32 = 480.0;

    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame gap fed to the fixed-rate clock (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
