//! Simulation module
//!
//! Plain-data entities, the collision/rebound rules and the per-tick update.
//! Nothing here touches the browser, so it runs and tests natively.

pub mod clock;
pub mod collision;
pub mod entities;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use entities::{Ball, Field, Paddle, Wall, WallSide};
pub use state::GameState;
pub use tick::{TickReport, tick};
