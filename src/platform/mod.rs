//! Platform hosts
//!
//! - `web`: browser canvas, mouse events and frame scheduling (wasm32)
//! - `headless`: scripted runs against a recording surface

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::{Autopilot, RunSummary, run_headless};
#[cfg(target_arch = "wasm32")]
pub use web::run;
