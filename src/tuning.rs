//! Data-driven game configuration
//!
//! Every field has a default that reproduces the classic behavior; the browser
//! host can override any subset through a JSON `data-tuning` attribute.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How far a paddle hit may deflect the ball from vertical
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "radians")]
pub enum BounceLimit {
    /// Deflection is the raw normalized contact offset (up to ~1 rad, more off the edges)
    Unclamped,
    /// Deflection is clamped to ±radians
    Clamped(f32),
}

impl Default for BounceLimit {
    fn default() -> Self {
        BounceLimit::Clamped(MAX_BOUNCE_ANGLE)
    }
}

impl BounceLimit {
    /// Apply the limit to a deflection angle
    #[inline]
    pub fn apply(self, deflection: f32) -> f32 {
        match self {
            BounceLimit::Unclamped => deflection,
            BounceLimit::Clamped(max) => deflection.clamp(-max, max),
        }
    }
}

/// What happens when the ball leaves through the open bottom of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissPolicy {
    /// Ball keeps travelling off-field forever
    #[default]
    OpenField,
    /// Ball is re-centered with its starting velocity
    Respawn,
}

/// How simulation ticks are paced against display frames
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum Pacing {
    /// One tick per display frame, whatever the refresh rate
    #[default]
    PerFrame,
    /// Ticks at a fixed rate, independent of the refresh rate
    Fixed { hz: f32 },
}

/// Game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub bounce_limit: BounceLimit,
    pub miss_policy: MissPolicy,
    pub pacing: Pacing,
    pub ball_radius: f32,
    pub ball_start_velocity: Vec2,
    pub wall_thickness: f32,
    pub paddle_height: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            bounce_limit: BounceLimit::default(),
            miss_policy: MissPolicy::default(),
            pacing: Pacing::default(),
            ball_radius: BALL_RADIUS,
            ball_start_velocity: Vec2::new(BALL_START_DX, BALL_START_DY),
            wall_thickness: WALL_THICKNESS,
            paddle_height: PADDLE_HEIGHT,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Replace values that would break the simulation with defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.ball_radius.is_finite() && self.ball_radius > 0.0) {
            log::warn!("Invalid ball_radius {}, using {}", self.ball_radius, defaults.ball_radius);
            self.ball_radius = defaults.ball_radius;
        }
        if !self.ball_start_velocity.is_finite() {
            log::warn!("Invalid ball_start_velocity, using default");
            self.ball_start_velocity = defaults.ball_start_velocity;
        }
        if !(self.wall_thickness.is_finite() && self.wall_thickness >= 0.0) {
            log::warn!("Invalid wall_thickness {}, using default", self.wall_thickness);
            self.wall_thickness = defaults.wall_thickness;
        }
        if !(self.paddle_height.is_finite() && self.paddle_height > 0.0) {
            log::warn!("Invalid paddle_height {}, using default", self.paddle_height);
            self.paddle_height = defaults.paddle_height;
        }
        if let BounceLimit::Clamped(max) = self.bounce_limit {
            if !(max.is_finite() && max >= 0.0) {
                log::warn!("Invalid bounce limit {}, using default", max);
                self.bounce_limit = defaults.bounce_limit;
            }
        }
        if let Pacing::Fixed { hz } = self.pacing {
            if !(hz.is_finite() && hz > 0.0) {
                log::warn!("Invalid tick rate {}, pacing per frame", hz);
                self.pacing = Pacing::PerFrame;
            }
        }

        self
    }
}
