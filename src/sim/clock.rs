//! Frame pacing
//!
//! Decides how many simulation ticks each display frame runs. Movement per
//! tick is always fixed; only the number of ticks per frame varies.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};
use crate::tuning::Pacing;

#[derive(Debug, Clone)]
pub struct FrameClock {
    pacing: Pacing,
    accumulator: f32,
    last_time_ms: Option<f64>,
}

impl FrameClock {
    pub fn new(pacing: Pacing) -> Self {
        Self {
            pacing,
            accumulator: 0.0,
            last_time_ms: None,
        }
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Number of ticks to run for a frame presented at `time_ms`
    pub fn advance(&mut self, time_ms: f64) -> u32 {
        let first = self.last_time_ms.is_none();
        let elapsed = match self.last_time_ms {
            Some(last) => ((time_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_time_ms = Some(time_ms);

        match self.pacing {
            Pacing::PerFrame => 1,
            Pacing::Fixed { hz } => {
                let dt = 1.0 / hz;
                // First frame runs one tick so something moves immediately
                if first {
                    return 1;
                }
                self.accumulator += elapsed.clamp(0.0, MAX_FRAME_DT);

                let mut steps = 0;
                while self.accumulator >= dt && steps < MAX_SUBSTEPS {
                    self.accumulator -= dt;
                    steps += 1;
                }
                // Drop the backlog rather than spiral
                if steps == MAX_SUBSTEPS {
                    self.accumulator = self.accumulator.min(dt);
                }
                steps
            }
        }
    }
}
