//! Canvas 2D surface

use web_sys::CanvasRenderingContext2d;

use super::{Color, Surface};

/// Draws onto a browser `CanvasRenderingContext2d`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn set_fill(&mut self, color: Color) {
        self.ctx.set_fill_style_str(color.as_css());
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32) {
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(x as f64, y as f64, r as f64, 0.0, std::f64::consts::TAU)
        {
            log::warn!("Arc rejected: {:?}", e);
            return;
        }
        self.ctx.fill();
    }
}
