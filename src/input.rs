//! Pointer tracking
//!
//! Maps viewport pointer coordinates into field space and keeps the most
//! recent position for the paddle to follow.

use glam::Vec2;

use crate::sim::Field;

/// Bounding box of the drawing surface in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl ClientRect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Map a viewport position into field coordinates, rounded to whole units.
///
/// Returns `None` when the rect has no area (surface hidden or collapsed).
pub fn map_to_field(client_x: f32, client_y: f32, rect: &ClientRect, field: &Field) -> Option<Vec2> {
    let (w, h) = (rect.width(), rect.height());
    if w == 0.0 || h == 0.0 {
        return None;
    }
    let x = ((client_x - rect.left) / w * field.width).round();
    let y = ((client_y - rect.top) / h * field.height).round();
    Some(Vec2::new(x, y))
}

/// Most recently observed pointer position, unset until the first move
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    position: Option<Vec2>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new position; last writer wins
    pub fn set(&mut self, pos: Vec2) {
        self.position = Some(pos);
    }

    pub fn clear(&mut self) {
        self.position = None;
    }

    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Map a viewport position and record it. Returns false if the rect was degenerate.
    pub fn track(&mut self, client_x: f32, client_y: f32, rect: &ClientRect, field: &Field) -> bool {
        match map_to_field(client_x, client_y, rect, field) {
            Some(pos) => {
                self.set(pos);
                true
            }
            None => false,
        }
    }
}
