//! Drawing target abstraction
//!
//! The session draws through `Surface` so the same tick code runs against a
//! browser canvas (`api::canvas::CanvasSurface`) or headless in tests.

use crate::domain::ParticleColor;

pub trait Surface {
    /// Logical width (CSS pixels / simulation units)
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    /// Wipe the whole surface
    fn clear(&mut self);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: ParticleColor);
}

/// One recorded `fill_circle` call
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: ParticleColor,
}

/// Headless surface that records what was drawn since the last `clear`
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    circles: Vec<Circle>,
    clears: u32,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, circles: Vec::new(), clears: 0 }
    }

    /// Circles drawn since the last clear
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Total `clear` calls, i.e. frames started
    pub fn clears(&self) -> u32 {
        self.clears
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.circles.clear();
        self.clears += 1;
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: ParticleColor) {
        self.circles.push(Circle { x, y, radius, color });
    }
}
