use std::fmt;

use crate::core::math::Vec2;

/// Fixed saturation/lightness used for every particle hue
const SATURATION_PCT: u8 = 70;
const LIGHTNESS_PCT: u8 = 70;

/// Particle fill color; only the hue varies between particles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParticleColor {
    /// Degrees, 0..360
    pub hue: u16,
}

impl ParticleColor {
    pub fn from_hue(hue: u16) -> Self {
        Self { hue: hue % 360 }
    }

    /// CSS color string, e.g. `hsl(210, 70%, 70%)`
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ParticleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, SATURATION_PCT, LIGHTNESS_PCT)
    }
}

/// A single zen particle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Position in surface units
    pub pos: Vec2,
    /// Velocity (units per tick)
    pub vel: Vec2,
    /// Draw radius, fixed at creation
    pub radius: f32,
    /// Fixed at creation
    pub color: ParticleColor,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: ParticleColor) -> Self {
        Self { pos, vel, radius, color }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_color() {
        assert_eq!(ParticleColor::from_hue(210).css(), "hsl(210, 70%, 70%)");
        assert_eq!(ParticleColor::from_hue(365).hue, 5);
    }
}
