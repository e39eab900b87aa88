use crate::core::math::Vec2;

/// Latest pointer sample reported by the host.
///
/// Last value wins: the host overwrites it, the particle step only reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub pos: Vec2,
    /// Primary button held down
    pub engaged: bool,
    /// False until the host first reports a position
    pub present: bool,
}

impl Pointer {
    /// A pointer hovering at (x, y), button released
    pub fn hovering(x: f32, y: f32) -> Self {
        Self { pos: Vec2::new(x, y), engaged: false, present: true }
    }

    /// A pointer at (x, y) with the button held
    pub fn pressed_at(x: f32, y: f32) -> Self {
        Self { pos: Vec2::new(x, y), engaged: true, present: true }
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
        self.present = true;
    }

    pub fn press(&mut self) {
        self.engaged = true;
    }

    pub fn release(&mut self) {
        self.engaged = false;
    }

    /// Pointer left the surface: the button counts as released, and the
    /// last position keeps pulling
    pub fn leave(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaving_releases_but_keeps_last_position() {
        let mut pointer = Pointer::default();
        assert!(!pointer.present);

        pointer.move_to(12.0, 8.0);
        pointer.press();
        pointer.leave();

        assert!(!pointer.engaged);
        assert!(pointer.present);
        assert_eq!(pointer.pos, Vec2::new(12.0, 8.0));
    }
}
