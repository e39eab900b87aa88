use crate::domain::Mode;

use super::Session;

// The grid is hidden and empty-of-meaning while the particles run, so
// bubble commands only act in bubble mode.

pub(super) fn pop(session: &mut Session, index: usize) -> bool {
    match session.mode {
        Mode::Bubble => session.bubbles.pop(index),
        Mode::Particles => false,
    }
}

pub(super) fn pop_all(session: &mut Session) -> usize {
    match session.mode {
        Mode::Bubble => session.bubbles.pop_all(),
        Mode::Particles => 0,
    }
}

pub(super) fn reset_bubbles(session: &mut Session) {
    match session.mode {
        Mode::Bubble => session
            .bubbles
            .reset_with_layout(session.tuning.bubble_cols, session.tuning.bubble_rows),
        Mode::Particles => {}
    }
}
