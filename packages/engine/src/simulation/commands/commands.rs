use crate::domain::Mode;

use super::{Session, TickToken};

pub(super) fn select_bubble_mode(session: &mut Session) {
    // Stop before teardown: a frame the host already queued must find the
    // driver stopped and its token stale.
    session.driver.stop();
    session.field.clear();

    session
        .bubbles
        .reset_with_layout(session.tuning.bubble_cols, session.tuning.bubble_rows);
    session.mode = Mode::Bubble;

    console_log!("mode -> {} ({} bubbles)", session.mode, session.bubbles.len());
}

pub(super) fn select_particle_mode(session: &mut Session) -> TickToken {
    session.driver.stop();
    session
        .bubbles
        .reset_with_layout(session.tuning.bubble_cols, session.tuning.bubble_rows);

    let count = session.tuning.particle_count as usize;
    session.field.set_params(session.tuning.field_params());
    session
        .field
        .initialize(session.surface_width, session.surface_height, count);
    session.mode = Mode::Particles;

    console_log!(
        "mode -> {} ({} particles, {}x{})",
        session.mode,
        count,
        session.surface_width,
        session.surface_height
    );

    session.driver.start()
}

pub(super) fn resize(session: &mut Session, width: f32, height: f32) {
    // NaN.max(0.0) is 0.0, so garbage sizes collapse to an empty surface
    session.surface_width = width.max(0.0);
    session.surface_height = height.max(0.0);

    match session.mode {
        Mode::Particles => session
            .field
            .resize(session.surface_width, session.surface_height),
        Mode::Bubble => {}
    }
}
