use crate::domain::{Mode, Tuning};

use super::Session;

pub(super) fn set_particle_count(session: &mut Session, count: u32) -> u32 {
    let count = session.tuning.clamp_particle_count(count);
    session.tuning.particle_count = count;

    match session.mode {
        Mode::Particles => {
            session.field.reset(count as usize);
            console_log!("particle field reset: {} particles", count);
        }
        Mode::Bubble => {}
    }

    count
}

pub(super) fn load_tuning(session: &mut Session, tuning: Tuning) -> Result<(), String> {
    tuning.validate()?;
    session.field.set_params(tuning.field_params());
    console_log!(
        "tuning loaded: {} particles, {}x{} bubbles",
        tuning.particle_count,
        tuning.bubble_cols,
        tuning.bubble_rows
    );
    session.tuning = tuning;
    Ok(())
}

pub(super) fn enable_perf_metrics(session: &mut Session, enabled: bool) {
    session.perf_enabled = enabled;
    if !enabled {
        session.perf_stats.reset();
    }
}
