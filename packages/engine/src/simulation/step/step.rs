use crate::domain::Mode;
use crate::systems::StepStats;

use super::{PerfTimer, Session, Surface, TickToken};

/// One animation frame: clear, advance the field one tick, draw.
pub(super) fn tick(session: &mut Session, token: TickToken, surface: &mut dyn Surface) -> bool {
    if !session.driver.accept(token) {
        return false;
    }

    let perf_on = session.perf_enabled;
    let mut timer = if perf_on { Some(PerfTimer::start()) } else { None };

    // Zero particles still clears and redraws
    surface.clear();
    let stats = match session.mode {
        Mode::Particles => {
            // Bounds come from the last `resize`, not from the draw target
            session
                .field
                .step(&session.pointer, session.surface_width, session.surface_height)
        }
        // Only particle mode starts the driver
        Mode::Bubble => StepStats::default(),
    };
    let step_ms = timer.as_mut().map_or(0.0, |t| t.lap_ms());

    session.field.render(surface);
    let render_ms = timer.as_mut().map_or(0.0, |t| t.lap_ms());

    if perf_on {
        let perf = &mut session.perf_stats;
        perf.reset();
        perf.step_ms = step_ms;
        perf.render_ms = render_ms;
        perf.particles_processed = stats.particles;
        perf.reflections = stats.reflections;
        perf.particle_count = session.field.len() as u32;
        perf.ticks = session.driver.ticks() as u32;
    }

    true
}
