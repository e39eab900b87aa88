use crate::domain::{Mode, Pointer, Tuning};
use crate::systems::{BubbleGrid, ParticleField};

use super::perf_stats::PerfStats;
use super::{AnimationDriver, Session};

/// Sessions start in bubble mode, like the page does: a fresh grid and an
/// empty (not yet animated) particle field.
pub(super) fn create_session(width: f32, height: f32, tuning: Tuning, seed: u32) -> Session {
    let width = width.max(0.0);
    let height = height.max(0.0);

    let bubbles = BubbleGrid::new(tuning.bubble_cols, tuning.bubble_rows);
    let mut field = ParticleField::new(tuning.field_params(), seed);
    field.resize(width, height);

    Session {
        tuning,
        mode: Mode::Bubble,
        bubbles,
        field,
        pointer: Pointer::default(),
        driver: AnimationDriver::new(),
        surface_width: width,
        surface_height: height,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
