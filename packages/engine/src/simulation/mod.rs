//! Session - the single controller that owns both toys
//!
//! Owns the bubble grid, the particle field, the pointer sample and the
//! animation driver. Nothing lives in module-level state; the wasm facade
//! holds exactly one `Session`.
//!
//! Mode switches always stop the driver before tearing down the previous
//! toy, so a frame the host already scheduled cannot touch stale state.

use crate::domain::{Mode, Pointer, Readout, Tuning};
use crate::systems::{BubbleGrid, ParticleField};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "driver/driver.rs"]
mod driver;
#[path = "render/surface.rs"]
mod surface;
#[path = "commands/commands.rs"]
mod commands;
#[path = "commands/bubbles.rs"]
mod bubble_commands;
#[path = "step/step.rs"]
mod step;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;

pub use driver::{AnimationDriver, DriverState, TickToken};
pub use perf_stats::PerfStats;
pub use surface::{Circle, RecordingSurface, Surface};

use perf_timer::PerfTimer;

pub struct Session {
    tuning: Tuning,
    mode: Mode,
    bubbles: BubbleGrid,
    field: ParticleField,
    pointer: Pointer,
    driver: AnimationDriver,

    // Last size reported by the host
    surface_width: f32,
    surface_height: f32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Session {
    /// Session in bubble mode with default tuning
    pub fn new(width: f32, height: f32, seed: u32) -> Self {
        init::create_session(width, height, Tuning::default(), seed)
    }

    /// Session with custom tuning; fails if the tuning does not validate
    pub fn with_tuning(width: f32, height: f32, tuning: Tuning, seed: u32) -> Result<Self, String> {
        tuning.validate()?;
        Ok(init::create_session(width, height, tuning, seed))
    }

    // === MODE CONTROL ===

    /// Stop any running animation, drop the particles, show a fresh grid
    pub fn select_bubble_mode(&mut self) {
        commands::select_bubble_mode(self)
    }

    /// Stop any running animation, clear the grid, spawn a fresh field and
    /// start the driver. The returned token must accompany every `tick`.
    pub fn select_particle_mode(&mut self) -> TickToken {
        commands::select_particle_mode(self)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    // === ANIMATION ===

    /// Run one frame if `token` is still current.
    ///
    /// Returns false (and does nothing) for stale tokens; the host should
    /// stop rescheduling when that happens.
    pub fn tick(&mut self, token: TickToken, surface: &mut dyn Surface) -> bool {
        step::tick(self, token, surface)
    }

    /// Stop the driver without switching mode
    pub fn stop(&mut self) -> bool {
        self.driver.stop()
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    /// Accepted ticks so far
    pub fn frame(&self) -> u64 {
        self.driver.ticks()
    }

    // === SURFACE & POINTER ===

    /// Host reported a new surface size; particles keep their state
    pub fn resize(&mut self, width: f32, height: f32) {
        commands::resize(self, width, height)
    }

    pub fn surface_size(&self) -> (f32, f32) {
        (self.surface_width, self.surface_height)
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.move_to(x, y);
    }

    pub fn pointer_pressed(&mut self) {
        self.pointer.press();
    }

    pub fn pointer_released(&mut self) {
        self.pointer.release();
    }

    pub fn pointer_left(&mut self) {
        self.pointer.leave();
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    // === BUBBLES ===

    /// Pop one bubble; true only when it actually popped
    pub fn pop(&mut self, index: usize) -> bool {
        bubble_commands::pop(self, index)
    }

    /// Pop everything still intact; returns how many popped
    pub fn pop_all(&mut self) -> usize {
        bubble_commands::pop_all(self)
    }

    pub fn reset_bubbles(&mut self) {
        bubble_commands::reset_bubbles(self)
    }

    pub fn popped_count(&self) -> usize {
        self.bubbles.popped_count()
    }

    pub fn readout(&self) -> Readout {
        self.bubbles.readout()
    }

    pub fn bubbles(&self) -> &BubbleGrid {
        &self.bubbles
    }

    // === PARTICLES ===

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn particle_count(&self) -> usize {
        self.field.len()
    }

    /// Clamp `count` into the configured range and, in particle mode,
    /// rebuild the field with it. Returns the count actually used.
    pub fn set_particle_count(&mut self, count: u32) -> u32 {
        settings::set_particle_count(self, count)
    }

    // === SETTINGS ===

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Replace the tuning. Physics constants apply from the next tick;
    /// counts and grid layout from the next reset.
    pub fn load_tuning(&mut self, tuning: Tuning) -> Result<(), String> {
        settings::load_tuning(self, tuning)
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
