//! wasm-bindgen facade
//!
//! JS drives the frame loop. A typical host:
//!
//! ```js
//! const app = new SereneApp(canvas);
//! const token = app.select_particle_mode();
//! const loop = () => { if (app.frame(token)) requestAnimationFrame(loop); };
//! requestAnimationFrame(loop);
//! ```
//!
//! Switching modes invalidates `token`, so the queued frame returns false
//! and the loop ends on its own.

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::api::canvas::CanvasSurface;
use crate::core::utils::rng::Rng;
use crate::domain::{Mode, Tuning};
use crate::simulation::{PerfStats, Session, Surface, TickToken};

#[wasm_bindgen]
pub struct SereneApp {
    session: Session,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl SereneApp {
    /// Bind to a canvas; starts in bubble mode
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<SereneApp, JsValue> {
        let surface = CanvasSurface::new(canvas)?;
        let seed = Rng::from_timestamp(js_sys::Date::now()).next_u32();
        let session = Session::new(surface.width(), surface.height(), seed);
        Ok(Self { session, surface })
    }

    // === MODE CONTROL ===

    pub fn select_bubble_mode(&mut self) {
        self.session.select_bubble_mode();
        self.surface.clear();
    }

    /// Returns the frame token to pass to `frame`
    pub fn select_particle_mode(&mut self) -> u32 {
        self.session.select_particle_mode().raw()
    }

    /// "bubble" or "particles"
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.session.mode().label().to_string()
    }

    // === ANIMATION ===

    /// Run one frame. False means the token is stale: stop scheduling.
    pub fn frame(&mut self, token: u32) -> bool {
        self.session
            .tick(TickToken::from_raw(token), &mut self.surface)
    }

    pub fn stop(&mut self) -> bool {
        self.session.stop()
    }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> u64 {
        self.session.frame()
    }

    // === SURFACE & POINTER ===

    /// Report the canvas' CSS size and device pixel ratio
    pub fn resize(&mut self, width: f32, height: f32, dpr: f32) -> Result<(), JsValue> {
        self.surface.resize(width, height, dpr)?;
        self.session
            .resize(self.surface.width(), self.surface.height());
        Ok(())
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.session.pointer_moved(x, y);
    }

    pub fn pointer_pressed(&mut self) {
        self.session.pointer_pressed();
    }

    pub fn pointer_released(&mut self) {
        self.session.pointer_released();
    }

    pub fn pointer_left(&mut self) {
        self.session.pointer_left();
    }

    // === BUBBLES ===

    /// True when the bubble actually popped (host plays the pop sound)
    pub fn pop(&mut self, index: usize) -> bool {
        self.session.pop(index)
    }

    pub fn pop_all(&mut self) -> usize {
        self.session.pop_all()
    }

    pub fn reset_bubbles(&mut self) {
        self.session.reset_bubbles();
    }

    #[wasm_bindgen(getter)]
    pub fn popped_count(&self) -> usize {
        self.session.popped_count()
    }

    #[wasm_bindgen(getter)]
    pub fn bubble_count(&self) -> usize {
        self.session.bubbles().len()
    }

    #[wasm_bindgen(getter)]
    pub fn bubble_cols(&self) -> u32 {
        self.session.bubbles().cols()
    }

    #[wasm_bindgen(getter)]
    pub fn bubble_rows(&self) -> u32 {
        self.session.bubbles().rows()
    }

    pub fn is_popped(&self, index: usize) -> bool {
        self.session.bubbles().is_popped(index)
    }

    /// Score label, e.g. "7 / 120"
    pub fn readout_label(&self) -> String {
        self.session.readout().to_string()
    }

    /// Pointer to bubble states (one byte each: 0 intact, 1 popped) for a
    /// zero-copy `Uint8Array` view. Invalidated by any reset.
    pub fn bubble_states_ptr(&self) -> *const u8 {
        self.session.bubbles().states().as_ptr() as *const u8
    }

    pub fn bubble_states_len(&self) -> usize {
        self.session.bubbles().len()
    }

    // === PARTICLES ===

    /// Clamped to the configured range; returns the count in effect
    pub fn set_particle_count(&mut self, count: u32) -> u32 {
        self.session.set_particle_count(count)
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> usize {
        self.session.particle_count()
    }

    // === SETTINGS ===

    pub fn load_tuning(&mut self, json: String) -> Result<(), JsValue> {
        let tuning = Tuning::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        self.session
            .load_tuning(tuning)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn tuning_json(&self) -> String {
        self.session.tuning().to_json()
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.session.enable_perf_metrics(enabled);
    }

    /// Last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.session.perf_stats()
    }

    /// True while the particle toy is on screen
    pub fn is_particle_mode(&self) -> bool {
        matches!(self.session.mode(), Mode::Particles)
    }
}
