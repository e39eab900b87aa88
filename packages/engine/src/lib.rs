//! Serene Engine - stress-relief toy simulation in WASM
//!
//! Two toys behind one session: a bubble-wrap grid and a zen particle
//! field that follows (or flees) the pointer.
//!
//! Architecture:
//! - core/       - Logging macro, RNG, vector math
//! - domain/     - Plain data (bubbles, particles, pointer, mode, tuning)
//! - systems/    - Bubble grid and particle field logic
//! - simulation/ - Session orchestration and the animation driver
//! - api/        - Public wasm API and the canvas surface

// Utils with logging macro (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("🫧 Serene engine v{} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::SereneApp;
pub use domain::{Mode, Tuning};
pub use simulation::{Session, Surface, TickToken};
pub use systems::{BubbleGrid, ParticleField};
