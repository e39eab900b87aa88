//! API - the JS-facing surface of the engine

pub mod canvas;
pub mod wasm;
