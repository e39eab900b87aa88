//! Core - shared utilities with no knowledge of bubbles or particles
//!
//! `utils` must be declared first so its exported macros are visible
//! to every later module.

#[macro_use]
pub mod utils;
pub mod math;
