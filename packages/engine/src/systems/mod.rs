//! Systems - the logic that mutates domain data

pub mod bubbles;
pub mod particles;

pub use bubbles::BubbleGrid;
pub use particles::{ParticleField, StepStats};
