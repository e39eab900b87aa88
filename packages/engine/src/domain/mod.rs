//! Domain - plain data shared by the systems and the session

pub mod bubble;
pub mod mode;
pub mod particle;
pub mod pointer;
pub mod tuning;

pub use bubble::{BubbleState, Readout};
pub use mode::Mode;
pub use particle::{Particle, ParticleColor};
pub use pointer::Pointer;
pub use tuning::{FieldParams, Tuning};
