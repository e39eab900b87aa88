//! Zen particle field
//!
//! A fixed-size set of free-floating particles. The count only changes
//! through `initialize`/`reset`, which rebuild the whole collection.

pub mod forces;

use std::f32::consts::TAU;

use crate::core::math::Vec2;
use crate::core::utils::rng::Rng;
use crate::domain::{FieldParams, Particle, ParticleColor, Pointer};
use crate::simulation::Surface;

/// Counters from one `step`, fed into perf stats
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    pub particles: u32,
    pub reflections: u32,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    params: FieldParams,
    rng: Rng,
}

impl ParticleField {
    /// Empty field; call `initialize` to populate it
    pub fn new(params: FieldParams, seed: u32) -> Self {
        Self {
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            params,
            rng: Rng::new(seed),
        }
    }

    /// Field with hand-placed particles
    pub fn from_particles(
        params: FieldParams,
        width: f32,
        height: f32,
        particles: Vec<Particle>,
        seed: u32,
    ) -> Self {
        Self {
            particles,
            width,
            height,
            params,
            rng: Rng::new(seed),
        }
    }

    /// Replace all particles with `count` fresh ones spread over
    /// `[0, width) x [0, height)`
    pub fn initialize(&mut self, width: f32, height: f32, count: usize) {
        self.width = width;
        self.height = height;
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let particle = self.spawn();
            self.particles.push(particle);
        }
    }

    /// Rebuild with `count` particles over the current bounds
    pub fn reset(&mut self, count: usize) {
        self.initialize(self.width, self.height, count);
    }

    /// Drop every particle (mode exit)
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// New surface bounds; particle state is left untouched
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn set_params(&mut self, params: FieldParams) {
        self.params = params;
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    /// Advance every particle by exactly one tick against the given bounds
    pub fn step(&mut self, pointer: &Pointer, width: f32, height: f32) -> StepStats {
        self.resize(width, height);
        self.step_in_place(pointer)
    }

    /// Advance one tick against the stored bounds
    pub fn step_in_place(&mut self, pointer: &Pointer) -> StepStats {
        let params = self.params;
        let (width, height) = (self.width, self.height);
        let mut stats = StepStats {
            particles: self.particles.len() as u32,
            reflections: 0,
        };

        for p in self.particles.iter_mut() {
            stats.reflections += forces::reflect(p, width, height);
            forces::apply_jitter(p, params.jitter, &mut self.rng);
            forces::apply_pointer(p, pointer, &params);
            forces::apply_friction(p, params.friction);
            forces::integrate(p);
        }

        stats
    }

    /// Draw every particle as a filled circle
    pub fn render(&self, surface: &mut dyn Surface) {
        for p in &self.particles {
            surface.fill_circle(p.pos.x, p.pos.y, p.radius, p.color);
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    fn spawn(&mut self) -> Particle {
        let rng = &mut self.rng;
        let pos = Vec2::new(rng.range(0.0, self.width), rng.range(0.0, self.height));
        let heading = rng.range(0.0, TAU);
        let speed = rng.range(self.params.speed_min, self.params.speed_max);
        let radius = rng.range(self.params.radius_min, self.params.radius_max);
        let hue = rng.below(360) as u16;
        Particle::new(pos, Vec2::from_angle(heading, speed), radius, ParticleColor::from_hue(hue))
    }
}
