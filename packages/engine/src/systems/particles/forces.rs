//! Per-particle tick stages, applied in order by `ParticleField::step`:
//! reflect -> jitter -> pointer -> friction -> integrate.

use crate::core::math::Vec2;
use crate::core::utils::rng::Rng;
use crate::domain::{FieldParams, Particle, Pointer};

/// Added to the pointer distance so a particle sitting on the pointer
/// (or a zero-area surface) never divides by zero
pub const DIST_EPSILON: f32 = 1e-4;

/// Flip each velocity component whose next position would leave the
/// surface while moving outward. Position is never clamped.
///
/// Returns the number of axes reflected (0..=2).
#[inline(always)]
pub fn reflect(p: &mut Particle, width: f32, height: f32) -> u32 {
    let mut flips = 0;

    let next_x = p.pos.x + p.vel.x;
    if (next_x < 0.0 && p.vel.x < 0.0) || (next_x > width && p.vel.x > 0.0) {
        p.vel.x = -p.vel.x;
        flips += 1;
    }

    let next_y = p.pos.y + p.vel.y;
    if (next_y < 0.0 && p.vel.y < 0.0) || (next_y > height && p.vel.y > 0.0) {
        p.vel.y = -p.vel.y;
        flips += 1;
    }

    flips
}

/// Zero-mean uniform noise in [-amount/2, amount/2) on each axis
#[inline(always)]
pub fn apply_jitter(p: &mut Particle, amount: f32, rng: &mut Rng) {
    if amount <= 0.0 {
        return;
    }
    p.vel.x += (rng.next_f32() - 0.5) * amount;
    p.vel.y += (rng.next_f32() - 0.5) * amount;
}

/// Velocity delta the pointer exerts on a particle at `pos`.
///
/// `min(force_scale / dist, force_cap)`, scaled by `-push_strength` while
/// pressed (repel) or `pull_strength` while hovering (attract).
#[inline(always)]
pub fn pointer_force(pos: Vec2, pointer: &Pointer, params: &FieldParams) -> Vec2 {
    if !pointer.present {
        return Vec2::ZERO;
    }

    let d = pointer.pos - pos;
    let dist = d.length() + DIST_EPSILON;
    let dir = d * (1.0 / dist);

    let sign = if pointer.engaged {
        -params.push_strength
    } else {
        params.pull_strength
    };
    let strength = (params.force_scale / dist).min(params.force_cap) * sign;

    dir * strength
}

#[inline(always)]
pub fn apply_pointer(p: &mut Particle, pointer: &Pointer, params: &FieldParams) {
    p.vel += pointer_force(p.pos, pointer, params);
}

#[inline(always)]
pub fn apply_friction(p: &mut Particle, friction: f32) {
    p.vel *= friction;
}

/// Unit timestep: ticks are paced by the display refresh
#[inline(always)]
pub fn integrate(p: &mut Particle) {
    p.pos += p.vel;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ParticleColor;

    fn particle(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::new(vx, vy), 2.0, ParticleColor::from_hue(0))
    }

    #[test]
    fn reflect_flips_only_the_crossing_axis() {
        let mut p = particle(98.0, 50.0, 5.0, 1.0);
        let before = p;
        assert_eq!(reflect(&mut p, 100.0, 100.0), 1);
        assert_eq!(p.vel, Vec2::new(-5.0, 1.0));
        assert_eq!(p.pos, before.pos);
        assert_eq!(p.radius, before.radius);
        assert_eq!(p.color, before.color);

        let mut p = particle(50.0, 1.0, 0.5, -3.0);
        assert_eq!(reflect(&mut p, 100.0, 100.0), 1);
        assert_eq!(p.vel, Vec2::new(0.5, 3.0));
    }

    #[test]
    fn reflect_corner_flips_both_axes() {
        let mut p = particle(1.0, 99.0, -2.0, 2.0);
        assert_eq!(reflect(&mut p, 100.0, 100.0), 2);
        assert_eq!(p.vel, Vec2::new(2.0, -2.0));
    }

    #[test]
    fn reflect_leaves_interior_particles_alone() {
        let mut p = particle(50.0, 50.0, 5.0, -5.0);
        assert_eq!(reflect(&mut p, 100.0, 100.0), 0);
        assert_eq!(p.vel, Vec2::new(5.0, -5.0));
    }

    #[test]
    fn reflect_does_not_clamp_or_trap_outside_particles() {
        // Already outside (e.g. after the surface shrank) but heading back in:
        // no flip, and the position is not pulled inside either.
        let mut p = particle(-10.0, 50.0, 1.0, 0.0);
        assert_eq!(reflect(&mut p, 100.0, 100.0), 0);
        integrate(&mut p);
        assert_eq!(p.pos, Vec2::new(-9.0, 50.0));
    }

    #[test]
    fn jitter_is_bounded() {
        let mut rng = Rng::new(3);
        for _ in 0..1000 {
            let mut p = particle(0.0, 0.0, 0.0, 0.0);
            apply_jitter(&mut p, 0.05, &mut rng);
            assert!(p.vel.x.abs() <= 0.025 && p.vel.y.abs() <= 0.025);
        }
        let mut p = particle(0.0, 0.0, 1.0, 1.0);
        apply_jitter(&mut p, 0.0, &mut rng);
        assert_eq!(p.vel, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn engaged_pointer_pushes_away() {
        let params = FieldParams::default();
        let pos = Vec2::new(40.0, 40.0);
        let pointer = Pointer::pressed_at(50.0, 45.0);
        let delta = pointer_force(pos, &pointer, &params);
        assert!(delta.dot(pointer.pos - pos) < 0.0);
    }

    #[test]
    fn released_pointer_pulls_toward() {
        let params = FieldParams::default();
        let pos = Vec2::new(40.0, 40.0);
        let pointer = Pointer::hovering(10.0, 70.0);
        let delta = pointer_force(pos, &pointer, &params);
        assert!(delta.dot(pointer.pos - pos) > 0.0);
    }

    #[test]
    fn pointer_force_is_capped_and_decays() {
        let params = FieldParams::default();
        let pointer = Pointer::hovering(0.0, 0.0);

        let near = pointer_force(Vec2::new(1.0, 0.0), &pointer, &params);
        assert!((near.length() - params.force_cap * params.pull_strength).abs() < 1e-4);

        let far = pointer_force(Vec2::new(1000.0, 0.0), &pointer, &params);
        let expected = params.force_scale / 1000.0 * params.pull_strength;
        assert!((far.length() - expected).abs() < 1e-5);
        assert!(far.length() < near.length());
    }

    #[test]
    fn pointer_on_top_of_particle_is_finite() {
        let params = FieldParams::default();
        let pointer = Pointer::pressed_at(5.0, 5.0);
        let delta = pointer_force(Vec2::new(5.0, 5.0), &pointer, &params);
        assert!(delta.x.is_finite() && delta.y.is_finite());
        assert_eq!(delta, Vec2::ZERO);
    }

    #[test]
    fn absent_pointer_has_no_effect() {
        let params = FieldParams::default();
        let pointer = Pointer::default();
        assert_eq!(pointer_force(Vec2::new(3.0, 4.0), &pointer, &params), Vec2::ZERO);
    }

    #[test]
    fn friction_reduces_speed() {
        let mut p = particle(0.0, 0.0, 3.0, -4.0);
        apply_friction(&mut p, 0.995);
        assert!(p.speed() < 5.0);
    }
}
