//! Tuning - every adjustable constant of the toy in one place
//!
//! Loaded from JSON the same way content bundles are: `serde_json` into a
//! `#[serde(default)]` struct, then validated. Missing keys keep defaults.
//!
//! ```rust
//! use serene_engine::domain::Tuning;
//!
//! let tuning = Tuning::from_json(r#"{ "friction": 0.99, "particle_count": 500 }"#).unwrap();
//! assert_eq!(tuning.particle_count, 500);
//! assert_eq!(tuning.bubble_cols, 10);
//! ```

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Particle field ===
    pub particle_count: u32,
    pub min_particle_count: u32,
    pub max_particle_count: u32,
    /// Requested counts snap to `min + k * step`; 1 disables snapping
    pub particle_count_step: u32,
    /// Initial speed range (units per tick)
    pub speed_min: f32,
    pub speed_max: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    /// Peak-to-peak velocity noise per tick; 0 disables jitter
    pub jitter: f32,
    /// Velocity damping per tick, in (0, 1]
    pub friction: f32,
    /// Numerator of the inverse-distance pointer force
    pub force_scale: f32,
    /// Upper bound of the pointer force before push/pull scaling
    pub force_cap: f32,
    /// Multiplier while the pointer is pressed (repel)
    pub push_strength: f32,
    /// Multiplier while the pointer hovers (attract)
    pub pull_strength: f32,

    // === Bubble grid ===
    pub bubble_cols: u32,
    pub bubble_rows: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            particle_count: 300,
            min_particle_count: 100,
            max_particle_count: 1000,
            particle_count_step: 50,
            speed_min: 0.4,
            speed_max: 1.2,
            radius_min: 1.0,
            radius_max: 3.2,
            jitter: 0.05,
            friction: 0.995,
            force_scale: 2.5,
            force_cap: 0.06,
            push_strength: 2.2,
            pull_strength: 0.9,
            bubble_cols: 10,
            bubble_rows: 12,
        }
    }
}

/// The subset of tuning the particle field consumes every tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldParams {
    pub speed_min: f32,
    pub speed_max: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub jitter: f32,
    pub friction: f32,
    pub force_scale: f32,
    pub force_cap: f32,
    pub push_strength: f32,
    pub pull_strength: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Tuning::default().field_params()
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, String> {
        let tuning: Tuning = serde_json::from_str(json).map_err(|e| e.to_string())?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> String {
        // Plain numeric struct: serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.min_particle_count > self.max_particle_count {
            return Err(format!(
                "min_particle_count ({}) exceeds max_particle_count ({})",
                self.min_particle_count, self.max_particle_count
            ));
        }
        if !(self.min_particle_count..=self.max_particle_count).contains(&self.particle_count) {
            return Err(format!(
                "particle_count ({}) outside [{}, {}]",
                self.particle_count, self.min_particle_count, self.max_particle_count
            ));
        }
        if self.particle_count_step == 0 {
            return Err("particle_count_step must be at least 1".to_string());
        }
        check_range("speed", self.speed_min, self.speed_max)?;
        check_range("radius", self.radius_min, self.radius_max)?;
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(format!("friction must be in (0, 1], got {}", self.friction));
        }
        for (name, value) in [
            ("jitter", self.jitter),
            ("force_scale", self.force_scale),
            ("force_cap", self.force_cap),
            ("push_strength", self.push_strength),
            ("pull_strength", self.pull_strength),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be a non-negative number, got {}", name, value));
            }
        }
        if self.bubble_cols == 0 || self.bubble_rows == 0 {
            return Err(format!(
                "bubble grid must be non-empty, got {}x{}",
                self.bubble_cols, self.bubble_rows
            ));
        }
        Ok(())
    }

    /// Clamp a requested particle count into the configured bounds and
    /// round it to the nearest step above the minimum
    pub fn clamp_particle_count(&self, count: u32) -> u32 {
        let min = self.min_particle_count;
        let max = self.max_particle_count;
        let step = self.particle_count_step.max(1);

        let offset = count.clamp(min, max) - min;
        let snapped = min.saturating_add((offset + step / 2) / step * step);
        snapped.min(max)
    }

    pub fn field_params(&self) -> FieldParams {
        FieldParams {
            speed_min: self.speed_min,
            speed_max: self.speed_max,
            radius_min: self.radius_min,
            radius_max: self.radius_max,
            jitter: self.jitter,
            friction: self.friction,
            force_scale: self.force_scale,
            force_cap: self.force_cap,
            push_strength: self.push_strength,
            pull_strength: self.pull_strength,
        }
    }
}

fn check_range(name: &str, lo: f32, hi: f32) -> Result<(), String> {
    if !lo.is_finite() || !hi.is_finite() || lo < 0.0 || lo > hi {
        return Err(format!("{} range [{}, {}] is invalid", name, lo, hi));
    }
    Ok(())
}
