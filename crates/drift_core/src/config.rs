use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{FieldError, Result};

/// Particle field configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Number of particles, fixed for the lifetime of a field
    pub particle_count: u32,
    /// Random seed for deterministic spawning
    pub seed: u64,
    /// Spawn box and reflection bounds (x, y, z half-extents)
    pub half_extents: [f32; 3],
    /// Half-range of the uniform initial velocity per axis
    pub spawn_speed: [f32; 3],
    /// NDC -> world scale applied to the pointer
    pub pointer_scale: f32,
    /// Planar radius around the pointer inside which particles are pushed away
    pub repulsion_radius: f32,
    pub repulsion_strength: f32,
    /// Particles closer than this are joined by a line
    pub max_distance: f32,
    /// Cap on segments emitted per lower-indexed particle
    pub max_connections: u32,
    pub drift_amplitude: f32,
    /// Angular rate of the floating motion (rad/s)
    pub drift_rate: f32,
    /// Phase offset between consecutive particles (rad)
    pub drift_phase_step: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            seed: 42,
            half_extents: HALF_EXTENTS,
            spawn_speed: SPAWN_SPEED,
            pointer_scale: POINTER_SCALE,
            repulsion_radius: REPULSION_RADIUS,
            repulsion_strength: REPULSION_STRENGTH,
            max_distance: MAX_DISTANCE,
            max_connections: MAX_CONNECTIONS,
            drift_amplitude: DRIFT_AMPLITUDE,
            drift_rate: DRIFT_RATE,
            drift_phase_step: DRIFT_PHASE_STEP,
        }
    }
}

impl FieldConfig {
    #[must_use]
    pub const fn with_particle_count(mut self, count: u32) -> Self {
        self.particle_count = count;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub const fn with_half_extents(mut self, half_extents: [f32; 3]) -> Self {
        self.half_extents = half_extents;
        self
    }

    #[must_use]
    pub const fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    #[must_use]
    pub const fn with_max_distance(mut self, max_distance: f32) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Check every parameter once, before a field is built from it
    pub fn validate(&self) -> Result<()> {
        if self.particle_count == 0 {
            return Err(invalid("particle_count must be at least 1"));
        }
        for (axis, &h) in self.half_extents.iter().enumerate() {
            if !(h.is_finite() && h > 0.0) {
                return Err(invalid(format!("half_extents[{axis}] must be positive, got {h}")));
            }
        }
        for (axis, &s) in self.spawn_speed.iter().enumerate() {
            non_negative(&format!("spawn_speed[{axis}]"), s)?;
        }
        non_negative("pointer_scale", self.pointer_scale)?;
        non_negative("repulsion_radius", self.repulsion_radius)?;
        non_negative("repulsion_strength", self.repulsion_strength)?;
        non_negative("drift_amplitude", self.drift_amplitude)?;
        non_negative("drift_rate", self.drift_rate)?;
        non_negative("drift_phase_step", self.drift_phase_step)?;
        if !(self.max_distance.is_finite() && self.max_distance > 0.0) {
            return Err(invalid(format!(
                "max_distance must be positive, got {}",
                self.max_distance
            )));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> FieldError {
    FieldError::InvalidConfig(msg.into())
}

fn non_negative(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be finite and >= 0, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = FieldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.particle_count, 150);
        assert_eq!(config.max_connections, 3);
    }

    #[test]
    fn test_rejects_empty_field() {
        let config = FieldConfig::default().with_particle_count(0);
        assert!(matches!(config.validate(), Err(FieldError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_degenerate_bounds() {
        let flat = FieldConfig::default().with_half_extents([10.0, 10.0, 0.0]);
        assert!(flat.validate().is_err());

        let nan = FieldConfig::default().with_half_extents([f32::NAN, 10.0, 5.0]);
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_connectivity_distance() {
        assert!(FieldConfig::default().with_max_distance(0.0).validate().is_err());
        assert!(FieldConfig::default().with_max_distance(f32::INFINITY).validate().is_err());
    }

    #[test]
    fn test_zero_spawn_speed_is_allowed() {
        let config = FieldConfig {
            spawn_speed: [0.0; 3],
            ..FieldConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
