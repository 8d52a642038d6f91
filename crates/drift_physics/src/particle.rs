use drift_core::{FieldConfig, FieldError, Result};
use rand::Rng;

/// Kinematic state of every particle in a field.
///
/// Positions and velocities are flat arrays indexed by `id * 3 + axis`, the
/// layout a renderer uploads directly. Both stay `3 * N` long: nothing here
/// can grow or shrink them after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Particles {
    positions: Vec<f32>,
    velocities: Vec<f32>,
}

impl Particles {
    pub fn from_parts(positions: Vec<f32>, velocities: Vec<f32>) -> Result<Self> {
        if positions.len() % 3 != 0 {
            return Err(FieldError::BufferLength {
                expected: positions.len() - positions.len() % 3,
                actual: positions.len(),
            });
        }
        if velocities.len() != positions.len() {
            return Err(FieldError::BufferLength {
                expected: positions.len(),
                actual: velocities.len(),
            });
        }
        if let Some(bad) = positions
            .iter()
            .zip(&velocities)
            .position(|(p, v)| !p.is_finite() || !v.is_finite())
        {
            return Err(FieldError::NonFiniteState { index: bad / 3 });
        }
        Ok(Self {
            positions,
            velocities,
        })
    }

    /// Build from per-particle vectors
    pub fn from_points(positions: &[[f32; 3]], velocities: &[[f32; 3]]) -> Result<Self> {
        Self::from_parts(
            bytemuck::cast_slice(positions).to_vec(),
            bytemuck::cast_slice(velocities).to_vec(),
        )
    }

    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Flat `3 * N` position buffer
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn velocities(&self) -> &[f32] {
        &self.velocities
    }

    pub fn points(&self) -> &[[f32; 3]] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn position(&self, i: usize) -> [f32; 3] {
        self.points()[i]
    }

    pub fn velocity(&self, i: usize) -> [f32; 3] {
        let v: &[[f32; 3]] = bytemuck::cast_slice(&self.velocities);
        v[i]
    }

    /// Mutable per-particle views; lengths are fixed
    pub fn split_mut(&mut self) -> (&mut [[f32; 3]], &mut [[f32; 3]]) {
        (
            bytemuck::cast_slice_mut(&mut self.positions),
            bytemuck::cast_slice_mut(&mut self.velocities),
        )
    }
}

/// Scatter `config.particle_count` particles uniformly through the field box
pub fn generate_field(config: &FieldConfig, rng: &mut impl Rng) -> Particles {
    let n = config.particle_count as usize;
    let mut positions = Vec::with_capacity(n * 3);
    let mut velocities = Vec::with_capacity(n * 3);

    for _ in 0..n {
        for axis in 0..3 {
            positions.push(symmetric(rng, config.half_extents[axis]));
        }
        for axis in 0..3 {
            velocities.push(symmetric(rng, config.spawn_speed[axis]));
        }
    }

    Particles {
        positions,
        velocities,
    }
}

/// Uniform sample from [-h, h); zero when the range is empty
fn symmetric(rng: &mut impl Rng, h: f32) -> f32 {
    if h > 0.0 { rng.gen_range(-h..h) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_generate_respects_bounds() {
        let config = FieldConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let particles = generate_field(&config, &mut rng);

        assert_eq!(particles.len(), 150);
        assert_eq!(particles.positions().len(), 450);
        assert_eq!(particles.velocities().len(), 450);

        for i in 0..particles.len() {
            let p = particles.position(i);
            let v = particles.velocity(i);
            for axis in 0..3 {
                assert!(p[axis].abs() <= config.half_extents[axis]);
                assert!(v[axis].abs() <= config.spawn_speed[axis]);
            }
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let config = FieldConfig::default();
        let a = generate_field(&config, &mut ChaCha8Rng::seed_from_u64(1));
        let b = generate_field(&config, &mut ChaCha8Rng::seed_from_u64(1));
        let c = generate_field(&config, &mut ChaCha8Rng::seed_from_u64(2));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_zero_speed_spawns_at_rest() {
        let config = FieldConfig {
            spawn_speed: [0.0; 3],
            ..FieldConfig::default()
        };
        let particles = generate_field(&config, &mut ChaCha8Rng::seed_from_u64(3));
        assert!(particles.velocities().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_from_parts_rejects_mismatched_buffers() {
        let err = Particles::from_parts(vec![0.0; 6], vec![0.0; 3]).unwrap_err();
        assert_eq!(
            err,
            FieldError::BufferLength {
                expected: 6,
                actual: 3
            }
        );
        assert!(Particles::from_parts(vec![0.0; 4], vec![0.0; 4]).is_err());
    }

    #[test]
    fn test_from_parts_rejects_non_finite_values() {
        let err = Particles::from_points(
            &[[0.0; 3], [1.0, f32::NAN, 0.0]],
            &[[0.0; 3], [0.0; 3]],
        )
        .unwrap_err();
        assert_eq!(err, FieldError::NonFiniteState { index: 1 });

        let err = Particles::from_points(&[[0.0; 3]], &[[0.0, 0.0, f32::INFINITY]]).unwrap_err();
        assert_eq!(err, FieldError::NonFiniteState { index: 0 });
    }

    #[test]
    fn test_split_mut_writes_through() {
        let mut particles =
            Particles::from_points(&[[1.0, 2.0, 3.0]], &[[0.1, 0.2, 0.3]]).unwrap();
        let (pos, vel) = particles.split_mut();
        pos[0][1] = 9.0;
        vel[0][2] = -0.3;
        assert_eq!(particles.positions(), &[1.0, 9.0, 3.0]);
        assert_eq!(particles.velocity(0), [0.1, 0.2, -0.3]);
    }
}
