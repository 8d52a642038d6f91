use bevy::log::info;
use bevy::prelude::Resource;
use drift_core::{Connection, FieldConfig, FieldError, Pointer, Result, Segment};
use drift_physics::forces;
use drift_physics::{ConnectionGraph, Particles, generate_field};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Particle field simulator, owned by whoever mounts it.
///
/// Created on mount and dropped on unmount; `reset` starts it over from the
/// configured seed. Holds no references to the renderer: each frame the host
/// calls `step` (or `advance`) and reads back `positions` and
/// `segment_coords`.
#[derive(Resource, Debug, Clone)]
pub struct ParticleField {
    config: FieldConfig,
    particles: Particles,
    graph: ConnectionGraph,
    /// Seconds since this field started
    elapsed: f64,
    frame: u64,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> Result<Self> {
        config.validate()?;
        let particles = spawn(&config);
        info!(
            "Spawned particle field: {} particles (seed {})",
            particles.len(),
            config.seed
        );
        Ok(Self::assemble(config, particles))
    }

    /// Start from an exact particle state instead of a seeded spawn
    pub fn from_particles(config: FieldConfig, particles: Particles) -> Result<Self> {
        config.validate()?;
        let expected = config.particle_count as usize * 3;
        if particles.positions().len() != expected {
            return Err(FieldError::BufferLength {
                expected,
                actual: particles.positions().len(),
            });
        }
        Ok(Self::assemble(config, particles))
    }

    fn assemble(config: FieldConfig, particles: Particles) -> Self {
        let mut graph = ConnectionGraph::new();
        graph.rebuild(particles.points(), config.max_distance, config.max_connections);
        Self {
            config,
            particles,
            graph,
            elapsed: 0.0,
            frame: 0,
        }
    }

    /// Advance one frame.
    ///
    /// `t` is seconds since the field started, `pointer` is in NDC. Non-finite
    /// input is rejected and leaves the field untouched.
    pub fn step(&mut self, t: f64, pointer: Pointer) -> Result<()> {
        if !t.is_finite() {
            return Err(FieldError::NonFiniteTime(t));
        }
        if !pointer.is_finite() {
            return Err(FieldError::NonFinitePointer {
                x: pointer.x,
                y: pointer.y,
            });
        }

        let c = &self.config;
        let mouse = pointer.to_world(c.pointer_scale);
        let (positions, velocities) = self.particles.split_mut();

        for (i, (p, v)) in positions.iter_mut().zip(velocities.iter_mut()).enumerate() {
            forces::integrate(p, v);

            let push =
                forces::pointer_repulsion(*p, mouse, c.repulsion_radius, c.repulsion_strength);
            p[0] += push[0];
            p[1] += push[1];

            forces::reflect(p, v, c.half_extents);

            p[1] += forces::drift_offset(t, i, c.drift_amplitude, c.drift_rate, c.drift_phase_step);
        }

        self.graph
            .rebuild(self.particles.points(), c.max_distance, c.max_connections);
        self.frame += 1;
        Ok(())
    }

    /// Accumulate `dt` into the field clock and step at the new time
    pub fn advance(&mut self, dt: f32, pointer: Pointer) -> Result<()> {
        if !dt.is_finite() {
            return Err(FieldError::NonFiniteTime(dt as f64));
        }
        let elapsed = self.elapsed + dt as f64;
        self.step(elapsed, pointer)?;
        self.elapsed = elapsed;
        Ok(())
    }

    /// Respawn from the configured seed with the clock at zero
    pub fn reset(&mut self) {
        self.particles = spawn(&self.config);
        self.graph.rebuild(
            self.particles.points(),
            self.config.max_distance,
            self.config.max_connections,
        );
        self.elapsed = 0.0;
        self.frame = 0;
        info!(
            "Reset particle field: {} particles (seed {})",
            self.particles.len(),
            self.config.seed
        );
    }

    pub fn reseed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.reset();
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &Particles {
        &self.particles
    }

    /// Flat `3 * N` position buffer for the point cloud
    pub fn positions(&self) -> &[f32] {
        self.particles.positions()
    }

    /// Flat segment buffer for the line geometry, 6 floats per segment
    pub fn segment_coords(&self) -> &[f32] {
        self.graph.coords()
    }

    pub fn segments(&self) -> &[Segment] {
        self.graph.segments()
    }

    pub fn connections(&self) -> &[Connection] {
        self.graph.connections()
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Particles currently past the reflection bounds on any axis
    pub fn out_of_bounds(&self) -> usize {
        let h = self.config.half_extents;
        self.particles
            .points()
            .iter()
            .filter(|p| (0..3).any(|axis| p[axis].abs() > h[axis]))
            .count()
    }
}

fn spawn(config: &FieldConfig) -> Particles {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    generate_field(config, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_field() -> ParticleField {
        ParticleField::new(FieldConfig::default().with_particle_count(40)).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = ParticleField::new(FieldConfig::default().with_particle_count(0)).unwrap_err();
        assert!(matches!(err, FieldError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_particles_checks_count() {
        let particles = Particles::from_points(&[[0.0; 3]], &[[0.0; 3]]).unwrap();
        let config = FieldConfig::default().with_particle_count(2);
        let err = ParticleField::from_particles(config, particles).unwrap_err();
        assert_eq!(
            err,
            FieldError::BufferLength {
                expected: 6,
                actual: 3
            }
        );
    }

    #[test]
    fn test_from_particles_rejects_non_finite_state() {
        let particles = Particles::from_parts(vec![0.0, f32::NAN, 0.0], vec![0.0; 3]);
        assert_eq!(particles, Err(FieldError::NonFiniteState { index: 0 }));

        let particles = Particles::from_points(&[[0.0; 3]], &[[0.0; 3]]).unwrap();
        let config = FieldConfig::default().with_particle_count(1);
        assert!(ParticleField::from_particles(config, particles).is_ok());
    }

    #[test]
    fn test_non_finite_input_leaves_state_untouched() {
        let mut field = small_field();
        let before = field.positions().to_vec();

        assert!(matches!(
            field.step(f64::NAN, Pointer::CENTER),
            Err(FieldError::NonFiniteTime(_))
        ));
        assert!(matches!(
            field.step(1.0, Pointer::new(f32::INFINITY, 0.0)),
            Err(FieldError::NonFinitePointer { .. })
        ));
        assert!(matches!(
            field.advance(f32::NEG_INFINITY, Pointer::CENTER),
            Err(FieldError::NonFiniteTime(_))
        ));

        assert_eq!(field.positions(), before.as_slice());
        assert_eq!(field.frame(), 0);
        assert_eq!(field.elapsed(), 0.0);
    }

    #[test]
    fn test_advance_accumulates_clock() {
        let mut field = small_field();
        for _ in 0..3 {
            field.advance(0.5, Pointer::CENTER).unwrap();
        }
        assert_eq!(field.frame(), 3);
        assert!((field.elapsed() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_long_running_clock_keeps_frame_resolution() {
        let config = FieldConfig {
            drift_amplitude: 1.0,
            ..FieldConfig::default().with_particle_count(1)
        };
        let particles = Particles::from_points(&[[0.0; 3]], &[[0.0; 3]]).unwrap();
        let mut field = ParticleField::from_particles(config, particles).unwrap();
        let far = Pointer::new(1.0, 1.0);

        // Three days of wall time, then a single 60 Hz frame
        field.advance(259_200.0, far).unwrap();
        let y = field.particles().position(0)[1];
        let dt = 1.0f32 / 60.0;
        field.advance(dt, far).unwrap();

        let t = 259_200.0 + dt as f64;
        let expected = y + (t * field.config().drift_rate as f64).sin() as f32;
        assert!((field.particles().position(0)[1] - expected).abs() < 1e-5);
        assert_eq!(field.elapsed(), t);
    }

    #[test]
    fn test_reset_reproduces_initial_field() {
        let mut field = small_field();
        let initial = field.particles().clone();
        for i in 0..50 {
            field.step(i as f64 / 60.0, Pointer::new(0.1, -0.2)).unwrap();
        }
        assert_ne!(field.particles(), &initial);

        field.reset();
        assert_eq!(field.particles(), &initial);
        assert_eq!(field.frame(), 0);
        assert_eq!(field.elapsed(), 0.0);
    }

    #[test]
    fn test_reseed_changes_field() {
        let mut field = small_field();
        let initial = field.particles().clone();
        field.reseed(43);
        assert_eq!(field.config().seed, 43);
        assert_ne!(field.particles(), &initial);
    }
}
