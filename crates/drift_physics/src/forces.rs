/// Euler step with a unit timestep (one frame)
pub fn integrate(position: &mut [f32; 3], velocity: &[f32; 3]) {
    position[0] += velocity[0];
    position[1] += velocity[1];
    position[2] += velocity[2];
}

/// Planar push away from the pointer, applied straight to position.
/// Returns [dx, dy]; zero at or beyond `radius`. No minimum distance is
/// enforced, so a particle under the pointer gets almost no push.
pub fn pointer_repulsion(
    position: [f32; 3],
    mouse: [f32; 2],
    radius: f32,
    strength: f32,
) -> [f32; 2] {
    let dx = position[0] - mouse[0];
    let dy = position[1] - mouse[1];
    let dist = (dx * dx + dy * dy).sqrt();

    if dist < radius {
        let force = (radius - dist) * strength;
        [dx * force, dy * force]
    } else {
        [0.0, 0.0]
    }
}

/// Flip velocity on every axis where the particle is outside the box.
/// Position is left where it is, so a particle can sit outside for a frame.
/// Returns true if any axis flipped.
pub fn reflect(position: &[f32; 3], velocity: &mut [f32; 3], half_extents: [f32; 3]) -> bool {
    let mut flipped = false;
    for axis in 0..3 {
        if position[axis].abs() > half_extents[axis] {
            velocity[axis] = -velocity[axis];
            flipped = true;
        }
    }
    flipped
}

/// Phase-staggered vertical float added on top of the velocity field.
/// The phase is computed in f64 so long-running fields keep frame resolution.
pub fn drift_offset(t: f64, index: usize, amplitude: f32, rate: f32, phase_step: f32) -> f32 {
    let phase = t * rate as f64 + index as f64 * phase_step as f64;
    (phase.sin() * amplitude as f64) as f32
}
