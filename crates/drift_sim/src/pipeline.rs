use bevy::prelude::*;

use super::field::ParticleField;
use super::input::PointerInput;
use super::state::FieldState;

/// Bevy plugin driving the particle field once per frame.
/// The host inserts the `ParticleField` resource before adding it.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<FieldState>()
            .init_resource::<PointerInput>()
            .add_systems(OnEnter(FieldState::Running), reset_field)
            .add_systems(Update, simulation_tick.run_if(in_state(FieldState::Running)));
    }
}

/// Start the field over on entering `Running`.
/// A field that has not ticked yet is already in its initial state.
pub fn reset_field(mut field: ResMut<ParticleField>) {
    if field.frame() == 0 {
        return;
    }
    field.reset();
}

/// One field step per rendered frame
pub fn simulation_tick(
    mut field: ResMut<ParticleField>,
    pointer: Res<PointerInput>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();
    if let Err(e) = field.advance(dt, pointer.load()) {
        warn!("Skipping particle frame {}: {e}", field.frame());
    }
}
