use bevy::prelude::*;
use drift_sim::FieldState;
use drift_sim::pipeline::{reset_field, simulation_tick};

use super::camera;
use super::input;
use super::particles;
use super::ui;

/// Render plugin for the particle field.
/// Expects `SimulationPlugin` to be added as well.
pub struct DriftRenderPlugin;

impl Plugin for DriftRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ui::HudThrottle>()
            .add_systems(Startup, (camera::spawn_camera, ui::spawn_hud))
            .add_systems(
                OnEnter(FieldState::Running),
                particles::spawn_particle_visuals.after(reset_field),
            )
            .add_systems(OnExit(FieldState::Running), particles::despawn_particle_visuals)
            .add_systems(
                Update,
                (
                    input::track_pointer.before(simulation_tick),
                    (
                        particles::update_particle_visuals,
                        particles::update_connection_mesh,
                    )
                        .after(simulation_tick)
                        .run_if(in_state(FieldState::Running)),
                    ui::update_hud,
                    ui::lifecycle_control,
                ),
            );
    }
}
