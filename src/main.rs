use bevy::prelude::*;
use drift_core::{BACKGROUND_PARTICLE_COUNT, BACKGROUND_RGB, FieldConfig};
use drift_render::plugin::DriftRenderPlugin;
use drift_sim::{ParticleField, SimulationPlugin};

fn main() {
    let config = FieldConfig::default().with_particle_count(BACKGROUND_PARTICLE_COUNT);
    let field = match ParticleField::new(config) {
        Ok(field) => field,
        Err(e) => {
            eprintln!("Cannot start particle field: {e}");
            std::process::exit(1);
        }
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Drift - Particle Field".into(),
                resolution: (1280.0, 800.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(
            BACKGROUND_RGB[0],
            BACKGROUND_RGB[1],
            BACKGROUND_RGB[2],
        )))
        .insert_resource(field)
        .add_plugins(SimulationPlugin)
        .add_plugins(DriftRenderPlugin)
        .run();
}
