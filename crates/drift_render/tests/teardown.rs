use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use drift_core::FieldConfig;
use drift_render::particles::{
    ConnectionLines, ConnectionMesh, ParticlePoint, despawn_particle_visuals,
    spawn_particle_visuals,
};
use drift_sim::pipeline::reset_field;
use drift_sim::{FieldState, ParticleField, SimulationPlugin};

const PARTICLES: u32 = 25;

/// Headless app with only the particle visuals wired in; no window or GPU
fn visuals_app() -> App {
    let mut app = App::new();
    let field = ParticleField::new(FieldConfig::default().with_particle_count(PARTICLES)).unwrap();
    app.add_plugins((MinimalPlugins, StatesPlugin, AssetPlugin::default()))
        .init_asset::<Mesh>()
        .init_asset::<StandardMaterial>()
        .insert_resource(field)
        .add_plugins(SimulationPlugin)
        .add_systems(
            OnEnter(FieldState::Running),
            spawn_particle_visuals.after(reset_field),
        )
        .add_systems(OnExit(FieldState::Running), despawn_particle_visuals);
    app
}

fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
    let world = app.world_mut();
    let mut query = world.query_filtered::<Entity, F>();
    query.iter(world).count()
}

#[test]
fn entering_running_spawns_points_and_lines() {
    let mut app = visuals_app();
    app.update();

    assert_eq!(count::<With<ParticlePoint>>(&mut app), PARTICLES as usize);
    assert_eq!(count::<With<ConnectionLines>>(&mut app), 1);

    let handle = app.world().resource::<ConnectionMesh>().0.clone();
    assert!(app.world().resource::<Assets<Mesh>>().get(&handle).is_some());
}

#[test]
fn stopping_releases_entities_and_segment_mesh() {
    let mut app = visuals_app();
    app.update();
    let handle = app.world().resource::<ConnectionMesh>().0.clone();

    app.world_mut()
        .resource_mut::<NextState<FieldState>>()
        .set(FieldState::Stopped);
    app.update();

    assert_eq!(count::<With<ParticlePoint>>(&mut app), 0);
    assert_eq!(count::<With<ConnectionLines>>(&mut app), 0);
    assert!(!app.world().contains_resource::<ConnectionMesh>());
    assert!(app.world().resource::<Assets<Mesh>>().get(&handle).is_none());
}

#[test]
fn restarting_respawns_a_single_set_of_visuals() {
    let mut app = visuals_app();
    app.update();
    for state in [FieldState::Stopped, FieldState::Running] {
        app.world_mut()
            .resource_mut::<NextState<FieldState>>()
            .set(state);
        app.update();
    }

    assert_eq!(count::<With<ParticlePoint>>(&mut app), PARTICLES as usize);
    assert_eq!(count::<With<ConnectionLines>>(&mut app), 1);
    assert!(app.world().contains_resource::<ConnectionMesh>());
}
