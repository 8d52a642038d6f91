use bevy::prelude::*;
use drift_core::{CAMERA_FOV_DEG, CAMERA_POSITION};

/// Marker for the field camera
#[derive(Component)]
pub struct FieldCamera;

/// Fixed perspective camera looking down -z at the field centre
pub fn spawn_camera(mut commands: Commands) {
    let pos = Vec3::from_array(CAMERA_POSITION);

    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEG.to_radians(),
            ..default()
        }),
        Transform::from_translation(pos).looking_at(Vec3::ZERO, Vec3::Y),
        FieldCamera,
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.5,
    });

    info!("Camera spawned at ({:.0}, {:.0}, {:.0})", pos.x, pos.y, pos.z);
}
