use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::view::NoFrustumCulling;
use drift_core::{ACCENT_RGB, LINE_OPACITY, POINT_OPACITY, POINT_SIZE};
use drift_sim::ParticleField;

/// Marker for particle point entities
#[derive(Component)]
pub struct ParticlePoint {
    pub index: usize,
}

/// Marker for the single line-list entity holding every segment
#[derive(Component)]
pub struct ConnectionLines;

/// Handle to the segment mesh rewritten every frame
#[derive(Resource)]
pub struct ConnectionMesh(pub Handle<Mesh>);

fn accent(alpha: f32) -> Color {
    Color::srgba(ACCENT_RGB[0], ACCENT_RGB[1], ACCENT_RGB[2], alpha)
}

/// Spawn one point per particle plus the connection line mesh
pub fn spawn_particle_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    field: Res<ParticleField>,
) {
    // All points share one low-poly mesh and one material
    let mesh = meshes.add(Sphere::new(POINT_SIZE * 0.5).mesh().uv(8, 6));
    let color = accent(POINT_OPACITY);
    let point_mat = materials.add(StandardMaterial {
        base_color: color,
        emissive: LinearRgba::from(color) * 2.0,
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    for (index, p) in field.particles().points().iter().enumerate() {
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(point_mat.clone()),
            Transform::from_translation(Vec3::from_array(*p)),
            ParticlePoint { index },
        ));
    }

    let mut lines = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
    lines.insert_attribute(Mesh::ATTRIBUTE_POSITION, segment_vertices(&field));
    let lines = meshes.add(lines);
    let line_mat = materials.add(StandardMaterial {
        base_color: accent(LINE_OPACITY),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    commands.spawn((
        Mesh3d(lines.clone()),
        MeshMaterial3d(line_mat),
        Transform::IDENTITY,
        NoFrustumCulling,
        ConnectionLines,
    ));
    commands.insert_resource(ConnectionMesh(lines));

    info!(
        "Spawned {} particle points, {} segments",
        field.len(),
        field.segments().len()
    );
}

/// Release point and line entities and the segment buffer
pub fn despawn_particle_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    lines: Option<Res<ConnectionMesh>>,
    query: Query<Entity, Or<(With<ParticlePoint>, With<ConnectionLines>)>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
    if let Some(lines) = lines {
        meshes.remove(&lines.0);
        commands.remove_resource::<ConnectionMesh>();
    }
}

/// Copy simulated positions onto the point transforms
pub fn update_particle_visuals(
    field: Res<ParticleField>,
    mut query: Query<(&mut Transform, &ParticlePoint)>,
) {
    let points = field.particles().points();
    for (mut transform, particle) in query.iter_mut() {
        let Some(p) = points.get(particle.index) else {
            continue;
        };
        transform.translation = Vec3::from_array(*p);
    }
}

/// Re-upload this frame's segments
pub fn update_connection_mesh(
    field: Res<ParticleField>,
    lines: Option<Res<ConnectionMesh>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let Some(lines) = lines else {
        return;
    };
    if let Some(mesh) = meshes.get_mut(&lines.0) {
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, segment_vertices(&field));
    }
}

/// Two vertices per segment, as a line list expects
fn segment_vertices(field: &ParticleField) -> Vec<[f32; 3]> {
    field.segments().iter().flat_map(|s| [s.a, s.b]).collect()
}
