use bevy::prelude::*;
use drift_sim::{FieldState, ParticleField, PointerInput};

/// Marker for the HUD text
#[derive(Component)]
pub struct HudText;

/// HUD frame counter for throttling
#[derive(Resource, Default)]
pub struct HudThrottle {
    pub frame: u32,
}

/// Spawn the HUD overlay
pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("Drift"),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgba(0.95, 1.0, 0.0, 0.7)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));
}

/// Update HUD text every 10th frame
pub fn update_hud(
    field: Res<ParticleField>,
    state: Res<State<FieldState>>,
    pointer: Res<PointerInput>,
    mut throttle: ResMut<HudThrottle>,
    mut query: Query<&mut Text, With<HudText>>,
) {
    throttle.frame = throttle.frame.wrapping_add(1);
    if throttle.frame % 10 != 0 {
        return;
    }
    let Ok(mut text) = query.get_single_mut() else {
        return;
    };

    let status = match state.get() {
        FieldState::Running => "RUNNING",
        FieldState::Stopped => "STOPPED",
    };
    let p = pointer.load();

    **text = format!(
        "DRIFT | {} | Seed: {}\n\
         Particles: {} | Segments: {} | Outside: {}\n\
         Time: {:.1}s | Frame: {}\n\
         Pointer: ({:+.2}, {:+.2})\n\
         \n\
         [Space] Start/Stop  [R] Reseed",
        status,
        field.config().seed,
        field.len(),
        field.segments().len(),
        field.out_of_bounds(),
        field.elapsed(),
        field.frame(),
        p.x,
        p.y,
    );
}

/// Space toggles the field on and off; R reseeds it
pub fn lifecycle_control(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<FieldState>>,
    mut next_state: ResMut<NextState<FieldState>>,
    mut field: ResMut<ParticleField>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        let next = match state.get() {
            FieldState::Running => FieldState::Stopped,
            FieldState::Stopped => FieldState::Running,
        };
        info!("Particle field {:?} -> {:?}", state.get(), next);
        next_state.set(next);
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        let seed = field.config().seed.wrapping_add(1);
        field.reseed(seed);
    }
}
