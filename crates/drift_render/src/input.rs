use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use drift_core::Pointer;
use drift_sim::PointerInput;

/// Write the cursor into the shared pointer cell.
/// Outside the window the last sample is kept.
pub fn track_pointer(windows: Query<&Window, With<PrimaryWindow>>, pointer: Res<PointerInput>) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    pointer.store(Pointer::from_cursor(
        cursor.to_array(),
        [window.width(), window.height()],
    ));
}
