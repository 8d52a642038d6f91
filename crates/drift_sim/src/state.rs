use bevy::prelude::*;

/// Whether the field is mounted and ticking.
/// Entering `Running` always starts from a fresh field.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldState {
    #[default]
    Running,
    Stopped,
}
