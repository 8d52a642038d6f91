use std::sync::Arc;

use bevy::prelude::*;
use drift_core::{Pointer, PointerCell};

/// Pointer shared between the input listener (writer) and the field tick
/// (reader). Cloning shares the same cell.
#[derive(Resource, Debug, Clone, Default)]
pub struct PointerInput(pub Arc<PointerCell>);

impl PointerInput {
    pub fn load(&self) -> Pointer {
        self.0.load()
    }

    pub fn store(&self, pointer: Pointer) {
        self.0.store(pointer);
    }
}
