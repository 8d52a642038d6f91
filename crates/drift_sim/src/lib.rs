pub mod field;
pub mod input;
pub mod pipeline;
pub mod state;

pub use field::ParticleField;
pub use input::PointerInput;
pub use pipeline::SimulationPlugin;
pub use state::FieldState;
