pub mod connections;
pub mod forces;
pub mod particle;

pub use connections::ConnectionGraph;
pub use particle::{Particles, generate_field};
