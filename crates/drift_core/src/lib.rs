pub mod config;
pub mod constants;
pub mod error;
pub mod pointer;
pub mod types;

pub use config::FieldConfig;
pub use constants::*;
pub use error::{FieldError, Result};
pub use pointer::PointerCell;
pub use types::*;
