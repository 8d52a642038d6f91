pub mod camera;
pub mod input;
pub mod particles;
pub mod plugin;
pub mod ui;
