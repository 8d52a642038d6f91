// Field defaults. World units match the page background: the camera sits
// 8 units in front of a 20 x 20 x 10 box centred on the origin.

/// Default particle count for a field
pub const PARTICLE_COUNT: u32 = 150;

/// Particle count used by the mounted page background
pub const BACKGROUND_PARTICLE_COUNT: u32 = 120;

/// Spawn box / reflection bounds
pub const HALF_EXTENTS: [f32; 3] = [10.0, 10.0, 5.0];

/// Initial velocity half-range per axis (z moves at half speed)
pub const SPAWN_SPEED: [f32; 3] = [0.005, 0.005, 0.0025];

/// Pointer NDC [-1, 1] maps to [-POINTER_SCALE, POINTER_SCALE] in world space
pub const POINTER_SCALE: f32 = 10.0;

pub const REPULSION_RADIUS: f32 = 2.0;
pub const REPULSION_STRENGTH: f32 = 0.02;

/// Connectivity threshold (3-D Euclidean distance, strict)
pub const MAX_DISTANCE: f32 = 2.5;

/// Segments per lower-indexed particle
pub const MAX_CONNECTIONS: u32 = 3;

pub const DRIFT_AMPLITUDE: f32 = 0.002;
pub const DRIFT_RATE: f32 = 0.5;
pub const DRIFT_PHASE_STEP: f32 = 0.1;

// Rendering

/// Point sprite size in world units
pub const POINT_SIZE: f32 = 0.05;

/// Accent colour #F1FF00 as sRGB
pub const ACCENT_RGB: [f32; 3] = [241.0 / 255.0, 1.0, 0.0];

pub const POINT_OPACITY: f32 = 0.8;
pub const LINE_OPACITY: f32 = 0.15;

/// Background #0D0D0D as sRGB
pub const BACKGROUND_RGB: [f32; 3] = [13.0 / 255.0, 13.0 / 255.0, 13.0 / 255.0];

pub const CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 8.0];

/// Vertical field of view in degrees
pub const CAMERA_FOV_DEG: f32 = 75.0;
