use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Pointer position in normalised device coordinates, [-1, 1] on both axes
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Map a window cursor (origin top-left, y down) to NDC (y up).
    /// An axis with zero extent maps to the centre.
    pub fn from_cursor(cursor: [f32; 2], viewport: [f32; 2]) -> Self {
        let x = if viewport[0] > 0.0 {
            cursor[0] / viewport[0] * 2.0 - 1.0
        } else {
            0.0
        };
        let y = if viewport[1] > 0.0 {
            -(cursor[1] / viewport[1]) * 2.0 + 1.0
        } else {
            0.0
        };
        Self { x, y }
    }

    /// Pointer in world space on the z = 0 plane
    pub fn to_world(self, scale: f32) -> [f32; 2] {
        [self.x * scale, self.y * scale]
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Line segment between two particles, laid out as 6 contiguous floats
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Segment {
    pub a: [f32; 3],
    pub b: [f32; 3],
}

impl Segment {
    pub fn length(&self) -> f32 {
        let dx = self.a[0] - self.b[0];
        let dy = self.a[1] - self.b[1];
        let dz = self.a[2] - self.b[2];
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Endpoint indices of an emitted segment, `i < j`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Connection {
    pub i: u32,
    pub j: u32,
}
