use drift_core::{Connection, Segment};

/// Line segments between nearby particles, rebuilt every frame.
///
/// Nothing carries over between rebuilds except the allocations.
#[derive(Debug, Clone, Default)]
pub struct ConnectionGraph {
    connections: Vec<Connection>,
    segments: Vec<Segment>,
}

impl ConnectionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute from the current positions.
    ///
    /// Scans `j > i` in index order and stops at `max_connections` for each
    /// `i`, so later particles lose out once the cap is hit.
    pub fn rebuild(&mut self, points: &[[f32; 3]], max_distance: f32, max_connections: u32) {
        self.connections.clear();
        self.segments.clear();

        let n = points.len();
        for i in 0..n {
            let a = points[i];
            let mut count = 0;
            let mut j = i + 1;
            while j < n && count < max_connections {
                let b = points[j];
                let dx = a[0] - b[0];
                let dy = a[1] - b[1];
                let dz = a[2] - b[2];
                let dist = (dx * dx + dy * dy + dz * dz).sqrt();

                if dist < max_distance {
                    self.connections.push(Connection {
                        i: i as u32,
                        j: j as u32,
                    });
                    self.segments.push(Segment { a, b });
                    count += 1;
                }
                j += 1;
            }
        }
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Flat endpoint buffer, 6 floats per segment
    pub fn coords(&self) -> &[f32] {
        bytemuck::cast_slice(&self.segments)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
