use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::Pointer;

/// Latest pointer sample, shared between an input listener and the field tick.
///
/// Both components live in one `AtomicU64` so a reader on another thread
/// never sees `x` from one sample and `y` from the next.
#[derive(Debug, Default)]
pub struct PointerCell {
    bits: AtomicU64,
}

impl PointerCell {
    pub fn new(pointer: Pointer) -> Self {
        Self {
            bits: AtomicU64::new(pack(pointer)),
        }
    }

    pub fn store(&self, pointer: Pointer) {
        self.bits.store(pack(pointer), Ordering::Release);
    }

    pub fn load(&self) -> Pointer {
        unpack(self.bits.load(Ordering::Acquire))
    }
}

fn pack(p: Pointer) -> u64 {
    ((p.x.to_bits() as u64) << 32) | p.y.to_bits() as u64
}

fn unpack(bits: u64) -> Pointer {
    Pointer {
        x: f32::from_bits((bits >> 32) as u32),
        y: f32::from_bits(bits as u32),
    }
}
