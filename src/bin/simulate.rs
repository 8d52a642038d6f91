//! Headless run of the particle field across several seeds.
//! Reports connectivity and boundary behaviour without opening a window.

use drift_core::{FieldConfig, Pointer};
use drift_sim::ParticleField;

const FRAMES: usize = 3_600;
const DT: f32 = 1.0 / 60.0;

/// Per-seed statistics over a full run
struct RunStats {
    seed: u64,
    mean_segments: f64,
    max_segments: usize,
    /// Most segments any particle emitted as the lower endpoint in one frame
    max_fan_out: usize,
    /// Frames with at least one particle past the bounds
    overshoot_frames: usize,
    buffer_len: usize,
}

/// Pointer circling the middle of the screen once every ten seconds
fn pointer_at(frame: usize) -> Pointer {
    let angle = frame as f32 * DT * std::f32::consts::TAU / 10.0;
    Pointer::new(angle.cos() * 0.5, angle.sin() * 0.5)
}

fn run(seed: u64) -> Result<RunStats, drift_core::FieldError> {
    let config = FieldConfig {
        seed,
        ..FieldConfig::default()
    };
    let mut field = ParticleField::new(config)?;

    let mut total_segments = 0usize;
    let mut max_segments = 0usize;
    let mut max_fan_out = 0usize;
    let mut overshoot_frames = 0usize;
    let mut fan_out = vec![0usize; field.len()];

    for frame in 0..FRAMES {
        field.advance(DT, pointer_at(frame))?;

        let segments = field.segments().len();
        total_segments += segments;
        max_segments = max_segments.max(segments);

        fan_out.iter_mut().for_each(|n| *n = 0);
        for c in field.connections() {
            fan_out[c.i as usize] += 1;
        }
        max_fan_out = max_fan_out.max(fan_out.iter().copied().max().unwrap_or(0));

        if field.out_of_bounds() > 0 {
            overshoot_frames += 1;
        }
    }

    Ok(RunStats {
        seed,
        mean_segments: total_segments as f64 / FRAMES as f64,
        max_segments,
        max_fan_out,
        overshoot_frames,
        buffer_len: field.positions().len(),
    })
}

fn main() {
    let seeds: Vec<u64> = (0..8).map(|i| 42 + i * 7919).collect();

    eprintln!("Simulating {} fields for {} frames each...", seeds.len(), FRAMES);

    let mut results = Vec::with_capacity(seeds.len());
    for (n, &seed) in seeds.iter().enumerate() {
        match run(seed) {
            Ok(stats) => results.push(stats),
            Err(e) => eprintln!("  seed {seed}: {e}"),
        }
        eprint!("  {}/{}...\r", n + 1, seeds.len());
    }
    eprintln!("Done.");

    println!();
    println!(
        "{:>8} {:>10} {:>8} {:>8} {:>10} {:>8}",
        "seed", "mean seg", "max seg", "fan-out", "overshoot", "buffer"
    );
    for r in &results {
        println!(
            "{:>8} {:>10.1} {:>8} {:>8} {:>10} {:>8}",
            r.seed, r.mean_segments, r.max_segments, r.max_fan_out, r.overshoot_frames, r.buffer_len
        );
    }
}
