/**
 * Rover Drive Tick Metrics
 *
 * Measures the per-tick cost of the input-to-frame pipeline:
 * - joystick mapping
 * - override arbitration
 * - frame formatting
 *
 * Outputs CSV for analysis and prints summary statistics.
 */

use rover_drive::{compute_frame, InputSnapshot, OverrideButtons, SpeedMapper};
use std::fs::File;
use std::io::Write;
use std::time::Instant;

const NUM_SAMPLES: usize = 100_000;

fn main() -> std::io::Result<()> {
    let mapper = SpeedMapper::default();
    let mut samples = Vec::with_capacity(NUM_SAMPLES);

    let mut csv = File::create("tick_metrics.csv")?;
    writeln!(csv, "sample,x,y,override,ns")?;

    for i in 0..NUM_SAMPLES {
        // deterministic sweep over the input space
        let x = ((i * 7) % 1024) as i32;
        let y = ((i * 13) % 1024) as i32;
        let buttons = OverrideButtons {
            forward: i % 17 == 0,
            backward: i % 19 == 0,
            left: i % 23 == 0,
            right: i % 29 == 0,
        };
        let input = InputSnapshot { x, y, buttons };

        let start = Instant::now();
        let frame = compute_frame(&mapper, &input);
        let bytes = frame.to_bytes();
        let elapsed = start.elapsed().as_nanos() as u64;

        std::hint::black_box(bytes);
        samples.push(elapsed);

        if i % 100 == 0 {
            writeln!(csv, "{},{},{},{},{}", i, x, y, buttons.any(), elapsed)?;
        }
    }

    samples.sort_unstable();
    let total: u64 = samples.iter().sum();

    println!("Samples: {}", NUM_SAMPLES);
    println!("Mean:   {} ns", total / NUM_SAMPLES as u64);
    println!("Median: {} ns", samples[NUM_SAMPLES / 2]);
    println!("p99:    {} ns", samples[NUM_SAMPLES * 99 / 100]);
    println!("Max:    {} ns", samples[NUM_SAMPLES - 1]);
    println!("CSV written to tick_metrics.csv");

    Ok(())
}
