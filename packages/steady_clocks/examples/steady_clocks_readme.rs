//! Example code for the `README.md` file.
//!
//! This contains the same code that appears in the `steady_clocks` package `README.md`.

use std::time::Duration;

use steady_clocks::{FastClock, PrecisionClock};

fn main() {
    // Precise measurement of a short operation.
    let precise = PrecisionClock::new();
    let start = precise.now();

    std::thread::sleep(Duration::from_millis(10));

    let ticks = precise.now() - start;
    println!("Work took {ticks} ({:?})", start.elapsed(&precise));

    // Cheap timestamps for high-frequency collection.
    let fast = FastClock::new();
    let timestamps: Vec<_> = (0..1000).map(|_| fast.now()).collect();

    println!(
        "Collected {} timestamps in {:?}",
        timestamps.len(),
        timestamps
            .last()
            .zip(timestamps.first())
            .map(|(last, first)| last.saturating_duration_since(*first))
            .unwrap_or_default()
    );
}
