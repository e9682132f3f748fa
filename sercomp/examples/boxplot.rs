//! Minimal end-to-end use of the library API: measure two operations,
//! write the measurement log to memory, parse it back, and print the chart
//! data an external plotter would bind to.
//!
//! Run with: cargo run --example boxplot

use sercomp::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let harness = Harness::new(100);

    let mut log = MeasurementLog::new(Vec::new());
    log.start()?;

    for (name, work) in [
        ("Checksum Serialization", 1_000u64),
        ("Checksum Deserialization", 10_000u64),
    ] {
        let ticks = harness.run(|| -> Result<(), std::io::Error> {
            std::hint::black_box((0..work).fold(0u64, |acc, i| acc.wrapping_add(i * i)));
            Ok(())
        })?;

        let micros: Vec<f64> = ticks.iter().map(|&t| ticks_to_micros(t)).collect();
        log.record(name, &micros)?;
    }

    log.finish()?;

    let text = String::from_utf8(log.into_inner())?;
    let chart = parse_log(&text)?;

    for (label, point) in chart.labels.iter().zip(&chart.points) {
        println!(
            "{label}: low {:.3} µs, open {:.3} µs, close {:.3} µs, high {:.3} µs",
            point.low, point.open, point.close, point.high
        );
    }

    Ok(())
}
