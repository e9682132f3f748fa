//! The Comparison Suite
//!
//! The ordered list of serialize/deserialize cases measured by `sercomp
//! run`. For each case the suite runs the harness, prints the console
//! summary line, and appends the data line to the measurement log. Before
//! any timing, every format must round-trip the payload unchanged: there
//! is no point comparing encoders that disagree on the data.

use std::io::{Cursor, Write};

use anyhow::{ensure, Context, Result};
use tracing::{debug, info, warn};

use crate::fixtures::{create_person, Person};
use sercomp_core::{pin_to_cpu, raise_priority, ticks_to_micros, Harness};
use sercomp_report::MeasurementLog;

/// Prepare the process for low-noise measurement.
///
/// Both steps are best-effort; a refusal degrades accuracy, not correctness.
pub fn prepare_environment(cpu: Option<usize>) {
    if let Some(cpu) = cpu {
        match pin_to_cpu(cpu) {
            Ok(()) => debug!("pinned measurement thread to cpu {cpu}"),
            Err(err) => warn!("could not pin to cpu {cpu}: {err}"),
        }
    }

    if let Err(err) = raise_priority() {
        warn!("could not raise process priority: {err}");
    }
}

/// Run every comparison case, bracketed by the start/stop marker lines.
pub fn run_suite<W: Write>(harness: &Harness, log: &mut MeasurementLog<W>) -> Result<()> {
    let person = create_person();
    verify_round_trips(&person)?;

    // Deserialization inputs, prepared outside any timed window.
    let json = serde_json::to_string(&person)?;
    let yaml = serde_yaml::to_string(&person)?;
    let toml_text = toml::to_string(&person)?;

    log.start()?;

    // ─── JSON ───
    let samples = harness.run(|| -> Result<()> {
        std::hint::black_box(serde_json::to_string(&person)?);
        Ok(())
    })?;
    record_series(log, "Json Serialization", &samples)?;

    let mut stream = Cursor::new(Vec::with_capacity(json.len()));
    let samples = harness.run_with_stream(&mut stream, |s| -> Result<()> {
        serde_json::to_writer(&mut *s, &person)?;
        Ok(())
    })?;
    record_series(log, "Json Stream Serialization", &samples)?;

    let samples = harness.run(|| -> Result<()> {
        std::hint::black_box(serde_json::from_str::<Person>(&json)?);
        Ok(())
    })?;
    record_series(log, "Json Deserialization", &samples)?;

    let mut stream = Cursor::new(json.clone().into_bytes());
    let samples = harness.run_with_stream(&mut stream, |s| -> Result<()> {
        std::hint::black_box(serde_json::from_reader::<_, Person>(&mut *s)?);
        Ok(())
    })?;
    record_series(log, "Json Stream Deserialization", &samples)?;

    // ─── YAML ───
    let samples = harness.run(|| -> Result<()> {
        std::hint::black_box(serde_yaml::to_string(&person)?);
        Ok(())
    })?;
    record_series(log, "Yaml Serialization", &samples)?;

    let mut stream = Cursor::new(Vec::with_capacity(yaml.len()));
    let samples = harness.run_with_stream(&mut stream, |s| -> Result<()> {
        serde_yaml::to_writer(&mut *s, &person)?;
        Ok(())
    })?;
    record_series(log, "Yaml Stream Serialization", &samples)?;

    let samples = harness.run(|| -> Result<()> {
        std::hint::black_box(serde_yaml::from_str::<Person>(&yaml)?);
        Ok(())
    })?;
    record_series(log, "Yaml Deserialization", &samples)?;

    let mut stream = Cursor::new(yaml.clone().into_bytes());
    let samples = harness.run_with_stream(&mut stream, |s| -> Result<()> {
        std::hint::black_box(serde_yaml::from_reader::<_, Person>(&mut *s)?);
        Ok(())
    })?;
    record_series(log, "Yaml Stream Deserialization", &samples)?;

    // ─── TOML (string transport only) ───
    let samples = harness.run(|| -> Result<()> {
        std::hint::black_box(toml::to_string(&person)?);
        Ok(())
    })?;
    record_series(log, "Toml Serialization", &samples)?;

    let samples = harness.run(|| -> Result<()> {
        std::hint::black_box(toml::from_str::<Person>(&toml_text)?);
        Ok(())
    })?;
    record_series(log, "Toml Deserialization", &samples)?;

    log.finish()?;

    Ok(())
}

/// One untimed round-trip per format. A mismatch would make every timing
/// comparison meaningless, so the suite refuses to start.
fn verify_round_trips(person: &Person) -> Result<()> {
    let json = serde_json::to_string(person).context("json encode")?;
    let back: Person = serde_json::from_str(&json).context("json decode")?;
    ensure!(&back == person, "json round-trip altered the payload");

    let yaml = serde_yaml::to_string(person).context("yaml encode")?;
    let back: Person = serde_yaml::from_str(&yaml).context("yaml decode")?;
    ensure!(&back == person, "yaml round-trip altered the payload");

    let toml_text = toml::to_string(person).context("toml encode")?;
    let back: Person = toml::from_str(&toml_text).context("toml decode")?;
    ensure!(&back == person, "toml round-trip altered the payload");

    info!("round-trip verification passed for all formats");
    Ok(())
}

/// Print the console summary and append the data line for one series.
fn record_series<W: Write>(
    log: &mut MeasurementLog<W>,
    name: &str,
    samples: &[u64],
) -> Result<()> {
    let micros: Vec<f64> = samples.iter().map(|&t| ticks_to_micros(t)).collect();
    print_measurements(&micros, name);
    log.record(name, &micros)
        .with_context(|| format!("recording series {name}"))
}

fn print_measurements(micros: &[f64], name: &str) {
    let min = micros.iter().copied().fold(f64::INFINITY, f64::min);
    let max = micros.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let avg = micros.iter().sum::<f64>() / micros.len().max(1) as f64;

    println!("{name} - min {min:.2} µs - max {max:.2} µs - avg {avg:.2} µs");
}
