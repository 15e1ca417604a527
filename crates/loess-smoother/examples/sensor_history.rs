//! Sensor History Smoothing Examples
//!
//! This example walks through smoothing a day of gateway readings:
//! - Smoothing a single series
//! - Selecting metrics from a `fields=` list
//! - Out-of-order and duplicate timestamps
//! - Checked smoothing of untrusted data

use loess_smoother::prelude::*;

const BASE_TS: i64 = 1_717_171_717_000;

fn main() -> Result<(), SmootherError> {
    println!("{}", "=".repeat(80));
    println!("Sensor History Smoothing Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_single_series()?;
    example_2_metric_fields()?;
    example_3_unordered_history();
    example_4_checked_smoothing();

    Ok(())
}

/// Deterministic noisy readings, one per minute.
fn readings(n: usize) -> Vec<SensorReading> {
    (0..n)
        .map(|i| {
            let phase = i as f64 / 30.0;
            let jitter = ((i * 7919) % 13) as f64 / 13.0 - 0.5;
            SensorReading {
                timestamp: BASE_TS + 60_000 * i as i64,
                voltage: 230.0 + 2.0 * jitter,
                power: 55.0 + 10.0 * phase.sin() + 4.0 * jitter,
                temperature: 21.0 + phase.cos() + jitter,
                humidity: 45.0 - 2.0 * phase.sin() + 3.0 * jitter,
                ..SensorReading::default()
            }
        })
        .collect()
}

/// Example 1: Single Series
fn example_1_single_series() -> Result<(), SmootherError> {
    println!("Example 1: Single Series");
    println!("{}", "-".repeat(80));

    let samples = Metric::Temperature.series(&readings(60));
    let smoothed = smooth(&samples, 0.2)?;

    for point in smoothed.iter().take(5) {
        println!(
            "t={:.0} raw={:.3} plotted={:.3} actual={}",
            point.x, point.original_value, point.y, point.is_actual
        );
    }

    println!();
    Ok(())
}

/// Example 2: Metric Fields
fn example_2_metric_fields() -> Result<(), SmootherError> {
    println!("Example 2: Metric Fields");
    println!("{}", "-".repeat(80));

    let metrics = Metric::parse_list("temperature, humidity")?;
    let smoother = LoessSmoother::<f64>::builder().bandwidth(0.3).build()?;

    for series in smoother.smooth_metrics(&readings(48), &metrics) {
        println!("{series}");
    }

    Ok(())
}

/// Example 3: Unordered History
fn example_3_unordered_history() {
    println!("Example 3: Unordered History");
    println!("{}", "-".repeat(80));

    let mut samples = Metric::Power.series(&readings(12));
    samples.swap(3, 8);
    samples.push(samples[5]);

    let smoothed = LoessSmoother::new().smooth(&samples);
    for (input, output) in samples.iter().zip(&smoothed) {
        println!("t={:.0} raw={:.2} plotted={:.2}", input.x, input.y, output.y);
    }

    println!();
}

/// Example 4: Checked Smoothing
fn example_4_checked_smoothing() {
    println!("Example 4: Checked Smoothing");
    println!("{}", "-".repeat(80));

    let mut samples = Metric::Voltage.series(&readings(10));
    samples[4].y = f64::NAN;

    match LoessSmoother::new().try_smooth(&samples) {
        Ok(_) => println!("accepted"),
        Err(e) => println!("rejected: {e}"),
    }

    let strict = LoessSmoother::<f64>::builder().input_order(AssumeSorted).build();
    if let Ok(strict) = strict {
        let reversed: Vec<Sample> = Metric::Voltage.series(&readings(10)).into_iter().rev().collect();
        match strict.try_smooth(&reversed) {
            Ok(_) => println!("accepted"),
            Err(e) => println!("rejected: {e}"),
        }
    }

    println!();
}
