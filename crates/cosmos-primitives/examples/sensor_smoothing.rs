//! Adaptive Sensor Smoothing Example
//!
//! This example demonstrates the adaptive smoothing filter on a noisy
//! reading stream:
//! - Small fluctuations are blended away by the smoothing factor
//! - A genuine level change snaps through immediately
//! - Readings are tracked as (time, value) points for downstream plotting

#[cfg(feature = "std")]
use cosmos_primitives::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), SmoothingError> {
    println!("{}", "=".repeat(60));
    println!("Adaptive Sensor Smoothing");
    println!("{}", "=".repeat(60));

    // Noisy readings around 10.0, then a step change to 25.0.
    let readings = [
        10.2, 9.8, 10.4, 9.9, 10.1, 10.3, 9.7, 10.0, // stable level
        25.0, // step change: relative deviation > threshold, snaps
        24.8, 25.3, 24.9, 25.1, // stable around the new level
    ];

    let mut filter = AdaptiveSmoother::builder()
        .threshold(0.8)
        .factor(0.25)
        .start(10.0)
        .build()?;

    println!("{:>6} {:>10} {:>10}", "t", "raw", "filtered");
    for (t, &raw) in readings.iter().enumerate() {
        let filtered = filter.smooth(raw);
        let sample = Point2D::from_f64(t as f64, filtered);
        println!("{:>6} {:>10.2} {:>10.3}", sample.x(), raw, sample.y());
    }

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}
