//! Demonstrates exponential smoothing of noisy ADC readings
//!
//! Shows how the smoothing factor trades responsiveness for noise rejection,
//! and how to derive the factor from a sampling period and time constant.

use exp_smooth::{factor_from_time_constant, ExponentialFilter, VERSION};

fn main() {
    println!("=== {} ===\n", VERSION);

    let noisy_samples = [2048_u16, 2100, 2000, 2080, 1990, 2050, 2020, 2060];

    for factor in [1.0_f32, 0.5, 0.2] {
        println!("Factor {:.1}", factor);
        let mut filter = ExponentialFilter::new(factor);

        println!("   Input → Output");
        for &sample in &noisy_samples {
            let output = filter.compute_value_from(sample);
            println!("   {:4} → {:7.1}", sample, output);
        }
        println!();
    }

    // 10 ms sampling of a process with 50 ms time constant
    let factor = factor_from_time_constant(0.010_f32, 0.050);
    println!("Time constant 50 ms @ 10 ms sampling → factor {:.3}", factor);

    let mut filter = ExponentialFilter::new(factor);
    filter.compute_value(0.0);

    println!("   Step response");
    for step in 1..=10 {
        let output = filter.compute_value(1.0);
        println!("   {:3} ms → {:.3}", step * 10, output);
    }
    println!();

    println!("Changing factor mid-stream");
    let mut filter = ExponentialFilter::new(0.2_f32);
    println!("   150.0 → {:.1}", filter.compute_value(150.0));
    println!("   200.0 → {:.1}", filter.compute_value(200.0));
    filter.set_factor(0.6);
    println!("   200.0 → {:.1}  (factor {:.1})", filter.compute_value(200.0), filter.factor());
}
