//! Demonstrates moving average filtering with maf
//!
//! Feeds a fixed test signal through filters with different weighting
//! kernels and prints input/output side by side.

use maf::{Config, FilterError, MovingAverage, Weighting};

const SIGNAL: [f32; 20] = [
    5.0, 5.0, 5.0, 3.0, 5.0, 5.0, 6.0, 5.0, 4.0, 5.0, 5.0, 7.0, 5.0, 5.0, 4.0, 5.0, 5.0, 5.0, 8.0,
    5.0,
];

fn show_signal(label: &str, signal: &[f32]) {
    print!("   {:<12}", label);
    for sample in signal {
        print!("{:.2}|", sample);
    }
    println!();
}

fn run(label: &str, filter: &mut MovingAverage<8>) -> Result<(), FilterError> {
    let mut filtered = [0.0; SIGNAL.len()];
    filter.process(&SIGNAL, &mut filtered)?;
    show_signal(label, &filtered);
    Ok(())
}

fn main() -> Result<(), FilterError> {
    println!("=== maf Filtering Examples ===\n");
    show_signal("Input", &SIGNAL);
    println!();

    // Example 1: Simple average, zero-seeded (startup ramp visible)
    println!("1. Simple average (window=4)");
    let mut filter: MovingAverage<8> = MovingAverage::uninit();
    filter.init(4)?;
    run("Output", &mut filter)?;
    filter.destroy()?;
    println!();

    // Example 2: Seeded at the expected level to skip the ramp
    println!("2. Simple average seeded at 5.0 (window=4)");
    let config = Config {
        window_length: 4,
        weighting: Weighting::simple_average(),
        initial_value: 5.0,
    };
    run("Output", &mut MovingAverage::from_config(&config)?)?;
    println!();

    // Example 3: Weighted kernels favor recent samples
    println!("3. Weighted kernels (window=8, seeded at 5.0)");
    let weightings = [
        ("Linear", Weighting::Linear),
        ("Exp a=0.3", Weighting::Exponential { alpha: 0.3 }),
        ("Gauss s=2", Weighting::Gaussian { sigma: 2.0 }),
    ];
    for (label, weighting) in weightings {
        let config = Config {
            window_length: 8,
            weighting,
            initial_value: 5.0,
        };
        run(label, &mut MovingAverage::from_config(&config)?)?;
    }
    println!();

    // Example 4: Heap-allocated instance
    println!("4. Boxed instance (window=2)");
    let mut boxed = MovingAverage::<8>::boxed(2)?;
    run("Output", &mut boxed)?;
    MovingAverage::release(boxed)?;

    Ok(())
}
