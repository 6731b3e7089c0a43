/// Pure Rust core benchmarks for the discharge engine.
///
/// Uses std::time::Instant for timing, a deterministic LCG PRNG for data
/// generation, and std::hint::black_box to prevent dead-code elimination.
use std::hint::black_box;
use std::time::{Duration, Instant};

use damflow_core::balance::{simulate_step, StepInputs};
use damflow_core::discharge;
use damflow_core::inputs::Readings;

const REPEATS: usize = 7;

/// Simple LCG PRNG for deterministic data generation.
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as f64 / (1u64 << 31) as f64
    }
}

fn make_readings(n: usize, seed: u64) -> Vec<Readings> {
    let mut rng = Lcg(seed);
    (0..n)
        .map(|_| {
            let mut unit_loads = [None; 6];
            for load in &mut unit_loads {
                if rng.next_f64() > 0.4 {
                    *load = Some(rng.next_f64() * 32.0);
                }
            }
            Readings {
                reservoir_level: Some(80.0 + rng.next_f64() * 30.0),
                tailrace_level: Some(20.0 + rng.next_f64() * 5.0),
                hcv_left_opening: Some(rng.next_f64() * 100.0),
                hcv_right_opening: Some(rng.next_f64() * 100.0),
                unit_loads,
                manual_turbine_discharge: None,
            }
        })
        .collect()
}

fn make_steps(n: usize, seed: u64) -> Vec<StepInputs> {
    let mut rng = Lcg(seed);
    (0..n)
        .map(|_| StepInputs {
            initial_elevation: Some(80.0 + rng.next_f64() * 30.0),
            inflow: rng.next_f64() * 400.0,
            spillway_outflow: rng.next_f64() * 50.0,
            turbine_outflow: rng.next_f64() * 250.0,
            valve_outflow: rng.next_f64() * 100.0,
            duration_hours: 1.0 + rng.next_f64() * 71.0,
        })
        .collect()
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_discharge(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();
    for &n in sizes {
        let readings = make_readings(n, 42);

        // Warmup
        for r in &readings {
            black_box(discharge::compute(r));
        }

        let dur = median_time(|| {
            for r in &readings {
                black_box(discharge::compute(r));
            }
        });
        results.push(("discharge", n, dur));
    }
    results
}

fn bench_balance(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();
    for &n in sizes {
        let steps = make_steps(n, 42);

        // Warmup
        for s in &steps {
            black_box(simulate_step(s));
        }

        let dur = median_time(|| {
            for s in &steps {
                black_box(simulate_step(s));
            }
        });
        results.push(("balance", n, dur));
    }
    results
}

fn main() {
    println!("Pure Rust Core Benchmarks");
    println!("============================================================");
    println!("{:<18} {:>6}   {:>12}", "Engine", "N", "Median (ms)");
    println!("--------------------------------------------");

    let mut all_results: Vec<(&str, usize, Duration)> = Vec::new();

    all_results.extend(bench_discharge(&[1_000, 100_000]));
    all_results.extend(bench_balance(&[1_000, 100_000]));

    for (engine, n, dur) in &all_results {
        let ms = dur.as_secs_f64() * 1000.0;
        println!("{:<18} {:>6}      {:>8.2}", engine, n, ms);
    }

    println!("============================================================");
}
