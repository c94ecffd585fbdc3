//! Compare serial and parallel ticks across grid sizes

use std::time::Instant;

use life_universe::{Universe, domain::ConwayRule, logging};
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;

const SEED: u64 = 0x5eed;

fn random_universe(size: u32) -> anyhow::Result<Universe> {
    let mut rng = StdRng::seed_from_u64(SEED);
    Ok(Universe::random(size, size, 0.3, &mut rng)?)
}

fn benchmark_serial(size: u32, iterations: u32) -> anyhow::Result<f64> {
    let mut universe = random_universe(size)?;

    let start = Instant::now();
    for _ in 0..iterations {
        universe.tick_with(&ConwayRule);
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn benchmark_parallel(size: u32, iterations: u32) -> anyhow::Result<f64> {
    let mut universe = random_universe(size)?;

    let start = Instant::now();
    for _ in 0..iterations {
        universe.tick_parallel_with(&ConwayRule);
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let sizes = [64, 128, 256, 512, 1024];
    info!(threads = rayon::current_num_threads(), "starting benchmark");

    println!("{:<12} {:>12} {:>12} {:>9}", "Grid", "Serial ms", "Parallel ms", "Speedup");
    println!("{}", "-".repeat(48));

    for size in sizes {
        let iterations = if size <= 256 { 50 } else { 10 };
        let serial = benchmark_serial(size, iterations)?;
        let parallel = benchmark_parallel(size, iterations)?;

        println!(
            "{:<12} {:>12.3} {:>12.3} {:>8.1}x",
            format!("{size}x{size}"),
            serial,
            parallel,
            serial / parallel
        );
    }

    Ok(())
}
