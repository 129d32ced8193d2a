//! basic — smallest demo for the epi simulation engine.
//!
//! Runs a 200-tick outbreak over two clusters of the default SEIR-like
//! model: a dense "city" and a sparse "village" sharing one 320×320 world.
//! The village gets a harsher model edit (no vaccination-free recovery from
//! isolation) to show per-cluster catalog editing.  Results land in
//! `output/basic/` as CSV.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use epi_core::{ClusterId, Rect, SimConfig};
use epi_model::names;
use epi_output::{CsvWriter, SimOutputObserver};
use epi_sim::{ClusterSpec, SimulationBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const CITY_POP:    usize = 150;
const VILLAGE_POP: usize = 40;
const SEED:        u64   = 42;
const TICKS:       u64   = 200;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== basic — epi outbreak demo ===");
    println!("City: {CITY_POP}  |  Village: {VILLAGE_POP}  |  Ticks: {TICKS}  |  Seed: {SEED}");
    println!();

    // 1. Configure the world: two side-by-side boxes, moderate wander.
    let config = SimConfig {
        wander_mean:    0.2,
        wander_stdev:   0.05,
        max_iterations: TICKS,
        seed:           Some(SEED),
        ..SimConfig::default()
    };

    let city    = Rect::new(0.0, 0.0, 200.0, 320.0);
    let village = Rect::new(200.0, 0.0, 120.0, 320.0);

    // 2. Build the simulation: both clusters use the default catalog.
    let mut sim = SimulationBuilder::new(config)
        .cluster(ClusterSpec::new("city", city, CITY_POP))
        .cluster(ClusterSpec::new("village", village, VILLAGE_POP))
        .build()?;

    println!(
        "Initialized {} agents, {} seeded infections",
        sim.world.agents.len(),
        sim.world.counters.total_initial_infections(),
    );

    // 3. Per-cluster model edit: the village has no home recovery — isolated
    //    cases deteriorate to hospital care instead.
    let village_id = ClusterId(1);
    sim.clear_transitions(village_id, names::INFECTED_ISOLATED)?;
    sim.set_transition(village_id, names::INFECTED_ISOLATED, names::INFECTED_HOSPITAL, 0.15)?;

    // 4. Set up CSV output.
    std::fs::create_dir_all("output/basic")?;
    let writer = CsvWriter::new(Path::new("output/basic"))?;
    let mut obs = SimOutputObserver::new(writer);

    // 5. Run to the iteration cap.
    let t0 = Instant::now();
    sim.play(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!();
    println!(
        "Simulation complete: {} iterations in {:.3} s",
        sim.iteration(),
        elapsed.as_secs_f64(),
    );
    println!("  results.csv : {} rows", sim.world.results.len());
    println!("  history.csv : {} rows", sim.world.history_rows().len());
    println!();

    // 7. Final census table.
    let counters = &sim.world.counters;
    println!("{:<28} {:>8}", "Counter", "Value");
    println!("{}", "-".repeat(37));
    for (name, value) in counters.names().iter().zip(counters.values()) {
        println!("{name:<28} {value:>8}");
    }

    Ok(())
}
