//! Command-line entry point for headless runs.
//!
//! A run is equally callable as a library (`run_simulation`) or from the
//! binary; this module is the thin layer that wires command-line arguments
//! to parameter loading, logging, the run itself and the optional report.

use std::path::Path;

use clap::Parser;

use crate::error::ContagionError;
use crate::log::{set_log_level, LevelFilter};
use crate::params::Params;
use crate::random::rng_from_seed;
use crate::report::write_final_state;
use crate::sim::{run_simulation, Simulation};

/// Command-line arguments for the simulator.
#[derive(Parser, Debug)]
#[command(name = "contagion", about = "Epidemic simulation over a random contact network")]
pub struct BaseArgs {
    /// Random seed; overrides the seed from the parameters file
    #[arg(short, long)]
    pub random_seed: Option<u64>,

    /// Optional path to a JSON parameters file
    #[arg(short, long, default_value = "")]
    pub config: String,

    /// Optional path for the final-state CSV report
    #[arg(short, long, default_value = "")]
    pub output: String,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(short, long)]
    pub log_level: Option<LevelFilter>,
}

/// Runs one simulation from command-line arguments and returns the
/// finished run.
///
/// # Errors
///
/// Returns an error if the parameters file cannot be loaded, the
/// parameters are invalid, or the report cannot be written.
pub fn run(args: BaseArgs) -> Result<Simulation, ContagionError> {
    if let Some(level) = args.log_level {
        set_log_level(level);
    }

    let mut params = if args.config.is_empty() {
        Params::default()
    } else {
        println!("Loading parameters from: {}", args.config);
        Params::load_from_json(Path::new(&args.config))?
    };
    if let Some(seed) = args.random_seed {
        params.seed = seed;
    }

    let mut rng = rng_from_seed(params.seed);
    let sim = run_simulation(&params, &mut rng)?;

    let counts = sim.counts();
    println!(
        "after {} days: {} susceptible, {} infected, {} recovered (population {}, seed {})",
        params.days,
        counts.susceptible,
        counts.infected,
        counts.recovered,
        sim.graph().population(),
        params.seed
    );

    if !args.output.is_empty() {
        write_final_state(Path::new(&args.output), &sim)?;
        println!("Final state written to: {}", args.output);
    }

    Ok(sim)
}
