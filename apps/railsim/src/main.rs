//! railsim — rail network train simulator.
//!
//! Loads a stations file and a connections file, places trains at random,
//! and then either runs a fixed number of ticks writing CSV output
//! (`--ticks`) or opens an interactive menu.  Any file or train count not
//! given on the command line is asked for.

mod console;
mod input;


use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rn_core::{RandomSource, SimConfig, Tick};
use rn_output::{write_dot, CsvWriter, OutputWriter, SimOutputObserver};
use rn_sim::{Sim, SimBuilder, SimObserver, TracingObserver};
use rn_topology::{load_connections_csv, load_stations_csv, RailNetwork};

use console::Console;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "railsim", version)]
#[command(about = "Simulate trains moving over a rail network")]
struct Args {
    /// Stations file (`name,delay_probability` per line); asked for if omitted
    #[arg(long)]
    stations: Option<PathBuf>,

    /// Connections file (`source,target,line,direction` per line); asked for if omitted
    #[arg(long)]
    connections: Option<PathBuf>,

    /// Number of trains to place; asked for if omitted
    #[arg(long)]
    trains: Option<usize>,

    /// RNG seed; a random seed is used if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Run this many ticks without the menu and write CSV output
    #[arg(long)]
    ticks: Option<u64>,

    /// Directory for CSV output in batch mode
    #[arg(long, default_value = "output")]
    output: PathBuf,

    /// Write train snapshots every N ticks in batch mode (0 = never)
    #[arg(long, default_value_t = 1)]
    snapshot_interval: u64,

    /// Graphviz file written by the map menu option, or after a batch run
    #[arg(long)]
    map: Option<PathBuf>,

    /// Log per-tick summaries
    #[arg(short, long)]
    verbose: bool,
}

const DEFAULT_MAP_PATH: &str = "rail_network.dot";

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with prompts on stdout.
    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    // 1. Network.
    let network = load(&args, &mut console)?;

    // 2. Trains.
    let train_count = match args.trains {
        Some(0) => bail!("You need to have at least one train."),
        Some(n) => n,
        None => console.ask_train_count()?,
    };

    // 3. Sim.
    let config = SimConfig {
        total_ticks: args.ticks.unwrap_or(0),
        seed: args.seed,
        train_count,
        output_interval_ticks: args.snapshot_interval,
    };
    let mut sim = SimBuilder::from_config(config, network).build()?;

    // 4. Run.
    match args.ticks {
        Some(_) => run_batch(&mut sim, &args.output, args.map.as_deref()),
        None => {
            let map = args.map.unwrap_or_else(|| PathBuf::from(DEFAULT_MAP_PATH));
            println!();
            console.menu(&mut sim, &map)
        }
    }
}

/// Load both files, from the command line where given, otherwise by asking.
fn load<R: io::BufRead, W: io::Write>(args: &Args, console: &mut Console<R, W>) -> Result<RailNetwork> {
    let stations = match &args.stations {
        Some(p) => load_stations_csv(p).with_context(|| format!("reading {}", p.display()))?,
        None => console.ask_stations()?.1,
    };
    let connections = match &args.connections {
        Some(p) => load_connections_csv(p).with_context(|| format!("reading {}", p.display()))?,
        None => console.ask_connections()?.1,
    };
    RailNetwork::from_records(stations, connections).context("building rail network")
}

// ── Batch mode ────────────────────────────────────────────────────────────────

/// CSV output plus tracing, counting rows for the final report.
struct BatchObserver<W: OutputWriter> {
    output:        SimOutputObserver<W>,
    log:           TracingObserver,
    snapshot_rows: usize,
    summary_rows:  usize,
}

impl<W: OutputWriter> SimObserver for BatchObserver<W> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.log.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, tick: Tick, report: &rn_sim::TickReport) {
        self.summary_rows += 1;
        self.output.on_tick_end(tick, report);
        self.log.on_tick_end(tick, report);
    }

    fn on_snapshot(&mut self, tick: Tick, network: &RailNetwork) {
        self.snapshot_rows += network.train_count();
        self.output.on_snapshot(tick, network);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.output.on_sim_end(final_tick);
        self.log.on_sim_end(final_tick);
    }
}

fn run_batch<S: RandomSource>(sim: &mut Sim<S>, out_dir: &Path, map: Option<&Path>) -> Result<()> {
    println!("{}", sim.network);
    println!(
        "Simulating {} trains for {} ticks",
        sim.config.train_count, sim.config.total_ticks
    );

    let writer = CsvWriter::new(out_dir)
        .with_context(|| format!("creating output in {}", out_dir.display()))?;
    let mut obs = BatchObserver {
        output:        SimOutputObserver::new(writer),
        log:           TracingObserver::default(),
        snapshot_rows: 0,
        summary_rows:  0,
    };

    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.output.take_error() {
        return Err(e).context("writing CSV output");
    }

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  train_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv  : {} rows", obs.summary_rows);

    if let Some(path) = map {
        write_dot(&sim.network, path).with_context(|| format!("writing map to {}", path.display()))?;
        println!("  map                 : {}", path.display());
    }
    println!();

    for train in sim.network.trains() {
        println!("{}", sim.train_summary(train.id())?);
    }
    Ok(())
}
