//! The `hotpath` binary.
//!
//! `hotpath run` (the default when invoked with no arguments) executes
//! the reference call-overhead benchmark and prints the report to
//! stdout. `hotpath area <file.yaml>` computes a rectangle's area from
//! corner coordinates in a YAML file.
//!
//! Diagnostics go through `log` at debug level; set `HOTPATH_LOG=debug`
//! to see them. The report itself is plain stdout.

use anyhow::Result;
use clap::{Arg, Command};
use log::debug;

use hotpath::prelude::{Harness, HarnessConfig};

mod area;

fn cli() -> Command {
    Command::new("hotpath")
        .about("Native call-overhead benchmarks")
        .subcommand(
            Command::new("run").about("Run the call-overhead benchmark and print the report"),
        )
        .subcommand(
            Command::new("area")
                .about("Compute a rectangle's area from a YAML coordinate file")
                .arg(
                    Arg::new("yaml-file")
                        .help("Path to a YAML file with corner coordinates a, b, c, d")
                        .required(true)
                        .index(1),
                ),
        )
}

fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_env("HOTPATH_LOG")
        .init();
}

fn run_benchmark() -> Result<()> {
    let config = HarnessConfig::default();
    debug!(
        "warmup_rounds={} fast_calls={} slow_calls={} slow_inner_iterations={}",
        config.warmup_rounds, config.fast_calls, config.slow_calls, config.slow_inner_iterations
    );

    let harness = Harness::reference(config)?;

    println!("hotpath call-overhead benchmark");
    println!("===============================\n");

    debug!("warmup and timed phases starting");
    let report = harness.run();
    print!("{report}");

    Ok(())
}

fn main() -> Result<()> {
    init_logging();

    let matches = cli().get_matches();
    match matches.subcommand() {
        Some(("area", sub)) => {
            let path = sub
                .get_one::<String>("yaml-file")
                .expect("yaml-file is a required argument");
            area::run(path)
        }
        Some(("run", _)) | None => run_benchmark(),
        _ => unreachable!("clap rejects unknown subcommands"),
    }
}
