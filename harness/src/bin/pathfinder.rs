//! Command-line runner.
//!
//! Usage: `pathfinder <algorithm|all> [--config FILE] [--trace]`
//!
//! Without `--trace`, prints the generated grid and one summary line per run.
//! With `--trace`, prints every event as canonical JSON, one per line,
//! followed by a `trace_digest=` line per run.

use std::path::PathBuf;
use std::process::ExitCode;

use pathfinder_harness::config::RunConfig;
use pathfinder_harness::environment::generate_grid;
use pathfinder_harness::report::{render_comparison, RunReport};
use pathfinder_harness::runner::{compare_all, run_algorithm, RunError};
use pathfinder_harness::telemetry::init_tracing;
use pathfinder_kernel::proof::canon::canonical_json_bytes;
use pathfinder_search::Algorithm;

const USAGE: &str = "usage: pathfinder <bfs|dfs|ucs|dls|iddfs|bidirectional|all> [--config FILE] [--trace]";

struct Args {
    /// `None` means all six.
    algorithm: Option<Algorithm>,
    config: Option<PathBuf>,
    trace: bool,
}

fn parse_args(raw: &[String]) -> Result<Args, String> {
    let mut iter = raw.iter();
    let selection = iter.next().ok_or("missing algorithm")?;
    let algorithm = if selection == "all" {
        None
    } else {
        Some(selection.parse::<Algorithm>().map_err(|e| e.to_string())?)
    };
    let mut args = Args {
        algorithm,
        config: None,
        trace: false,
    };
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--config" => {
                let path = iter.next().ok_or("--config needs a file path")?;
                args.config = Some(PathBuf::from(path));
            }
            "--trace" => args.trace = true,
            other => return Err(format!("unknown argument {other:?}")),
        }
    }
    Ok(args)
}

fn print_trace(report: &RunReport) -> Result<(), RunError> {
    for event in &report.events {
        let bytes = canonical_json_bytes(&event.to_json_value())?;
        println!("{}", String::from_utf8_lossy(&bytes));
    }
    println!("algorithm={} trace_digest={}", report.algorithm, report.trace_digest);
    Ok(())
}

fn execute(args: &Args) -> Result<(), RunError> {
    let config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    let reports = match args.algorithm {
        Some(algorithm) => vec![run_algorithm(algorithm, &config)?],
        None => compare_all(&config)?,
    };

    if args.trace {
        for report in &reports {
            print_trace(report)?;
        }
        return Ok(());
    }

    let grid = generate_grid(&config);
    println!(
        "grid {}x{} seed {} start {} target {}",
        config.rows, config.cols, config.seed, config.start, config.target
    );
    for line in grid.to_ascii() {
        println!("  {line}");
    }
    println!();
    print!("{}", render_comparison(&reports));
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };
    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
