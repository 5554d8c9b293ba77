//! Binary that runs all six algorithms on the default generated grid and
//! prints deterministic output lines for cross-process verification.
//!
//! Usage: `trace_fixture`
//!
//! Output: key=value lines on stdout, one block per algorithm. Logs go to
//! stderr under `PATHFINDER_LOG`.

use pathfinder_harness::config::RunConfig;
use pathfinder_harness::environment::generate_grid;
use pathfinder_harness::telemetry::init_tracing;
use pathfinder_kernel::proof::hash::grid_fingerprint;
use pathfinder_search::{search, Algorithm};

fn main() {
    init_tracing();
    let config = RunConfig::default();
    let grid = generate_grid(&config);
    let policy = config.policy();

    println!("grid_fingerprint={}", grid_fingerprint(&grid).expect("grid fingerprint"));
    println!("policy_digest={}", policy.digest().expect("policy digest"));
    for algorithm in Algorithm::ALL {
        let run = search(algorithm, &grid, config.start, config.target, &policy)
            .expect("default policy is valid");
        for line in lock_tests::fixture_lines(&run) {
            println!("{line}");
        }
    }
}
