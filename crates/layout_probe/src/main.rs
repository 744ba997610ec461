//! Box-model probe binary.

use env_logger::{Builder, Env};
use layout_probe::{ProbeConfig, USAGE, run};
use log::error;
use std::env;
use std::io::{Write as _, stdout};
use std::process::exit;

fn main() {
    let _log_init: Result<(), _> = Builder::from_env(Env::default().filter_or("RUST_LOG", "warn"))
        .is_test(false)
        .try_init();
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        let _written = writeln!(stdout(), "{USAGE}");
        return;
    }
    let config = match ProbeConfig::from_env().apply_args(args) {
        Ok(config) => config,
        Err(err) => {
            error!("error: {err}");
            let _written = writeln!(stdout(), "{USAGE}");
            exit(2);
        }
    };
    match run(&config) {
        Ok(report) => {
            if let Err(err) = stdout().write_all(report.as_bytes()) {
                error!("error: cannot write report: {err}");
                exit(1);
            }
        }
        Err(err) => {
            error!("error: {err:#}");
            exit(1);
        }
    }
}
