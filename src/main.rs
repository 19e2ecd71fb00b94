//! CAPCHECK entry point.
//!
//! Runs the built-in restriction suite against the reference packaged
//! environment and prints a JSON report.
//!
//! ## CLI Subcommands
//!
//! - `capcheck-cli` or `capcheck-cli run` - Run the suite (default)
//! - `capcheck-cli list` - List built-in scenarios
//! - `capcheck-cli version` - Show version

use std::process::ExitCode;

use capcheck::config::{self, RestrictionPolicy};
use capcheck::env::PackagedStubEnv;
use capcheck::scenarios::builtin_suite;
use capcheck::telemetry::init_logging;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("run");

    match command {
        "run" | "" => run_suite(),
        "list" => {
            for scenario in builtin_suite() {
                println!("{}", scenario.name);
            }
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("capcheck {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn run_suite() -> ExitCode {
    let env_config = config::load();
    if let Err(e) = init_logging(&env_config.log) {
        eprintln!("Logging init failed: {}", e);
        return ExitCode::from(2u8);
    }

    let policy = match &env_config.policy_path {
        Some(path) => match RestrictionPolicy::load(path) {
            Ok(policy) => policy,
            Err(e) => {
                eprintln!("Policy error: {}", e);
                return ExitCode::from(2u8);
            }
        },
        None => RestrictionPolicy::default(),
    };

    let env = PackagedStubEnv::new();
    let report = capcheck::run_builtin_suite(&env, &policy);

    match report.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Report serialization failed: {}", e);
            return ExitCode::FAILURE;
        }
    }

    eprintln!("{} passed, {} failed", report.passed(), report.failed());
    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_usage() {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!(
        "capcheck - Restriction assertion runner v{}

USAGE:
    capcheck-cli [COMMAND]

COMMANDS:
    run          Run the built-in suite (default when no command given)
    list         List built-in scenarios
    version      Show version information
    help         Show this help message

ENVIRONMENT:
    CAPCHECK_LOG_LEVEL    Log filter directive (default: info)
    CAPCHECK_LOG_FORMAT   json or pretty (default: json)
    CAPCHECK_POLICY_PATH  TOML file overriding expected messages

EXIT CODES:
    0  All scenarios passed
    1  One or more scenarios failed
    2  Configuration error
",
        version
    );
}
