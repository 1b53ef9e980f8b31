use clap::Parser;
use email_checker::benchmark::{DEFAULT_CORPUS, DEFAULT_ITERATIONS, run_benchmark};
use std::process::ExitCode;

/// Compares the naive and combined email syntax checks.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Passes over the sample corpus per strategy
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let report = run_benchmark(&DEFAULT_CORPUS, args.iterations);

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("failed to serialize report: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{report}");
    }

    if report.all_match {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
