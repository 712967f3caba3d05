use std::io;
use std::process::ExitCode;

use clap::Parser;
use multitee::TeeBuilder;
use multitee::cli::TeeArgs;
use tracing_subscriber::EnvFilter;

const NAME: &str = "multitee";

/// Logging is off unless `MULTITEE_LOG` holds a filter such as `debug`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("MULTITEE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = TeeArgs::parse();
    init_tracing();

    let engine = TeeBuilder::from_options(args.into_options()).build();

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    match engine.run(&mut output, &mut input) {
        Ok(report) => {
            for e in &report.close_errors {
                eprintln!("{NAME}: {e}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{NAME}: {err}");
            for e in err.close_errors() {
                eprintln!("{NAME}: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
