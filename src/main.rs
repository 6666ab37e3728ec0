use std::io;
use std::process::ExitCode;

use cf_stats_exporter::cli::{run, Cli, EXIT_FAILURE};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout carries only the JSON array.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version are reported through the error path too.
            return if e.use_stderr() {
                ExitCode::from(EXIT_FAILURE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing();

    let code = run(cli, &mut io::stdout(), &mut io::stderr()).await;
    ExitCode::from(code)
}
