use std::io;
use std::process::ExitCode;

use todo_export::{report, Config, RunError};
use tracing::warn;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging() {
    // Diagnostics go to stderr; stdout carries the report.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let config = Config::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match todo_export::run(&config, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(RunError::Fetch(err)) => {
            if let Err(io_err) = report::fetch_failure(&mut out, &err) {
                warn!(error = %io_err, fetch_error = %err, "could not print fetch failure");
            }
            ExitCode::from(err.exit_code())
        }
        Err(err @ RunError::Other(_)) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(err.exit_code())
        }
    }
}
