use std::io;
use std::process::ExitCode;

use clap::Parser;
use meowpass::{Config, OsRandom};

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("MEOWPASS_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .without_time(),
        )
        .init();
}

fn main() -> ExitCode {
    let config = Config::parse();

    #[cfg(feature = "tracing")]
    init_tracing();

    let mut out = io::stdout().lock();
    match meowpass::run(&config, OsRandom, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
