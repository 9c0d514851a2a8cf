use std::path::Path;

use anyhow::Context;

pub mod cli;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod logger;

pub type Result<T> = anyhow::Result<T>;

/// Entry point used by the binary crate. Returns the process exit code.
pub fn run() -> Result<i32> {
    init_tracing();

    let sinks = logger::Sinks::standard();
    let config = config::Config::load(Path::new(config::CONFIG_FILE))
        .context("failed to load configuration")?;

    let argv: Vec<String> = std::env::args().collect();
    let mut stdout = std::io::stdout().lock();
    Ok(dispatch::run(&argv, &config, &sinks, &mut stdout))
}

fn init_tracing() {
    use std::sync::Once;
    use tracing_subscriber::{fmt, EnvFilter};

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}
