use airtable_fetch::{Config, run};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let root = match std::env::current_dir() {
        Ok(root) => root,
        Err(e) => {
            tracing::error!("cannot determine working directory: {}", e);
            return ExitCode::from(1);
        }
    };

    // Validate before touching the output directory.
    let config = match Config::from_env(&root) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::from(1);
        }
    };

    match run(&config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(1)
        }
    }
}
