//! vulncheck-harness - command-line entry point

use std::process::ExitCode;
use std::sync::Arc;

use vulncheck_harness::{
    Config,
    application::ComponentRegistry,
    infrastructure::{VulnCheckClient, load_env_file},
    init_tracing,
    presentation::{Dispatcher, Outcome},
};

#[tokio::main]
async fn main() -> ExitCode {
    // .env must be loaded before configuration reads the environment
    let env_file = load_env_file();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration, using defaults: {}", e);
        Config::default()
    });

    if let Err(e) = init_tracing(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match env_file {
        Ok(Some(path)) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Ok(None) => tracing::debug!("No .env file found"),
        Err(e) => tracing::warn!(error = %e, "Continuing without .env file"),
    }

    let client = match VulnCheckClient::new(&config.api) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create VulnCheck client");
            return ExitCode::FAILURE;
        }
    };

    let dispatcher = Dispatcher::new(ComponentRegistry::with_builtins(), Arc::new(client));

    match dispatcher
        .dispatch(std::env::args_os(), &mut std::io::stdout())
        .await
    {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::UsageError) => ExitCode::from(2),
        Err(e) => {
            tracing::error!(error = %e, kind = e.error_type(), "Component failed");
            ExitCode::FAILURE
        }
    }
}
