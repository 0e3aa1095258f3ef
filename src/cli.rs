//! Command-line entrypoint.

use crate::case::builtin_cases;
use crate::config::{CREDENTIAL_ENV_VAR, Config, DEFAULT_BASE_URL};
use crate::http::HttpClient;
use crate::runner::TestRunner;
use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

/// Environment variable that enables debug logging, like `--verbose`.
pub const LOG_ENV_VAR: &str = "CHAT_SMOKE_LOG";

/// Send the built-in smoke requests to the chat gateway and report pass/fail
#[derive(Parser, Debug)]
#[command(name = "chat-smoke", version, about)]
pub struct Cli {
    /// Gateway host the cases are sent to
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Log request diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Runner configuration for these arguments, credential from the environment.
    #[must_use]
    pub fn config(&self) -> Config {
        Config::load().with_base_url(&self.base_url)
    }
}

/// Run every case and print the summary.
///
/// Case failures never change the exit status; only startup errors do.
pub async fn run(cli: Cli) -> ExitCode {
    match run_inner(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run_inner(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    let config = cli.config();
    if config.credential.is_placeholder() {
        tracing::warn!("{CREDENTIAL_ENV_VAR} not set, using placeholder token");
    }
    tracing::debug!(?config, "starting smoke run");

    let client = HttpClient::new(config.timeout).context("Failed to set up HTTP client")?;
    let mut runner = TestRunner::new(builtin_cases(&config), client, std::io::stdout());
    let results = runner.run().await;

    tracing::debug!(
        passed = results.iter().filter(|r| r.succeeded).count(),
        total = results.len(),
        "smoke run finished"
    );
    Ok(())
}

fn init_logging(verbose: bool) {
    if verbose || std::env::var(LOG_ENV_VAR).is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .try_init();
    } else if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }
}
