use anyhow::{Context, Result};
use clap::Parser;
use std::env;

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
///
/// AWS credentials are deliberately not configurable here — they travel
/// exclusively in request bodies.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_file: String,
    pub s3_endpoint: Option<String>,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug)]
#[command(author, version, about = "S3 lifecycle administration console")]
pub struct Args {
    /// Host to bind to (overrides LIFECYCLE_CONSOLE_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides LIFECYCLE_CONSOLE_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Activity-log file path (overrides LIFECYCLE_CONSOLE_LOG_FILE)
    #[arg(long)]
    pub log_file: Option<String>,

    /// S3 endpoint override for self-hosted gateways
    /// (overrides LIFECYCLE_CONSOLE_S3_ENDPOINT)
    #[arg(long)]
    pub s3_endpoint: Option<String>,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig.
    pub fn from_env_and_args() -> Result<Self> {
        // Parse CLI once
        let args = Args::parse();

        // --- Environment fallback ---
        let env_host = env::var("LIFECYCLE_CONSOLE_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let env_port = match env::var("LIFECYCLE_CONSOLE_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing LIFECYCLE_CONSOLE_PORT value `{}`", value))?,
            Err(env::VarError::NotPresent) => 3000,
            Err(err) => return Err(err).context("reading LIFECYCLE_CONSOLE_PORT"),
        };
        let env_log_file = env::var("LIFECYCLE_CONSOLE_LOG_FILE")
            .unwrap_or_else(|_| "./logs/lifecycle_logs.txt".into());
        let env_endpoint = env::var("LIFECYCLE_CONSOLE_S3_ENDPOINT").ok();

        // --- Merge ---
        Ok(Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            log_file: args.log_file.unwrap_or(env_log_file),
            s3_endpoint: args.s3_endpoint.or(env_endpoint),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
