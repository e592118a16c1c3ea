//! CLI command implementations
//!
//! `serve` is the only command: load configuration, initialize logging,
//! seed the catalog, and hand control to the HTTP server until shutdown.

use std::fs;
use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => serve(config.as_deref(), host, port),
    }
}

/// Load configuration from a JSON file
fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    let config: HttpServerConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

    if config.host.is_empty() {
        return Err(CliError::config_error("host must not be empty"));
    }

    Ok(config)
}

/// Start the catalog HTTP server
///
/// Resolution order: config file (when given), then `--host`/`--port`
/// overrides, then defaults.
pub fn serve(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<()> {
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::server_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::server_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::errors::CliErrorCode;
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("libris.json");
        fs::write(&config_path, r#"{"host": "0.0.0.0", "port": 9999}"#).unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.socket_addr(), "0.0.0.0:9999");
    }

    #[test]
    fn test_load_config_applies_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("libris.json");
        fs::write(&config_path, "{}").unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_load_config_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_config(&temp_dir.path().join("absent.json"));
        assert_eq!(result.unwrap_err().code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_load_config_rejects_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("libris.json");
        fs::write(&config_path, "not json").unwrap();

        let result = load_config(&config_path);
        assert_eq!(result.unwrap_err().code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_load_config_rejects_empty_host() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("libris.json");
        fs::write(&config_path, r#"{"host": ""}"#).unwrap();

        let result = load_config(&config_path);
        assert_eq!(result.unwrap_err().code(), &CliErrorCode::ConfigError);
    }
}
