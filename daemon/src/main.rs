//! FAIRDRAW daemon — entry point for serving the commitment chain over HTTP.

use clap::Parser;
use fairdraw_rpc::RpcServer;
use std::path::PathBuf;
use std::time::Duration;

mod config;
use config::DaemonConfig;

#[derive(Parser)]
#[command(name = "fairdraw-daemon", about = "FAIRDRAW commit-reveal draw service")]
struct Cli {
    /// Address to bind the RPC listener to.
    #[arg(long, env = "FAIRDRAW_BIND")]
    bind: Option<String>,

    /// RPC server port.
    #[arg(long, env = "FAIRDRAW_RPC_PORT")]
    rpc_port: Option<u16>,

    /// Pause before audit responses, in milliseconds (presentation pacing only).
    #[arg(long, env = "FAIRDRAW_AUDIT_DELAY_MS")]
    audit_delay_ms: Option<u64>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "FAIRDRAW_LOG_LEVEL")]
    log_level: String,

    /// Path to a TOML configuration file. If provided, file settings are
    /// used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run the RPC server.
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    fairdraw_utils::init_tracing(&cli.log_level);

    let file_config: Option<DaemonConfig> = if let Some(ref config_path) = cli.config {
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str::<DaemonConfig>(&contents) {
                Ok(cfg) => {
                    tracing::info!("Loaded config from {}", config_path.display());
                    Some(cfg)
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {e}, using CLI defaults");
                    None
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Failed to read config file {}: {e}, using CLI defaults",
                    config_path.display()
                );
                None
            }
        }
    } else {
        None
    };

    let base = file_config.unwrap_or_default();
    let config = DaemonConfig {
        bind: cli.bind.unwrap_or(base.bind),
        rpc_port: cli.rpc_port.unwrap_or(base.rpc_port),
        audit_delay_ms: cli.audit_delay_ms.unwrap_or(base.audit_delay_ms),
    };

    match cli.command {
        Command::Serve => {
            tracing::info!(
                "Starting FAIRDRAW RPC server on {}:{} (audit delay: {}ms)",
                config.bind,
                config.rpc_port,
                config.audit_delay_ms,
            );

            let server = RpcServer::new(&config.bind, config.rpc_port)
                .with_audit_delay(Duration::from_millis(config.audit_delay_ms));
            server.start().await?;

            tracing::info!("FAIRDRAW daemon exited cleanly");
        }
    }

    Ok(())
}
