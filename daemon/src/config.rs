//! Daemon configuration with TOML file support.

use serde::{Deserialize, Serialize};

/// Configuration for the FAIRDRAW daemon.
///
/// Can be loaded from a TOML file or built programmatically; CLI flags and
/// environment variables override file values.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Address to bind the RPC listener to.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// RPC server port.
    #[serde(default = "default_rpc_port")]
    pub rpc_port: u16,

    /// Pause before audit responses, in milliseconds. Presentation pacing
    /// only; it never changes a computed outcome.
    #[serde(default)]
    pub audit_delay_ms: u64,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            rpc_port: default_rpc_port(),
            audit_delay_ms: 0,
        }
    }
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_rpc_port() -> u16 {
    7200
}
