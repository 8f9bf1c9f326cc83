#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod health;
pub mod limits;
mod loader;
pub mod server;
pub mod telemetry;
pub mod tls;
pub mod transcript;
pub mod upstream;

use serde::Deserialize;

pub use cors::*;
pub use env::{ExpandError, expand_env};
pub use health::*;
pub use limits::*;
pub use server::*;
pub use telemetry::{ExportProtocol, ExporterConfig, LogFormat, TelemetryConfig};
pub use tls::*;
pub use transcript::*;
pub use upstream::*;

/// Top-level Lectern configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Listener, CORS, limits and TLS
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream chat-completion API
    pub upstream: UpstreamConfig,
    /// Transcript validity filter tables
    #[serde(default)]
    pub transcript: TranscriptFilterConfig,
    /// Logging and trace export
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
