//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use lectern_config::{
    BodyLimits, Config, CorsConfig, ServerConfig, TranscriptFilterConfig, UpstreamConfig,
};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a builder whose upstream points at the given base URL
    pub fn new(upstream_base_url: &str) -> Self {
        let mut upstream = UpstreamConfig::new(SecretString::from("test-key"));
        upstream.base_url = upstream_base_url.parse().expect("valid URL");

        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: SocketAddr::from(([127, 0, 0, 1], 0)),
                    ..ServerConfig::default()
                },
                upstream,
                transcript: TranscriptFilterConfig::default(),
                telemetry: None,
            },
        }
    }

    /// Override the model identifiers
    pub fn with_models(mut self, vision: &str, omni: &str) -> Self {
        self.config.upstream.vision_model = vision.to_owned();
        self.config.upstream.omni_model = omni.to_owned();
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = config;
        self
    }

    /// Set body size limits
    pub fn with_limits(mut self, limits: BodyLimits) -> Self {
        self.config.server.limits = limits;
        self
    }

    /// Replace the transcript filter tables
    pub fn with_transcript_filter(mut self, filter: TranscriptFilterConfig) -> Self {
        self.config.transcript = filter;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
