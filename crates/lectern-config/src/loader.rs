use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded = crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream credential is missing or a
    /// limit or filter table is unusable
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_upstream()?;
        self.validate_limits()?;
        self.validate_transcript_filter()?;
        Ok(())
    }

    /// The credential is a startup requirement, never a per-request error
    fn validate_upstream(&self) -> anyhow::Result<()> {
        if self.upstream.api_key.expose_secret().trim().is_empty() {
            anyhow::bail!("upstream.api_key must not be empty");
        }

        if self.upstream.vision_model.trim().is_empty() || self.upstream.omni_model.trim().is_empty() {
            anyhow::bail!("upstream model identifiers must not be empty");
        }

        Ok(())
    }

    fn validate_limits(&self) -> anyhow::Result<()> {
        let limits = &self.server.limits;

        if limits.json_body_bytes == 0 || limits.audio_body_bytes == 0 {
            anyhow::bail!("server.limits values must be greater than 0");
        }

        Ok(())
    }

    fn validate_transcript_filter(&self) -> anyhow::Result<()> {
        let filter = &self.transcript;

        if filter.max_filler_chars == 0 {
            anyhow::bail!("transcript.max_filler_chars must be greater than 0");
        }

        if let Some(index) = filter.denylist.iter().position(String::is_empty) {
            anyhow::bail!("transcript.denylist entry {index} is empty and would reject every transcript");
        }

        Ok(())
    }
}
