use std::path::PathBuf;

use serde::Deserialize;

/// TLS configuration for HTTPS
///
/// When both files exist the server listens with TLS. When they are missing
/// and `self_signed` is set, a certificate for `localhost` is generated with
/// the `openssl` binary first; if that fails the server listens in plain HTTP.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TlsConfig {
    /// Path to the PEM certificate
    #[serde(default = "default_certificate")]
    pub certificate: PathBuf,
    /// Path to the PEM private key
    #[serde(default = "default_private_key")]
    pub private_key: PathBuf,
    /// Generate a self-signed certificate when the files are absent
    #[serde(default = "default_self_signed")]
    pub self_signed: bool,
    /// `openssl` executable used for generation
    #[serde(default = "default_openssl")]
    pub openssl: PathBuf,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            certificate: default_certificate(),
            private_key: default_private_key(),
            self_signed: default_self_signed(),
            openssl: default_openssl(),
        }
    }
}

fn default_certificate() -> PathBuf {
    PathBuf::from("certs/cert.pem")
}

fn default_private_key() -> PathBuf {
    PathBuf::from("certs/key.pem")
}

const fn default_self_signed() -> bool {
    true
}

fn default_openssl() -> PathBuf {
    PathBuf::from("openssl")
}
