use std::process::Stdio;

use anyhow::{Context, bail};
use axum_server::tls_rustls::RustlsConfig;
use lectern_config::TlsConfig;

/// Days a generated certificate stays valid
const SELF_SIGNED_DAYS: &str = "365";

/// How the listener is exposed
pub enum Transport {
    /// Unencrypted HTTP
    Plain,
    /// HTTPS with the loaded certificate
    Tls(RustlsConfig),
}

impl Transport {
    pub const fn scheme(&self) -> &'static str {
        match self {
            Self::Plain => "http",
            Self::Tls(_) => "https",
        }
    }
}

/// Load, or generate then load, the certificate for the listener
///
/// Never fails: any problem with the certificate downgrades the listener to
/// plain HTTP with a warning.
pub async fn prepare(config: &TlsConfig) -> Transport {
    // Both aws-lc-rs and ring may be compiled in; pin the provider before building a config
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let present = config.certificate.is_file() && config.private_key.is_file();

    if !present {
        if !config.self_signed {
            tracing::warn!(
                certificate = %config.certificate.display(),
                "TLS certificate not found, serving plain HTTP"
            );
            return Transport::Plain;
        }

        if let Err(e) = generate_self_signed(config).await {
            tracing::warn!(error = %e, "could not generate a certificate, serving plain HTTP");
            return Transport::Plain;
        }
    }

    match RustlsConfig::from_pem_file(&config.certificate, &config.private_key).await {
        Ok(rustls) => Transport::Tls(rustls),
        Err(e) => {
            tracing::warn!(
                certificate = %config.certificate.display(),
                error = %e,
                "failed to load TLS certificate, serving plain HTTP"
            );
            Transport::Plain
        }
    }
}

/// Write a self-signed `localhost` certificate and key with `openssl`
async fn generate_self_signed(config: &TlsConfig) -> anyhow::Result<()> {
    for path in [&config.certificate, &config.private_key] {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
    }

    tracing::info!(
        certificate = %config.certificate.display(),
        "generating self-signed certificate"
    );

    let status = tokio::process::Command::new(&config.openssl)
        .args(["req", "-x509", "-newkey", "rsa:2048", "-keyout"])
        .arg(&config.private_key)
        .arg("-out")
        .arg(&config.certificate)
        .args(["-days", SELF_SIGNED_DAYS, "-nodes", "-subj", "/CN=localhost"])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .with_context(|| format!("failed to run {}", config.openssl.display()))?;

    if !status.success() {
        bail!("{} exited with {status}", config.openssl.display());
    }

    Ok(())
}
