use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;

/// Lectern reading and listening assistant backend
#[derive(Debug, Parser)]
#[command(
    name = "lectern",
    about = "Summaries, reading notes and transcription over a multimodal model API"
)]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "lectern.toml", env = "LECTERN_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "LECTERN_LISTEN")]
    pub listen: Option<SocketAddr>,

    /// Log filter directive, e.g. `info` or `lectern_tasks=debug`
    #[arg(long, default_value = "info", env = "LECTERN_LOG")]
    pub log: String,
}
