//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "uplink",
    version,
    about = "Upload performance test reports: artifacts to object storage, metrics to an ingestion service"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check a report file without uploading anything
    Validate(ValidateArgs),

    /// Convert artifacts, upload them, and transmit the report
    Upload(UploadArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Report file; parsed as YAML for .yaml/.yml, JSON otherwise
    #[arg(long, default_value = "report.json")]
    pub report: PathBuf,
}

#[derive(clap::Args, Debug, Clone)]
pub struct UploadArgs {
    /// Report file; parsed as YAML for .yaml/.yml, JSON otherwise
    #[arg(long, default_value = "report.json")]
    pub report: PathBuf,

    /// Process upload units one at a time instead of concurrently
    #[arg(long)]
    pub serialize: bool,

    /// Validate and convert locally without touching the network
    #[arg(long)]
    pub dry_run: bool,

    /// Metrics service address
    #[arg(long, env = "UPLINK_SERVICE", default_value = "http://localhost:7070")]
    pub service: String,

    /// Relay host; when set the whole report goes through the relay
    /// instead of per-test RPCs
    #[arg(long, env = "UPLINK_RELAY_HOST")]
    pub relay_host: Option<String>,

    /// Region the relay should presign uploads for
    #[arg(long, env = "UPLINK_RELAY_REGION", requires = "relay_host")]
    pub relay_region: Option<String>,

    /// Explicit AWS access key; omit to use the ambient environment
    #[arg(long, env = "AWS_ACCESS_KEY_ID")]
    pub aws_access_key: Option<String>,

    /// Explicit AWS secret key
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub aws_secret_key: Option<String>,

    /// Session token for temporary credentials
    #[arg(long, env = "AWS_SESSION_TOKEN", hide_env_values = true)]
    pub aws_session_token: Option<String>,
}
