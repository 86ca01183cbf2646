// Copyright (c) 2025 - Cowboy AI, Inc.
//! OpenStack Infrastructure Tool
//!
//! Resolves the Terraform chart release of a cluster and computes the
//! infrastructure status from an applied Terraform state.
//!
//! ```text
//! openstack-infra values <infrastructure-config.json> <credentials.json> <cluster.json>
//! openstack-infra status <terraform.tfstate> <infrastructure-config.json>
//! ```
//!
//! `cluster.json` carries `region`, `namespace`, `sshPublicKey` and the
//! `cloudProfileConfig` of the cluster. Output is written to stdout as JSON,
//! logs go to stderr and are filtered by `RUST_LOG`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use openstack_infrastructure::{
    compute_status, decode::decode_infrastructure_config, terraformer_chart_release, ChartConfig,
    ClusterContext, Credentials, TerraformStateFile,
};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// Terraform chart values and infrastructure status for OpenStack clusters
#[derive(Parser, Debug)]
#[command(name = "openstack-infra")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Root of the provider charts
    #[arg(long, global = true, env = "OPENSTACK_INFRA_CHARTS_PATH")]
    charts_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn chart_config(&self) -> ChartConfig {
        match &self.charts_path {
            Some(path) => ChartConfig::default().with_charts_path(path.clone()),
            None => ChartConfig::default(),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the chart release (path, name and values) of a cluster
    Values {
        /// Infrastructure config of the cluster
        infrastructure_config: PathBuf,
        /// OpenStack credentials
        credentials: PathBuf,
        /// Cluster context
        cluster: PathBuf,
    },
    /// Compute the infrastructure status from a Terraform state
    Status {
        /// Terraform state document
        state: PathBuf,
        /// Infrastructure config of the cluster
        infrastructure_config: PathBuf,
    },
}

async fn read_file(path: &Path) -> Result<Vec<u8>> {
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    debug!("Read {} bytes from {}", raw.len(), path.display());
    Ok(raw)
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = read_file(path).await?;
    serde_json::from_slice(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse a Terraform state, refusing one that was never applied
fn load_state(raw: &[u8]) -> Result<TerraformStateFile> {
    let state = TerraformStateFile::parse(raw)?;
    if state.is_empty() {
        bail!("terraform state has no outputs yet, has the infrastructure been applied?");
    }
    Ok(state)
}

async fn values(
    charts: &ChartConfig,
    infra_path: &Path,
    credentials_path: &Path,
    cluster_path: &Path,
) -> Result<serde_json::Value> {
    let infra = decode_infrastructure_config(&read_file(infra_path).await?)?;
    let credentials: Credentials = read_json(credentials_path).await?;
    let cluster: ClusterContext = read_json(cluster_path).await?;

    let release = terraformer_chart_release(charts, &cluster, &credentials, &infra)?;
    info!(
        "Resolved {} release {} for {}",
        release.purpose,
        release.chart_path.display(),
        release.namespace
    );
    Ok(serde_json::to_value(release)?)
}

async fn status(state_path: &Path, infra_path: &Path) -> Result<serde_json::Value> {
    let state = load_state(&read_file(state_path).await?)
        .with_context(|| format!("Invalid state {}", state_path.display()))?;
    let infra = decode_infrastructure_config(&read_file(infra_path).await?)?;

    let status = compute_status(&state, &infra)?;
    Ok(serde_json::to_value(status)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let charts = cli.chart_config();

    let output = match &cli.command {
        Command::Values {
            infrastructure_config,
            credentials,
            cluster,
        } => values(&charts, infrastructure_config, credentials, cluster).await?,
        Command::Status {
            state,
            infrastructure_config,
        } => status(state, infrastructure_config).await?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
