// Copyright (c) 2025 - Cowboy AI, Inc.
//! Rendering of the Terraform Infrastructure Chart
//!
//! The chart engine itself lives outside this crate behind [`ChartRenderer`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use super::values::compute_terraformer_chart_values;
use super::TERRAFORMER_PURPOSE;
use crate::api::{ClusterContext, Credentials, InfrastructureConfig};
use crate::config::ChartConfig;
use crate::errors::{InfrastructureError, InfrastructureResult};

const MAIN_FILE: &str = "main.tf";
const VARIABLES_FILE: &str = "variables.tf";
const TFVARS_FILE: &str = "terraform.tfvars";

/// Files of a rendered chart release, keyed by file name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedChart {
    files: BTreeMap<String, String>,
}

impl RenderedChart {
    /// Create a release from rendered files
    pub fn new(files: BTreeMap<String, String>) -> Self {
        Self { files }
    }

    /// Add a rendered file
    pub fn with_file(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(name.into(), content.into());
        self
    }

    /// Content of a rendered file
    pub fn file_content(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    fn require(&self, name: &str) -> InfrastructureResult<&str> {
        self.file_content(name).ok_or_else(|| {
            InfrastructureError::Render(format!("rendered chart is missing {name}"))
        })
    }
}

/// Chart rendering engine
pub trait ChartRenderer {
    /// Render the chart at `chart_path` as release `release_name` in `namespace`
    fn render(
        &self,
        chart_path: &Path,
        release_name: &str,
        namespace: &str,
        values: &serde_json::Value,
    ) -> InfrastructureResult<RenderedChart>;
}

/// Terraform files rendered from the infrastructure chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerraformFiles {
    /// `main.tf`
    pub main: String,
    /// `variables.tf`
    pub variables: String,
    /// `terraform.tfvars`
    pub tf_vars: Vec<u8>,
}

/// Everything handed to a [`ChartRenderer`] for one infrastructure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRelease {
    /// Terraformer purpose the release is rendered for
    pub purpose: &'static str,
    /// Path of the chart
    pub chart_path: PathBuf,
    /// Release name
    pub release_name: String,
    /// Namespace of the cluster
    pub namespace: String,
    /// Chart values
    pub values: serde_json::Value,
}

/// Resolve chart location and values of the `openstack-infra` release
pub fn terraformer_chart_release(
    chart_config: &ChartConfig,
    cluster: &ClusterContext,
    credentials: &Credentials,
    config: &InfrastructureConfig,
) -> InfrastructureResult<ChartRelease> {
    let values = compute_terraformer_chart_values(cluster, credentials, config)?;
    let values = serde_json::to_value(&values).map_err(|e| {
        InfrastructureError::Render(format!("could not serialize chart values: {e}"))
    })?;

    Ok(ChartRelease {
        purpose: TERRAFORMER_PURPOSE,
        chart_path: chart_config.infra_chart_path(),
        release_name: chart_config.chart_name.clone(),
        namespace: cluster.namespace.clone(),
        values,
    })
}

/// Render the `openstack-infra` chart for a cluster
pub fn render_terraformer_chart<R: ChartRenderer + ?Sized>(
    renderer: &R,
    chart_config: &ChartConfig,
    cluster: &ClusterContext,
    credentials: &Credentials,
    config: &InfrastructureConfig,
) -> InfrastructureResult<TerraformFiles> {
    let release = terraformer_chart_release(chart_config, cluster, credentials, config)?;
    let rendered = renderer.render(
        &release.chart_path,
        &release.release_name,
        &release.namespace,
        &release.values,
    )?;

    info!(
        purpose = release.purpose,
        chart = %release.chart_path.display(),
        namespace = %release.namespace,
        "rendered terraformer chart"
    );

    Ok(TerraformFiles {
        main: rendered.require(MAIN_FILE)?.to_string(),
        variables: rendered.require(VARIABLES_FILE)?.to_string(),
        tf_vars: rendered.require(TFVARS_FILE)?.as_bytes().to_vec(),
    })
}
