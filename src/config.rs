// Copyright (c) 2025 - Cowboy AI, Inc.
//! Chart location configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the Terraform chart and of the release rendered from it
pub const INFRA_CHART_NAME: &str = "openstack-infra";

/// Location of the Terraform infrastructure chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    /// Root directory of the provider charts
    pub charts_path: PathBuf,

    /// Sub directory holding charts not deployed to the seed
    #[serde(default = "default_internal_dir")]
    pub internal_dir: String,

    /// Chart and release name
    #[serde(default = "default_chart_name")]
    pub chart_name: String,
}

fn default_internal_dir() -> String {
    "internal".to_string()
}

fn default_chart_name() -> String {
    INFRA_CHART_NAME.to_string()
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            charts_path: ["controllers", "provider-openstack", "charts"].iter().collect(),
            internal_dir: default_internal_dir(),
            chart_name: default_chart_name(),
        }
    }
}

impl ChartConfig {
    /// Set the charts root directory
    pub fn with_charts_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.charts_path = path.into();
        self
    }

    /// Directory holding the internal charts
    pub fn internal_charts_path(&self) -> PathBuf {
        self.charts_path.join(&self.internal_dir)
    }

    /// Path of the infrastructure chart
    pub fn infra_chart_path(&self) -> PathBuf {
        self.internal_charts_path().join(&self.chart_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_chart_path() {
        let config = ChartConfig::default();
        assert_eq!(
            config.infra_chart_path(),
            Path::new("controllers/provider-openstack/charts/internal/openstack-infra")
        );
    }

    #[test]
    fn test_custom_charts_path() {
        let config = ChartConfig::default().with_charts_path("/charts");
        assert_eq!(config.internal_charts_path(), Path::new("/charts/internal"));
        assert_eq!(config.chart_name, INFRA_CHART_NAME);
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: ChartConfig = serde_json::from_str(r#"{"chartsPath":"/opt/charts"}"#).unwrap();
        assert_eq!(config.infra_chart_path(), Path::new("/opt/charts/internal/openstack-infra"));
    }
}
