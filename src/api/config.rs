// Copyright (c) 2025 - Cowboy AI, Inc.
//! Provider Configuration Types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Infrastructure configuration of a cluster
///
/// # Examples
///
/// ```rust
/// use openstack_infrastructure::api::InfrastructureConfig;
///
/// let config: InfrastructureConfig = serde_json::from_str(
///     r#"{"floatingPoolName":"ext-net","networks":{"workers":"10.250.0.0/19"}}"#,
/// ).unwrap();
/// assert_eq!(config.floating_pool_name, "ext-net");
/// assert!(config.networks.router.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureConfig {
    /// Name of the floating pool used for floating IPs
    #[serde(default)]
    pub floating_pool_name: String,

    /// Network settings
    #[serde(default)]
    pub networks: Networks,
}

/// Network settings of an infrastructure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Networks {
    /// Pre-existing router; when absent Terraform creates one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub router: Option<Router>,

    /// Deprecated single workers CIDR, superseded by `workers`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub worker: String,

    /// Workers CIDR
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub workers: String,
}

/// Reference to an existing router
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Router {
    /// Router ID
    pub id: String,
}

impl InfrastructureConfig {
    /// Set the floating pool name
    pub fn with_floating_pool_name(mut self, name: impl Into<String>) -> Self {
        self.floating_pool_name = name.into();
        self
    }

    /// Use an existing router instead of creating one
    pub fn with_router(mut self, id: impl Into<String>) -> Self {
        self.networks.router = Some(Router { id: id.into() });
        self
    }

    /// Set the workers CIDR
    pub fn with_workers(mut self, cidr: impl Into<String>) -> Self {
        self.networks.workers = cidr.into();
        self
    }
}

/// Keystone URL of a single region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStoneUrl {
    /// Region name
    pub region: String,
    /// Keystone URL for the region
    pub url: String,
}

impl KeyStoneUrl {
    /// Create a new region entry
    pub fn new(region: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            url: url.into(),
        }
    }
}

/// Provider configuration of a cloud profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudProfileConfig {
    /// Per-region keystone URLs
    #[serde(default, rename = "keyStoneURLs", alias = "keystoneURLs")]
    pub key_stone_urls: Vec<KeyStoneUrl>,

    /// Keystone URL used for regions missing from `key_stone_urls`
    #[serde(default, rename = "keyStoneURL", alias = "keystoneURL")]
    pub key_stone_url: String,

    /// DNS servers handed to the worker subnet
    #[serde(default)]
    pub dns_servers: Vec<String>,
}

/// Control plane configuration of a cluster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlPlaneConfig {
    /// Load balancer provider (e.g. `haproxy`, `octavia`)
    #[serde(default)]
    pub load_balancer_provider: String,

    /// Availability zone of the control plane
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,

    /// Cloud controller manager settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_controller_manager: Option<CloudControllerManagerConfig>,
}

/// Cloud controller manager settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudControllerManagerConfig {
    /// Feature gates passed to the cloud controller manager
    #[serde(default)]
    pub feature_gates: BTreeMap<String, bool>,
}
