// Copyright (c) 2025 - Cowboy AI, Inc.
//! Chart Values for the Terraform Infrastructure Chart
//!
//! [`compute_terraformer_chart_values`] is a pure function of its inputs: the
//! same config, credentials and cluster always serialize to identical values.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::debug;

use super::{OutputKey, DEFAULT_ROUTER_ID};
use crate::api::{ClusterContext, Credentials, InfrastructureConfig, Networks};
use crate::errors::InfrastructureResult;
use crate::helper::{cloud_profile_config_from_cluster, find_keystone_url};

/// Values consumed by the `openstack-infra` chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartValues {
    /// OpenStack provider settings
    pub openstack: OpenStackValues,
    /// Resources Terraform has to create
    pub create: CreateValues,
    /// DNS servers of the worker subnet
    pub dns_servers: Vec<String>,
    /// SSH public key of the worker nodes
    pub ssh_public_key: String,
    /// Router to attach the worker subnet to
    pub router: RouterValues,
    /// Name prefix of every created resource
    pub cluster_name: String,
    /// Worker network
    pub networks: NetworksValues,
    /// Names of the outputs the chart must declare
    pub output_keys: OutputKeysValues,
}

/// `openstack` block of the chart values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenStackValues {
    /// Keystone URL of the region
    #[serde(rename = "authURL")]
    pub auth_url: String,
    /// Keystone domain name
    pub domain_name: String,
    /// Keystone tenant name
    pub tenant_name: String,
    /// Region
    pub region: String,
    /// Floating pool name
    pub floating_pool_name: String,
}

/// `create` block of the chart values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreateValues {
    /// Whether Terraform creates the router
    pub router: bool,
}

/// `router` block of the chart values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouterValues {
    /// Existing router ID or [`DEFAULT_ROUTER_ID`]
    pub id: String,
}

/// `networks` block of the chart values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworksValues {
    /// Workers CIDR
    pub workers: String,
}

/// `outputKeys` block of the chart values
///
/// Serialized from [`OutputKey::ALL`] as `valueName: wire_key` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputKeysValues {
    keys: [OutputKey; 7],
}

impl Default for OutputKeysValues {
    fn default() -> Self {
        Self {
            keys: OutputKey::ALL,
        }
    }
}

impl OutputKeysValues {
    /// `(value name, wire key)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.keys.iter().map(|k| (k.value_name(), k.wire_key()))
    }
}

impl Serialize for OutputKeysValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut block = serializer.serialize_struct("OutputKeys", self.keys.len())?;
        for (name, key) in self.iter() {
            block.serialize_field(name, key)?;
        }
        block.end()
    }
}

/// Resolve the workers CIDR of `networks`
///
/// Deprecated: `networks.worker` is only read when `networks.workers` is
/// empty. Drop the fallback once no config sets `worker` anymore.
pub fn resolve_workers_cidr(networks: &Networks) -> &str {
    if !networks.workers.is_empty() {
        return &networks.workers;
    }
    &networks.worker
}

/// Compute the values for the `openstack-infra` Terraform chart
///
/// # Errors
///
/// - `ConfigDecode` if the cloud profile config of the cluster is malformed
/// - `ConfigResolution` if no keystone URL is known for the cluster region
pub fn compute_terraformer_chart_values(
    cluster: &ClusterContext,
    credentials: &Credentials,
    config: &InfrastructureConfig,
) -> InfrastructureResult<ChartValues> {
    let (create_router, router_id) = match &config.networks.router {
        Some(router) => (false, router.id.clone()),
        None => (true, DEFAULT_ROUTER_ID.to_string()),
    };

    let cloud_profile_config = cloud_profile_config_from_cluster(cluster)?;
    let auth_url = find_keystone_url(
        &cloud_profile_config.key_stone_urls,
        &cloud_profile_config.key_stone_url,
        &cluster.region,
    )?;

    let workers = resolve_workers_cidr(&config.networks).to_string();

    debug!(
        cluster = %cluster.namespace,
        region = %cluster.region,
        create_router,
        workers = %workers,
        "computed terraformer chart values"
    );

    Ok(ChartValues {
        openstack: OpenStackValues {
            auth_url,
            domain_name: credentials.domain_name.clone(),
            tenant_name: credentials.tenant_name.clone(),
            region: cluster.region.clone(),
            floating_pool_name: config.floating_pool_name.clone(),
        },
        create: CreateValues {
            router: create_router,
        },
        dns_servers: cloud_profile_config.dns_servers,
        ssh_public_key: cluster.ssh_public_key.clone(),
        router: RouterValues { id: router_id },
        cluster_name: cluster.namespace.clone(),
        networks: NetworksValues { workers },
        output_keys: OutputKeysValues::default(),
    })
}
