// Copyright (c) 2025 - Cowboy AI, Inc.
//! Infrastructure Status Types

use serde::{Deserialize, Serialize};
use std::fmt;

/// API version stamped on every [`InfrastructureStatus`]
pub const API_VERSION: &str = "openstack.provider.extensions.gardener.cloud/v1alpha1";

/// Kind stamped on every [`InfrastructureStatus`]
pub const STATUS_KIND: &str = "InfrastructureStatus";

/// Kubernetes type metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMeta {
    /// API group and version
    pub api_version: String,
    /// Object kind
    pub kind: String,
}

impl TypeMeta {
    /// Type metadata of the infrastructure status
    pub fn infrastructure_status() -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            kind: STATUS_KIND.to_string(),
        }
    }
}

/// Purpose of a subnet or security group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    /// Used by the worker nodes
    #[default]
    Nodes,
}

impl Purpose {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Purpose::Nodes => "nodes",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of an OpenStack infrastructure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureStatus {
    /// Type metadata, serialized inline
    #[serde(flatten)]
    pub type_meta: TypeMeta,

    /// Network status
    pub networks: NetworkStatus,

    /// Security groups
    pub security_groups: Vec<SecurityGroup>,

    /// Node status
    pub node: NodeStatus,
}

/// Status of the networks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStatus {
    /// Private worker network ID
    pub id: String,
    /// Floating pool
    pub floating_pool: FloatingPoolStatus,
    /// Router
    pub router: RouterStatus,
    /// Subnets
    pub subnets: Vec<Subnet>,
}

/// Status of the floating pool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatingPoolStatus {
    /// Provider network ID
    pub id: String,
    /// Pool name, taken from the infrastructure config
    pub name: String,
}

/// Status of the router
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterStatus {
    /// Router ID
    pub id: String,
}

/// A subnet of the worker network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subnet {
    /// Purpose
    pub purpose: Purpose,
    /// Subnet ID
    pub id: String,
}

/// A security group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityGroup {
    /// Purpose
    pub purpose: Purpose,
    /// Security group ID
    pub id: String,
    /// Security group name
    pub name: String,
}

/// Status of the worker nodes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStatus {
    /// Name of the SSH key pair
    pub key_name: String,
}

impl InfrastructureStatus {
    /// Subnet with the given purpose, if any
    pub fn subnet(&self, purpose: Purpose) -> Option<&Subnet> {
        self.networks.subnets.iter().find(|s| s.purpose == purpose)
    }

    /// Security group with the given purpose, if any
    pub fn security_group(&self, purpose: Purpose) -> Option<&SecurityGroup> {
        self.security_groups.iter().find(|g| g.purpose == purpose)
    }
}
