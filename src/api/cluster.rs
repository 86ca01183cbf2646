// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cluster Context and Credentials

use serde::{Deserialize, Serialize};
use std::fmt;

/// OpenStack credentials of a cluster
///
/// The fields are passed through to the chart unchanged and never validated.
/// `Debug` output redacts the password.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// Keystone domain name
    pub domain_name: String,
    /// Keystone tenant (project) name
    pub tenant_name: String,
    /// User name
    #[serde(default)]
    pub username: String,
    /// Password
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    /// Create credentials for a domain and tenant
    pub fn new(domain_name: impl Into<String>, tenant_name: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
            tenant_name: tenant_name.into(),
            ..Default::default()
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("domain_name", &self.domain_name)
            .field("tenant_name", &self.tenant_name)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The cluster an infrastructure belongs to
///
/// `namespace` doubles as the cluster name handed to Terraform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterContext {
    /// Target region
    pub region: String,

    /// Namespace of the cluster in the seed
    pub namespace: String,

    /// SSH public key installed on the worker nodes
    #[serde(default)]
    pub ssh_public_key: String,

    /// Raw provider config of the cloud profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_profile_config: Option<serde_json::Value>,
}

impl ClusterContext {
    /// Create a context for a cluster namespace in a region
    pub fn new(namespace: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            region: region.into(),
            ..Default::default()
        }
    }

    /// Set the SSH public key
    pub fn with_ssh_public_key(mut self, key: impl Into<String>) -> Self {
        self.ssh_public_key = key.into();
        self
    }

    /// Attach the cloud profile provider config
    pub fn with_cloud_profile_config(mut self, raw: serde_json::Value) -> Self {
        self.cloud_profile_config = Some(raw);
        self
    }
}
