// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for openstack-infrastructure
//!
//! Deterministic inputs shared by the integration tests. Fixtures are the
//! only place that builds clusters, configs and Terraform outputs.

#![allow(dead_code)]

use std::collections::HashMap;

use serde_json::json;

use openstack_infrastructure::api::InfrastructureConfig;
use openstack_infrastructure::{ClusterContext, Credentials, OutputKey};

pub const NAMESPACE: &str = "shoot-1";
pub const REGION_EU: &str = "eu";
pub const KEYSTONE_EU: &str = "https://eu.example";
pub const KEYSTONE_FALLBACK: &str = "https://keystone.example";
pub const SSH_PUBLIC_KEY: &str = "ssh-rsa AAAAB3NzaC1yc2EAAAADAQABAAABAQ test@example";
pub const FLOATING_POOL: &str = "ext-net";

/// Cloud profile config with a table entry for `eu` and a fallback
pub fn cloud_profile_config() -> serde_json::Value {
    json!({
        "keyStoneURLs": [{"region": REGION_EU, "url": KEYSTONE_EU}],
        "keyStoneURL": KEYSTONE_FALLBACK,
        "dnsServers": ["10.0.0.2", "10.0.0.3"]
    })
}

/// Cluster in `region` using [`cloud_profile_config`]
pub fn cluster(region: &str) -> ClusterContext {
    ClusterContext::new(NAMESPACE, region)
        .with_ssh_public_key(SSH_PUBLIC_KEY)
        .with_cloud_profile_config(cloud_profile_config())
}

/// Credentials for the test project
pub fn credentials() -> Credentials {
    Credentials {
        username: "technical-user".into(),
        password: "s3cret".into(),
        ..Credentials::new("default", "project-a")
    }
}

/// Infrastructure config with a floating pool and no router
pub fn infrastructure_config() -> InfrastructureConfig {
    InfrastructureConfig::default()
        .with_floating_pool_name(FLOATING_POOL)
        .with_workers("10.250.0.0/19")
}

/// Terraform outputs with one value per output key
pub fn terraform_outputs(values: [&str; 7]) -> HashMap<String, String> {
    OutputKey::ALL
        .iter()
        .zip(values)
        .map(|(key, value)| (key.wire_key().to_string(), value.to_string()))
        .collect()
}
