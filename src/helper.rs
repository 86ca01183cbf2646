// Copyright (c) 2025 - Cowboy AI, Inc.
//! Lookup helpers over provider configs

use tracing::debug;

use crate::api::{CloudProfileConfig, ClusterContext, KeyStoneUrl};
use crate::errors::{InfrastructureError, InfrastructureResult};

/// Resolve the keystone URL for `region`
///
/// The first table entry for the region wins. Regions missing from the table
/// use `fallback` when it is non-empty.
///
/// # Examples
///
/// ```rust
/// use openstack_infrastructure::api::KeyStoneUrl;
/// use openstack_infrastructure::helper::find_keystone_url;
///
/// let table = vec![KeyStoneUrl::new("eu", "https://eu.example")];
/// assert_eq!(find_keystone_url(&table, "", "eu").unwrap(), "https://eu.example");
/// assert_eq!(find_keystone_url(&table, "https://any", "us").unwrap(), "https://any");
/// assert!(find_keystone_url(&table, "", "us").is_err());
/// ```
pub fn find_keystone_url(
    key_stone_urls: &[KeyStoneUrl],
    fallback: &str,
    region: &str,
) -> InfrastructureResult<String> {
    if let Some(entry) = key_stone_urls.iter().find(|entry| entry.region == region) {
        return Ok(entry.url.clone());
    }

    if !fallback.is_empty() {
        debug!(region, "no regional keystone URL, using fallback");
        return Ok(fallback.to_string());
    }

    Err(InfrastructureError::ConfigResolution {
        region: region.to_string(),
    })
}

/// Decode the cloud profile config attached to `cluster`
///
/// A cluster without a cloud profile config yields an empty config, so that
/// keystone resolution reports the missing endpoint.
pub fn cloud_profile_config_from_cluster(
    cluster: &ClusterContext,
) -> InfrastructureResult<CloudProfileConfig> {
    match &cluster.cloud_profile_config {
        Some(raw) => serde_json::from_value(raw.clone()).map_err(|e| {
            InfrastructureError::ConfigDecode(format!(
                "could not decode providerConfig of cloudProfile for '{}': {e}",
                cluster.namespace
            ))
        }),
        None => Ok(CloudProfileConfig::default()),
    }
}
