// Copyright (c) 2025 - Cowboy AI, Inc.
//! Provider Config Decoding
//!
//! Raw provider configs arrive as JSON documents embedded in cluster
//! resources. These helpers turn them into typed configs; any failure is a
//! [`InfrastructureError::ConfigDecode`].

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::{CloudProfileConfig, ControlPlaneConfig, InfrastructureConfig};
use crate::errors::{InfrastructureError, InfrastructureResult};

fn decode<T: DeserializeOwned>(kind: &str, raw: &[u8]) -> InfrastructureResult<T> {
    debug!(kind, bytes = raw.len(), "decoding provider config");
    serde_json::from_slice(raw)
        .map_err(|e| InfrastructureError::ConfigDecode(format!("could not decode {kind}: {e}")))
}

/// Decode an [`InfrastructureConfig`]
pub fn decode_infrastructure_config(raw: &[u8]) -> InfrastructureResult<InfrastructureConfig> {
    decode("InfrastructureConfig", raw)
}

/// Decode a [`ControlPlaneConfig`]
pub fn decode_control_plane_config(raw: &[u8]) -> InfrastructureResult<ControlPlaneConfig> {
    decode("ControlPlaneConfig", raw)
}

/// Decode a [`CloudProfileConfig`]
pub fn decode_cloud_profile_config(raw: &[u8]) -> InfrastructureResult<CloudProfileConfig> {
    decode("CloudProfileConfig", raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_control_plane_config() {
        let config = decode_control_plane_config(
            br#"{"loadBalancerProvider":"octavia","zone":"eu-de-1a","cloudControllerManager":{"featureGates":{"CustomResourceValidation":true}}}"#,
        )
        .unwrap();

        assert_eq!(config.load_balancer_provider, "octavia");
        assert_eq!(config.zone.as_deref(), Some("eu-de-1a"));
        let gates = config.cloud_controller_manager.unwrap().feature_gates;
        assert_eq!(gates.get("CustomResourceValidation"), Some(&true));
    }

    #[test]
    fn test_decode_infrastructure_config() {
        let config = decode_infrastructure_config(
            br#"{"floatingPoolName":"fip","networks":{"workers":"10.1.0.0/16"}}"#,
        )
        .unwrap();
        assert_eq!(config.floating_pool_name, "fip");
        assert_eq!(config.networks.workers, "10.1.0.0/16");
    }

    #[test]
    fn test_malformed_config_is_decode_error() {
        let err = decode_cloud_profile_config(b"{\"dnsServers\": 42}").unwrap_err();
        match err {
            InfrastructureError::ConfigDecode(msg) => assert!(msg.contains("CloudProfileConfig")),
            other => panic!("Expected ConfigDecode, got {other:?}"),
        }
    }
}
