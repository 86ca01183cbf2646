// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Status Mapping
//!
//! Every Terraform output lands verbatim in exactly one status field.

use openstack_infrastructure::api::{InfrastructureConfig, Purpose};
use openstack_infrastructure::{
    compute_status, extract_terraform_state, status_from_terraform_state, OutputKey,
};
use proptest::prelude::*;

use crate::fixtures::terraform_outputs;

fn output_value() -> impl Strategy<Value = String> {
    "[ -~]{0,40}"
}

fn output_values() -> impl Strategy<Value = [String; 7]> {
    prop::array::uniform7(output_value())
}

proptest! {
    /// Building a status reproduces each of the seven outputs unchanged
    #[test]
    fn prop_status_reproduces_outputs(values in output_values()) {
        let refs: [&str; 7] = [
            &values[0], &values[1], &values[2], &values[3], &values[4], &values[5], &values[6],
        ];
        let state = extract_terraform_state(&terraform_outputs(refs)).unwrap();
        let status = status_from_terraform_state(&state);

        let subnet = status.subnet(Purpose::Nodes).unwrap();
        let group = status.security_group(Purpose::Nodes).unwrap();

        for (key, value) in OutputKey::ALL.iter().zip(values.iter()) {
            let field = match key {
                OutputKey::SshKeyName => &status.node.key_name,
                OutputKey::RouterId => &status.networks.router.id,
                OutputKey::NetworkId => &status.networks.id,
                OutputKey::SubnetId => &subnet.id,
                OutputKey::FloatingNetworkId => &status.networks.floating_pool.id,
                OutputKey::SecurityGroupId => &group.id,
                OutputKey::SecurityGroupName => &group.name,
            };
            prop_assert_eq!(field, value);
        }
        prop_assert_eq!(status.networks.subnets.len(), 1);
        prop_assert_eq!(status.security_groups.len(), 1);
        prop_assert!(status.networks.floating_pool.name.is_empty());
    }

    /// The floating pool name always comes from the config
    #[test]
    fn prop_floating_pool_name_from_config(values in output_values(), pool in "[a-z-]{1,20}") {
        let refs: [&str; 7] = [
            &values[0], &values[1], &values[2], &values[3], &values[4], &values[5], &values[6],
        ];
        let config = InfrastructureConfig::default().with_floating_pool_name(pool.clone());

        let status = compute_status(&terraform_outputs(refs), &config).unwrap();
        prop_assert_eq!(status.networks.floating_pool.name, pool);
        prop_assert_eq!(&status.networks.floating_pool.id, &values[4]);
    }
}
