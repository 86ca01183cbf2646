// Copyright (c) 2025 - Cowboy AI, Inc.
//! Terraform Infrastructure Mapping
//!
//! Both directions of the contract with the `openstack-infra` Terraform chart:
//!
//! ```text
//! config + credentials + cluster ──> chart values ──> ChartRenderer ──> TerraformFiles
//!
//! Terraform outputs ──> TerraformState ──> InfrastructureStatus (+ floating pool name)
//! ```
//!
//! The chart declares one Terraform output per [`OutputKey`]. The same table
//! feeds the `outputKeys` chart value and the list of outputs read back from
//! the state, so the two directions cannot drift apart.

pub mod render;
pub mod state;
pub mod status;
pub mod values;

use std::fmt;

pub use render::{
    render_terraformer_chart, terraformer_chart_release, ChartRelease, ChartRenderer,
    RenderedChart, TerraformFiles,
};
pub use state::{extract_terraform_state, StateOutputs, TerraformState, TerraformStateFile};
pub use status::{compute_status, status_from_terraform_state};
pub use values::{
    compute_terraformer_chart_values, resolve_workers_cidr, ChartValues, CreateValues,
    NetworksValues, OpenStackValues, OutputKeysValues, RouterValues,
};

/// Purpose of the Terraformer managing the infrastructure
pub const TERRAFORMER_PURPOSE: &str = "infra";

/// Router ID expression resolved by Terraform when it creates the router
pub const DEFAULT_ROUTER_ID: &str = "${openstack_networking_router_v2.router.id}";

/// Terraform outputs produced by the infrastructure chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputKey {
    /// Name of the SSH key pair
    SshKeyName,
    /// Router between the provider network and the worker subnet
    RouterId,
    /// Private worker network
    NetworkId,
    /// Worker subnet
    SubnetId,
    /// Provider network used as floating pool
    FloatingNetworkId,
    /// Worker security group ID
    SecurityGroupId,
    /// Worker security group name
    SecurityGroupName,
}

impl OutputKey {
    /// Every output, in the order they are requested from the state
    pub const ALL: [OutputKey; 7] = [
        OutputKey::SshKeyName,
        OutputKey::RouterId,
        OutputKey::NetworkId,
        OutputKey::SubnetId,
        OutputKey::FloatingNetworkId,
        OutputKey::SecurityGroupId,
        OutputKey::SecurityGroupName,
    ];

    /// Terraform output name
    pub const fn wire_key(self) -> &'static str {
        match self {
            OutputKey::SshKeyName => "key_name",
            OutputKey::RouterId => "router_id",
            OutputKey::NetworkId => "network_id",
            OutputKey::SubnetId => "subnet_id",
            OutputKey::FloatingNetworkId => "floating_network_id",
            OutputKey::SecurityGroupId => "security_group_id",
            OutputKey::SecurityGroupName => "security_group_name",
        }
    }

    /// Field name under `outputKeys` in the chart values
    pub const fn value_name(self) -> &'static str {
        match self {
            OutputKey::SshKeyName => "keyName",
            OutputKey::RouterId => "routerID",
            OutputKey::NetworkId => "networkID",
            OutputKey::SubnetId => "subnetID",
            OutputKey::FloatingNetworkId => "floatingNetworkID",
            OutputKey::SecurityGroupId => "securityGroupID",
            OutputKey::SecurityGroupName => "securityGroupName",
        }
    }

    /// Wire keys of every output
    pub fn wire_keys() -> [&'static str; 7] {
        Self::ALL.map(OutputKey::wire_key)
    }
}

impl fmt::Display for OutputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_key())
    }
}
