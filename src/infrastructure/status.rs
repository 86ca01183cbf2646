// Copyright (c) 2025 - Cowboy AI, Inc.
//! Infrastructure Status from Terraform State

use tracing::info;

use super::state::{extract_terraform_state, StateOutputs, TerraformState};
use crate::api::{
    FloatingPoolStatus, InfrastructureConfig, InfrastructureStatus, NetworkStatus, NodeStatus,
    Purpose, RouterStatus, SecurityGroup, Subnet, TypeMeta,
};
use crate::errors::InfrastructureResult;

/// Map a [`TerraformState`] onto an [`InfrastructureStatus`]
///
/// The floating pool name is not part of the state and is left empty.
pub fn status_from_terraform_state(state: &TerraformState) -> InfrastructureStatus {
    InfrastructureStatus {
        type_meta: TypeMeta::infrastructure_status(),
        networks: NetworkStatus {
            id: state.network_id.clone(),
            floating_pool: FloatingPoolStatus {
                id: state.floating_network_id.clone(),
                name: String::new(),
            },
            router: RouterStatus {
                id: state.router_id.clone(),
            },
            subnets: vec![Subnet {
                purpose: Purpose::Nodes,
                id: state.subnet_id.clone(),
            }],
        },
        security_groups: vec![SecurityGroup {
            purpose: Purpose::Nodes,
            id: state.security_group_id.clone(),
            name: state.security_group_name.clone(),
        }],
        node: NodeStatus {
            key_name: state.ssh_key_name.clone(),
        },
    }
}

/// Compute the status of an infrastructure from its Terraform outputs
///
/// The floating pool ID comes from the state, its name from `config`.
pub fn compute_status<O: StateOutputs + ?Sized>(
    outputs: &O,
    config: &InfrastructureConfig,
) -> InfrastructureResult<InfrastructureStatus> {
    let state = extract_terraform_state(outputs)?;

    let mut status = status_from_terraform_state(&state);
    status.networks.floating_pool.name = config.floating_pool_name.clone();

    info!(
        network = %status.networks.id,
        router = %status.networks.router.id,
        floating_pool = %status.networks.floating_pool.name,
        "computed infrastructure status"
    );
    Ok(status)
}
