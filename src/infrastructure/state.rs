// Copyright (c) 2025 - Cowboy AI, Inc.
//! Terraform State Extraction
//!
//! Reads the outputs declared by the infrastructure chart back from the
//! Terraform state. Every output of [`OutputKey::ALL`] is required: an output
//! missing from the state fails the extraction instead of defaulting to an
//! empty string, so a half-applied state never produces a status.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, warn};

use super::OutputKey;
use crate::errors::{InfrastructureError, InfrastructureResult};

/// Read access to the output variables of a Terraform state
pub trait StateOutputs {
    /// Fetch the values of the named output variables in one call
    ///
    /// Implementations may omit variables absent from the state.
    fn state_output_variables(
        &self,
        names: &[&str],
    ) -> InfrastructureResult<HashMap<String, String>>;
}

impl StateOutputs for HashMap<String, String> {
    fn state_output_variables(
        &self,
        names: &[&str],
    ) -> InfrastructureResult<HashMap<String, String>> {
        Ok(names
            .iter()
            .filter_map(|name| self.get(*name).map(|v| (name.to_string(), v.clone())))
            .collect())
    }
}

/// Outputs of the infrastructure Terraform state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerraformState {
    /// Name of the SSH key pair
    pub ssh_key_name: String,
    /// Router between the provider network and the worker subnet
    pub router_id: String,
    /// Private worker network
    pub network_id: String,
    /// Worker subnet
    pub subnet_id: String,
    /// Provider network used as floating pool
    pub floating_network_id: String,
    /// Worker security group ID
    pub security_group_id: String,
    /// Worker security group name
    pub security_group_name: String,
}

impl TerraformState {
    /// Value of an output
    pub fn get(&self, key: OutputKey) -> &str {
        match key {
            OutputKey::SshKeyName => &self.ssh_key_name,
            OutputKey::RouterId => &self.router_id,
            OutputKey::NetworkId => &self.network_id,
            OutputKey::SubnetId => &self.subnet_id,
            OutputKey::FloatingNetworkId => &self.floating_network_id,
            OutputKey::SecurityGroupId => &self.security_group_id,
            OutputKey::SecurityGroupName => &self.security_group_name,
        }
    }

    fn slot(&mut self, key: OutputKey) -> &mut String {
        match key {
            OutputKey::SshKeyName => &mut self.ssh_key_name,
            OutputKey::RouterId => &mut self.router_id,
            OutputKey::NetworkId => &mut self.network_id,
            OutputKey::SubnetId => &mut self.subnet_id,
            OutputKey::FloatingNetworkId => &mut self.floating_network_id,
            OutputKey::SecurityGroupId => &mut self.security_group_id,
            OutputKey::SecurityGroupName => &mut self.security_group_name,
        }
    }

    /// Build a state from values keyed by Terraform output name
    ///
    /// Fails with `StateAccess` naming every output that is missing.
    pub fn from_outputs(mut outputs: HashMap<String, String>) -> InfrastructureResult<Self> {
        let missing: Vec<&str> = OutputKey::ALL
            .iter()
            .map(|k| k.wire_key())
            .filter(|k| !outputs.contains_key(*k))
            .collect();
        if !missing.is_empty() {
            warn!(?missing, "terraform state is missing outputs");
            return Err(InfrastructureError::missing_outputs(missing));
        }

        let mut state = TerraformState::default();
        for key in OutputKey::ALL {
            if let Some(value) = outputs.remove(key.wire_key()) {
                *state.slot(key) = value;
            }
        }
        Ok(state)
    }
}

/// Extract the [`TerraformState`] of the infrastructure
pub fn extract_terraform_state<O: StateOutputs + ?Sized>(
    outputs: &O,
) -> InfrastructureResult<TerraformState> {
    let keys = OutputKey::wire_keys();
    let vars = outputs.state_output_variables(&keys)?;
    debug!(fetched = vars.len(), "fetched terraform output variables");
    TerraformState::from_outputs(vars)
}

#[derive(Debug, Deserialize)]
struct StateDocument {
    #[serde(default)]
    outputs: HashMap<String, OutputVariable>,
}

#[derive(Debug, Deserialize)]
struct OutputVariable {
    value: serde_json::Value,
}

/// Output variables of a Terraform state document (`terraform.tfstate`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerraformStateFile {
    outputs: HashMap<String, String>,
}

impl TerraformStateFile {
    /// Parse a Terraform state document
    ///
    /// String outputs are kept verbatim, any other output value is kept as
    /// its JSON text.
    pub fn parse(raw: &[u8]) -> InfrastructureResult<Self> {
        let document: StateDocument = serde_json::from_slice(raw).map_err(|e| {
            InfrastructureError::StateAccess(format!("could not parse terraform state: {e}"))
        })?;

        let outputs = document
            .outputs
            .into_iter()
            .map(|(name, output)| {
                let value = match output.value {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                (name, value)
            })
            .collect();

        Ok(Self { outputs })
    }

    /// Whether the state has no outputs, as before the first apply
    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}

impl StateOutputs for TerraformStateFile {
    fn state_output_variables(
        &self,
        names: &[&str],
    ) -> InfrastructureResult<HashMap<String, String>> {
        self.outputs.state_output_variables(names)
    }
}
