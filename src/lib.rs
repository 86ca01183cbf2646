// Copyright (c) 2025 - Cowboy AI, Inc.
//! OpenStack infrastructure mapping for Terraform-provisioned clusters
//!
//! This crate turns the infrastructure config of a cluster into values for the
//! `openstack-infra` Terraform chart, and turns the outputs of the applied
//! Terraform state back into an [`InfrastructureStatus`].
//!
//! Chart rendering and Terraform execution are external; they are reached
//! through the [`ChartRenderer`] and [`StateOutputs`] traits. Everything in
//! this crate is synchronous and holds no shared state.

pub mod api;
pub mod config;
pub mod decode;
pub mod errors;
pub mod helper;
pub mod infrastructure;

// Re-export commonly used types
pub use api::{ClusterContext, Credentials, InfrastructureConfig, InfrastructureStatus};
pub use config::ChartConfig;
pub use errors::{InfrastructureError, InfrastructureResult};
pub use infrastructure::{
    compute_status, compute_terraformer_chart_values, extract_terraform_state,
    render_terraformer_chart, status_from_terraform_state, terraformer_chart_release, ChartRelease,
    ChartRenderer, ChartValues, OutputKey, StateOutputs, TerraformFiles, TerraformState,
    TerraformStateFile,
};
