// Copyright (c) 2025 - Cowboy AI, Inc.
//! OpenStack Provider API Types
//!
//! Typed views of the provider-specific configuration attached to clusters and
//! of the status written back after Terraform has run.
//!
//! # Inputs
//!
//! - [`InfrastructureConfig`] - network settings of a cluster
//! - [`CloudProfileConfig`] - per-region keystone endpoints and DNS servers
//! - [`ControlPlaneConfig`] - control plane provider settings
//! - [`Credentials`] - opaque OpenStack identity fields
//! - [`ClusterContext`] - region, namespace and SSH key of the cluster
//!
//! # Output
//!
//! - [`InfrastructureStatus`] - normalized status with fixed type metadata

pub mod cluster;
pub mod config;
pub mod status;

pub use cluster::{ClusterContext, Credentials};
pub use config::{
    CloudControllerManagerConfig, CloudProfileConfig, ControlPlaneConfig, InfrastructureConfig,
    KeyStoneUrl, Networks, Router,
};
pub use status::{
    FloatingPoolStatus, InfrastructureStatus, NetworkStatus, NodeStatus, Purpose, RouterStatus,
    SecurityGroup, Subnet, TypeMeta, API_VERSION, STATUS_KIND,
};
