// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Chart Values
//!
//! Chart values are a pure function of config, credentials and cluster: the
//! primary workers CIDR always wins, router handling is exclusive and equal
//! inputs serialize to identical documents.

use openstack_infrastructure::api::InfrastructureConfig;
use openstack_infrastructure::infrastructure::DEFAULT_ROUTER_ID;
use openstack_infrastructure::{compute_terraformer_chart_values, Credentials};
use proptest::prelude::*;

use crate::fixtures::{cluster, credentials, REGION_EU};

// ============================================================================
// Strategies
// ============================================================================

fn cidr() -> impl Strategy<Value = String> {
    (0u8..=255, 0u8..=255, 8u8..=30).prop_map(|(a, b, prefix)| format!("10.{a}.{b}.0/{prefix}"))
}

fn name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,20}"
}

fn infrastructure_config() -> impl Strategy<Value = InfrastructureConfig> {
    (
        name(),
        prop::option::of(name()),
        prop_oneof![Just(String::new()), cidr()],
        prop_oneof![Just(String::new()), cidr()],
    )
        .prop_map(|(pool, router, workers, worker)| {
            let mut config = InfrastructureConfig::default()
                .with_floating_pool_name(pool)
                .with_workers(workers);
            config.networks.worker = worker;
            if let Some(id) = router {
                config = config.with_router(id);
            }
            config
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// A non-empty primary workers CIDR is used whatever the deprecated field holds
    #[test]
    fn prop_primary_workers_cidr_wins(workers in cidr(), worker in prop_oneof![Just(String::new()), cidr()]) {
        let mut config = InfrastructureConfig::default().with_workers(workers.clone());
        config.networks.worker = worker;

        let values = compute_terraformer_chart_values(&cluster(REGION_EU), &credentials(), &config).unwrap();
        prop_assert_eq!(values.networks.workers, workers);
    }

    /// Exactly one of "reuse router" and "create router" is in effect
    #[test]
    fn prop_router_resolution_is_exclusive(config in infrastructure_config()) {
        let values = compute_terraformer_chart_values(&cluster(REGION_EU), &credentials(), &config).unwrap();

        match &config.networks.router {
            Some(router) => {
                prop_assert!(!values.create.router);
                prop_assert_eq!(&values.router.id, &router.id);
            }
            None => {
                prop_assert!(values.create.router);
                prop_assert_eq!(values.router.id.as_str(), DEFAULT_ROUTER_ID);
            }
        }
    }

    /// Equal inputs produce byte-identical values
    #[test]
    fn prop_chart_values_are_deterministic(
        config in infrastructure_config(),
        domain in name(),
        tenant in name(),
    ) {
        let credentials = Credentials::new(domain, tenant);
        let first = compute_terraformer_chart_values(&cluster(REGION_EU), &credentials, &config).unwrap();
        let second = compute_terraformer_chart_values(&cluster(REGION_EU), &credentials, &config).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }
}
