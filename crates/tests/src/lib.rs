//! # Integration Tests
//!
//! End-to-end tests across the workspace crates.
//!
//! Covers:
//! - Settings -> resolver -> dispatcher -> queues flow
//! - Cross-queue delivery ordering and abort semantics
//! - Contract snapshot checks

#[cfg(test)]
mod contract_tests {
    use contracts::ContractError;

    #[test]
    fn test_contract_error_taxonomy_is_stable() {
        // The three operator-facing failure classes keep their shapes
        let missing = ContractError::missing_setting("targets");
        let not_found = ContractError::queue_not_found("master");
        let unavailable = ContractError::queue_unavailable("master", "down");

        assert!(matches!(missing, ContractError::MissingSetting { .. }));
        assert!(matches!(not_found, ContractError::QueueNotFound { .. }));
        assert!(matches!(
            unavailable,
            ContractError::QueueUnavailable { .. }
        ));
    }
}

#[cfg(test)]
mod e2e_tests {
    use config_resolver::{ProviderSettings, TARGETS_KEY};
    use contracts::ContractError;
    use dispatcher::{DispatchError, EventDispatcher, MockQueue, MockRegistry};
    use observability::{LogFormat, ObservabilityConfig};

    /// Event payload as a host would define it; the dispatcher never looks
    /// inside.
    #[derive(Debug, Clone, PartialEq)]
    struct ItemSavedEvent {
        item_id: u64,
        language: String,
    }

    fn saved(item_id: u64) -> ItemSavedEvent {
        ItemSavedEvent {
            item_id,
            language: "en".to_string(),
        }
    }

    fn init_observability() {
        // Tests share one process; later calls hitting the already-set
        // subscriber are fine.
        let _ = observability::init_with_config(ObservabilityConfig {
            log_format: LogFormat::Compact,
            metrics_port: None,
            default_log_level: "debug".to_string(),
        });
    }

    /// End-to-end: ProviderSettings -> resolve_targets -> EventDispatcher
    ///
    /// Verifies the full initialization-then-dispatch flow:
    /// 1. Settings hold the delimited target list
    /// 2. The resolver drops blank segments, keeps order
    /// 3. The dispatcher delivers to each target's queue, in order
    #[tokio::test]
    async fn test_e2e_settings_to_delivery() {
        init_observability();

        let settings: ProviderSettings =
            [(TARGETS_KEY, "master|web| |")].into_iter().collect();
        let targets = settings.targets(TARGETS_KEY).unwrap();
        assert_eq!(targets, vec!["master", "web"]);

        let registry = MockRegistry::with_queues(&["master", "web"]);
        let dispatcher = EventDispatcher::new(targets, registry);

        let event = saved(42);
        dispatcher.dispatch(&event).await.unwrap();
        dispatcher
            .dispatch_with_flags(&saved(43), true, true)
            .await
            .unwrap();

        // Per-queue payloads and flags
        for target in ["master", "web"] {
            let deliveries = dispatcher.registry().queue(target).unwrap().deliveries();
            assert_eq!(
                deliveries,
                vec![(saved(42), true, false), (saved(43), true, true)]
            );
        }
    }

    #[tokio::test]
    async fn test_e2e_missing_targets_setting_fails_initialization() {
        let settings = ProviderSettings::new();
        let err = settings.targets(TARGETS_KEY).unwrap_err();
        assert!(matches!(err, ContractError::MissingSetting { .. }));
    }

    #[tokio::test]
    async fn test_e2e_first_failure_aborts_batch() {
        let settings: ProviderSettings = [(TARGETS_KEY, "master|web")].into_iter().collect();
        let targets = settings.targets(TARGETS_KEY).unwrap();

        let mut registry: MockRegistry<ItemSavedEvent> = MockRegistry::new();
        registry.insert(MockQueue::failing("master", "connection refused"));
        registry.insert(MockQueue::new("web"));
        let dispatcher = EventDispatcher::new(targets, registry);

        let err = dispatcher.dispatch(&saved(7)).await.unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Contract(ContractError::QueueUnavailable { .. })
        ));

        let registry = dispatcher.registry();
        assert_eq!(registry.call_order(), vec!["master"]);
        assert!(registry.queue("web").unwrap().deliveries().is_empty());
    }

    #[tokio::test]
    async fn test_e2e_empty_target_setting_dispatches_to_nobody() {
        let settings: ProviderSettings = [(TARGETS_KEY, "| |")].into_iter().collect();
        let targets = settings.targets(TARGETS_KEY).unwrap();
        assert!(targets.is_empty());

        let registry: MockRegistry<ItemSavedEvent> = MockRegistry::new();
        let dispatcher = EventDispatcher::new(targets, registry);

        dispatcher.dispatch(&saved(1)).await.unwrap();
        dispatcher.dispatch(&saved(1)).await.unwrap();
        assert!(dispatcher.registry().call_order().is_empty());
    }

    #[tokio::test]
    async fn test_e2e_host_side_metrics_recording() {
        // Hosts wrapping dispatch record the same series through the
        // helpers; with no Prometheus recorder installed they must be safe
        // no-ops.
        let registry = MockRegistry::with_queues(&["master", "web"]);
        let dispatcher: EventDispatcher<MockRegistry<ItemSavedEvent>> =
            EventDispatcher::new(vec!["master".into(), "web".into()], registry);

        dispatcher.dispatch(&saved(3)).await.unwrap();

        observability::record_dispatch(dispatcher.targets().len());
        for target in dispatcher.targets() {
            observability::record_delivery(target);
        }
        observability::record_delivery_failure("master");
    }

    #[tokio::test]
    async fn test_e2e_duplicate_targets_deliver_per_occurrence() {
        let settings: ProviderSettings = [(TARGETS_KEY, "web|master|web")].into_iter().collect();
        let targets = settings.targets(TARGETS_KEY).unwrap();

        let registry = MockRegistry::with_queues(&["master", "web"]);
        let dispatcher = EventDispatcher::new(targets, registry);

        dispatcher.dispatch(&saved(9)).await.unwrap();
        assert_eq!(
            dispatcher.registry().call_order(),
            vec!["web", "master", "web"]
        );
    }
}
