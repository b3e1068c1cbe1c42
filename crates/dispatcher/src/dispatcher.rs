//! EventDispatcher - broadcast loop over the resolved target list

use std::fmt;

use metrics::counter;
use tracing::{debug, error, info, instrument};

use contracts::{EventQueue, QueueRegistry};

use crate::error::DispatchError;

/// Fans one event out to every configured target queue
///
/// Owns the resolved target list and the injected queue registry. The list
/// is fixed at construction; concurrent `dispatch` calls only read it and
/// need no coordination.
pub struct EventDispatcher<R> {
    targets: Vec<String>,
    registry: R,
}

impl<R> EventDispatcher<R> {
    /// Create a dispatcher over a resolved target list
    ///
    /// An empty list is valid; every later dispatch is then a no-op.
    pub fn new(targets: Vec<String>, registry: R) -> Self {
        info!(
            targets = ?targets,
            target_count = targets.len(),
            "Event dispatcher initialized"
        );
        Self { targets, registry }
    }

    /// The resolved target list, in delivery order
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// The injected queue registry
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Dispatch with the default delivery flags (global queue only)
    pub async fn dispatch<E>(&self, event: &E) -> Result<(), DispatchError>
    where
        R: QueueRegistry<E>,
        E: fmt::Debug,
    {
        self.dispatch_with_flags(event, true, false).await
    }

    /// Dispatch one event to every target, in list order
    ///
    /// The flags pass through unchanged to every queue. Delivery is
    /// sequential; the first failure propagates immediately and the
    /// remaining targets are not attempted. Already-delivered targets are
    /// not rolled back, and the error does not say how many deliveries
    /// succeeded - callers needing partial-failure tolerance must wrap this
    /// themselves.
    #[instrument(
        name = "dispatch_event",
        skip(self, event),
        fields(target_count = self.targets.len())
    )]
    pub async fn dispatch_with_flags<E>(
        &self,
        event: &E,
        add_to_global_queue: bool,
        add_to_local_queue: bool,
    ) -> Result<(), DispatchError>
    where
        R: QueueRegistry<E>,
        E: fmt::Debug,
    {
        counter!("event_fanout_events_dispatched_total").increment(1);

        for target in &self.targets {
            // Hard invariant check, not an optimization: the resolver never
            // emits blank names, but a corrupted list must fail loudly here
            // rather than hit the registry with an empty key.
            if target.is_empty() {
                counter!(
                    "event_fanout_delivery_failures_total",
                    "target" => target.clone()
                )
                .increment(1);
                error!(event = ?event, "Empty target name in resolved list");
                return Err(DispatchError::missing_target(format!("{event:?}")));
            }

            let queue = self.registry.resolve(target).inspect_err(|e| {
                counter!(
                    "event_fanout_delivery_failures_total",
                    "target" => target.clone()
                )
                .increment(1);
                error!(target = %target, error = %e, "Queue lookup failed");
            })?;

            queue
                .enqueue(event, add_to_global_queue, add_to_local_queue)
                .await
                .inspect_err(|e| {
                    counter!(
                        "event_fanout_delivery_failures_total",
                        "target" => target.clone()
                    )
                    .increment(1);
                    error!(target = %target, error = %e, "Enqueue failed");
                })?;

            counter!(
                "event_fanout_deliveries_total",
                "target" => target.clone()
            )
            .increment(1);
            debug!(
                target = %target,
                queue = %queue.name(),
                add_to_global_queue,
                add_to_local_queue,
                "Event delivered"
            );
        }

        Ok(())
    }
}
