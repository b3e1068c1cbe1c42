//! Dispatch metrics recording helpers
//!
//! Thin wrappers over the `event_fanout_*` series. `EventDispatcher` emits
//! these counters itself; the helpers are for hosts that wrap dispatch with
//! their own delivery loop (e.g. best-effort fan-out) and still want the
//! same series.
//!
//! # Example
//!
//! ```ignore
//! use observability::metrics::{record_delivery, record_delivery_failure};
//!
//! for target in targets {
//!     match queue_for(target).enqueue(&event, true, false).await {
//!         Ok(()) => record_delivery(target),
//!         Err(_) => record_delivery_failure(target),
//!     }
//! }
//! ```

use ::metrics::{counter, gauge};

/// Record one completed dispatch and how many targets it delivered to
pub fn record_dispatch(targets_delivered: usize) {
    counter!("event_fanout_events_dispatched_total").increment(1);
    gauge!("event_fanout_last_dispatch_targets").set(targets_delivered as f64);
}

/// Record one successful delivery to a target's queue
pub fn record_delivery(target: &str) {
    counter!(
        "event_fanout_deliveries_total",
        "target" => target.to_string()
    )
    .increment(1);
}

/// Record one failed delivery attempt
pub fn record_delivery_failure(target: &str) {
    counter!(
        "event_fanout_delivery_failures_total",
        "target" => target.to_string()
    )
    .increment(1);
}
