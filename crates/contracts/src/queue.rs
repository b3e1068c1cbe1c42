//! EventQueue trait - Dispatcher output interface
//!
//! Defines the abstract interface for downstream queues and their lookup.

use crate::ContractError;

/// Event sink trait
///
/// All queue implementations must implement this trait. The event type is
/// opaque; implementations forward it without inspecting it.
#[trait_variant::make(EventQueue: Send)]
pub trait LocalEventQueue<E> {
    /// Queue name (used for logging/metrics)
    fn name(&self) -> &str;

    /// Enqueue one event
    ///
    /// The two flags are delivery-mode hints whose meaning is defined
    /// entirely by the queue implementation; they arrive unchanged from the
    /// dispatch call.
    ///
    /// # Errors
    /// Returns [`ContractError::QueueUnavailable`] when the event cannot be
    /// accepted
    async fn enqueue(
        &self,
        event: &E,
        add_to_global_queue: bool,
        add_to_local_queue: bool,
    ) -> Result<(), ContractError>;
}

/// Queue lookup trait
///
/// Resolves a target name to its queue. Injected into the dispatcher at
/// construction time; replaces any ambient registry access with explicit
/// dependency passing.
pub trait QueueRegistry<E> {
    /// Concrete queue type this registry hands out
    type Queue: EventQueue<E>;

    /// Resolve a target name to a queue
    ///
    /// # Errors
    /// Returns [`ContractError::QueueNotFound`] when no queue is registered
    /// under the name
    fn resolve(&self, target: &str) -> Result<&Self::Queue, ContractError>;
}
