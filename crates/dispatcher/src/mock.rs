//! Mock queues and registry
//!
//! Substitute sink collaborators for tests without a real eventing host.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use contracts::{ContractError, EventQueue, QueueRegistry};

/// In-memory queue recording every enqueue it receives
///
/// Optionally fails every enqueue, to exercise abort-on-first-error paths.
#[derive(Debug)]
pub struct MockQueue<E> {
    name: String,
    fail_with: Option<String>,
    deliveries: Mutex<Vec<(E, bool, bool)>>,
    call_log: Arc<Mutex<Vec<String>>>,
}

impl<E> MockQueue<E> {
    /// Create a working mock queue
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fail_with: None,
            deliveries: Mutex::new(Vec::new()),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock queue whose every enqueue fails with the given message
    pub fn failing(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::new(name)
        }
    }

    /// Events delivered so far, with the flags each arrived with
    pub fn deliveries(&self) -> Vec<(E, bool, bool)>
    where
        E: Clone,
    {
        self.deliveries.lock().unwrap().clone()
    }

    fn set_call_log(&mut self, log: Arc<Mutex<Vec<String>>>) {
        self.call_log = log;
    }
}

impl<E: Clone + Send + Sync> EventQueue<E> for MockQueue<E> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn enqueue(
        &self,
        event: &E,
        add_to_global_queue: bool,
        add_to_local_queue: bool,
    ) -> Result<(), ContractError> {
        // Attempts are logged before the failure check so callers can assert
        // which queues were touched, failed ones included.
        self.call_log.lock().unwrap().push(self.name.clone());

        if let Some(message) = &self.fail_with {
            return Err(ContractError::queue_unavailable(&self.name, message));
        }

        self.deliveries.lock().unwrap().push((
            event.clone(),
            add_to_global_queue,
            add_to_local_queue,
        ));
        Ok(())
    }
}

/// Registry handing out [`MockQueue`]s by name
///
/// All queues inserted into one registry share a call log, so tests can
/// assert cross-queue delivery order.
pub struct MockRegistry<E> {
    queues: HashMap<String, MockQueue<E>>,
    call_log: Arc<Mutex<Vec<String>>>,
}

impl<E> MockRegistry<E> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            queues: HashMap::new(),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a registry with one working queue per name
    pub fn with_queues(names: &[&str]) -> Self {
        let mut registry = Self::new();
        for name in names {
            registry.insert(MockQueue::new(*name));
        }
        registry
    }

    /// Insert a queue, wiring it into the shared call log
    pub fn insert(&mut self, mut queue: MockQueue<E>) {
        queue.set_call_log(Arc::clone(&self.call_log));
        self.queues.insert(queue.name.clone(), queue);
    }

    /// Get a queue by name, if registered
    pub fn queue(&self, name: &str) -> Option<&MockQueue<E>> {
        self.queues.get(name)
    }

    /// Queue names in the order enqueue was attempted on them
    pub fn call_order(&self) -> Vec<String> {
        self.call_log.lock().unwrap().clone()
    }
}

impl<E> Default for MockRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone + Send + Sync> QueueRegistry<E> for MockRegistry<E> {
    type Queue = MockQueue<E>;

    fn resolve(&self, target: &str) -> Result<&Self::Queue, ContractError> {
        self.queues
            .get(target)
            .ok_or_else(|| ContractError::queue_not_found(target))
    }
}
