//! # Dispatcher
//!
//! Event fan-out module.
//!
//! Responsibilities:
//! - Hold the resolved target list (immutable after construction)
//! - Broadcast one event to every target's queue, in list order
//! - Propagate the first delivery failure unrecovered, aborting the rest of
//!   the batch

pub mod dispatcher;
pub mod error;
pub mod mock;

pub use contracts::{EventQueue, QueueRegistry};
pub use dispatcher::EventDispatcher;
pub use error::DispatchError;
pub use mock::{MockQueue, MockRegistry};
