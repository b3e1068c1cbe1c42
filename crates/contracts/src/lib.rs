//! # Contracts
//!
//! Frozen interface contracts (ICD), defining inter-module traits and the
//! shared error taxonomy.
//! All business crates can only depend on this crate, reverse dependencies
//! are prohibited.
//!
//! ## Event Model
//! - Events are opaque caller-supplied values; this layer never inspects or
//!   mutates them
//! - Delivery targets are plain string names resolved to queues by the host

mod error;
mod queue;

pub use error::*;
pub use queue::*;
