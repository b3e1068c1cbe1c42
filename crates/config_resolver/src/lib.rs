//! # Config Resolver
//!
//! Target-list resolution module.
//!
//! Responsibilities:
//! - Split the delimited `targets` provider setting into an ordered target
//!   list
//! - Surface a missing-setting error when the host configuration lacks the
//!   required key
//!
//! This is the only place configuration is read; the dispatcher receives the
//! resolved list and never touches settings itself.
//!
//! # Example
//!
//! ```
//! use config_resolver::resolve_targets;
//!
//! let targets = resolve_targets(Some("master|web"));
//! assert_eq!(targets, vec!["master", "web"]);
//! ```

mod resolver;
mod settings;

pub use resolver::{resolve_targets, TARGET_DELIMITER};
pub use settings::{ProviderSettings, TARGETS_KEY};
