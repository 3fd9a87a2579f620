//! CLI command handlers for vrclife.
//!
//! This module provides headless, scriptable access to the catalog engine
//! for automation, testing, and the publish pipeline.

pub mod common;
pub mod fetch;
pub mod filter;
pub mod inspect;
pub mod tag;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use fetch::FetchArgs;
pub use filter::FilterArgs;
pub use inspect::InspectArgs;
pub use tag::TagArgs;
