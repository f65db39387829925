//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod normalize;
mod oc_config;
mod push;
mod query;
mod verify;

pub use normalize::run_normalize;
pub use oc_config::run_oc_config;
pub use push::{run_push, PushSummary};
pub use query::run_query;
pub use verify::run_verify;
