//! Shared utilities for the saham workbench
//!
//! Logging setup and data-directory resolution used across the workspace.

pub mod logging;
pub mod paths;

pub use logging::init_tracing;
pub use paths::data_dir;
