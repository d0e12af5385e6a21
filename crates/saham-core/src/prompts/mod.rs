//! Prompt text for workbench inference calls
//!
//! Organized into:
//! - `system`: instruction text carrying the analytical framework
//! - `user`: user message builders interpolating submitted data
//!
//! User builders interpolate every input field verbatim. Nothing is
//! reformatted, truncated, or reordered on the way into the prompt.

mod system;
mod user;

pub use system::{analysis_instruction, consistency_instruction};
pub use user::{analysis_prompt, consistency_prompt};
