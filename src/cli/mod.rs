//! CLI command implementations
//!
//! - `induce`: read tables and generate decision rules
//! - `schema`: print JSON schemas for config and output types
//! - `util`: shared argument and output helpers

pub mod induce;
pub mod schema;
pub mod util;

pub use induce::cmd_induce;
pub use schema::cmd_schema;
