//! Command implementations
//!
//! Every command is an `impl Console` block and prints through the console's
//! writer, so the binary can route output to stdout or the pager.
//!
//! - `diff`: raw diffing of two files (`diff`, `stats`)
//! - `review`: rendering a modification record and emitting decision intents

pub mod diff;
pub mod review;
