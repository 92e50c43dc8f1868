//! Terminal plumbing for the command-line front end
//!
//! - `console`: the writer and limits every command prints through
//! - `pager`: `std::io::Write` adapter over the minus pager

pub mod console;
pub mod pager;
