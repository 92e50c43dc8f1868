//! confdiff: character-level diffing and dual-view rendering for reviewing
//! proposed configuration edits.
//!
//! - `domain::diff`: edit scripts, row segmentation, side-by-side panes, stats
//! - `domain::review`: records, intents, limits and the memoizing review session
//! - `commands`: the command-line operations, printed through a [`terminal::console::Console`]
//! - `terminal`: output plumbing (console writer, pager adapter)

pub mod commands;
pub mod domain;
pub mod terminal;
