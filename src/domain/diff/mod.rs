//! Text diff engine
//!
//! This module turns an `(old, new)` text pair into reviewable views:
//!
//! - `myers`: Myers' greedy shortest-edit algorithm over token slices
//! - `script`: builds the char-level edit script between two texts
//! - `cleanup`: merge and semantic passes that regroup the edit script
//! - `rows`: folds an edit script into numbered, styled unified-view rows
//! - `side_by_side`: independent, unaligned line listings of both texts
//! - `stats`: added/removed character counters
//!
//! Every function here is pure and infallible: it performs no I/O and keeps no
//! state between calls.

use std::borrow::Cow;
use std::fmt::Display;

pub mod cleanup;
pub mod myers;
pub mod rows;
pub mod script;
pub mod side_by_side;
pub mod stats;

pub use rows::{DiffRow, DiffRowSegment, RowKind, segment_into_rows};
pub use script::{EditBudget, build_edit_script, build_edit_script_within};
pub use side_by_side::{PaneLine, SideBySidePane, build_side_by_side};
pub use stats::{DiffStats, compute_stats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffKind {
    Equal,
    Insert,
    Delete,
}

impl DiffKind {
    pub fn marker(&self) -> char {
        match self {
            DiffKind::Equal => ' ',
            DiffKind::Insert => '+',
            DiffKind::Delete => '-',
        }
    }
}

/// One step of an edit script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOperation {
    pub kind: DiffKind,
    pub text: String,
}

impl DiffOperation {
    pub fn new(kind: DiffKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn equal(text: impl Into<String>) -> Self {
        Self::new(DiffKind::Equal, text)
    }

    pub fn insert(text: impl Into<String>) -> Self {
        Self::new(DiffKind::Insert, text)
    }

    pub fn delete(text: impl Into<String>) -> Self {
        Self::new(DiffKind::Delete, text)
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_edit(&self) -> bool {
        self.kind != DiffKind::Equal
    }
}

impl Display for DiffOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:?}", self.kind.marker(), self.text)
    }
}

/// Which input of the pair a piece of text belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Old,
    New,
}

impl Side {
    pub fn includes(&self, kind: DiffKind) -> bool {
        match self {
            Side::Old => kind != DiffKind::Insert,
            Side::New => kind != DiffKind::Delete,
        }
    }
}

/// Rebuilds one side of the pair from an edit script.
pub fn reconstruct(script: &[DiffOperation], side: Side) -> String {
    script
        .iter()
        .filter(|op| side.includes(op.kind))
        .map(|op| op.text.as_str())
        .collect()
}

/// Rewrites `\r\n` and bare `\r` line endings as `\n`.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }

    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}
