use crate::domain::diff::{DiffKind, DiffOperation};
use derive_new::new;
use std::fmt::Display;

/// Characters added and removed by an edit script, counted in `char`s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct DiffStats {
    pub chars_added: usize,
    pub chars_removed: usize,
}

impl DiffStats {
    pub fn is_unchanged(&self) -> bool {
        self.chars_added == 0 && self.chars_removed == 0
    }
}

impl Display for DiffStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "+{} -{}", self.chars_added, self.chars_removed)
    }
}

pub fn compute_stats(script: &[DiffOperation]) -> DiffStats {
    script
        .iter()
        .fold(DiffStats::default(), |stats, op| match op.kind {
            DiffKind::Insert => DiffStats {
                chars_added: stats.chars_added + op.char_len(),
                ..stats
            },
            DiffKind::Delete => DiffStats {
                chars_removed: stats.chars_removed + op.char_len(),
                ..stats
            },
            DiffKind::Equal => stats,
        })
}
