//! Regrouping passes over a raw edit script.
//!
//! Neither pass changes which characters belong to which side of the pair; they
//! only change how those characters are grouped into operations.

use crate::domain::diff::{DiffKind, DiffOperation};
use tracing::debug;

/// Drops empty operations, merges neighbouring equalities, and collapses every
/// run of edits between two equalities into one delete followed by one insert.
pub fn cleanup_merge(ops: Vec<DiffOperation>) -> Vec<DiffOperation> {
    let mut merged: Vec<DiffOperation> = Vec::with_capacity(ops.len());
    let mut deleted = String::new();
    let mut inserted = String::new();

    for op in ops {
        match op.kind {
            DiffKind::Delete => deleted.push_str(&op.text),
            DiffKind::Insert => inserted.push_str(&op.text),
            DiffKind::Equal => {
                flush_edits(&mut merged, &mut deleted, &mut inserted);

                if op.text.is_empty() {
                    continue;
                }

                match merged.last_mut() {
                    Some(last) if last.kind == DiffKind::Equal => last.text.push_str(&op.text),
                    _ => merged.push(op),
                }
            }
        }
    }

    flush_edits(&mut merged, &mut deleted, &mut inserted);
    merged
}

fn flush_edits(merged: &mut Vec<DiffOperation>, deleted: &mut String, inserted: &mut String) {
    if !deleted.is_empty() {
        merged.push(DiffOperation::delete(std::mem::take(deleted)));
    }
    if !inserted.is_empty() {
        merged.push(DiffOperation::insert(std::mem::take(inserted)));
    }
}

/// Folds short equalities that sit between two edit groups into those edits.
///
/// An equality qualifies when it is no longer than the larger side of the edit
/// group before it and no longer than the larger side of the group after it.
/// Passes repeat until nothing qualifies, so the result is a fixed point.
pub fn cleanup_semantic(ops: Vec<DiffOperation>) -> Vec<DiffOperation> {
    let mut ops = cleanup_merge(ops);
    let mut passes = 0;

    loop {
        let (folded, changed) = fold_short_equalities(ops);
        ops = cleanup_merge(folded);
        if !changed {
            break;
        }
        passes += 1;
    }

    if passes > 0 {
        debug!(passes, operations = ops.len(), "folded short equalities");
    }

    ops
}

#[derive(Debug, Default, Clone, Copy)]
struct EditWeight {
    deleted: usize,
    inserted: usize,
}

impl EditWeight {
    fn add(mut self, op: &DiffOperation) -> Self {
        match op.kind {
            DiffKind::Delete => self.deleted += op.char_len(),
            DiffKind::Insert => self.inserted += op.char_len(),
            DiffKind::Equal => {}
        }
        self
    }

    fn is_empty(&self) -> bool {
        self.deleted == 0 && self.inserted == 0
    }

    fn largest(&self) -> usize {
        self.deleted.max(self.inserted)
    }
}

// weight of the edit run that ends right before `end` (exclusive)
fn weight_before(ops: &[DiffOperation], end: usize) -> EditWeight {
    ops[..end]
        .iter()
        .rev()
        .take_while(|op| op.is_edit())
        .fold(EditWeight::default(), EditWeight::add)
}

// weight of the edit run that starts right after `start` (exclusive)
fn weight_after(ops: &[DiffOperation], start: usize) -> EditWeight {
    ops[start + 1..]
        .iter()
        .take_while(|op| op.is_edit())
        .fold(EditWeight::default(), EditWeight::add)
}

fn fold_short_equalities(ops: Vec<DiffOperation>) -> (Vec<DiffOperation>, bool) {
    let foldable = ops
        .iter()
        .enumerate()
        .map(|(index, op)| {
            if op.kind != DiffKind::Equal {
                return false;
            }

            let before = weight_before(&ops, index);
            let after = weight_after(&ops, index);
            let length = op.char_len();

            !before.is_empty()
                && !after.is_empty()
                && length <= before.largest()
                && length <= after.largest()
        })
        .collect::<Vec<_>>();

    if !foldable.contains(&true) {
        return (ops, false);
    }

    let folded = ops
        .into_iter()
        .zip(foldable)
        .flat_map(|(op, fold)| {
            if fold {
                vec![DiffOperation::delete(op.text.clone()), DiffOperation::insert(op.text)]
            } else {
                vec![op]
            }
        })
        .collect();

    (folded, true)
}
