use crate::domain::diff::cleanup::{cleanup_merge, cleanup_semantic};
use crate::domain::diff::myers::{DiffAlgorithm, Edit, MyersDiff};
use crate::domain::diff::{DiffKind, DiffOperation};
use tracing::debug;

/// Longest middle section (in chars, per side) diffed char by char. Longer
/// sections are diffed line by line first.
pub const CHAR_MODE_LIMIT: usize = 2_000;

/// Edit distance shared by every char-level Myers run of one
/// [`build_edit_script`] call, and the cap of its line-level run. Sections
/// left without budget are reported as one delete plus one insert.
pub const MAX_EDIT_COST: usize = 2_000;

/// Char-level edits still allowed in one [`build_edit_script`] call.
///
/// A successful run spends its edit distance; a run that gives up spends
/// everything that was left, since Myers already walked that far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditBudget {
    remaining: usize,
}

impl EditBudget {
    pub fn new(remaining: usize) -> Self {
        Self { remaining }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_spent(&self) -> bool {
        self.remaining == 0
    }

    fn spend(&mut self, cost: usize) {
        self.remaining = self.remaining.saturating_sub(cost);
    }

    fn exhaust(&mut self) {
        self.remaining = 0;
    }
}

impl Default for EditBudget {
    fn default() -> Self {
        Self::new(MAX_EDIT_COST)
    }
}

/// Computes the edit script turning `old` into `new`.
///
/// Common prefix and suffix are split off first. The remaining middle is
/// diffed per char when short, or per line with a char-level refinement of
/// every changed block otherwise. All char-level runs draw on one
/// [`EditBudget`]. The raw script then goes through [`cleanup_semantic`].
pub fn build_edit_script(old: &str, new: &str) -> Vec<DiffOperation> {
    build_edit_script_within(old, new, &mut EditBudget::default())
}

/// [`build_edit_script`] drawing on a caller-supplied budget.
pub fn build_edit_script_within(
    old: &str,
    new: &str,
    budget: &mut EditBudget,
) -> Vec<DiffOperation> {
    cleanup_semantic(diff_texts(old, new, budget))
}

fn diff_texts(old: &str, new: &str, budget: &mut EditBudget) -> Vec<DiffOperation> {
    if old == new {
        return if old.is_empty() {
            Vec::new()
        } else {
            vec![DiffOperation::equal(old)]
        };
    }

    let prefix = common_prefix_len(old, new);
    let (old_rest, new_rest) = (&old[prefix..], &new[prefix..]);
    let suffix = common_suffix_len(old_rest, new_rest);
    let old_middle = &old_rest[..old_rest.len() - suffix];
    let new_middle = &new_rest[..new_rest.len() - suffix];

    let mut ops = Vec::new();
    if prefix > 0 {
        ops.push(DiffOperation::equal(&old[..prefix]));
    }
    ops.extend(diff_middle(old_middle, new_middle, budget));
    if suffix > 0 {
        ops.push(DiffOperation::equal(&old_rest[old_rest.len() - suffix..]));
    }

    ops
}

fn diff_middle(old: &str, new: &str, budget: &mut EditBudget) -> Vec<DiffOperation> {
    if old.is_empty() {
        return vec![DiffOperation::insert(new)];
    }
    if new.is_empty() {
        return vec![DiffOperation::delete(old)];
    }

    let old_chars = old.chars().collect::<Vec<_>>();
    let new_chars = new.chars().collect::<Vec<_>>();

    if old_chars.len() <= CHAR_MODE_LIMIT && new_chars.len() <= CHAR_MODE_LIMIT {
        return diff_chars(&old_chars, &new_chars, budget).unwrap_or_else(|| {
            debug!(
                old_chars = old_chars.len(),
                new_chars = new_chars.len(),
                "char diff out of edit budget, replacing section"
            );
            replace(old, new)
        });
    }

    debug!(
        old_chars = old_chars.len(),
        new_chars = new_chars.len(),
        "diffing section line by line"
    );
    diff_lines(old, new, budget)
}

fn diff_chars(old: &[char], new: &[char], budget: &mut EditBudget) -> Option<Vec<DiffOperation>> {
    if budget.is_spent() {
        return None;
    }

    let Some(edits) = MyersDiff::new(old, new, budget.remaining()).diff() else {
        budget.exhaust();
        return None;
    };

    let ops = edits.into_iter().fold(Vec::new(), |mut ops, edit| {
        let (kind, value) = split_edit(edit);
        match ops.last_mut() {
            Some(DiffOperation { kind: last, text }) if *last == kind => text.push(value),
            _ => ops.push(DiffOperation::new(kind, value)),
        }
        ops
    });

    budget.spend(
        ops.iter()
            .filter(|op| op.is_edit())
            .map(DiffOperation::char_len)
            .sum(),
    );
    Some(ops)
}

fn diff_lines(old: &str, new: &str, budget: &mut EditBudget) -> Vec<DiffOperation> {
    let old_lines = old.split_inclusive('\n').collect::<Vec<_>>();
    let new_lines = new.split_inclusive('\n').collect::<Vec<_>>();

    let Some(edits) = MyersDiff::new(&old_lines, &new_lines, MAX_EDIT_COST).diff() else {
        debug!(
            old_lines = old_lines.len(),
            new_lines = new_lines.len(),
            "line diff exceeded edit budget, replacing section"
        );
        return replace(old, new);
    };

    let line_ops = edits
        .into_iter()
        .map(|edit| {
            let (kind, line) = split_edit(edit);
            DiffOperation::new(kind, line)
        })
        .collect::<Vec<_>>();

    refine_changed_blocks(cleanup_merge(line_ops), budget)
}

// re-diffs each delete/insert pair of a line-level script at char granularity
fn refine_changed_blocks(ops: Vec<DiffOperation>, budget: &mut EditBudget) -> Vec<DiffOperation> {
    let mut refined = Vec::with_capacity(ops.len());
    let mut ops = ops.into_iter().peekable();

    while let Some(op) = ops.next() {
        let paired_insert = op.kind == DiffKind::Delete
            && ops.peek().is_some_and(|next| next.kind == DiffKind::Insert);

        match ops.next_if(|_| paired_insert) {
            Some(insert)
                if op.char_len() <= CHAR_MODE_LIMIT && insert.char_len() <= CHAR_MODE_LIMIT =>
            {
                refined.extend(diff_texts(&op.text, &insert.text, budget));
            }
            Some(insert) => {
                refined.push(op);
                refined.push(insert);
            }
            None => refined.push(op),
        }
    }

    refined
}

fn split_edit<T>(edit: Edit<T>) -> (DiffKind, T) {
    match edit {
        Edit::Equal { value } => (DiffKind::Equal, value),
        Edit::Insert { value } => (DiffKind::Insert, value),
        Edit::Delete { value } => (DiffKind::Delete, value),
    }
}

fn replace(old: &str, new: &str) -> Vec<DiffOperation> {
    vec![DiffOperation::delete(old), DiffOperation::insert(new)]
}

// byte length of the shared leading chars
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map(|((index, _), _)| index)
        .unwrap_or_else(|| a.len().min(b.len()))
}

// byte length of the shared trailing chars
fn common_suffix_len(a: &str, b: &str) -> usize {
    a.chars()
        .rev()
        .zip(b.chars().rev())
        .take_while(|(ca, cb)| ca == cb)
        .map(|(c, _)| c.len_utf8())
        .sum()
}
