use crate::domain::diff::normalize_line_endings;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct PaneLine {
    pub number: usize,
    pub text: String,
}

/// Two independent line listings of the old and new texts.
///
/// Lines are numbered within their own column only. Line `n` of one column is
/// not claimed to correspond to line `n` of the other: an insertion or
/// deletion shifts every following line in one column and not in the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideBySidePane {
    pub old_lines: Vec<PaneLine>,
    pub new_lines: Vec<PaneLine>,
}

impl SideBySidePane {
    /// Pairs lines by index, yielding `None` once a column is exhausted.
    pub fn rows(&self) -> impl Iterator<Item = (Option<&PaneLine>, Option<&PaneLine>)> {
        let height = self.old_lines.len().max(self.new_lines.len());
        (0..height).map(|index| (self.old_lines.get(index), self.new_lines.get(index)))
    }

    pub fn height(&self) -> usize {
        self.old_lines.len().max(self.new_lines.len())
    }

    /// Widest old-column line, in chars.
    pub fn old_width(&self) -> usize {
        self.old_lines
            .iter()
            .map(|line| line.text.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// Splits both texts into numbered lines without computing any diff.
pub fn build_side_by_side(old: &str, new: &str) -> SideBySidePane {
    SideBySidePane {
        old_lines: split_lines(old),
        new_lines: split_lines(new),
    }
}

fn split_lines(text: &str) -> Vec<PaneLine> {
    normalize_line_endings(text)
        .split('\n')
        .enumerate()
        .map(|(index, line)| PaneLine::new(index + 1, line.to_string()))
        .collect()
}
