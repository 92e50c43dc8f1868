use crate::domain::diff::{DiffKind, DiffOperation};

/// A styled fragment of one unified-view line. Never empty, never contains `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRowSegment {
    pub kind: DiffKind,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    Unchanged,
    Added,
    Removed,
    Mixed,
}

impl RowKind {
    /// Derives the kind of a row from its segment kinds and the kind of the
    /// line break that terminated it.
    ///
    /// The break only decides the kind of a row with no text of its own. A
    /// row whose text is untouched but whose break was inserted or deleted is
    /// `Mixed`; otherwise an edited break joins the segment kinds.
    pub fn derive(segments: &[DiffRowSegment], line_break: Option<DiffKind>) -> Self {
        let edited_break = line_break.filter(|kind| *kind != DiffKind::Equal);
        let text_edited = segments.iter().any(|segment| segment.kind != DiffKind::Equal);

        if !segments.is_empty() && !text_edited && edited_break.is_some() {
            return RowKind::Mixed;
        }

        let (inserted, deleted) = segments
            .iter()
            .map(|segment| segment.kind)
            .chain(edited_break)
            .fold((false, false), |(inserted, deleted), kind| {
                (
                    inserted || kind == DiffKind::Insert,
                    deleted || kind == DiffKind::Delete,
                )
            });

        match (inserted, deleted) {
            (true, true) => RowKind::Mixed,
            (true, false) => RowKind::Added,
            (false, true) => RowKind::Removed,
            (false, false) => RowKind::Unchanged,
        }
    }

    pub fn marker(&self) -> char {
        match self {
            RowKind::Unchanged => ' ',
            RowKind::Added => '+',
            RowKind::Removed => '-',
            RowKind::Mixed => '~',
        }
    }
}

/// One rendered line of the unified view.
///
/// `line_break` is the kind of the operation whose `\n` ended the row, or
/// `None` for a final row that is not followed by a line break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRow {
    pub line_number: usize,
    pub segments: Vec<DiffRowSegment>,
    pub line_break: Option<DiffKind>,
    pub row_kind: RowKind,
}

impl DiffRow {
    fn new(line_number: usize, segments: Vec<DiffRowSegment>, line_break: Option<DiffKind>) -> Self {
        let row_kind = RowKind::derive(&segments, line_break);
        Self {
            line_number,
            segments,
            line_break,
            row_kind,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.segments.is_empty()
    }
}

#[derive(Debug, Default)]
struct RowFold {
    rows: Vec<DiffRow>,
    pending: Vec<DiffRowSegment>,
    ended_with_break: bool,
}

impl RowFold {
    fn push_operation(mut self, op: &DiffOperation) -> Self {
        let mut lines = op.text.split('\n');

        if let Some(first) = lines.next() {
            self.push_segment(op.kind, first);
        }
        for line in lines {
            self.flush(Some(op.kind));
            self.push_segment(op.kind, line);
        }

        if !op.text.is_empty() {
            self.ended_with_break = op.text.ends_with('\n');
        }

        self
    }

    fn push_segment(&mut self, kind: DiffKind, content: &str) {
        if content.is_empty() {
            return;
        }

        self.pending.push(DiffRowSegment {
            kind,
            content: content.to_string(),
        });
    }

    fn flush(&mut self, line_break: Option<DiffKind>) {
        let segments = std::mem::take(&mut self.pending);
        self.rows
            .push(DiffRow::new(self.rows.len() + 1, segments, line_break));
    }

    fn finish(mut self) -> Vec<DiffRow> {
        if !self.pending.is_empty() || self.ended_with_break {
            self.flush(None);
        }

        self.rows
    }
}

/// Folds an edit script into unified-view rows, one per rendered line.
///
/// A text that ends with a line break gets exactly one trailing blank row; a
/// text that does not gets none.
pub fn segment_into_rows(script: &[DiffOperation]) -> Vec<DiffRow> {
    script
        .iter()
        .fold(RowFold::default(), RowFold::push_operation)
        .finish()
}
