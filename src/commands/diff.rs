use crate::domain::diff::{DiffKind, DiffRow, RowKind, SideBySidePane};
use crate::domain::review::{DiffCache, RenderedDiff, ViewMode};
use crate::terminal::console::Console;
use anyhow::Context;
use colored::{ColoredString, Colorize};
use std::io::Write;
use std::path::Path;

impl Console {
    pub fn diff(&self, old_path: &Path, new_path: &Path, mode: ViewMode) -> anyhow::Result<()> {
        let old = read_text(old_path)?;
        let new = read_text(new_path)?;

        let mut cache = DiffCache::new(self.limits());
        self.print_rendered(cache.render(&old, &new), mode)
    }

    pub fn stats(&self, old_path: &Path, new_path: &Path) -> anyhow::Result<()> {
        let old = read_text(old_path)?;
        let new = read_text(new_path)?;

        let mut cache = DiffCache::new(self.limits());
        match cache.render(&old, &new) {
            RenderedDiff::Ready(view) => writeln!(self.writer(), "{}", view.stats)?,
            RenderedDiff::TooLarge(exceeded) => self.print_too_large(exceeded)?,
        }

        Ok(())
    }

    pub(crate) fn print_rendered(&self, rendered: &RenderedDiff, mode: ViewMode) -> anyhow::Result<()> {
        match (rendered, mode) {
            (RenderedDiff::Ready(view), ViewMode::Unified) => self.print_unified(&view.rows),
            (RenderedDiff::Ready(view), ViewMode::Split) => self.print_split(&view.pane),
            (RenderedDiff::TooLarge(exceeded), _) => self.print_too_large(exceeded),
        }
    }

    fn print_too_large(&self, exceeded: impl std::fmt::Display) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}",
            format!("diff too large to display: {exceeded}").yellow()
        )?;

        Ok(())
    }

    fn print_unified(&self, rows: &[DiffRow]) -> anyhow::Result<()> {
        for row in rows {
            let number = format!("{:>4}", row.line_number).dimmed();
            let marker = row_marker(row.row_kind);
            let content = row_content(row);

            match (content.is_empty(), row.row_kind) {
                (true, RowKind::Unchanged) => writeln!(self.writer(), "{number}")?,
                (true, _) => writeln!(self.writer(), "{number} {marker}")?,
                (false, _) => writeln!(self.writer(), "{number} {marker} {content}")?,
            }
        }

        Ok(())
    }

    fn print_split(&self, pane: &SideBySidePane) -> anyhow::Result<()> {
        let width = pane.old_width();

        for (old, new) in pane.rows() {
            let left = match old {
                Some(line) => format!("{:>4} {:<width$}", line.number, line.text),
                None => format!("{:>4} {:<width$}", "", ""),
            };

            match new {
                Some(line) if line.text.is_empty() => {
                    writeln!(self.writer(), "{left} │ {:>4}", line.number)?
                }
                Some(line) => writeln!(self.writer(), "{left} │ {:>4} {}", line.number, line.text)?,
                None => writeln!(self.writer(), "{left} │")?,
            }
        }

        Ok(())
    }
}

fn row_marker(kind: RowKind) -> ColoredString {
    let marker = kind.marker().to_string();
    match kind {
        RowKind::Unchanged => marker.as_str().normal(),
        RowKind::Added => marker.as_str().green(),
        RowKind::Removed => marker.as_str().red(),
        RowKind::Mixed => marker.as_str().yellow(),
    }
}

// rows made of a single kind print raw; mixed rows bracket every edit,
// including an inserted or deleted line break
fn row_content(row: &DiffRow) -> String {
    let uniform = row
        .segments
        .windows(2)
        .all(|pair| pair[0].kind == pair[1].kind);

    let line_break = match (row.row_kind, row.line_break) {
        (RowKind::Mixed, Some(DiffKind::Delete)) => "[-↵-]".red().to_string(),
        (RowKind::Mixed, Some(DiffKind::Insert)) => "{+↵+}".green().to_string(),
        _ => String::new(),
    };

    row.segments
        .iter()
        .map(|segment| {
            let text = segment.content.as_str();
            match (segment.kind, uniform) {
                (DiffKind::Equal, _) => text.normal(),
                (DiffKind::Delete, true) => text.red(),
                (DiffKind::Insert, true) => text.green(),
                (DiffKind::Delete, false) => format!("[-{text}-]").as_str().red().strikethrough(),
                (DiffKind::Insert, false) => format!("{{+{text}+}}").as_str().green().bold(),
            }
            .to_string()
        })
        .chain(std::iter::once(line_break))
        .collect()
}

pub(crate) fn read_text(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read text file {}", path.display()))
}
