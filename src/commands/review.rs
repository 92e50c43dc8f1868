use crate::commands::diff::read_text;
use crate::domain::review::{
    ModificationRecord, PushTargets, RenderedDiff, ReviewIntent, ReviewSession, ReviewStatus,
    ViewMode,
};
use crate::terminal::console::Console;
use colored::Colorize;
use std::io::Write;
use std::path::Path;
use tracing::info;

impl Console {
    pub fn review(
        &self,
        record_path: &Path,
        mode: ViewMode,
        status: ReviewStatus,
    ) -> anyhow::Result<()> {
        let record = ModificationRecord::from_json(&read_text(record_path)?)?;
        let mut session =
            ReviewSession::new(record.file_path.clone(), record, status, self.limits());
        session.set_mode(mode);

        self.print_review_header(&mut session)?;
        let mode = session.mode();
        self.print_rendered(session.render(), mode)
    }

    fn print_review_header(&self, session: &mut ReviewSession) -> anyhow::Result<()> {
        let path = session.record().file_path.clone();
        let action = session.record().action;
        let status = match session.status() {
            ReviewStatus::Pending => session.status().as_str().yellow(),
            ReviewStatus::Approved => session.status().as_str().green(),
            ReviewStatus::Rejected => session.status().as_str().red(),
        };

        match session.render() {
            RenderedDiff::Ready(view) => writeln!(
                self.writer(),
                "{} ({action}, {status}) {}",
                path.bold(),
                view.stats
            )?,
            RenderedDiff::TooLarge(_) => {
                writeln!(self.writer(), "{} ({action}, {status})", path.bold())?
            }
        }

        Ok(())
    }

    pub fn approve(&self, id: &str, comment: Option<String>) -> anyhow::Result<()> {
        self.emit(&ReviewIntent::review(id, ReviewStatus::Approved, comment)?)
    }

    pub fn reject(&self, id: &str, comment: Option<String>) -> anyhow::Result<()> {
        self.emit(&ReviewIntent::review(id, ReviewStatus::Rejected, comment)?)
    }

    pub fn push(
        &self,
        id: &str,
        targets: PushTargets,
        commit_message: Option<String>,
    ) -> anyhow::Result<()> {
        self.emit(&ReviewIntent::push(id, targets, commit_message)?)
    }

    pub fn delete(&self, id: &str) -> anyhow::Result<()> {
        self.emit(&ReviewIntent::delete(id))
    }

    fn emit(&self, intent: &ReviewIntent) -> anyhow::Result<()> {
        let json = intent.to_json()?;
        info!(%json, "emitting review intent");
        writeln!(self.writer(), "{json}")?;

        Ok(())
    }
}
