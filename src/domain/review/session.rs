use crate::domain::diff::{
    DiffOperation, DiffRow, DiffStats, SideBySidePane, build_edit_script, build_side_by_side,
    compute_stats, normalize_line_endings, segment_into_rows,
};
use crate::domain::review::{
    DiffLimits, LimitExceeded, ModificationRecord, PushTargets, ReviewError, ReviewIntent,
    ReviewStatus, ViewMode,
};
use tracing::{debug, warn};

/// Everything both views need, derived from one `(old, new)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffView {
    pub script: Vec<DiffOperation>,
    pub rows: Vec<DiffRow>,
    pub stats: DiffStats,
    pub pane: SideBySidePane,
}

impl DiffView {
    pub fn compute(old: &str, new: &str) -> Self {
        let script = build_edit_script(old, new);
        let rows = segment_into_rows(&script);
        let stats = compute_stats(&script);
        let pane = build_side_by_side(old, new);

        Self {
            script,
            rows,
            stats,
            pane,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedDiff {
    Ready(DiffView),
    TooLarge(LimitExceeded),
}

impl RenderedDiff {
    pub fn compute(old: &str, new: &str, limits: &DiffLimits) -> Self {
        match limits.check(old, new) {
            Some(exceeded) => {
                warn!(%exceeded, "diff too large to display");
                RenderedDiff::TooLarge(exceeded)
            }
            None => RenderedDiff::Ready(DiffView::compute(old, new)),
        }
    }

    pub fn view(&self) -> Option<&DiffView> {
        match self {
            RenderedDiff::Ready(view) => Some(view),
            RenderedDiff::TooLarge(_) => None,
        }
    }
}

#[derive(Debug)]
struct CacheEntry {
    old: String,
    new: String,
    rendered: RenderedDiff,
}

/// Memoizes the rendered diff of the last pair it was asked for.
///
/// Both texts are normalized to `\n` line endings before comparison, so a pair
/// that differs only in line-ending style is served from the cache.
#[derive(Debug)]
pub struct DiffCache {
    limits: DiffLimits,
    entry: Option<CacheEntry>,
    computations: usize,
}

impl DiffCache {
    pub fn new(limits: DiffLimits) -> Self {
        Self {
            limits,
            entry: None,
            computations: 0,
        }
    }

    pub fn render(&mut self, old: &str, new: &str) -> &RenderedDiff {
        let old = normalize_line_endings(old);
        let new = normalize_line_endings(new);

        let entry = match self.entry.take() {
            Some(entry) if entry.old == old && entry.new == new => entry,
            _ => {
                self.computations += 1;
                debug!(
                    old_bytes = old.len(),
                    new_bytes = new.len(),
                    "computing diff for new pair"
                );
                CacheEntry {
                    rendered: RenderedDiff::compute(&old, &new, &self.limits),
                    old: old.into_owned(),
                    new: new.into_owned(),
                }
            }
        };

        &self.entry.insert(entry).rendered
    }

    /// How many times a diff was actually computed.
    pub fn computations(&self) -> usize {
        self.computations
    }
}

/// View state and decision relay for one proposed modification.
///
/// The backend owns the review status; the session only mirrors it through
/// [`apply_status`](Self::apply_status) and [`mark_pushed`](Self::mark_pushed)
/// and validates intents against it. A failed intent leaves the rendered diff
/// untouched.
#[derive(Debug)]
pub struct ReviewSession {
    id: String,
    record: ModificationRecord,
    status: ReviewStatus,
    pushed: PushTargets,
    mode: ViewMode,
    cache: DiffCache,
}

impl ReviewSession {
    pub fn new(
        id: impl Into<String>,
        record: ModificationRecord,
        status: ReviewStatus,
        limits: DiffLimits,
    ) -> Self {
        Self {
            id: id.into(),
            record,
            status,
            pushed: PushTargets::empty(),
            mode: ViewMode::default(),
            cache: DiffCache::new(limits),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn record(&self) -> &ModificationRecord {
        &self.record
    }

    pub fn status(&self) -> ReviewStatus {
        self.status
    }

    pub fn pushed(&self) -> PushTargets {
        self.pushed
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> ViewMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Swaps in a refreshed record; the diff is recomputed on the next render
    /// only if the texts changed.
    pub fn replace_record(&mut self, record: ModificationRecord) {
        self.record = record;
    }

    pub fn render(&mut self) -> &RenderedDiff {
        self.cache.render(self.record.before(), self.record.after())
    }

    pub fn computations(&self) -> usize {
        self.cache.computations()
    }

    pub fn approve(&self, comment: Option<String>) -> Result<ReviewIntent, ReviewError> {
        self.decide(ReviewStatus::Approved, comment)
    }

    pub fn reject(&self, comment: Option<String>) -> Result<ReviewIntent, ReviewError> {
        self.decide(ReviewStatus::Rejected, comment)
    }

    fn decide(
        &self,
        decision: ReviewStatus,
        comment: Option<String>,
    ) -> Result<ReviewIntent, ReviewError> {
        if self.status != ReviewStatus::Pending {
            return Err(ReviewError::InvalidTransition {
                from: self.status,
                to: decision,
            });
        }

        ReviewIntent::review(self.id.clone(), decision, comment)
    }

    pub fn push(
        &self,
        targets: PushTargets,
        commit_message: Option<String>,
    ) -> Result<ReviewIntent, ReviewError> {
        if self.status != ReviewStatus::Approved {
            return Err(ReviewError::PushBeforeApproval(self.status));
        }

        ReviewIntent::push(self.id.clone(), targets, commit_message)
    }

    pub fn delete(&self) -> ReviewIntent {
        ReviewIntent::delete(self.id.clone())
    }

    /// Mirrors a status the backend has confirmed.
    pub fn apply_status(&mut self, status: ReviewStatus) -> Result<(), ReviewError> {
        if !self.status.can_transition_to(status) {
            return Err(ReviewError::InvalidTransition {
                from: self.status,
                to: status,
            });
        }

        self.status = status;
        Ok(())
    }

    /// Records targets the backend has confirmed as pushed.
    pub fn mark_pushed(&mut self, targets: PushTargets) -> Result<(), ReviewError> {
        if self.status != ReviewStatus::Approved {
            return Err(ReviewError::PushBeforeApproval(self.status));
        }

        self.pushed |= targets;
        Ok(())
    }
}
