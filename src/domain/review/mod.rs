//! Review orchestration around the diff engine
//!
//! - `limits`: input ceiling above which a pair is not diffed
//! - `record`: the modification record supplied by the backend
//! - `intent`: review status, push targets and the decision intents sent back
//! - `view_mode`: unified / split display toggle
//! - `session`: memoized rendering and intent validation for one record

pub mod intent;
pub mod limits;
pub mod record;
pub mod session;
pub mod view_mode;

pub use intent::{PushTargets, ReviewIntent, ReviewStatus};
pub use limits::{DiffLimits, LimitExceeded};
pub use record::{ModificationAction, ModificationRecord};
pub use session::{DiffCache, DiffView, RenderedDiff, ReviewSession};
pub use view_mode::ViewMode;

#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("cannot move a {from} review to {to}")]
    InvalidTransition {
        from: ReviewStatus,
        to: ReviewStatus,
    },

    #[error("only approved modifications can be pushed (current status: {0})")]
    PushBeforeApproval(ReviewStatus),

    #[error("a review decision must be approved or rejected")]
    UndecidedReview,

    #[error("select at least one push target (server or GitHub)")]
    NoPushTarget,

    #[error("malformed modification record: {0}")]
    MalformedRecord(#[from] serde_json::Error),

    #[error("unknown view mode {0:?}, expected unified or split")]
    UnknownViewMode(String),

    #[error("unknown review status {0:?}, expected pending, approved or rejected")]
    UnknownStatus(String),
}
