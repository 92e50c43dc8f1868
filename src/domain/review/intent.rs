use crate::domain::review::ReviewError;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Review decision recorded by the backend for a proposed modification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Approved => "approved",
            ReviewStatus::Rejected => "rejected",
        }
    }

    /// Approval and rejection are terminal; only a pending item can be decided.
    pub fn can_transition_to(&self, next: ReviewStatus) -> bool {
        matches!(
            (self, next),
            (ReviewStatus::Pending, ReviewStatus::Approved | ReviewStatus::Rejected)
        ) || *self == next
    }
}

impl Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReviewStatus {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(ReviewStatus::Pending),
            "approved" => Ok(ReviewStatus::Approved),
            "rejected" => Ok(ReviewStatus::Rejected),
            _ => Err(ReviewError::UnknownStatus(s.to_string())),
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct PushTargets: u8 {
        const SERVER = 0b01;
        const GITHUB = 0b10;
    }
}

impl PushTargets {
    pub fn from_flags(server: bool, github: bool) -> Self {
        let mut targets = PushTargets::empty();
        targets.set(PushTargets::SERVER, server);
        targets.set(PushTargets::GITHUB, github);
        targets
    }
}

/// A user decision relayed to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReviewIntent {
    Review {
        id: String,
        status: ReviewStatus,
        #[serde(skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    Push {
        id: String,
        push_to_server: bool,
        push_to_github: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        commit_message: Option<String>,
    },
    Delete {
        id: String,
    },
}

impl ReviewIntent {
    pub fn review(
        id: impl Into<String>,
        status: ReviewStatus,
        comment: Option<String>,
    ) -> Result<Self, ReviewError> {
        if status == ReviewStatus::Pending {
            return Err(ReviewError::UndecidedReview);
        }

        Ok(ReviewIntent::Review {
            id: id.into(),
            status,
            comment: non_blank(comment),
        })
    }

    pub fn push(
        id: impl Into<String>,
        targets: PushTargets,
        commit_message: Option<String>,
    ) -> Result<Self, ReviewError> {
        if targets.is_empty() {
            return Err(ReviewError::NoPushTarget);
        }

        Ok(ReviewIntent::Push {
            id: id.into(),
            push_to_server: targets.contains(PushTargets::SERVER),
            push_to_github: targets.contains(PushTargets::GITHUB),
            commit_message: non_blank(commit_message),
        })
    }

    pub fn delete(id: impl Into<String>) -> Self {
        ReviewIntent::Delete { id: id.into() }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|text| !text.trim().is_empty())
}
