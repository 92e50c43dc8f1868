use anyhow::Context;
use derive_new::new;
use std::fmt::Display;

pub const DEFAULT_MAX_BYTES: usize = 512 * 1024;
pub const DEFAULT_MAX_LINES: usize = 10_000;

pub const MAX_BYTES_VAR: &str = "CONFDIFF_MAX_BYTES";
pub const MAX_LINES_VAR: &str = "CONFDIFF_MAX_LINES";

/// Input ceiling above which a pair is not diffed at all.
///
/// Both limits apply to each side of the pair separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct DiffLimits {
    pub max_bytes: usize,
    pub max_lines: usize,
}

impl Default for DiffLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BYTES, DEFAULT_MAX_LINES)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitExceeded {
    Bytes { actual: usize, limit: usize },
    Lines { actual: usize, limit: usize },
}

impl Display for LimitExceeded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LimitExceeded::Bytes { actual, limit } => {
                write!(f, "{actual} bytes exceeds the {limit} byte limit")
            }
            LimitExceeded::Lines { actual, limit } => {
                write!(f, "{actual} lines exceeds the {limit} line limit")
            }
        }
    }
}

impl DiffLimits {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            max_bytes: parse_var(&lookup, MAX_BYTES_VAR)?.unwrap_or(defaults.max_bytes),
            max_lines: parse_var(&lookup, MAX_LINES_VAR)?.unwrap_or(defaults.max_lines),
        })
    }

    pub fn with_overrides(self, max_bytes: Option<usize>, max_lines: Option<usize>) -> Self {
        Self {
            max_bytes: max_bytes.unwrap_or(self.max_bytes),
            max_lines: max_lines.unwrap_or(self.max_lines),
        }
    }

    /// Returns the first limit the pair breaks, checking bytes before lines.
    pub fn check(&self, old: &str, new: &str) -> Option<LimitExceeded> {
        let bytes = old.len().max(new.len());
        if bytes > self.max_bytes {
            return Some(LimitExceeded::Bytes {
                actual: bytes,
                limit: self.max_bytes,
            });
        }

        let lines = count_lines(old).max(count_lines(new));
        if lines > self.max_lines {
            return Some(LimitExceeded::Lines {
                actual: lines,
                limit: self.max_lines,
            });
        }

        None
    }
}

fn count_lines(text: &str) -> usize {
    text.bytes().filter(|byte| *byte == b'\n').count() + 1
}

fn parse_var(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> anyhow::Result<Option<usize>> {
    lookup(name)
        .map(|value| {
            value
                .trim()
                .parse::<usize>()
                .with_context(|| format!("{name} must be a non-negative integer, got {value:?}"))
        })
        .transpose()
}
