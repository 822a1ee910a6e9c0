use std::fmt;

/// A tier name outside the closed `low` / `medium` / `high` set.
///
/// `resolve_tier` is total, so this only surfaces when a caller hands in a raw
/// string (config file, CLI flag, query parameter). Treat it as a call-site bug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTier {
    pub value: String,
}

impl InvalidTier {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

impl fmt::Display for InvalidTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid quality tier {:?}: expected one of low, medium, high", self.value)
    }
}

impl std::error::Error for InvalidTier {}
