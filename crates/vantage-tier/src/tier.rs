use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidTier;

/// Discrete rendering-quality level.
///
/// Variants are declared in ascending order so the derived `Ord` gives
/// `Low < Medium < High`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Low,
    Medium,
    High,
}

impl QualityTier {
    pub const ALL: [QualityTier; 3] = [QualityTier::Low, QualityTier::Medium, QualityTier::High];

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityTier {
    type Err = InvalidTier;

    /// Parses `low`, `medium` or `high`, ignoring ASCII case and surrounding
    /// whitespace. Anything else is an [`InvalidTier`]; there is no fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(t))
            .ok_or_else(|| InvalidTier::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_ascending() {
        assert!(QualityTier::Low < QualityTier::Medium);
        assert!(QualityTier::Medium < QualityTier::High);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("low".parse::<QualityTier>(), Ok(QualityTier::Low));
        assert_eq!("Medium".parse::<QualityTier>(), Ok(QualityTier::Medium));
        assert_eq!("  HIGH ".parse::<QualityTier>(), Ok(QualityTier::High));
    }

    #[test]
    fn unknown_name_is_invalid_tier() {
        let err = "ultra".parse::<QualityTier>().unwrap_err();
        assert_eq!(err, InvalidTier { value: "ultra".into() });
        assert!(err.to_string().contains("ultra"));
    }

    #[test]
    fn empty_name_is_invalid_tier() {
        assert!("".parse::<QualityTier>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for tier in QualityTier::ALL {
            assert_eq!(tier.to_string().parse::<QualityTier>(), Ok(tier));
        }
    }
}
