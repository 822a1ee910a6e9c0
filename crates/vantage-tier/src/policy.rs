use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::signals::{HardwareSignals, DEFAULT_MEMORY_GIB};
use crate::tier::QualityTier;

/// User-agent tokens that mark a phone or tablet.
pub const MOBILE_TOKENS: [&str; 8] = [
    "iPhone",
    "iPad",
    "iPod",
    "Android",
    "webOS",
    "BlackBerry",
    "IEMobile",
    "Opera Mini",
];

static DEFAULT_MOBILE: LazyLock<Regex> = LazyLock::new(|| {
    // Tokens are literals; escaping makes the pattern valid by construction.
    build_token_regex(&MOBILE_TOKENS).expect("mobile token pattern is valid")
});

static TABLET_HINT: LazyLock<Regex> =
    LazyLock::new(|| build_token_regex(&["iPad", "Android"]).expect("tablet pattern is valid"));

static MOBILE_WORD: LazyLock<Regex> =
    LazyLock::new(|| build_token_regex(&["Mobile"]).expect("mobile word pattern is valid"));

fn build_token_regex<S: AsRef<str>>(tokens: &[S]) -> Result<Regex, regex::Error> {
    let alternation = tokens
        .iter()
        .map(|t| regex::escape(t.as_ref()))
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&alternation).case_insensitive(true).build()
}

/// Default core threshold for the `Medium` cap.
pub const LOW_END_MAX_CORES: u32 = 4;

/// Default memory threshold (GiB) for the `Medium` cap.
pub const LOW_END_MAX_MEMORY_GIB: f64 = 4.0;

/// Case-insensitive substring matcher over user-agent strings.
#[derive(Debug, Clone)]
pub struct MobileDetector {
    pattern: Regex,
}

impl MobileDetector {
    /// Builds a detector matching any of `tokens`, ignoring case.
    ///
    /// Tokens are matched literally, not as regular expressions.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, regex::Error> {
        Ok(Self { pattern: build_token_regex(tokens)? })
    }

    pub fn is_mobile(&self, user_agent: &str) -> bool {
        self.pattern.is_match(user_agent)
    }
}

impl Default for MobileDetector {
    fn default() -> Self {
        Self { pattern: DEFAULT_MOBILE.clone() }
    }
}

/// Thresholds and matchers that turn signals into a tier.
///
/// The defaults are heuristic and carried unchanged from the shipped product;
/// adjust them only with measurements to back the change.
#[derive(Debug, Clone)]
pub struct TierPolicy {
    /// Desktops with this many logical cores or fewer are capped at `Medium`.
    pub low_end_max_cores: u32,

    /// Desktops with this much memory (GiB) or less are capped at `Medium`.
    pub low_end_max_memory_gib: f64,

    /// Mobile user-agent matcher.
    pub mobile: MobileDetector,
}

impl Default for TierPolicy {
    fn default() -> Self {
        Self {
            low_end_max_cores: LOW_END_MAX_CORES,
            low_end_max_memory_gib: LOW_END_MAX_MEMORY_GIB,
            mobile: MobileDetector::default(),
        }
    }
}

impl TierPolicy {
    /// True when either hardware signal is at or under its threshold.
    ///
    /// Mobile is not considered here; see
    /// [`DeviceCapabilities`](crate::DeviceCapabilities).
    ///
    /// NaN memory counts as unknown (the mid-range default); a NaN threshold
    /// falls back to [`LOW_END_MAX_MEMORY_GIB`].
    pub fn is_low_end_hardware(&self, signals: &HardwareSignals) -> bool {
        let memory = if signals.approx_memory_gib.is_nan() {
            DEFAULT_MEMORY_GIB
        } else {
            signals.approx_memory_gib
        };
        let max_memory = if self.low_end_max_memory_gib.is_nan() {
            LOW_END_MAX_MEMORY_GIB
        } else {
            self.low_end_max_memory_gib
        };

        signals.concurrency_hint <= self.low_end_max_cores || memory <= max_memory
    }

    /// Picks a tier. Evaluated in order:
    ///
    /// 1. mobile user agent → `Low` (battery life beats every other signal)
    /// 2. cores or memory at/under threshold → `Medium`
    /// 3. otherwise → `High`
    pub fn resolve(&self, signals: &HardwareSignals) -> QualityTier {
        if signals.is_mobile_user_agent {
            QualityTier::Low
        } else if self.is_low_end_hardware(signals) {
            QualityTier::Medium
        } else {
            QualityTier::High
        }
    }
}

/// Picks a tier with the default [`TierPolicy`].
pub fn resolve_tier(signals: &HardwareSignals) -> QualityTier {
    static POLICY: LazyLock<TierPolicy> = LazyLock::new(TierPolicy::default);
    POLICY.resolve(signals)
}

/// Tablet heuristic: an iPad/Android user agent without the `Mobile` token.
pub fn is_tablet(user_agent: &str) -> bool {
    TABLET_HINT.is_match(user_agent) && !MOBILE_WORD.is_match(user_agent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop(cores: u32, memory: f64) -> HardwareSignals {
        HardwareSignals {
            concurrency_hint: cores,
            approx_memory_gib: memory,
            is_mobile_user_agent: false,
            supports_webgl2: true,
        }
    }

    fn phone(cores: u32, memory: f64) -> HardwareSignals {
        HardwareSignals { is_mobile_user_agent: true, ..desktop(cores, memory) }
    }

    // ── resolve_tier ──────────────────────────────────────────────────────

    #[test]
    fn mobile_is_always_low() {
        for cores in [1, 2, 4, 8, 16, 64] {
            for memory in [0.5, 2.0, 4.0, 8.0, 128.0] {
                assert_eq!(resolve_tier(&phone(cores, memory)), QualityTier::Low);
            }
        }
    }

    #[test]
    fn strong_desktop_is_high() {
        assert_eq!(resolve_tier(&desktop(8, 8.0)), QualityTier::High);
    }

    #[test]
    fn core_threshold_alone_downgrades() {
        assert_eq!(resolve_tier(&desktop(4, 8.0)), QualityTier::Medium);
    }

    #[test]
    fn memory_threshold_alone_downgrades() {
        assert_eq!(resolve_tier(&desktop(8, 4.0)), QualityTier::Medium);
    }

    #[test]
    fn just_over_thresholds_is_high() {
        assert_eq!(resolve_tier(&desktop(5, 4.5)), QualityTier::High);
    }

    #[test]
    fn webgl2_does_not_affect_tier() {
        let without = HardwareSignals { supports_webgl2: false, ..desktop(8, 8.0) };
        assert_eq!(resolve_tier(&without), QualityTier::High);
    }

    #[test]
    fn tier_is_monotonic_in_hardware() {
        let cores = [1, 2, 3, 4, 5, 6, 8, 12, 16, 32, 64];
        let memory = [0.25, 1.0, 2.0, 4.0, 4.5, 6.0, 8.0, 16.0, 64.0];
        for mobile in [false, true] {
            for (i, &c0) in cores.iter().enumerate() {
                for &c1 in &cores[i..] {
                    for (j, &m0) in memory.iter().enumerate() {
                        for &m1 in &memory[j..] {
                            let weak = HardwareSignals {
                                is_mobile_user_agent: mobile,
                                ..desktop(c0, m0)
                            };
                            let strong = HardwareSignals {
                                is_mobile_user_agent: mobile,
                                ..desktop(c1, m1)
                            };
                            assert!(resolve_tier(&weak) <= resolve_tier(&strong));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn nan_memory_is_treated_as_default() {
        assert_eq!(resolve_tier(&desktop(8, f64::NAN)), QualityTier::Medium);
        assert_eq!(resolve_tier(&phone(8, f64::NAN)), QualityTier::Low);
    }

    #[test]
    fn nan_threshold_keeps_memory_downgrade() {
        let policy = TierPolicy {
            low_end_max_memory_gib: f64::NAN,
            ..TierPolicy::default()
        };
        assert_eq!(policy.resolve(&desktop(8, 1.0)), QualityTier::Medium);
        assert_eq!(policy.resolve(&desktop(8, 16.0)), QualityTier::High);
    }

    #[test]
    fn custom_thresholds_are_honored() {
        let policy = TierPolicy { low_end_max_cores: 8, ..TierPolicy::default() };
        assert_eq!(policy.resolve(&desktop(8, 16.0)), QualityTier::Medium);
        assert_eq!(policy.resolve(&desktop(12, 16.0)), QualityTier::High);
    }

    // ── user agents ───────────────────────────────────────────────────────

    #[test]
    fn default_detector_matches_every_token() {
        let d = MobileDetector::default();
        for token in MOBILE_TOKENS {
            assert!(d.is_mobile(&format!("Mozilla/5.0 ({token}) Something")), "{token}");
        }
    }

    #[test]
    fn detector_ignores_case() {
        let d = MobileDetector::default();
        assert!(d.is_mobile("mozilla/5.0 (linux; android 14)"));
        assert!(d.is_mobile("OPERA MINI/8.0"));
    }

    #[test]
    fn detector_rejects_desktop() {
        let d = MobileDetector::default();
        assert!(!d.is_mobile("Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/126.0"));
        assert!(!d.is_mobile("Mozilla/5.0 (Macintosh; Intel Mac OS X 14_5) Safari/605.1"));
    }

    #[test]
    fn custom_tokens_are_literal() {
        let d = MobileDetector::from_tokens(&["Kindle", "Silk/1.0"]).unwrap();
        assert!(d.is_mobile("Mozilla/5.0 (Linux; KINDLE Fire) Silk/1.0"));
        assert!(!d.is_mobile("Silk/100"));
    }

    #[test]
    fn tablet_detection() {
        assert!(is_tablet("Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X)"));
        assert!(is_tablet("Mozilla/5.0 (Linux; Android 14; SM-X710) Safari/537.36"));
        assert!(!is_tablet("Mozilla/5.0 (Linux; Android 14; Pixel 8) Mobile Safari/537.36"));
        assert!(!is_tablet("Mozilla/5.0 (X11; Linux x86_64)"));
    }
}
