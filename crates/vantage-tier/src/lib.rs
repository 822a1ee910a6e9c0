//! Rendering-quality tiers for the **Vantage** device resolver.
//!
//! This crate is pure: it never touches the host. Signals come in through
//! [`SignalProvider`] (or as a ready [`HardwareSignals`] value), and every
//! operation is a deterministic function of its arguments.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`signals`] | `HardwareSignals`, `SignalProvider`, `classify_device` |
//! | [`tier`] | `QualityTier` |
//! | [`policy`] | `TierPolicy`, `MobileDetector`, `resolve_tier`, `is_tablet` |
//! | [`settings`] | `QualitySettings` and the three fixed presets |
//! | [`score`] | advisory `score_device` |
//! | [`pacing`] | animation/debounce multipliers, feature toggles, reduced motion |
//! | [`capabilities`] | `DeviceCapabilities` summary |
//! | [`error`] | `InvalidTier` |
//!
//! # Quick start
//!
//! ```rust
//! use vantage_tier::{resolve_tier, settings_for, HardwareSignals, QualityTier};
//!
//! let signals = HardwareSignals {
//!     concurrency_hint: 8,
//!     approx_memory_gib: 16.0,
//!     is_mobile_user_agent: false,
//!     supports_webgl2: true,
//! };
//!
//! let tier = resolve_tier(&signals);
//! assert_eq!(tier, QualityTier::High);
//! assert_eq!(settings_for(tier).star_particles, 5001);
//! ```

pub mod capabilities;
pub mod error;
pub mod pacing;
pub mod policy;
pub mod score;
pub mod settings;
pub mod signals;
pub mod tier;

pub use capabilities::DeviceCapabilities;
pub use error::InvalidTier;
pub use pacing::{
    animation_duration, debounce_delay, effective_animation, is_feature_enabled, Feature,
};
pub use policy::{is_tablet, resolve_tier, MobileDetector, TierPolicy};
pub use score::score_device;
pub use settings::{
    pixel_ratio_range, settings_for, settings_for_name, AnimationLevel, PixelRatioRange,
    QualitySettings, RenderLoop, TextureResolution,
};
pub use signals::{classify_device, HardwareSignals, SignalProvider};
pub use tier::QualityTier;

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn high_end_desktop_end_to_end() {
        let signals = HardwareSignals {
            concurrency_hint: 8,
            approx_memory_gib: 16.0,
            is_mobile_user_agent: false,
            supports_webgl2: true,
        };
        let tier = resolve_tier(&signals);
        assert_eq!(tier, QualityTier::High);

        let s = settings_for(tier);
        assert!(s.shadows);
        assert!(s.antialias);
        assert_eq!(s.dpr, PixelRatioRange::new(1.0, 2.0));
        assert_eq!(s.star_particles, 5001);
    }

    #[test]
    fn weak_phone_end_to_end() {
        let signals = HardwareSignals {
            concurrency_hint: 2,
            approx_memory_gib: 2.0,
            is_mobile_user_agent: true,
            supports_webgl2: false,
        };
        let tier = resolve_tier(&signals);
        assert_eq!(tier, QualityTier::Low);

        let s = settings_for(tier);
        assert!(!s.shadows);
        assert_eq!(s.frameloop, RenderLoop::OnDemand);
        assert_eq!(s.star_particles, 500);
    }

    #[test]
    fn score_does_not_feed_tier() {
        // Same tier inputs, very different scores.
        let a = HardwareSignals {
            concurrency_hint: 4,
            approx_memory_gib: 64.0,
            is_mobile_user_agent: false,
            supports_webgl2: true,
        };
        let b = HardwareSignals { approx_memory_gib: 0.5, supports_webgl2: false, ..a };
        assert_ne!(score_device(&a), score_device(&b));
        assert_eq!(resolve_tier(&a), resolve_tier(&b));
    }
}
