//! Per-tier timing and feature helpers for presentation code.

use std::time::Duration;

use crate::settings::{settings_for, AnimationLevel, QualitySettings, TextureResolution};
use crate::tier::QualityTier;

/// Scales a base animation duration for `tier`: 1.5x on `Low`, 1.2x on
/// `Medium`, unchanged on `High`.
pub fn animation_duration(base: Duration, tier: QualityTier) -> Duration {
    // Exact ratios keep millisecond inputs exact.
    let (num, den) = match tier {
        QualityTier::Low => (3, 2),
        QualityTier::Medium => (6, 5),
        QualityTier::High => (1, 1),
    };
    base * num / den
}

/// Debounce delay for scroll/resize handlers.
pub const fn debounce_delay(tier: QualityTier) -> Duration {
    match tier {
        QualityTier::Low => Duration::from_millis(250),
        QualityTier::Medium => Duration::from_millis(150),
        QualityTier::High => Duration::from_millis(100),
    }
}

/// Animation level after applying the user's reduced-motion preference.
///
/// The preference only ever lowers the level; it never changes the tier.
pub fn effective_animation(
    settings: &QualitySettings,
    prefers_reduced_motion: bool,
) -> AnimationLevel {
    if prefers_reduced_motion {
        AnimationLevel::Minimal
    } else {
        settings.animations
    }
}

/// A switchable field of [`QualitySettings`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Feature {
    Shadows,
    Antialias,
    PostProcessing,
    GeometricShapes,
    StarParticles,
    StarBackground,
    Lights,
    Animations,
    HighResTextures,
}

impl Feature {
    pub const ALL: [Feature; 9] = [
        Feature::Shadows,
        Feature::Antialias,
        Feature::PostProcessing,
        Feature::GeometricShapes,
        Feature::StarParticles,
        Feature::StarBackground,
        Feature::Lights,
        Feature::Animations,
        Feature::HighResTextures,
    ];

    /// Whether `settings` turns this feature on.
    ///
    /// Counts are "on" when non-zero; leveled fields are "on" above their
    /// lowest level.
    pub fn enabled_in(self, settings: &QualitySettings) -> bool {
        match self {
            Self::Shadows => settings.shadows,
            Self::Antialias => settings.antialias,
            Self::PostProcessing => settings.post_processing,
            Self::GeometricShapes => settings.geometric_shapes,
            Self::StarParticles => settings.star_particles > 0,
            Self::StarBackground => settings.star_background_count > 0,
            Self::Lights => settings.max_lights > 0,
            Self::Animations => settings.animations > AnimationLevel::Minimal,
            Self::HighResTextures => settings.texture_resolution > TextureResolution::Low,
        }
    }
}

pub fn is_feature_enabled(feature: Feature, tier: QualityTier) -> bool {
    feature.enabled_in(&settings_for(tier))
}
