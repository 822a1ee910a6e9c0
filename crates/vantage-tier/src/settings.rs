use serde::{Deserialize, Serialize};

use crate::error::InvalidTier;
use crate::tier::QualityTier;

/// Device-pixel-ratio clamp `[min, max]` applied to the render target.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelRatioRange {
    pub min: f32,
    pub max: f32,
}

impl PixelRatioRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamps a reported device pixel ratio into this range.
    pub fn clamp(self, dpr: f32) -> f32 {
        if dpr.is_nan() {
            return self.min;
        }
        dpr.clamp(self.min, self.max)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationLevel {
    Minimal,
    Reduced,
    Full,
}

/// When the render loop produces frames.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderLoop {
    /// Redraw every display refresh.
    Continuous,
    /// Redraw only when something invalidates the scene.
    OnDemand,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextureResolution {
    Low,
    Medium,
    High,
}

/// Rendering and animation knobs for one tier.
///
/// Exactly one record exists per [`QualityTier`]; there are no partial
/// overrides.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualitySettings {
    pub shadows: bool,
    pub antialias: bool,
    pub dpr: PixelRatioRange,

    /// Points in the 3D star field.
    pub star_particles: u32,

    pub animations: AnimationLevel,
    pub frameloop: RenderLoop,
    pub texture_resolution: TextureResolution,
    pub max_lights: u32,
    pub post_processing: bool,

    /// Decorative 2D stars behind page sections.
    pub star_background_count: u32,
    pub geometric_shapes: bool,
}

impl QualitySettings {
    /// Phones and low-end hardware.
    pub const LOW: QualitySettings = QualitySettings {
        shadows: false,
        antialias: false,
        dpr: PixelRatioRange::new(1.0, 1.0),
        star_particles: 500,
        animations: AnimationLevel::Minimal,
        frameloop: RenderLoop::OnDemand,
        texture_resolution: TextureResolution::Low,
        max_lights: 2,
        post_processing: false,
        star_background_count: 5,
        geometric_shapes: false,
    };

    /// Mid-range desktops.
    pub const MEDIUM: QualitySettings = QualitySettings {
        shadows: false,
        antialias: true,
        dpr: PixelRatioRange::new(1.0, 1.5),
        star_particles: 1500,
        animations: AnimationLevel::Reduced,
        frameloop: RenderLoop::OnDemand,
        texture_resolution: TextureResolution::Medium,
        max_lights: 4,
        post_processing: false,
        star_background_count: 10,
        geometric_shapes: true,
    };

    /// High-end desktops.
    pub const HIGH: QualitySettings = QualitySettings {
        shadows: true,
        antialias: true,
        dpr: PixelRatioRange::new(1.0, 2.0),
        star_particles: 5001,
        animations: AnimationLevel::Full,
        // On-demand even here; continuous redraw drains laptop batteries.
        frameloop: RenderLoop::OnDemand,
        texture_resolution: TextureResolution::High,
        max_lights: 6,
        post_processing: true,
        star_background_count: 20,
        geometric_shapes: true,
    };
}

/// Fixed preset for `tier`.
pub const fn settings_for(tier: QualityTier) -> QualitySettings {
    match tier {
        QualityTier::Low => QualitySettings::LOW,
        QualityTier::Medium => QualitySettings::MEDIUM,
        QualityTier::High => QualitySettings::HIGH,
    }
}

/// Preset for a raw tier name. Unknown names fail; there is no default.
pub fn settings_for_name(name: &str) -> Result<QualitySettings, InvalidTier> {
    Ok(settings_for(name.parse()?))
}

/// Pixel-ratio clamp for `tier`.
pub const fn pixel_ratio_range(tier: QualityTier) -> PixelRatioRange {
    settings_for(tier).dpr
}
