//! Text rendering of a device profile.

use std::fmt::{self, Write};

use vantage_engine::DeviceProfile;
use vantage_tier::{AnimationLevel, QualitySettings, QualityTier, RenderLoop, TextureResolution};

const RULE: &str = "  ──────────────────────────────────────────";

pub fn render_profile(profile: &DeviceProfile) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let s = &profile.signals;

    writeln!(out)?;
    writeln!(out, "  VANTAGE DEVICE REPORT")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "  Cores      :  {}", s.concurrency_hint)?;
    writeln!(out, "  Memory     :  {:.1} GiB", s.approx_memory_gib)?;
    writeln!(out, "  Mobile     :  {}", yes_no(s.is_mobile_user_agent))?;
    writeln!(out, "  WebGL2     :  {}", yes_no(s.supports_webgl2))?;
    writeln!(out, "  Low-end    :  {}", yes_no(profile.capabilities.is_low_end))?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "  Tier       :  {}", profile.tier.as_str().to_uppercase())?;
    writeln!(out, "  Score      :  {}/100  (advisory)", profile.score)?;
    if profile.prefers_reduced_motion {
        writeln!(
            out,
            "  Motion     :  reduced  ->  {}",
            animation_str(profile.animation_level())
        )?;
    }
    writeln!(out, "{RULE}")?;
    out.push_str(&render_settings(profile.tier, &profile.settings)?);
    Ok(out)
}

pub fn render_settings(
    tier: QualityTier,
    settings: &QualitySettings,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "  Preset: {tier}")?;
    writeln!(out)?;
    writeln!(out, "  shadows              {}", on_off(settings.shadows))?;
    writeln!(out, "  antialias            {}", on_off(settings.antialias))?;
    writeln!(out, "  pixel ratio          [{}, {}]", settings.dpr.min, settings.dpr.max)?;
    writeln!(out, "  star particles       {}", settings.star_particles)?;
    writeln!(out, "  animations           {}", animation_str(settings.animations))?;
    writeln!(out, "  frame loop           {}", frameloop_str(settings.frameloop))?;
    writeln!(out, "  textures             {}", texture_str(settings.texture_resolution))?;
    writeln!(out, "  max lights           {}", settings.max_lights)?;
    writeln!(out, "  post-processing      {}", on_off(settings.post_processing))?;
    writeln!(out, "  background stars     {}", settings.star_background_count)?;
    writeln!(out, "  geometric shapes     {}", on_off(settings.geometric_shapes))?;
    writeln!(out)?;
    Ok(out)
}

fn yes_no(v: bool) -> &'static str {
    if v { "yes" } else { "no" }
}

fn on_off(v: bool) -> &'static str {
    if v { "on" } else { "off" }
}

fn animation_str(level: AnimationLevel) -> &'static str {
    match level {
        AnimationLevel::Full => "full",
        AnimationLevel::Reduced => "reduced",
        AnimationLevel::Minimal => "minimal",
    }
}

fn frameloop_str(mode: RenderLoop) -> &'static str {
    match mode {
        RenderLoop::Continuous => "continuous",
        RenderLoop::OnDemand => "on-demand",
    }
}

fn texture_str(res: TextureResolution) -> &'static str {
    match res {
        TextureResolution::Low => "low",
        TextureResolution::Medium => "medium",
        TextureResolution::High => "high",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_tier::{settings_for, HardwareSignals, TierPolicy};

    fn profile(mobile: bool, reduced_motion: bool) -> DeviceProfile {
        let signals = HardwareSignals {
            concurrency_hint: 8,
            approx_memory_gib: 16.0,
            is_mobile_user_agent: mobile,
            supports_webgl2: true,
        };
        DeviceProfile::from_signals(signals, &TierPolicy::default(), reduced_motion)
    }

    #[test]
    fn report_names_tier_and_score() {
        let text = render_profile(&profile(false, false)).unwrap();
        assert!(text.contains("Tier       :  HIGH"));
        assert!(text.contains("Score      :  100/100"));
        assert!(text.contains("star particles       5001"));
        assert!(!text.contains("Motion"));
    }

    #[test]
    fn report_shows_reduced_motion() {
        let text = render_profile(&profile(false, true)).unwrap();
        assert!(text.contains("reduced  ->  minimal"));
    }

    #[test]
    fn low_preset_text() {
        let text = render_settings(QualityTier::Low, &settings_for(QualityTier::Low)).unwrap();
        assert!(text.contains("Preset: low"));
        assert!(text.contains("shadows              off"));
        assert!(text.contains("frame loop           on-demand"));
        assert!(text.contains("pixel ratio          [1, 1]"));
    }
}
