use std::sync::OnceLock;

use serde::Serialize;
use vantage_tier::{
    effective_animation, score_device, settings_for, AnimationLevel, DeviceCapabilities,
    HardwareSignals, QualitySettings, QualityTier, SignalProvider, TierPolicy,
};

use crate::device::ProbeConfig;
use crate::signals::SystemSignals;

/// Everything the presentation layer needs, resolved once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceProfile {
    pub signals: HardwareSignals,
    pub tier: QualityTier,
    pub settings: QualitySettings,
    pub capabilities: DeviceCapabilities,

    /// Advisory only; see [`vantage_tier::score_device`].
    pub score: u8,

    pub prefers_reduced_motion: bool,
}

impl DeviceProfile {
    /// Classifies `provider` under `policy`.
    pub fn detect(provider: &impl SignalProvider, policy: &TierPolicy) -> Self {
        let signals = policy.classify(provider);
        let profile = Self::from_signals(signals, policy, provider.prefers_reduced_motion());
        log::info!(
            "device profile: tier={} score={} cores={} memory={:.1}GiB mobile={} webgl2={}",
            profile.tier,
            profile.score,
            signals.concurrency_hint,
            signals.approx_memory_gib,
            signals.is_mobile_user_agent,
            signals.supports_webgl2,
        );
        profile
    }

    /// Builds a profile from already-read signals.
    pub fn from_signals(
        signals: HardwareSignals,
        policy: &TierPolicy,
        prefers_reduced_motion: bool,
    ) -> Self {
        let tier = policy.resolve(&signals);
        Self {
            signals,
            tier,
            settings: settings_for(tier),
            capabilities: DeviceCapabilities::with_policy(&signals, policy),
            score: score_device(&signals),
            prefers_reduced_motion,
        }
    }

    /// Profile of this process's host, detected on first call and shared
    /// afterwards.
    ///
    /// Uses [`SystemSignals::from_env`] with the default probe and policy.
    pub fn current() -> &'static DeviceProfile {
        Self::current_with(ProbeConfig::default())
    }

    /// Like [`current`](Self::current), with an explicit GPU check config.
    ///
    /// `config` only matters on the first call of the process; later calls
    /// return the profile already stored.
    pub fn current_with(config: ProbeConfig) -> &'static DeviceProfile {
        static CURRENT: OnceLock<DeviceProfile> = OnceLock::new();
        CURRENT.get_or_init(|| {
            let provider = SystemSignals::from_env(config);
            Self::detect(&provider, &TierPolicy::default())
        })
    }

    /// Animation level after the reduced-motion preference.
    pub fn animation_level(&self) -> AnimationLevel {
        effective_animation(&self.settings, self.prefers_reduced_motion)
    }
}
