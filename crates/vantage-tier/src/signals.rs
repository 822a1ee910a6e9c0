use serde::{Deserialize, Serialize};

use crate::policy::TierPolicy;

/// Logical core count assumed when the environment does not report one.
pub const DEFAULT_CONCURRENCY: u32 = 4;

/// Memory (GiB) assumed when the environment does not report it.
pub const DEFAULT_MEMORY_GIB: f64 = 4.0;

/// Coarse capability indicators read once per session.
///
/// Values are already defaulted: `concurrency_hint >= 1` and
/// `approx_memory_gib >= 0`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareSignals {
    pub concurrency_hint: u32,
    pub approx_memory_gib: f64,
    pub is_mobile_user_agent: bool,
    pub supports_webgl2: bool,
}

/// Source of raw environment signals.
///
/// Every method may report "unknown". Implementations must not panic or
/// propagate failures; [`classify_device`] applies the defaults.
pub trait SignalProvider {
    /// Logical CPU count, if the environment exposes it.
    fn logical_cores(&self) -> Option<u32>;

    /// Approximate installed memory in GiB, if exposed.
    fn device_memory_gib(&self) -> Option<f64>;

    /// Browser-style user-agent string, if the host has one.
    fn user_agent(&self) -> Option<String>;

    /// Whether the host can render at WebGL2-class capability.
    ///
    /// Probes may create a throwaway graphics context; it must be released
    /// before returning. Probe failure reports `false`.
    fn supports_webgl2(&self) -> bool;

    /// Mobile classification for hosts without a user agent.
    ///
    /// Only consulted when [`user_agent`](Self::user_agent) is `None`.
    fn is_mobile_platform(&self) -> bool {
        false
    }

    /// Accessibility "reduce motion" preference.
    ///
    /// Read by presentation code; never used to pick a tier.
    fn prefers_reduced_motion(&self) -> bool {
        false
    }
}

/// Reads signals from `provider` with the default [`TierPolicy`].
pub fn classify_device(provider: &impl SignalProvider) -> HardwareSignals {
    TierPolicy::default().classify(provider)
}

impl TierPolicy {
    /// Reads signals from `provider`, filling gaps with conservative
    /// mid-range defaults.
    ///
    /// Zero and non-finite values count as unknown.
    pub fn classify(&self, provider: &impl SignalProvider) -> HardwareSignals {
        let concurrency_hint = provider
            .logical_cores()
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_CONCURRENCY);

        let approx_memory_gib = provider
            .device_memory_gib()
            .filter(|m| m.is_finite() && *m > 0.0)
            .unwrap_or(DEFAULT_MEMORY_GIB);

        let is_mobile_user_agent = match provider.user_agent() {
            Some(ua) => self.mobile.is_mobile(&ua),
            None => provider.is_mobile_platform(),
        };

        let supports_webgl2 = provider.supports_webgl2();

        let signals = HardwareSignals {
            concurrency_hint,
            approx_memory_gib,
            is_mobile_user_agent,
            supports_webgl2,
        };
        log::debug!("classified device: {signals:?}");
        signals
    }
}
