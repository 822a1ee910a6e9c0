use serde::{Deserialize, Serialize};

use crate::policy::TierPolicy;
use crate::signals::HardwareSignals;
use crate::tier::QualityTier;

/// Summary of a classified device, as shown in diagnostics.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceCapabilities {
    pub is_mobile: bool,

    /// Hardware at/under the low-end thresholds, or any mobile device.
    pub is_low_end: bool,

    pub cores: u32,
    pub memory_gib: f64,
    pub tier: QualityTier,
}

impl DeviceCapabilities {
    /// Summarizes `signals` under the default [`TierPolicy`].
    pub fn from_signals(signals: &HardwareSignals) -> Self {
        Self::with_policy(signals, &TierPolicy::default())
    }

    pub fn with_policy(signals: &HardwareSignals, policy: &TierPolicy) -> Self {
        Self {
            is_mobile: signals.is_mobile_user_agent,
            is_low_end: signals.is_mobile_user_agent || policy.is_low_end_hardware(signals),
            cores: signals.concurrency_hint,
            memory_gib: signals.approx_memory_gib,
            tier: policy.resolve(signals),
        }
    }
}
