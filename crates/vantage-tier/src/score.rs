//! Advisory device score.
//!
//! The score is for diagnostics and telemetry display only. Tier selection
//! goes through [`resolve_tier`](crate::resolve_tier) and never reads it.

use crate::signals::HardwareSignals;

const BASE: f64 = 50.0;
const CPU_POINTS_PER_CORE: f64 = 3.0;
const CPU_CAP: f64 = 30.0;
const MEMORY_POINTS_PER_GIB: f64 = 2.5;
const MEMORY_CAP: f64 = 20.0;
const MOBILE_PENALTY: f64 = 20.0;
const WEBGL2_BONUS: f64 = 10.0;

/// Rough capability score in `[0, 100]`.
pub fn score_device(signals: &HardwareSignals) -> u8 {
    let mut score = BASE;
    score += (f64::from(signals.concurrency_hint) * CPU_POINTS_PER_CORE).min(CPU_CAP);
    score += (signals.approx_memory_gib.max(0.0) * MEMORY_POINTS_PER_GIB).min(MEMORY_CAP);

    if signals.is_mobile_user_agent {
        score -= MOBILE_PENALTY;
    }
    if signals.supports_webgl2 {
        score += WEBGL2_BONUS;
    }

    score.clamp(0.0, 100.0).round() as u8
}
