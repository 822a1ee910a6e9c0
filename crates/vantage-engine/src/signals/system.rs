use std::thread;

use sysinfo::{MemoryRefreshKind, RefreshKind, System};
use vantage_tier::SignalProvider;

use crate::device::{self, ProbeConfig};

/// Env var carrying a browser user agent to classify.
pub const USER_AGENT_ENV: &str = "VANTAGE_USER_AGENT";

/// Env var carrying the reduced-motion preference (`1`/`true`/`yes`/`on`).
pub const REDUCED_MOTION_ENV: &str = "VANTAGE_REDUCED_MOTION";

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Signals read from the machine this process runs on.
///
/// Native hosts have no user agent; callers serving a browser pass one in.
/// Without it, mobile is inferred from the build target.
#[derive(Debug, Clone, Default)]
pub struct SystemSignals {
    user_agent: Option<String>,
    reduced_motion: bool,
    probe: ProbeConfig,
}

impl SystemSignals {
    pub fn new(probe: ProbeConfig) -> Self {
        Self {
            probe,
            ..Self::default()
        }
    }

    /// Reads the user agent and reduced-motion preference from the environment.
    pub fn from_env(probe: ProbeConfig) -> Self {
        let user_agent = std::env::var(USER_AGENT_ENV).ok().filter(|ua| !ua.trim().is_empty());
        let reduced_motion = std::env::var(REDUCED_MOTION_ENV)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            user_agent,
            reduced_motion,
            probe,
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    pub fn probe_config(&self) -> &ProbeConfig {
        &self.probe
    }
}

impl SignalProvider for SystemSignals {
    fn logical_cores(&self) -> Option<u32> {
        match thread::available_parallelism() {
            Ok(n) => u32::try_from(n.get()).ok(),
            Err(err) => {
                log::debug!("logical core count unavailable: {err}");
                None
            }
        }
    }

    fn device_memory_gib(&self) -> Option<f64> {
        let mut sys = System::new_with_specifics(
            RefreshKind::new().with_memory(MemoryRefreshKind::new().with_ram()),
        );
        sys.refresh_memory();

        // sysinfo reports 0 where total memory cannot be read.
        let total = sys.total_memory();
        if total == 0 {
            log::debug!("total memory unavailable");
            return None;
        }
        Some(total as f64 / BYTES_PER_GIB)
    }

    fn user_agent(&self) -> Option<String> {
        self.user_agent.clone()
    }

    fn supports_webgl2(&self) -> bool {
        device::supports_webgl2(&self.probe)
    }

    fn is_mobile_platform(&self) -> bool {
        cfg!(any(target_os = "android", target_os = "ios"))
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
