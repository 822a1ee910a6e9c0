//! Command-line definitions.

use clap::Parser;
use vantage_engine::device::ProbeConfig;
use vantage_engine::signals::{SystemSignals, USER_AGENT_ENV};
use vantage_tier::{SignalProvider, TierPolicy};

/// Vantage - pick a rendering-quality tier for this machine
#[derive(Debug, Parser)]
#[command(name = "vantage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Browser user agent to classify instead of the host platform
    #[arg(long, env = USER_AGENT_ENV)]
    pub user_agent: Option<String>,

    /// Override the detected logical core count
    #[arg(long)]
    pub cores: Option<u32>,

    /// Override the detected memory, in GiB
    #[arg(long, value_parser = parse_gib)]
    pub memory: Option<f64>,

    /// Treat the device as mobile regardless of user agent
    #[arg(long)]
    pub mobile: bool,

    /// Skip the GPU probe and report WebGL2 as unsupported
    #[arg(long)]
    pub no_gpu_probe: bool,

    /// Apply the reduced-motion accessibility preference
    #[arg(long)]
    pub reduced_motion: bool,

    /// Desktops with this many cores or fewer get the medium tier
    #[arg(long)]
    pub low_end_cores: Option<u32>,

    /// Desktops with this much memory (GiB) or less get the medium tier
    #[arg(long, value_parser = parse_gib)]
    pub low_end_memory: Option<f64>,

    /// Print the preset for a named tier (low, medium, high) and exit
    #[arg(long, value_name = "NAME")]
    pub tier: Option<String>,

    /// Emit JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Log filter, env_logger syntax (defaults to VANTAGE_LOG, then RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

/// Memory amounts must be finite and non-negative.
fn parse_gib(value: &str) -> Result<f64, String> {
    let gib: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if !gib.is_finite() || gib < 0.0 {
        return Err(format!("`{value}` is not a finite, non-negative amount of GiB"));
    }
    Ok(gib)
}

impl Cli {
    pub fn probe_config(&self) -> ProbeConfig {
        if self.no_gpu_probe {
            ProbeConfig::disabled()
        } else {
            ProbeConfig::default()
        }
    }

    /// Host provider with command-line overrides layered on top.
    pub fn provider(&self) -> Overrides<SystemSignals> {
        let mut system = SystemSignals::from_env(self.probe_config());
        if let Some(ua) = &self.user_agent {
            system = system.with_user_agent(ua.clone());
        }
        if self.reduced_motion {
            system = system.with_reduced_motion(true);
        }

        Overrides {
            inner: system,
            cores: self.cores,
            memory_gib: self.memory,
            force_mobile: self.mobile,
        }
    }

    pub fn policy(&self) -> TierPolicy {
        let mut policy = TierPolicy::default();
        if let Some(cores) = self.low_end_cores {
            policy.low_end_max_cores = cores;
        }
        if let Some(memory) = self.low_end_memory {
            policy.low_end_max_memory_gib = memory;
        }
        policy
    }
}

/// Wraps a provider, replacing individual signals.
#[derive(Debug, Clone)]
pub struct Overrides<P> {
    pub inner: P,
    pub cores: Option<u32>,
    pub memory_gib: Option<f64>,
    pub force_mobile: bool,
}

impl<P: SignalProvider> SignalProvider for Overrides<P> {
    fn logical_cores(&self) -> Option<u32> {
        self.cores.or_else(|| self.inner.logical_cores())
    }

    fn device_memory_gib(&self) -> Option<f64> {
        self.memory_gib.or_else(|| self.inner.device_memory_gib())
    }

    fn user_agent(&self) -> Option<String> {
        // A forced mobile device is classified by platform, not by UA.
        if self.force_mobile {
            None
        } else {
            self.inner.user_agent()
        }
    }

    fn supports_webgl2(&self) -> bool {
        self.inner.supports_webgl2()
    }

    fn is_mobile_platform(&self) -> bool {
        self.force_mobile || self.inner.is_mobile_platform()
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.inner.prefers_reduced_motion()
    }
}
