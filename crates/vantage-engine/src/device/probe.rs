use std::panic::{self, AssertUnwindSafe};

use anyhow::{bail, Context, Result};

use super::ProbeConfig;

/// Adapter description captured before the probe device is released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub adapter_name: String,
    pub backend: String,
    pub device_type: String,
}

/// Reports whether the host can open a WebGL2-class GPU device.
///
/// Never fails: a disabled probe, a missing adapter, a device request error
/// and a panic inside the graphics stack all report `false`.
pub fn supports_webgl2(config: &ProbeConfig) -> bool {
    probe(config).is_some()
}

/// Runs the probe and returns the adapter description on success.
pub fn probe(config: &ProbeConfig) -> Option<ProbeReport> {
    if !config.enabled {
        log::debug!("gpu probe disabled");
        return None;
    }

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| pollster::block_on(open_device(config))));

    match outcome {
        Ok(Ok(report)) => {
            log::debug!("gpu probe ok: {report:?}");
            Some(report)
        }
        Ok(Err(err)) => {
            log::debug!("gpu probe failed: {err:#}");
            None
        }
        Err(_) => {
            log::warn!("gpu probe panicked; treating GPU as unsupported");
            None
        }
    }
}

/// Opens and immediately releases a device.
///
/// Adapter/device acquisition is asynchronous under wgpu. Every wgpu object
/// created here is dropped before the function returns.
async fn open_device(config: &ProbeConfig) -> Result<ProbeReport> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: config.backends,
        ..Default::default()
    });

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: config.power_preference,
            compatible_surface: None,
            force_fallback_adapter: config.force_fallback_adapter,
        })
        .await
        .context("no GPU adapter available")?;

    let info = adapter.get_info();
    check_device_type(info.device_type, config.force_fallback_adapter)?;

    let (device, queue) = adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("vantage probe device"),
            required_features: wgpu::Features::empty(),
            required_limits: config.required_limits.clone(),
            experimental_features: wgpu::ExperimentalFeatures::disabled(),
            memory_hints: wgpu::MemoryHints::MemoryUsage,
            trace: wgpu::Trace::Off,
        })
        .await
        .context("adapter cannot open a device with the required limits")?;

    drop(queue);
    device.destroy();
    drop(device);
    drop(adapter);
    drop(instance);

    Ok(ProbeReport {
        adapter_name: info.name,
        backend: format!("{:?}", info.backend),
        device_type: format!("{:?}", info.device_type),
    })
}

/// Rejects software rasterizers unless the config asked for one.
///
/// Some platforms hand out a CPU adapter even without
/// `force_fallback_adapter`, so the request option alone is not enough.
fn check_device_type(device_type: wgpu::DeviceType, allow_software: bool) -> Result<()> {
    if device_type == wgpu::DeviceType::Cpu && !allow_software {
        bail!("adapter is a software rasterizer");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_config_reports_unsupported() {
        assert!(!supports_webgl2(&ProbeConfig::disabled()));
        assert!(probe(&ProbeConfig::disabled()).is_none());
    }

    #[test]
    fn no_backends_reports_unsupported() {
        let config = ProbeConfig {
            backends: wgpu::Backends::empty(),
            ..ProbeConfig::default()
        };
        assert!(!supports_webgl2(&config));
    }

    #[test]
    fn software_adapter_is_rejected_by_default() {
        assert!(check_device_type(wgpu::DeviceType::Cpu, false).is_err());
    }

    #[test]
    fn software_adapter_allowed_when_forced() {
        assert!(check_device_type(wgpu::DeviceType::Cpu, true).is_ok());
    }

    #[test]
    fn hardware_adapters_pass() {
        for ty in [
            wgpu::DeviceType::IntegratedGpu,
            wgpu::DeviceType::DiscreteGpu,
            wgpu::DeviceType::VirtualGpu,
            wgpu::DeviceType::Other,
        ] {
            assert!(check_device_type(ty, false).is_ok(), "{ty:?}");
        }
    }
}
