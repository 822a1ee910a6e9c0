/// Parameters for the transient GPU capability probe.
///
/// Keep this structure small. The probe answers one question: can this host
/// open a device with WebGL2-class limits.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Skip the probe and report "unsupported".
    ///
    /// Useful on headless CI and when the caller already knows the answer.
    pub enabled: bool,

    /// Backends the probe instance may use.
    pub backends: wgpu::Backends,

    /// Adapter preference. Low power keeps laptops on the integrated GPU,
    /// which is what a browser would pick for page content.
    pub power_preference: wgpu::PowerPreference,

    /// Ask for, and accept, a software adapter.
    ///
    /// Off by default. A `DeviceType::Cpu` adapter is then reported as
    /// unsupported even if the platform returns one: a software rasterizer can
    /// open the device but will not render the scene at interactive rates.
    pub force_fallback_adapter: bool,

    /// Limits the device must satisfy to count as supported.
    pub required_limits: wgpu::Limits,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            backends: wgpu::Backends::all(),
            power_preference: wgpu::PowerPreference::LowPower,
            force_fallback_adapter: false,
            required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
        }
    }
}

impl ProbeConfig {
    /// A config that never touches the GPU.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}
