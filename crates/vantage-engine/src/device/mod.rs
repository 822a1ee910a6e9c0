//! Transient GPU capability probe.
//!
//! This module is responsible for:
//! - creating a throwaway wgpu Instance/Adapter/Device
//! - checking it against WebGL2-class limits
//! - releasing every GPU object before returning

mod init;
mod probe;

pub use init::ProbeConfig;
pub use probe::{probe, supports_webgl2, ProbeReport};
