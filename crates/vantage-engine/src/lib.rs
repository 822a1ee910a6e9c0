//! Vantage engine crate.
//!
//! This crate owns the host-facing pieces: reading hardware signals from the
//! running machine, the transient GPU probe, logging, and the per-session
//! quality profile built on top of `vantage-tier`.

pub mod device;
pub mod logging;
pub mod profile;
pub mod signals;

pub use profile::DeviceProfile;
pub use signals::SystemSignals;
