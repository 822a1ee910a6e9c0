//! Host signal providers.
//!
//! [`SystemSignals`] implements `vantage_tier::SignalProvider` against the
//! running machine. Tests and embedders can implement the trait directly.

mod system;

pub use system::{SystemSignals, REDUCED_MOTION_ENV, USER_AGENT_ENV};
