//! Network reachability signal.
//!
//! The `NetMonitor` holds the current reachability flag and notifies
//! subscribers when it flips. The platform connectivity bridge drives it
//! via `set_reachable`; the sync core samples it before each load.

pub mod monitor;

pub use monitor::NetMonitor;
