//! Transport adapters for device CLI sessions
//!
//! The production SSH transport is an external capability wired in behind
//! [`netops_core::CommandTransport`]; this module ships the mock adapter
//! used by tests and the demo daemon.

pub mod mock;

pub use mock::MockTransport;
