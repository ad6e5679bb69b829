//! netops-exec - Concurrency-gated command execution
//!
//! This crate owns the process-wide session gate: every command execution
//! acquires one slot from a shared semaphore, runs one connect → command →
//! disconnect cycle against the device, and releases the slot. Transport
//! failures come back as data, never as errors.

pub mod config;
pub mod executor;
pub mod transport;

pub use config::ExecutorConfig;
pub use executor::CommandExecutor;
pub use transport::mock::MockTransport;
