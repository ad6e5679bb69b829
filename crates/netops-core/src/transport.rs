//! Transport abstraction for device CLI sessions
//!
//! The actual SSH/vendor-CLI implementation lives behind these traits; the
//! executor only needs "open a session for this descriptor, send one
//! command, close". One connect → command → disconnect cycle per command,
//! no session reuse.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::platform::ConnectionDescriptor;

/// Transport layer errors
///
/// All variants are expected remote conditions; the executor converts them
/// into a failed [`crate::CommandResult`] rather than propagating them.
#[derive(Debug, Error, Clone)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Timed out waiting for device")]
    Timeout,

    #[error("Session closed")]
    Closed,
}

/// Per-command options forwarded to the transport verbatim
#[derive(Debug, Clone, Default)]
pub struct ExecOptions {
    /// Overrides the transport-level operation timeout for this command
    pub timeout: Option<Duration>,
    /// Free-form driver options (e.g. strip_prompt)
    pub extra: BTreeMap<String, Value>,
}

/// Capability to open CLI sessions against devices
#[async_trait]
pub trait CommandTransport: Send + Sync {
    /// Open a session using the resolved connection parameters
    async fn connect(
        &self,
        descriptor: &ConnectionDescriptor,
    ) -> Result<Box<dyn TransportSession>, TransportError>;
}

/// One open CLI session against one device
#[async_trait]
pub trait TransportSession: Send {
    /// Send exactly one command and return its output
    async fn send_command(
        &mut self,
        command: &str,
        options: &ExecOptions,
    ) -> Result<String, TransportError>;

    /// Close the session; must be called on every exit path
    async fn close(&mut self);
}
