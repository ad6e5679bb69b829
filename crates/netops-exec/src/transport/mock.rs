//! Mock transport for testing
//!
//! Serves canned outputs per (host, command), supports per-host failure
//! injection and artificial latency, and tracks the number of concurrently
//! open sessions with a high-water mark so tests can verify the gate.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;

use netops_core::{
    CommandTransport, ConnectionDescriptor, ExecOptions, TransportError, TransportSession,
};

#[derive(Default)]
struct MockState {
    /// Canned outputs: (host, command) → output
    responses: RwLock<HashMap<(String, String), String>>,
    /// Hosts whose connect attempts fail
    failing_connects: RwLock<HashMap<String, String>>,
    /// Hosts whose commands fail after a successful connect
    failing_commands: RwLock<HashMap<String, String>>,
    /// Currently open sessions
    active: AtomicUsize,
    /// High-water mark of concurrently open sessions
    max_active: AtomicUsize,
    /// Total connect attempts, successful or not
    connect_attempts: AtomicUsize,
}

/// Mock transport adapter for testing
#[derive(Default, Clone)]
pub struct MockTransport {
    state: Arc<MockState>,
    latency: Duration,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a session that takes this long per command
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            state: Arc::new(MockState::default()),
            latency,
        }
    }

    /// Register a canned output for a (host, command) pair
    pub fn respond_with(&self, host: &str, command: &str, output: &str) {
        self.state
            .responses
            .write()
            .insert((host.to_string(), command.to_string()), output.to_string());
    }

    /// Make connect attempts against this host fail
    pub fn fail_connect(&self, host: &str, message: &str) {
        self.state
            .failing_connects
            .write()
            .insert(host.to_string(), message.to_string());
    }

    /// Make commands against this host fail after connecting
    pub fn fail_command(&self, host: &str, message: &str) {
        self.state
            .failing_commands
            .write()
            .insert(host.to_string(), message.to_string());
    }

    /// Sessions currently open
    pub fn active_sessions(&self) -> usize {
        self.state.active.load(Ordering::SeqCst)
    }

    /// Highest number of sessions observed open at once
    pub fn max_active_sessions(&self) -> usize {
        self.state.max_active.load(Ordering::SeqCst)
    }

    /// Total connect attempts made, including failed ones
    pub fn connect_attempts(&self) -> usize {
        self.state.connect_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CommandTransport for MockTransport {
    async fn connect(
        &self,
        descriptor: &ConnectionDescriptor,
    ) -> Result<Box<dyn TransportSession>, TransportError> {
        self.state.connect_attempts.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = self.state.failing_connects.read().get(&descriptor.host) {
            return Err(TransportError::ConnectionFailed(message.clone()));
        }

        let active = self.state.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.max_active.fetch_max(active, Ordering::SeqCst);

        Ok(Box::new(MockSession {
            state: self.state.clone(),
            host: descriptor.host.clone(),
            latency: self.latency,
            open: true,
        }))
    }
}

struct MockSession {
    state: Arc<MockState>,
    host: String,
    latency: Duration,
    open: bool,
}

#[async_trait]
impl TransportSession for MockSession {
    async fn send_command(
        &mut self,
        command: &str,
        _options: &ExecOptions,
    ) -> Result<String, TransportError> {
        if !self.open {
            return Err(TransportError::Closed);
        }

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if let Some(message) = self.state.failing_commands.read().get(&self.host) {
            return Err(TransportError::CommandFailed(message.clone()));
        }

        let key = (self.host.clone(), command.to_string());
        let output = self
            .state
            .responses
            .read()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| format!("mock output for '{command}' on {}", self.host));
        Ok(output)
    }

    async fn close(&mut self) {
        if self.open {
            self.open = false;
            self.state.active.fetch_sub(1, Ordering::SeqCst);
        }
    }
}

impl Drop for MockSession {
    fn drop(&mut self) {
        // Keep the active count honest if a session is dropped unclosed.
        if self.open {
            self.state.active.fetch_sub(1, Ordering::SeqCst);
        }
    }
}
