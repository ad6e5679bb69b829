//! Semaphore-gated command execution

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::{debug, warn};

use netops_core::{
    CommandResult, CommandTransport, DeviceRecord, ExecOptions, NetopsError, NetopsResult,
    Platform,
};

use crate::config::ExecutorConfig;

/// Runs commands against devices under a process-wide session bound.
///
/// One instance is created at startup and shared by all requests. The
/// semaphore caps how many sessions are open at once regardless of how many
/// HTTP requests are in flight; acquisition is the sole suspension point,
/// with no fairness guarantee among waiters.
pub struct CommandExecutor {
    transport: Arc<dyn CommandTransport>,
    gate: Arc<Semaphore>,
    capacity: usize,
}

impl CommandExecutor {
    /// Create an executor over the given transport capability
    pub fn new(transport: Arc<dyn CommandTransport>, config: &ExecutorConfig) -> Self {
        Self {
            transport,
            gate: Arc::new(Semaphore::new(config.max_sessions)),
            capacity: config.max_sessions,
        }
    }

    /// The configured session capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Run exactly one command against exactly one device.
    ///
    /// Resolver failures (unknown platform) are synchronous errors: they
    /// indicate a configuration problem and abort before any transport
    /// activity. Transport failures at any later stage are normal remote
    /// outcomes and come back as a failed [`CommandResult`]. The session is
    /// closed on every exit path before the gate slot is released.
    pub async fn run_command(
        &self,
        record: &DeviceRecord,
        command: &str,
        options: &ExecOptions,
    ) -> NetopsResult<CommandResult> {
        let (platform, descriptor) = Platform::resolve(record)?;

        let _permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| NetopsError::Internal(format!("session gate closed: {e}")))?;

        debug!(host = %record.host, platform = %platform, command = %command, "Opening session");

        let mut session = match self.transport.connect(&descriptor).await {
            Ok(session) => session,
            Err(e) => {
                warn!(host = %record.host, error = %e, "Connection failed");
                return Ok(CommandResult::failed(&record.host, command, e.to_string()));
            }
        };

        let outcome = session.send_command(command, options).await;
        session.close().await;

        match outcome {
            Ok(output) => {
                debug!(host = %record.host, command = %command, "Command succeeded");
                Ok(CommandResult::success(&record.host, command, output))
            }
            Err(e) => {
                warn!(host = %record.host, command = %command, error = %e, "Command failed");
                Ok(CommandResult::failed(&record.host, command, e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;
    use netops_core::CommandStatus;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn record(platform: &str, host: &str) -> DeviceRecord {
        DeviceRecord::new(platform, host, "admin", "password", BTreeMap::new())
    }

    fn executor(transport: &MockTransport) -> CommandExecutor {
        CommandExecutor::new(Arc::new(transport.clone()), &ExecutorConfig::default())
    }

    #[tokio::test]
    async fn test_successful_command_returns_output() {
        let transport = MockTransport::new();
        transport.respond_with("192.168.0.1", "/system identity print", "name: core-rtr");

        let executor = executor(&transport);
        let result = executor
            .run_command(
                &record("mikrotik_ros", "192.168.0.1"),
                "/system identity print",
                &ExecOptions::default(),
            )
            .await
            .unwrap();

        assert_eq!(result.status, CommandStatus::Success);
        assert_eq!(result.host, "192.168.0.1");
        assert_eq!(result.command, "/system identity print");
        assert_eq!(result.output.as_deref(), Some("name: core-rtr"));
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn test_connect_failure_is_data_not_error() {
        let transport = MockTransport::new();
        transport.fail_connect("10.0.0.2", "connection refused");

        let executor = executor(&transport);
        let result = executor
            .run_command(
                &record("arista_eos", "10.0.0.2"),
                "show version",
                &ExecOptions::default(),
            )
            .await
            .unwrap();

        assert_eq!(result.status, CommandStatus::Failed);
        assert!(result.error.as_deref().unwrap().contains("connection refused"));
        assert!(result.output.is_none());
    }

    #[tokio::test]
    async fn test_command_failure_closes_session() {
        let transport = MockTransport::new();
        transport.fail_command("10.0.0.2", "prompt never seen");

        let executor = executor(&transport);
        let result = executor
            .run_command(
                &record("arista_eos", "10.0.0.2"),
                "show version",
                &ExecOptions::default(),
            )
            .await
            .unwrap();

        assert_eq!(result.status, CommandStatus::Failed);
        assert_eq!(transport.active_sessions(), 0);
    }

    #[tokio::test]
    async fn test_unsupported_platform_opens_no_session() {
        let transport = MockTransport::new();
        let executor = executor(&transport);

        let err = executor
            .run_command(
                &record("bogus_os", "1.2.3.4"),
                "show version",
                &ExecOptions::default(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, NetopsError::UnsupportedPlatform(_)));
        assert_eq!(transport.connect_attempts(), 0);
    }

    #[tokio::test]
    async fn test_gate_bounds_concurrent_sessions() {
        let transport = MockTransport::with_latency(std::time::Duration::from_millis(30));
        let executor = Arc::new(CommandExecutor::new(
            Arc::new(transport.clone()),
            &ExecutorConfig { max_sessions: 4 },
        ));

        let mut handles = Vec::new();
        for i in 0..10 {
            let executor = executor.clone();
            handles.push(tokio::spawn(async move {
                executor
                    .run_command(
                        &record("arista_eos", &format!("10.0.0.{i}")),
                        "show version",
                        &ExecOptions::default(),
                    )
                    .await
                    .unwrap()
            }));
        }

        for handle in handles {
            let result = handle.await.unwrap();
            assert_eq!(result.status, CommandStatus::Success);
        }

        assert!(transport.max_active_sessions() <= 4);
        assert_eq!(transport.active_sessions(), 0);
    }

    #[tokio::test]
    async fn test_one_failing_device_does_not_affect_another() {
        let transport = MockTransport::new();
        transport.fail_connect("10.0.0.9", "no route to host");
        transport.respond_with("10.0.0.8", "show version", "EOS 4.30");

        let executor = Arc::new(executor(&transport));

        let failing = {
            let executor = executor.clone();
            tokio::spawn(async move {
                executor
                    .run_command(
                        &record("arista_eos", "10.0.0.9"),
                        "show version",
                        &ExecOptions::default(),
                    )
                    .await
                    .unwrap()
            })
        };
        let healthy = {
            let executor = executor.clone();
            tokio::spawn(async move {
                executor
                    .run_command(
                        &record("arista_eos", "10.0.0.8"),
                        "show version",
                        &ExecOptions::default(),
                    )
                    .await
                    .unwrap()
            })
        };

        assert_eq!(failing.await.unwrap().status, CommandStatus::Failed);
        let ok = healthy.await.unwrap();
        assert_eq!(ok.status, CommandStatus::Success);
        assert_eq!(ok.output.as_deref(), Some("EOS 4.30"));
    }
}
