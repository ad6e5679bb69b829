//! Command execution results
//!
//! A remote/transport failure is a normal outcome of running a command and
//! is carried as data, never raised as an error.

use serde::{Deserialize, Serialize};

/// Outcome of one command against one device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandStatus {
    Success,
    Failed,
}

/// Structured result of a single command execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResult {
    /// Device the command was sent to
    pub host: String,
    pub status: CommandStatus,
    /// The command text as submitted
    pub command: String,
    /// CLI output (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Transport error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandResult {
    pub fn success(host: impl Into<String>, command: impl Into<String>, output: String) -> Self {
        Self {
            host: host.into(),
            status: CommandStatus::Success,
            command: command.into(),
            output: Some(output),
            error: None,
        }
    }

    pub fn failed(host: impl Into<String>, command: impl Into<String>, error: String) -> Self {
        Self {
            host: host.into(),
            status: CommandStatus::Failed,
            command: command.into(),
            output: None,
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_serializes_without_error_field() {
        let result = CommandResult::success("10.0.0.1", "show version", "v1.2.3".to_string());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["output"], "v1.2.3");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_failed_serializes_without_output_field() {
        let result = CommandResult::failed("10.0.0.1", "show version", "auth failed".to_string());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["error"], "auth failed");
        assert!(json.get("output").is_none());
    }
}
