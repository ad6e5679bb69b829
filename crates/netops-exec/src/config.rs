//! Executor configuration

use serde::{Deserialize, Serialize};

/// Configuration for the command executor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutorConfig {
    /// Maximum number of simultaneously open device sessions.
    ///
    /// This is the only core tunable exposed externally; it is fixed at
    /// process start.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

fn default_max_sessions() -> usize {
    20
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity_is_twenty() {
        assert_eq!(ExecutorConfig::default().max_sessions, 20);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ExecutorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.max_sessions, 20);

        let config: ExecutorConfig = serde_json::from_str(r#"{"max_sessions": 5}"#).unwrap();
        assert_eq!(config.max_sessions, 5);
    }
}
