//! Platform tags and connection descriptor resolution
//!
//! Each supported vendor is a variant of a closed enum. Resolution is a
//! total function over the supported tag set; anything else fails with
//! `UnsupportedPlatform` before any transport activity is attempted.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::Duration;

use crate::device::DeviceRecord;
use crate::error::NetopsError;

/// Supported device platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// MikroTik RouterOS
    MikrotikRos,
    /// Arista EOS
    AristaEos,
    /// Juniper Junos
    JuniperJunos,
}

impl Platform {
    /// The wire-format tag for this platform
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::MikrotikRos => "mikrotik_ros",
            Platform::AristaEos => "arista_eos",
            Platform::JuniperJunos => "juniper_junos",
        }
    }

    /// Vendor-specific parameter overrides layered onto the base descriptor.
    ///
    /// MikroTik relaxes its prompt-detection pattern to tolerate trailing
    /// whitespace and duplicated prompt strings; the other vendors use the
    /// driver defaults.
    pub fn driver_overrides(&self) -> BTreeMap<String, Value> {
        let mut overrides = BTreeMap::new();
        if let Platform::MikrotikRos = self {
            overrides.insert(
                "comms_prompt_pattern".to_string(),
                Value::String(r"\[.+?@.+?\] >.*".to_string()),
            );
        }
        overrides
    }

    /// Resolve a device record into the descriptor used to open a session.
    pub fn resolve(record: &DeviceRecord) -> Result<(Platform, ConnectionDescriptor), NetopsError> {
        let platform = record.platform.parse::<Platform>()?;
        Ok((platform, ConnectionDescriptor::for_device(platform, record)))
    }
}

impl FromStr for Platform {
    type Err = NetopsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mikrotik_ros" => Ok(Platform::MikrotikRos),
            "arista_eos" => Ok(Platform::AristaEos),
            "juniper_junos" => Ok(Platform::JuniperJunos),
            other => Err(NetopsError::UnsupportedPlatform(other.to_string())),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport kind used for device sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Asynchronous SSH
    #[default]
    Ssh,
}

/// Resolved, vendor-specific parameter set for one transport session.
///
/// Derived per command, never stored. Base parameters follow the driver
/// defaults for CLI automation: strict host key checking disabled, 30 s
/// socket timeout, 60 s transport timeout.
#[derive(Debug, Clone)]
pub struct ConnectionDescriptor {
    pub platform: Platform,
    pub host: String,
    pub user: String,
    pub password: String,
    pub transport: TransportKind,
    pub strict_host_key: bool,
    pub timeout_socket: Duration,
    pub timeout_transport: Duration,
    /// Vendor override map forwarded to the driver verbatim
    pub overrides: BTreeMap<String, Value>,
}

impl ConnectionDescriptor {
    /// Build the descriptor for a device on the given platform.
    pub fn for_device(platform: Platform, record: &DeviceRecord) -> Self {
        Self {
            platform,
            host: record.host.clone(),
            user: record.user.clone(),
            password: record.password.clone(),
            transport: TransportKind::Ssh,
            strict_host_key: false,
            timeout_socket: Duration::from_secs(30),
            timeout_transport: Duration::from_secs(60),
            overrides: platform.driver_overrides(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn record(platform: &str) -> DeviceRecord {
        DeviceRecord::new(platform, "192.168.0.1", "admin", "password", BTreeMap::new())
    }

    #[test]
    fn test_supported_tags_round_trip() {
        for tag in ["mikrotik_ros", "arista_eos", "juniper_junos"] {
            let platform = tag.parse::<Platform>().unwrap();
            assert_eq!(platform.as_str(), tag);
        }
    }

    #[test]
    fn test_unknown_tag_is_unsupported() {
        let err = "bogus_os".parse::<Platform>().unwrap_err();
        assert!(matches!(err, NetopsError::UnsupportedPlatform(ref tag) if tag == "bogus_os"));
    }

    #[test]
    fn test_mikrotik_relaxes_prompt_pattern() {
        let overrides = Platform::MikrotikRos.driver_overrides();
        assert_eq!(overrides["comms_prompt_pattern"], r"\[.+?@.+?\] >.*");
        assert!(Platform::AristaEos.driver_overrides().is_empty());
        assert!(Platform::JuniperJunos.driver_overrides().is_empty());
    }

    #[test]
    fn test_resolve_builds_base_descriptor() {
        let (platform, descriptor) = Platform::resolve(&record("arista_eos")).unwrap();
        assert_eq!(platform, Platform::AristaEos);
        assert_eq!(descriptor.host, "192.168.0.1");
        assert!(!descriptor.strict_host_key);
        assert_eq!(descriptor.transport, TransportKind::Ssh);
        assert_eq!(descriptor.timeout_socket, Duration::from_secs(30));
        assert_eq!(descriptor.timeout_transport, Duration::from_secs(60));
    }

    #[test]
    fn test_resolve_rejects_unknown_platform() {
        let err = Platform::resolve(&record("bogus_os")).unwrap_err();
        assert!(matches!(err, NetopsError::UnsupportedPlatform(_)));
    }
}
