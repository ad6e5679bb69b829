//! Device records and uid derivation

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha1::{Digest, Sha1};
use std::collections::BTreeMap;

/// Compute the content-derived identifier for a device.
///
/// The uid is the SHA-1 hex digest of `platform + host + user + password`
/// concatenated in that fixed order. It is a pure function of those four
/// fields: re-registering the same credentials always yields the same uid.
pub fn device_uid(platform: &str, host: &str, user: &str, password: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(platform.as_bytes());
    hasher.update(host.as_bytes());
    hasher.update(user.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Stored identity, credentials, and platform tag for one network device.
///
/// The platform tag is kept as a free-form string here; it is validated
/// against [`crate::Platform`] only when a command is executed, so a record
/// with an unknown platform can be stored but never driven.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Platform tag (e.g. "mikrotik_ros", "arista_eos")
    pub platform: String,
    /// Transport address
    pub host: String,
    /// Login user
    pub user: String,
    /// Login password (opaque; returned verbatim by the listing API)
    pub password: String,
    /// Content-derived identifier
    pub uid: String,
    /// Free-form additional attributes
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl DeviceRecord {
    /// Build a record, deriving the uid from the identity fields.
    pub fn new(
        platform: impl Into<String>,
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        extra: BTreeMap<String, Value>,
    ) -> Self {
        let platform = platform.into();
        let host = host.into();
        let user = user.into();
        let password = password.into();
        let uid = device_uid(&platform, &host, &user, &password);
        Self {
            platform,
            host,
            user,
            password,
            uid,
            extra,
        }
    }
}
